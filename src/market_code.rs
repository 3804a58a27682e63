// src/market_code.rs

/// Converts a bare ticker code to the market-prefixed form the provider
/// expects. Shanghai codes start with 6, Shenzhen codes with 0 or 3.
///
/// Codes that already carry a prefix, and codes in an unrecognized format,
/// are returned unchanged; the latter simply yield an empty fetch result
/// downstream.
pub fn normalize_market_code(code: &str) -> String {
    if code.starts_with("sh") || code.starts_with("sz") {
        return code.to_string();
    }

    if code.starts_with('6') {
        format!("sh{}", code)
    } else if code.starts_with('0') || code.starts_with('3') {
        format!("sz{}", code)
    } else {
        code.to_string()
    }
}
