// tests/market_code_tests.rs

use sinaextract::normalize_market_code;

#[test]
fn test_bare_shanghai_code_gets_sh_prefix() {
    assert_eq!(normalize_market_code("600000"), "sh600000");
    assert_eq!(normalize_market_code("601318"), "sh601318");
}

#[test]
fn test_bare_shenzhen_code_gets_sz_prefix() {
    assert_eq!(normalize_market_code("000001"), "sz000001");
    assert_eq!(normalize_market_code("300750"), "sz300750");
}

#[test]
fn test_prefixed_codes_pass_through() {
    assert_eq!(normalize_market_code("sh600000"), "sh600000");
    assert_eq!(normalize_market_code("sz000001"), "sz000001");
}

#[test]
fn test_unrecognized_codes_pass_through() {
    assert_eq!(normalize_market_code("AAPL"), "AAPL");
    assert_eq!(normalize_market_code("900901"), "900901");
    assert_eq!(normalize_market_code(""), "");
}
