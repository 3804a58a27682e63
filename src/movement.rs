// src/movement.rs

use crate::daily_bar::DailyBar;

/// Three-way classification of a day's close-versus-open performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementCode {
    /// Flat or decline: change <= 0%.
    Flat,
    /// Ordinary gain: 0% < change < 10%.
    Gain,
    /// Limit-up: change >= 10%.
    LimitUp,
}

impl MovementCode {
    /// Classifies one bar by its percent change from open to close.
    ///
    /// A zero open counts as a 0% change; exactly +10% is a limit-up and
    /// exactly 0% is flat. These boundaries are contractual.
    pub fn classify(bar: &DailyBar) -> MovementCode {
        let percent_change = if bar.open == 0.0 {
            0.0
        } else {
            (bar.close - bar.open) / bar.open * 100.0
        };

        if percent_change >= 10.0 {
            MovementCode::LimitUp
        } else if percent_change > 0.0 {
            MovementCode::Gain
        } else {
            MovementCode::Flat
        }
    }

    pub fn as_char(self) -> char {
        match self {
            MovementCode::Flat => '0',
            MovementCode::Gain => '1',
            MovementCode::LimitUp => '2',
        }
    }
}

/// Concatenates the movement code of every bar, in sequence order, into a
/// digit string. An empty sequence yields an empty string.
pub fn movement_string(bars: &[DailyBar]) -> String {
    bars.iter()
        .map(|bar| MovementCode::classify(bar).as_char())
        .collect()
}
