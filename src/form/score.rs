//! # Score Clamping and Banding
//!
//! Numeric inputs are clamped into `[0, MAX_SCORE]` on every keystroke, and
//! the clamped value maps to a qualitative [`ScoreBand`] badge. The clamp
//! runs before the band is computed, so a badge always reflects an in-range
//! value.

/// Upper bound for every numeric score input.
pub const MAX_SCORE: i64 = 100;

/// Rewrite an in-progress numeric buffer so its value stays in `[0, 100]`.
///
/// Values above 100 snap to "100", below 0 to "0". Buffers that do not
/// parse as an integer (empty, partial input like "-") are left alone.
pub fn clamp_input(buffer: &mut String) {
    if let Ok(value) = buffer.trim().parse::<i64>() {
        if value > MAX_SCORE {
            *buffer = MAX_SCORE.to_string();
        } else if value < 0 {
            *buffer = "0".to_string();
        }
    }
}

/// Qualitative label for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    BelowAvg,
    Average,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Band for a clamped integer value.
    ///
    /// Zero yields no band; the lower bound of `BelowAvg` is exclusive.
    pub fn of(value: i64) -> Option<Self> {
        match value {
            90..=100 => Some(Self::Excellent),
            75..=89 => Some(Self::Good),
            50..=74 => Some(Self::Average),
            1..=49 => Some(Self::BelowAvg),
            _ => None,
        }
    }

    /// Band for a raw text buffer; `None` when the buffer is not a number.
    pub fn from_input(buffer: &str) -> Option<Self> {
        buffer.trim().parse::<i64>().ok().and_then(Self::of)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BelowAvg => "Below Avg",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}
