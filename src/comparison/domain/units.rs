//! Unit-carrying value objects for vendor metrics.
//!
//! Every scalar in the dataset has an explicit unit; a currency amount can
//! never be mistaken for a percentage because they are different types.

use crate::shared::error::DashboardError;
use serde::Serialize;
use std::fmt;

/// Nearest integer, halves toward positive infinity: 2.5 -> 3, -0.5 -> 0
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Non-negative monetary amount in the dataset's single currency (USD).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Currency(f64);

impl Currency {
    pub const ZERO: Currency = Currency(0.0);

    pub fn new(amount: f64) -> Result<Self, DashboardError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DashboardError::validation(format!(
                "currency amount must be a non-negative number, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    /// Abbreviated display used in KPI cards: `$245K`, `$1.2M`.
    pub fn compact(self) -> String {
        let amount = self.0;
        let thousands = (amount / 1000.0).round();
        if thousands >= 1000.0 {
            format!("${:.1}M", amount / 1_000_000.0)
        } else {
            format!("${}K", thousands as i64)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compact())
    }
}

/// Percentage value. Coverage and reduction figures lie in [0, 100];
/// returns (ROI) may be negative or exceed 100, see [`Percentage::new_return`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Percentage(f64);

impl Percentage {
    pub fn new(value: f64) -> Result<Self, DashboardError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(DashboardError::validation(format!(
                "percentage must lie in [0, 100], got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Rate of return; bounded to [-100, 1000].
    pub fn new_return(value: f64) -> Result<Self, DashboardError> {
        if !value.is_finite() || !(-100.0..=1000.0).contains(&value) {
            return Err(DashboardError::validation(format!(
                "return must lie in [-100, 1000], got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.round() as i64)
    }
}

/// Integer score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Score(u8);

impl Score {
    pub fn new(value: i64) -> Result<Self, DashboardError> {
        if !(0..=100).contains(&value) {
            return Err(DashboardError::validation(format!(
                "score must lie in [0, 100], got {}",
                value
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Duration in calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Days(u32);

impl Days {
    pub fn new(days: u32) -> Self {
        Self(days)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// Duration in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Months(u32);

impl Months {
    pub fn new(months: u32) -> Self {
        Self(months)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Months {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

/// Full-time equivalent headcount; fractional values allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Fte(f64);

impl Fte {
    pub fn new(headcount: f64) -> Result<Self, DashboardError> {
        if !headcount.is_finite() || headcount < 0.0 {
            return Err(DashboardError::validation(format!(
                "FTE must be a non-negative number, got {}",
                headcount
            )));
        }
        Ok(Self(headcount))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Fte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} FTE", self.0)
    }
}
