/// Yearly growth of the device estate assumed by the projection
pub const DEVICE_GROWTH_RATE: f64 = 0.10;

/// Yearly price inflation assumed by the projection
pub const INFLATION_RATE: f64 = 0.03;

/// CostProjection policy for year-by-year spend
///
/// A TCO covering `period` years is spread evenly over them; the cumulative
/// figure after `year` years is then compounded by device growth and
/// inflation. Year 0 is always 0.
pub struct CostProjection;

impl CostProjection {
    pub fn cumulative(total: f64, period: u8, year: u8) -> f64 {
        if period == 0 || year == 0 {
            return 0.0;
        }
        let annual = total / period as f64;
        let compound = ((1.0 + DEVICE_GROWTH_RATE) * (1.0 + INFLATION_RATE)).powi(year as i32);
        annual * year as f64 * compound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_compounds_growth_and_inflation() {
        let one = CostProjection::cumulative(300_000.0, 3, 1);
        assert!((one - 100_000.0 * 1.1 * 1.03).abs() < 1e-6);

        let two = CostProjection::cumulative(300_000.0, 3, 2);
        assert!((two - 200_000.0 * (1.1_f64 * 1.03).powi(2)).abs() < 1e-6);
        assert!(two > one);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(CostProjection::cumulative(300_000.0, 3, 0), 0.0);
        assert_eq!(CostProjection::cumulative(300_000.0, 0, 2), 0.0);
        assert_eq!(CostProjection::cumulative(0.0, 3, 3), 0.0);
    }
}
