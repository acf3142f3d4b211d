use crate::comparison::domain::Currency;

/// How a numeric value is shown in KPI counters, tables and charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    /// Abbreviated currency: `$245K`, `$1.2M`
    Currency,
    /// Whole percent: `60%`
    Percent,
    Months,
    Days,
    Fte,
}

impl ValueFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::Currency => Currency::new(value.max(0.0))
                .unwrap_or(Currency::ZERO)
                .compact(),
            ValueFormat::Percent => format!("{}%", value.round() as i64),
            ValueFormat::Months => format!("{} months", value.round() as i64),
            ValueFormat::Days => format!("{} days", value.round() as i64),
            ValueFormat::Fte => format!("{:.2} FTE", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_formats() {
        assert_eq!(ValueFormat::Currency.render(245_000.0), "$245K");
        assert_eq!(ValueFormat::Currency.render(1_250_000.0), "$1.2M");
        assert_eq!(ValueFormat::Percent.render(59.5), "60%");
        assert_eq!(ValueFormat::Percent.render(-8.0), "-8%");
        assert_eq!(ValueFormat::Months.render(7.0), "7 months");
        assert_eq!(ValueFormat::Days.render(21.0), "21 days");
        assert_eq!(ValueFormat::Fte.render(0.25), "0.25 FTE");
    }

    #[test]
    fn test_currency_never_negative() {
        assert_eq!(ValueFormat::Currency.render(-10.0), "$0K");
    }
}
