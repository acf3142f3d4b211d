use crate::adapters::outbound::charts::{TextChartAdapter, UnavailableChartAdapter};
use crate::ports::outbound::ChartAdapter;

/// Chart library selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartLibrary {
    /// Block-character bar charts drawn into the document (default)
    #[default]
    Text,
    /// No charting library; every chart region shows its data as text
    Disabled,
}

/// Factory for creating chart adapters
///
/// This factory encapsulates the creation logic for different chart adapter
/// implementations, following the Factory Pattern.
pub struct ChartAdapterFactory;

impl ChartAdapterFactory {
    /// Creates a chart adapter for the specified library
    ///
    /// # Examples
    /// ```
    /// use nac_dashboard::application::factories::{ChartAdapterFactory, ChartLibrary};
    ///
    /// let adapter = ChartAdapterFactory::create(ChartLibrary::Text);
    /// assert_eq!(adapter.library(), "text-charts");
    /// ```
    pub fn create(library: ChartLibrary) -> Box<dyn ChartAdapter> {
        match library {
            ChartLibrary::Text => Box::new(TextChartAdapter::new()),
            ChartLibrary::Disabled => Box::new(UnavailableChartAdapter::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_text_adapter() {
        let adapter = ChartAdapterFactory::create(ChartLibrary::Text);
        assert_eq!(adapter.library(), "text-charts");
        assert_eq!(adapter.live_instances(), 0);
    }

    #[test]
    fn test_create_disabled_adapter() {
        let mut adapter = ChartAdapterFactory::create(ChartLibrary::Disabled);
        let spec = crate::ports::outbound::ChartSpec {
            kind: crate::ports::outbound::ChartKind::Bar,
            title: "TCO".to_string(),
            format: crate::application::read_models::ValueFormat::Currency,
            points: Vec::new(),
        };
        assert!(adapter.construct("canvas", &spec).is_err());
    }

    #[test]
    fn test_default_library_is_text() {
        assert_eq!(ChartLibrary::default(), ChartLibrary::Text);
    }
}
