/// Chart adapters implementing the ChartAdapter port
mod text_chart_adapter;
mod unavailable_chart_adapter;

pub use text_chart_adapter::TextChartAdapter;
pub use unavailable_chart_adapter::UnavailableChartAdapter;
