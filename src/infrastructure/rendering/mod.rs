pub mod line_chart;
pub mod scale;

pub use line_chart::{ChartDataset, ChartSlot, LineChart, LineChartSpec};
pub use scale::{CHART_PADDING, ChartScale};
