//! Dashboard chart option builders and the resize/rebuild lifecycle.
//!
//! The rendering library is external; everything here produces plain JSON
//! option documents or decisions about when to rebuild.
mod axis;
mod data;
mod options;
mod resize;

pub use axis::{thin_categories, AxisLabels, MAX_VISIBLE_LABELS};
pub use data::{ChartError, DayPoint, MetricSeries, PerDayData, PieSlice};
pub use options::{
    format_percentage, per_day_options, per_day_tooltip, pie_options, pie_tooltip, theme_options,
    PALETTE,
};
pub use resize::{rebuild_steps, RebuildStep, ResizeDebounce, ResizeDecision, RESIZE_QUIET_PERIOD};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    DoubleMetricPerDay,
    SingleMetricPerDay,
    Widget,
}

impl ChartKind {
    /// Canonical order in which charts are created and rebuilt.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Pie,
        ChartKind::DoubleMetricPerDay,
        ChartKind::SingleMetricPerDay,
        ChartKind::Widget,
    ];

    /// Id of the element the chart renders into.
    pub fn container_id(self) -> &'static str {
        match self {
            ChartKind::Pie => "chartPieChart",
            ChartKind::DoubleMetricPerDay => "chartDoubleMetricPerDay",
            ChartKind::SingleMetricPerDay => "chartSingleMetricPerDay",
            ChartKind::Widget => "chartWidget",
        }
    }

    /// Id of the element holding the chart's source data.
    pub fn data_id(self) -> &'static str {
        match self {
            ChartKind::Pie => "dataChartPieChart",
            ChartKind::DoubleMetricPerDay => "dataChartDoubleMetricPerDay",
            ChartKind::SingleMetricPerDay => "dataChartSingleMetricPerDay",
            ChartKind::Widget => "dataChartWidget",
        }
    }

    /// Number of metric series the per-day charts expect.
    pub fn metric_count(self) -> usize {
        match self {
            ChartKind::Pie => 0,
            ChartKind::SingleMetricPerDay => 1,
            ChartKind::DoubleMetricPerDay | ChartKind::Widget => 2,
        }
    }
}
