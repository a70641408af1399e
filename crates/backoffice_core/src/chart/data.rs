use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ChartKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
    #[serde(default)]
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPoint {
    /// Short label shown on the axis.
    pub date: String,
    /// Long form used in tooltips.
    pub full_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub name: String,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerDayData {
    pub days: Vec<DayPoint>,
    pub metrics: Vec<MetricSeries>,
    #[serde(default)]
    pub max_y: Option<i64>,
    #[serde(default)]
    pub tick_interval: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("{kind:?} chart needs {expected} metric series, got {actual}")]
    MetricCount {
        kind: ChartKind,
        expected: usize,
        actual: usize,
    },
    #[error("{0:?} is not a per-day chart")]
    NotPerDay(ChartKind),
}
