use serde::{Deserialize, Serialize};

/// How the single series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    LineMarkers,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis<T> {
    pub label: String,
    pub values: Vec<T>,
}

/// Presentation hints. Front ends may ignore any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_size: Option<u32>,
    pub height: u32,
    pub theme: String,
}

/// Library-agnostic description of a one-series, year-indexed chart.
/// `x_axis.values[i]` pairs with `y_axis.values[i]`; years are ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub kind: ChartKind,
    pub title: String,
    pub series_name: String,
    pub x_axis: Axis<i32>,
    pub y_axis: Axis<i64>,
    pub style: ChartStyle,
}
