//! Chart series projection
//!
//! Turns aggregated samples into the `{value, label, text}` points a chart
//! widget consumes, one series per [`SensorField`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_HEADROOM, WHOLE_NUMBER_THRESHOLD};
use crate::sample::{SensorField, SensorSample};

/// Chart style picked by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChartKind {
    /// One bar per point
    #[default]
    BarChart,
    /// Straight segments between points
    LineChart,
    /// Smoothed line
    BezierLineChart,
}

impl ChartKind {
    /// Line-style charts are anchored with a leading zero point
    pub const fn is_line(self) -> bool {
        matches!(self, ChartKind::LineChart | ChartKind::BezierLineChart)
    }
}

/// One plotted point
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChartPoint {
    /// Plotted value; absent readings plot as 0
    pub value: f64,
    /// X-axis label; absent only on the anchor point of line charts
    pub label: Option<String>,
    /// Text drawn above the point
    pub data_point_text: Option<String>,
}

impl ChartPoint {
    fn from_sample(index: usize, sample: &SensorSample, field: SensorField) -> Self {
        let value = sample.get(field).unwrap_or(0.0);
        let label = sample
            .formatted_date
            .clone()
            .unwrap_or_else(|| (index + 1).to_string());

        Self {
            value,
            label: Some(label),
            data_point_text: Some(point_text(value)),
        }
    }
}

/// Text shown on a point: whole numbers for large readings, one decimal otherwise
pub fn point_text(value: f64) -> String {
    if value > WHOLE_NUMBER_THRESHOLD {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.1}")
    }
}

/// Points for a bar chart
pub fn bar_points(samples: &[SensorSample], field: SensorField) -> Vec<ChartPoint> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| ChartPoint::from_sample(index, sample, field))
        .collect()
}

/// Points for a line chart, starting from a zero anchor
pub fn line_points(samples: &[SensorSample], field: SensorField) -> Vec<ChartPoint> {
    let anchor = ChartPoint {
        value: 0.0,
        label: None,
        data_point_text: None,
    };

    core::iter::once(anchor)
        .chain(bar_points(samples, field))
        .collect()
}

/// Points for `kind`
pub fn points(kind: ChartKind, samples: &[SensorSample], field: SensorField) -> Vec<ChartPoint> {
    if kind.is_line() {
        line_points(samples, field)
    } else {
        bar_points(samples, field)
    }
}

/// Upper bound of the y-axis: the largest value plus headroom
pub fn axis_max(points: &[ChartPoint]) -> f64 {
    points
        .iter()
        .map(|p| p.value)
        .fold(None, |max: Option<f64>, v| Some(max.map_or(v, |m| m.max(v))))
        .map_or(0.0, |max| max * AXIS_HEADROOM)
}
