//! Geometry for the monthly sales chart (SVG)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Centre of the slot on the x axis.
    pub x: f64,
    /// Top of the value; the baseline is at `ChartScale::baseline()`.
    pub y: f64,
}

/// Plot area in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartScale {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 260.0,
            padding: 32.0,
        }
    }
}

impl ChartScale {
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    fn slot_width(&self, count: usize) -> f64 {
        (self.width - 2.0 * self.padding) / count.max(1) as f64
    }

    /// Bar width leaving a gap of a third of the slot.
    pub fn bar_width(&self, count: usize) -> f64 {
        self.slot_width(count) * 2.0 / 3.0
    }

    /// Place each `(label, value)` in its own slot. Values are scaled against
    /// the largest one; an all-zero series sits on the baseline.
    pub fn place(&self, values: &[(String, f64)]) -> Vec<ChartPoint> {
        let max = values.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let usable = self.height - 2.0 * self.padding;
        let slot = self.slot_width(values.len());

        values
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let ratio = if max > 0.0 { value / max } else { 0.0 };
                ChartPoint {
                    label: label.clone(),
                    value: *value,
                    x: self.padding + slot * (i as f64 + 0.5),
                    y: self.baseline() - ratio * usable,
                }
            })
            .collect()
    }

    /// `points` attribute for an SVG polyline.
    pub fn polyline(points: &[ChartPoint]) -> String {
        points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_value_reaches_the_top() {
        let scale = ChartScale::default();
        let pts = scale.place(&[("Jan 2024".into(), 500.0), ("Feb 2024".into(), 1000.0)]);
        assert_eq!(pts.len(), 2);
        assert!((pts[1].y - scale.padding).abs() < 1e-9);
        assert!((pts[0].y - (scale.baseline() - (scale.height - 2.0 * scale.padding) / 2.0)).abs() < 1e-9);
        assert!(pts[0].x < pts[1].x);
    }

    #[test]
    fn zero_series_stays_on_baseline() {
        let scale = ChartScale::default();
        let pts = scale.place(&[("Jan 2024".into(), 0.0)]);
        assert_eq!(pts[0].y, scale.baseline());
        assert_eq!(pts[0].x, scale.width / 2.0);
    }

    #[test]
    fn polyline_format() {
        let pts = vec![
            ChartPoint { label: "a".into(), value: 1.0, x: 10.0, y: 20.24 },
            ChartPoint { label: "b".into(), value: 2.0, x: 30.0, y: 5.0 },
        ];
        assert_eq!(ChartScale::polyline(&pts), "10.0,20.2 30.0,5.0");
    }
}
