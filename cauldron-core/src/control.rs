//! Ranged slider control: bounds, step snapping, display format, fill ratio.

use serde::{Deserialize, Serialize};

/// How a control renders its value as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Two decimal places (`0.10`). Used by weight sliders.
    #[default]
    Fixed2,
    /// Truncated integer (`25`). Used by bounds sliders.
    Integer,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            // ties round away from zero: 0.125 shows as 0.13
            ValueFormat::Fixed2 => format!("{:.2}", (value * 100.0).round() / 100.0),
            ValueFormat::Integer => format!("{}", value.trunc() as i64),
        }
    }
}

/// Fraction of `[min, max]` covered by `value`, clamped to `[0, 1]`.
///
/// A degenerate range (`max <= min`) has no fill.
pub fn fill_ratio(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 || value.is_nan() {
        return 0.0;
    }
    ((value - min) / range).clamp(0.0, 1.0)
}

/// Number of decimal places needed to represent `step` (capped at 9).
fn step_decimals(step: f64) -> i32 {
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 9 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// A single `[min, max]` slider with a fixed step.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeControl {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    format: ValueFormat,
}

impl RangeControl {
    /// Build a control. The initial value is clamped but not snapped, so
    /// seeded weights such as `0.1` display exactly as given.
    pub fn new(min: f64, max: f64, step: f64, value: f64, format: ValueFormat) -> Self {
        // inverted ranges collapse to `min`
        let max = if max < min { min } else { max };
        let value = if value.is_nan() { min } else { value.clamp(min, max) };
        Self {
            min,
            max,
            step,
            value,
            format,
        }
    }

    /// The `[0, 1]` weight slider with a 0.01 step.
    pub fn weight(value: f64) -> Self {
        Self::new(0.0, 1.0, 0.01, value, ValueFormat::Fixed2)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn format(&self) -> ValueFormat {
        self.format
    }

    /// Value rendered with this control's format.
    pub fn display(&self) -> String {
        self.format.format(self.value)
    }

    pub fn fill_ratio(&self) -> f64 {
        fill_ratio(self.value, self.min, self.max)
    }

    /// Set from user input: clamp to bounds, snap to the step grid.
    /// Returns the value actually held.
    pub fn set_value(&mut self, value: f64) -> f64 {
        self.value = self.snap(value);
        self.value
    }

    /// Move by `steps` increments (negative moves down).
    pub fn nudge(&mut self, steps: i32) -> f64 {
        let target = self.value + f64::from(steps) * self.step;
        self.set_value(target)
    }

    fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = round_to(self.min + steps * self.step, step_decimals(self.step));
        snapped.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(ValueFormat::Fixed2.format(0.1), "0.10");
        assert_eq!(ValueFormat::Fixed2.format(0.556), "0.56");
        assert_eq!(ValueFormat::Integer.format(25.0), "25");
        assert_eq!(ValueFormat::Integer.format(7.9), "7");
    }

    #[test]
    fn fixed2_rounds_ties_up() {
        assert_eq!(ValueFormat::Fixed2.format(0.125), "0.13");
        assert_eq!(ValueFormat::Fixed2.format(0.625), "0.63");
        assert_eq!(ValueFormat::Fixed2.format(0.0), "0.00");
        assert_eq!(ValueFormat::Fixed2.format(1.0), "1.00");
    }

    #[test]
    fn fill_ratio_basic() {
        assert_eq!(fill_ratio(0.25, 0.0, 1.0), 0.25);
        assert_eq!(fill_ratio(1.0, 1.0, 25.0), 0.0);
        assert_eq!(fill_ratio(25.0, 1.0, 25.0), 1.0);
        assert_eq!(fill_ratio(13.0, 1.0, 25.0), 0.5);
    }

    #[test]
    fn fill_ratio_degenerate() {
        assert_eq!(fill_ratio(3.0, 3.0, 3.0), 0.0);
        assert_eq!(fill_ratio(f64::NAN, 0.0, 1.0), 0.0);
        assert_eq!(fill_ratio(2.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn step_decimals_detects_precision() {
        assert_eq!(step_decimals(1.0), 0);
        assert_eq!(step_decimals(0.01), 2);
        assert_eq!(step_decimals(0.25), 2);
        assert_eq!(step_decimals(0.5), 1);
    }

    #[test]
    fn snaps_to_two_decimals_exactly() {
        let mut c = RangeControl::weight(0.1);
        assert_eq!(c.set_value(0.55), 0.55);
        assert_eq!(c.set_value(0.554), 0.55);
        assert_eq!(c.set_value(0.556), 0.56);
        assert_eq!(c.display(), "0.56");
    }

    #[test]
    fn set_value_clamps() {
        let mut c = RangeControl::weight(0.5);
        assert_eq!(c.set_value(3.0), 1.0);
        assert_eq!(c.set_value(-1.0), 0.0);
        assert_eq!(c.set_value(f64::NAN), 0.0);
    }

    #[test]
    fn initial_value_is_not_snapped() {
        let c = RangeControl::weight(0.123);
        assert_eq!(c.value(), 0.123);
        assert_eq!(c.display(), "0.12");
    }

    #[test]
    fn nudge_moves_by_step() {
        let mut c = RangeControl::weight(0.1);
        assert_eq!(c.nudge(1), 0.11);
        assert_eq!(c.nudge(-2), 0.09);
        assert_eq!(c.nudge(-100), 0.0);
        assert_eq!(c.nudge(1000), 1.0);
    }

    #[test]
    fn integer_control() {
        let mut c = RangeControl::new(1.0, 100.0, 1.0, 100.0, ValueFormat::Integer);
        assert_eq!(c.display(), "100");
        assert_eq!(c.nudge(-1), 99.0);
        assert_eq!(c.set_value(41.6), 42.0);
        assert_eq!(c.set_value(0.0), 1.0);
    }
}
