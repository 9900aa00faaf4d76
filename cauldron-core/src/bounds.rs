//! Bounds fields — scalar optimizer settings rendered next to the weights.
//!
//! They share the slider look but never feed the weight snapshot.

use serde::{Deserialize, Serialize};

use crate::control::{RangeControl, ValueFormat};

/// Total ingredient slots in the cauldron; upper bound for `alpha_UB`.
pub const SUM_INGREDIENTS: u32 = 25;

/// Upper bound for the search-depth slider.
pub const MAX_STARTS: u32 = 100;

fn default_step() -> f64 {
    1.0
}

/// Static descriptor of one bounds slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsField {
    pub label: String,
    /// Form field name the value is submitted under.
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    #[serde(default = "default_step")]
    pub step: f64,
}

impl BoundsField {
    pub fn new(label: impl Into<String>, name: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            min,
            max,
            value,
            step: default_step(),
        }
    }

    /// A fresh integer slider for this field.
    pub fn control(&self) -> RangeControl {
        RangeControl::new(self.min, self.max, self.step, self.value, ValueFormat::Integer)
    }

    /// Problems with this field, if any.
    pub fn check(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some(format!("bounds field '{}' has an empty name", self.label));
        }
        if !(self.min < self.max) {
            return Some(format!(
                "bounds field '{}': min {} must be below max {}",
                self.name, self.min, self.max
            ));
        }
        if !(self.step > 0.0) {
            return Some(format!("bounds field '{}': step must be positive", self.name));
        }
        if !(self.min..=self.max).contains(&self.value) {
            return Some(format!(
                "bounds field '{}': value {} outside [{}, {}]",
                self.name, self.value, self.min, self.max
            ));
        }
        None
    }
}

/// The optimizer's three bounds: ingredient cap, probability cap, search depth.
pub fn default_bounds_fields() -> Vec<BoundsField> {
    vec![
        BoundsField::new(
            "max amount per ingredient",
            "alpha_UB",
            1.0,
            f64::from(SUM_INGREDIENTS),
            f64::from(SUM_INGREDIENTS),
        ),
        BoundsField::new("max probability per effect", "prob_UB", 1.0, 100.0, 100.0),
        BoundsField::new("search depth", "n_starts", 1.0, f64::from(MAX_STARTS), 10.0),
    ]
}
