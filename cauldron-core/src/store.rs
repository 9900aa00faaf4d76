//! Weight store — the single source of truth for effect weights.
//!
//! Backing storage may be longer than the active count. Slots at or past the
//! active count are zeroed on every resize, so shrinking the diploma count is
//! a hard cutoff: a slot that goes inactive comes back as 0, not as its old
//! value.

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// A diploma count that has been checked against `[1, max_effects]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActiveCount(usize);

impl ActiveCount {
    /// Returns `None` when `count` is outside `[1, max_effects]`.
    pub fn new(count: usize, max_effects: usize) -> Option<Self> {
        if count >= 1 && count <= max_effects {
            Some(Self(count))
        } else {
            None
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Notification produced by a successful `WeightStore::set`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightChange {
    pub index: usize,
    /// The stored value, after clamping.
    pub value: f64,
}

/// Immutable copy of the live weights, in index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<f64>);

impl Snapshot {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as the JSON array the form submits, e.g. `[0.1,0.55]`.
    ///
    /// Whole numbers keep their float form (`[1.0,0.0]`, not `[1,0]`). Both
    /// parse to the same numbers on the receiving side.
    pub fn to_json(&self) -> Result<String, PanelError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Clamp a weight into `[0, 1]`. NaN becomes 0.
pub fn clamp_weight(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Ordered effect weights.
#[derive(Debug, Clone, Default)]
pub struct WeightStore {
    values: Vec<f64>,
    seeded: bool,
}

impl WeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first resize has seeded the store from defaults.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Backing storage length (may exceed the active count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Resize the live window to `active`.
    ///
    /// The first call seeds storage from `defaults`. Storage grows with zeros
    /// up to the active count, and every slot at index >= active is zeroed.
    pub fn resize(&mut self, active: ActiveCount, defaults: &[f64]) {
        if !self.seeded {
            self.values = defaults.iter().copied().map(clamp_weight).collect();
            self.seeded = true;
        }

        let n = active.get();
        if self.values.len() < n {
            self.values.resize(n, 0.0);
        }
        for slot in self.values.iter_mut().skip(n) {
            *slot = 0.0;
        }
    }

    /// Write one weight, clamped to `[0, 1]`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<WeightChange, PanelError> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(PanelError::IndexOutOfRange { index, len })?;
        let value = clamp_weight(value);
        *slot = value;
        Ok(WeightChange { index, value })
    }

    /// The first `active` weights. Slots never allocated read as 0.
    pub fn snapshot(&self, active: ActiveCount) -> Snapshot {
        let n = active.get();
        let mut values: Vec<f64> = self.values.iter().copied().take(n).collect();
        values.resize(n, 0.0);
        Snapshot(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

    fn count(n: usize) -> ActiveCount {
        ActiveCount::new(n, DEFAULTS.len()).unwrap()
    }

    #[test]
    fn active_count_bounds() {
        assert!(ActiveCount::new(0, 5).is_none());
        assert!(ActiveCount::new(6, 5).is_none());
        assert_eq!(ActiveCount::new(1, 5).unwrap().get(), 1);
        assert_eq!(ActiveCount::new(5, 5).unwrap().get(), 5);
    }

    #[test]
    fn first_resize_seeds_from_defaults() {
        let mut store = WeightStore::new();
        assert!(!store.is_seeded());
        store.resize(count(3), &DEFAULTS);
        assert!(store.is_seeded());
        assert_eq!(store.snapshot(count(3)).values(), &[0.1, 0.2, 0.3]);
        // trailing slots zeroed, not removed
        assert_eq!(store.len(), 5);
        assert_eq!(store.get(3), Some(0.0));
        assert_eq!(store.get(4), Some(0.0));
    }

    #[test]
    fn seeding_clamps_defaults() {
        let mut store = WeightStore::new();
        store.resize(ActiveCount::new(3, 3).unwrap(), &[-0.5, 1.5, f64::NAN]);
        assert_eq!(store.snapshot(ActiveCount::new(3, 3).unwrap()).values(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn grows_with_zeros_past_short_defaults() {
        let mut store = WeightStore::new();
        store.resize(ActiveCount::new(4, 4).unwrap(), &[0.9, 0.8]);
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.snapshot(ActiveCount::new(4, 4).unwrap()).values(),
            &[0.9, 0.8, 0.0, 0.0]
        );
    }

    #[test]
    fn live_values_survive_resize() {
        let mut store = WeightStore::new();
        store.resize(count(3), &DEFAULTS);
        store.set(1, 0.75).unwrap();
        store.resize(count(4), &DEFAULTS);
        assert_eq!(store.snapshot(count(4)).values(), &[0.1, 0.75, 0.3, 0.0]);
    }

    #[test]
    fn shrink_then_grow_resets_inactive_slot() {
        let mut store = WeightStore::new();
        store.resize(count(5), &DEFAULTS);
        store.set(2, 0.7).unwrap();
        store.resize(count(5), &DEFAULTS);
        store.resize(count(2), &DEFAULTS);
        store.resize(count(5), &DEFAULTS);
        assert_eq!(store.get(2), Some(0.0));
    }

    #[test]
    fn slot_inside_shrunk_window_is_kept() {
        let mut store = WeightStore::new();
        store.resize(count(5), &DEFAULTS);
        store.set(2, 0.7).unwrap();
        store.resize(count(5), &DEFAULTS);
        store.resize(count(3), &DEFAULTS);
        store.resize(count(5), &DEFAULTS);
        // index 2 < 3 stayed live through the shrink
        assert_eq!(store.get(2), Some(0.7));
        assert_eq!(store.get(3), Some(0.0));
        assert_eq!(store.get(4), Some(0.0));
    }

    #[test]
    fn set_clamps() {
        let mut store = WeightStore::new();
        store.resize(count(2), &DEFAULTS);
        assert_eq!(store.set(0, 1.7).unwrap().value, 1.0);
        assert_eq!(store.set(1, -0.2).unwrap().value, 0.0);
        assert_eq!(store.set(1, f64::NAN).unwrap().value, 0.0);
    }

    #[test]
    fn set_past_storage_fails() {
        let mut store = WeightStore::new();
        match store.set(0, 0.5) {
            Err(PanelError::IndexOutOfRange { index: 0, len: 0 }) => {}
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
        store.resize(count(2), &DEFAULTS);
        // storage is 5 long after seeding, so index 4 is writable
        assert!(store.set(4, 0.5).is_ok());
        assert!(store.set(5, 0.5).is_err());
    }

    #[test]
    fn snapshot_json() {
        let mut store = WeightStore::new();
        store.resize(count(2), &DEFAULTS);
        assert_eq!(store.snapshot(count(2)).to_json().unwrap(), "[0.1,0.2]");
        store.set(1, 0.55).unwrap();
        assert_eq!(store.snapshot(count(2)).to_json().unwrap(), "[0.1,0.55]");
    }

    #[test]
    fn snapshot_json_keeps_whole_numbers_as_floats() {
        let mut store = WeightStore::new();
        store.resize(count(3), &[1.0, 1.0, 1.0]);
        store.set(1, 0.0).unwrap();
        let json = store.snapshot(count(3)).to_json().unwrap();
        assert_eq!(json, "[1.0,0.0,1.0]");
        let parsed: Vec<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![1.0, 0.0, 1.0]);
    }
}
