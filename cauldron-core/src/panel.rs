//! Slider panel — the view-model behind the weights form.
//!
//! The panel owns its `WeightStore`, the rendered cards and the sink. Every
//! render replaces the weight cards wholesale (clear and rebuild), and every
//! weight input writes through to the store and republishes the full
//! snapshot before returning.
//!
//! State machine: `Uninitialized -> Rendered`. Count changes re-render in
//! place (`Rendered -> Rendered`); the store lives as long as the panel.

use crate::bounds::BoundsField;
use crate::config::PanelConfig;
use crate::control::RangeControl;
use crate::effects::EffectCatalog;
use crate::error::PanelError;
use crate::sink::SnapshotSink;
use crate::store::{ActiveCount, Snapshot, WeightChange, WeightStore};

/// Lifecycle of a panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Uninitialized,
    Rendered,
}

/// Result of a weights render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Cards rebuilt and the snapshot published.
    Rendered,
    /// Count outside `[1, max_effects]`; nothing changed, nothing published.
    Ignored,
}

/// One weight slider, bound to `WeightStore[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightCard {
    pub index: usize,
    pub label: String,
    pub icon: Option<String>,
    control: RangeControl,
    display: String,
}

impl WeightCard {
    fn new(index: usize, label: String, icon: Option<String>, value: f64) -> Self {
        let control = RangeControl::weight(value);
        let display = control.display();
        Self {
            index,
            label,
            icon,
            control,
            display,
        }
    }

    pub fn value(&self) -> f64 {
        self.control.value()
    }

    /// Value text as shown on the card (`0.10`).
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn fill_ratio(&self) -> f64 {
        self.control.fill_ratio()
    }

    pub fn control(&self) -> &RangeControl {
        &self.control
    }

    /// Sync the card with a stored value: value, text and fill.
    fn apply(&mut self, change: WeightChange) {
        self.control.set_value(change.value);
        self.display = self.control.display();
    }
}

/// One bounds slider. Independent of the weights.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsCard {
    pub name: String,
    pub label: String,
    control: RangeControl,
    display: String,
}

impl BoundsCard {
    fn new(field: &BoundsField) -> Self {
        let control = field.control();
        let display = control.display();
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            control,
            display,
        }
    }

    pub fn value(&self) -> f64 {
        self.control.value()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn fill_ratio(&self) -> f64 {
        self.control.fill_ratio()
    }

    pub fn control(&self) -> &RangeControl {
        &self.control
    }

    fn refresh(&mut self) -> f64 {
        self.display = self.control.display();
        self.control.value()
    }
}

/// Build the weight cards for `active` from the store. No side effects.
pub fn build_weight_cards(
    catalog: &EffectCatalog,
    store: &WeightStore,
    active: ActiveCount,
) -> Vec<WeightCard> {
    (0..active.get())
        .map(|i| {
            WeightCard::new(
                i,
                catalog.label_for(i),
                catalog.icon_for(i).map(str::to_string),
                store.get(i).unwrap_or(0.0),
            )
        })
        .collect()
}

/// Parse the raw count input. Anything that is not a plain non-negative
/// integer yields `None`, which the panel treats as out of range.
pub fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// The weights form: store, cards and sink for one session.
pub struct SliderPanel<S: SnapshotSink> {
    config: PanelConfig,
    catalog: EffectCatalog,
    store: WeightStore,
    weight_cards: Vec<WeightCard>,
    bounds_cards: Vec<BoundsCard>,
    active: Option<ActiveCount>,
    state: PanelState,
    sink: S,
}

impl<S: SnapshotSink> SliderPanel<S> {
    pub fn new(config: PanelConfig, sink: S) -> Self {
        let catalog = EffectCatalog::build(
            config.max_effects(),
            &config.effect_names,
            &config.effect_icons,
            config.icon_dir.as_deref(),
        );
        Self {
            config,
            catalog,
            store: WeightStore::new(),
            weight_cards: Vec::new(),
            bounds_cards: Vec::new(),
            active: None,
            state: PanelState::Uninitialized,
            sink,
        }
    }

    /// First render: bounds once, then the configured initial count.
    pub fn initialize(&mut self) -> Result<RenderOutcome, PanelError> {
        let fields = self.config.bounds_fields.clone();
        self.render_bounds(&fields);
        let outcome = self.render_weights(self.config.initial_count)?;
        self.state = PanelState::Rendered;
        tracing::debug!(
            count = self.config.initial_count,
            ?outcome,
            bounds = self.bounds_cards.len(),
            "panel initialized"
        );
        Ok(outcome)
    }

    /// Rebuild the weight cards for `count` and publish the snapshot.
    ///
    /// Out-of-range counts leave cards, store and sink untouched.
    pub fn render_weights(&mut self, count: usize) -> Result<RenderOutcome, PanelError> {
        let Some(active) = ActiveCount::new(count, self.max_effects()) else {
            tracing::debug!(count, max = self.max_effects(), "ignoring out-of-range count");
            return Ok(RenderOutcome::Ignored);
        };

        self.store.resize(active, &self.config.default_weights);
        self.weight_cards = build_weight_cards(&self.catalog, &self.store, active);
        self.active = Some(active);
        self.state = PanelState::Rendered;
        tracing::debug!(count, "rendered weight cards");

        self.publish()?;
        Ok(RenderOutcome::Rendered)
    }

    /// Render the bounds cards. Does not touch weights or the sink.
    pub fn render_bounds(&mut self, fields: &[BoundsField]) {
        self.bounds_cards = fields.iter().map(BoundsCard::new).collect();
    }

    /// The count input committed a new value.
    pub fn count_changed(&mut self, raw: &str) -> Result<RenderOutcome, PanelError> {
        match parse_count(raw) {
            Some(count) => self.render_weights(count),
            None => {
                tracing::debug!(raw, "ignoring unparsable count");
                Ok(RenderOutcome::Ignored)
            }
        }
    }

    /// A weight slider moved to `value`. Returns the stored value.
    pub fn input_weight(&mut self, index: usize, value: f64) -> Result<f64, PanelError> {
        let len = self.weight_cards.len();
        let card = self.weight_cards.get_mut(index).ok_or_else(|| {
            tracing::warn!(index, len, "weight input past rendered cards");
            PanelError::IndexOutOfRange { index, len }
        })?;
        let snapped = card.control.set_value(value);
        let change = self.store.set(index, snapped)?;
        card.apply(change);
        tracing::trace!(index, value = change.value, "weight input");

        self.publish()?;
        Ok(change.value)
    }

    /// Move a weight slider by `steps` increments.
    pub fn nudge_weight(&mut self, index: usize, steps: i32) -> Result<f64, PanelError> {
        let card = self.weight_cards.get(index).ok_or(PanelError::IndexOutOfRange {
            index,
            len: self.weight_cards.len(),
        })?;
        let mut control = card.control.clone();
        let target = control.nudge(steps);
        self.input_weight(index, target)
    }

    /// A bounds slider moved to `value`. Returns the held value.
    pub fn input_bounds(&mut self, index: usize, value: f64) -> Result<f64, PanelError> {
        let len = self.bounds_cards.len();
        let card = self
            .bounds_cards
            .get_mut(index)
            .ok_or(PanelError::BoundsIndexOutOfRange { index, len })?;
        card.control.set_value(value);
        let held = card.refresh();
        tracing::trace!(name = %card.name, value = held, "bounds input");
        Ok(held)
    }

    /// Move a bounds slider by `steps` increments.
    pub fn nudge_bounds(&mut self, index: usize, steps: i32) -> Result<f64, PanelError> {
        let len = self.bounds_cards.len();
        let card = self
            .bounds_cards
            .get_mut(index)
            .ok_or(PanelError::BoundsIndexOutOfRange { index, len })?;
        card.control.nudge(steps);
        Ok(card.refresh())
    }

    /// Bounds input addressed by form field name.
    pub fn input_bounds_named(&mut self, name: &str, value: f64) -> Result<f64, PanelError> {
        let index = self
            .bounds_index(name)
            .ok_or_else(|| PanelError::UnknownBoundsField(name.to_string()))?;
        self.input_bounds(index, value)
    }

    pub fn bounds_index(&self, name: &str) -> Option<usize> {
        self.bounds_cards.iter().position(|c| c.name == name)
    }

    /// `(name, value)` for every bounds card, in render order.
    pub fn bounds_values(&self) -> Vec<(&str, f64)> {
        self.bounds_cards
            .iter()
            .map(|c| (c.name.as_str(), c.value()))
            .collect()
    }

    /// Current snapshot of the live weights, if a count has been rendered.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.active.map(|active| self.store.snapshot(active))
    }

    pub fn active_count(&self) -> Option<usize> {
        self.active.map(ActiveCount::get)
    }

    pub fn max_effects(&self) -> usize {
        self.config.max_effects()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn weight_cards(&self) -> &[WeightCard] {
        &self.weight_cards
    }

    pub fn bounds_cards(&self) -> &[BoundsCard] {
        &self.bounds_cards
    }

    pub fn store(&self) -> &WeightStore {
        &self.store
    }

    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn publish(&mut self) -> Result<(), PanelError> {
        if let Some(snapshot) = self.snapshot() {
            let payload = snapshot.to_json()?;
            tracing::trace!(%payload, "publishing weights");
            self.sink.publish(&payload);
        }
        Ok(())
    }
}
