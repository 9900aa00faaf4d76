//! Cauldron Core — effect weight state and the slider panel view-model.
//!
//! This crate contains everything the form needs that is not drawing:
//! - `WeightStore`: the ordered effect weights, resized by the diploma count
//! - `SliderPanel`: one card per active weight plus the bounds cards,
//!   pushing a JSON snapshot into a `SnapshotSink` on every change
//! - Range controls with step snapping, value formatting and fill ratio
//! - Effect descriptors with label/icon fallbacks
//! - `PanelConfig` loaded from TOML or JSON

pub mod bounds;
pub mod config;
pub mod control;
pub mod effects;
pub mod error;
pub mod panel;
pub mod sink;
pub mod store;

pub use bounds::BoundsField;
pub use config::PanelConfig;
pub use control::{RangeControl, ValueFormat};
pub use effects::{EffectCatalog, EffectDescriptor};
pub use error::{ConfigError, PanelError};
pub use panel::{BoundsCard, PanelState, RenderOutcome, SliderPanel, WeightCard};
pub use sink::{HiddenField, SnapshotSink};
pub use store::{ActiveCount, Snapshot, WeightChange, WeightStore};
