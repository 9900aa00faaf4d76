//! Replay events — scripted stand-ins for count changes and slider moves.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use cauldron_core::{PanelError, RenderOutcome, SliderPanel, SnapshotSink};

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayEvent {
    /// The count input committed this raw text.
    Count(String),
    /// Weight slider `index` moved to `value`.
    Weight { index: usize, value: f64 },
    /// Bounds slider `name` moved to `value`.
    Bounds { name: String, value: f64 },
}

impl FromStr for ReplayEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("event '{s}' is missing '='"))?;
        let key = key.trim();

        if key == "count" {
            return Ok(ReplayEvent::Count(value.to_string()));
        }
        if let Some(index) = key.strip_prefix('w') {
            let index = index
                .parse::<usize>()
                .map_err(|_| anyhow!("event '{s}': bad weight index '{index}'"))?;
            return Ok(ReplayEvent::Weight {
                index,
                value: parse_value(s, value)?,
            });
        }
        if let Some(name) = key.strip_prefix('b') {
            if name.is_empty() {
                bail!("event '{s}': missing bounds field name");
            }
            return Ok(ReplayEvent::Bounds {
                name: name.to_string(),
                value: parse_value(s, value)?,
            });
        }
        bail!("event '{s}': expected count=N, w<I>=<V> or b<NAME>=<V>")
    }
}

fn parse_value(event: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("event '{event}': bad value '{raw}'"))
}

impl fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayEvent::Count(raw) => write!(f, "count={raw}"),
            ReplayEvent::Weight { index, value } => write!(f, "w{index}={value}"),
            ReplayEvent::Bounds { name, value } => write!(f, "b{name}={value}"),
        }
    }
}

/// Apply one event. Returns a note for events the panel ignored.
pub fn apply_event<S: SnapshotSink>(
    panel: &mut SliderPanel<S>,
    event: &ReplayEvent,
) -> Result<Option<String>, PanelError> {
    match event {
        ReplayEvent::Count(raw) => match panel.count_changed(raw)? {
            RenderOutcome::Rendered => Ok(None),
            RenderOutcome::Ignored => Ok(Some(format!(
                "ignored, count must be between 1 and {}",
                panel.max_effects()
            ))),
        },
        ReplayEvent::Weight { index, value } => {
            panel.input_weight(*index, *value)?;
            Ok(None)
        }
        ReplayEvent::Bounds { name, value } => {
            panel.input_bounds_named(name, *value)?;
            Ok(None)
        }
    }
}
