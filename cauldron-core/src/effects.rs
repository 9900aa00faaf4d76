//! Effect descriptors — the labels and icons attached to each weight slot.

use serde::{Deserialize, Serialize};

/// Cauldron effects, in diploma order. One weight slider per effect.
pub const EFFECT_NAMES: [&str; 24] = [
    "Monedas",
    "Provisiones",
    "Cuartel Fuerza",
    "Ordinarios Básicos",
    "Ordinarios Refinados",
    "Ordinarios Preciosos",
    "Entrenamiento Fuerza",
    "Portal",
    "Orcos",
    "Maná",
    "Mercenarios Fuerza",
    "Semillas",
    "Sensitivos Básicos",
    "Sensitivos Refinados",
    "Sensitivos Preciosos",
    "Entrenamiento Salud",
    "Mercenarios Salud",
    "Unurium",
    "Ascendidos Básicos",
    "Ascendidos Refinados",
    "Ascendidos Preciosos",
    "Cuartel Salud",
    "Trabajo Comunitario",
    "Productos en Conserva",
];

/// Label used when an effect has no configured name.
pub fn fallback_label(index: usize) -> String {
    format!("Effect {}", index + 1)
}

/// Icon path synthesized from an icon directory: `{dir}/effect{i+1}.png`.
pub fn synthesized_icon(dir: &str, index: usize) -> String {
    format!("{}/effect{}.png", dir.trim_end_matches('/'), index + 1)
}

/// Static description of one effect slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDescriptor {
    pub id: usize,
    pub label: Option<String>,
    pub icon: Option<String>,
}

impl EffectDescriptor {
    /// The configured label, or `"Effect {id+1}"`.
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label.clone(),
            _ => fallback_label(self.id),
        }
    }
}

/// All descriptors for one session, indexed `0..max_effects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectCatalog {
    descriptors: Vec<EffectDescriptor>,
}

impl EffectCatalog {
    /// Build `max_effects` descriptors from parallel name/icon lists.
    ///
    /// Missing names stay `None` (the label falls back at display time).
    /// Missing icons are synthesized from `icon_dir` when one is given.
    pub fn build(
        max_effects: usize,
        names: &[String],
        icons: &[String],
        icon_dir: Option<&str>,
    ) -> Self {
        let descriptors = (0..max_effects)
            .map(|id| {
                let label = names.get(id).cloned();
                let icon = icons
                    .get(id)
                    .filter(|icon| !icon.is_empty())
                    .cloned()
                    .or_else(|| icon_dir.map(|dir| synthesized_icon(dir, id)));
                EffectDescriptor { id, label, icon }
            })
            .collect();
        Self { descriptors }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EffectDescriptor> {
        self.descriptors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EffectDescriptor> {
        self.descriptors.iter()
    }

    /// Label for slot `index`, falling back even past the catalog end.
    pub fn label_for(&self, index: usize) -> String {
        self.get(index)
            .map(EffectDescriptor::display_label)
            .unwrap_or_else(|| fallback_label(index))
    }

    pub fn icon_for(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(|d| d.icon.as_deref())
    }
}
