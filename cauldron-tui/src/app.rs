//! Application state — single-owner, main-thread only.
//!
//! All form state lives here; the panel inside owns the weight store.

use cauldron_core::{HiddenField, PanelConfig, PanelError, RenderOutcome, SliderPanel};

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Count,
    Bounds(usize),
    Weight(usize),
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Top-level application state.
pub struct AppState {
    pub panel: SliderPanel<HiddenField>,
    pub focus: Focus,
    /// Raw text of the diploma count input, as typed.
    pub count_input: String,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    /// Build and render the form. Fails only if the first render cannot
    /// serialize its snapshot.
    pub fn new(config: PanelConfig) -> Result<Self, PanelError> {
        let field = HiddenField::new(config.output_field.clone());
        let count_input = config.initial_count.to_string();
        let mut panel = SliderPanel::new(config, field);
        let outcome = panel.initialize()?;

        let mut app = Self {
            panel,
            focus: Focus::Count,
            count_input,
            running: true,
            status_message: None,
        };
        if outcome == RenderOutcome::Ignored {
            app.set_warning(app.count_range_hint());
        }
        Ok(app)
    }

    /// All focusable controls in display order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Count];
        order.extend((0..self.panel.bounds_cards().len()).map(Focus::Bounds));
        order.extend((0..self.panel.weight_cards().len()).map(Focus::Weight));
        order
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, delta: isize) {
        if self.focus == Focus::Count {
            // leaving the count input commits it, like a change event
            self.commit_count();
        }
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.focus = order[next as usize];
    }

    /// Apply the count input to the panel.
    pub fn commit_count(&mut self) {
        match self.panel.count_changed(&self.count_input) {
            Ok(RenderOutcome::Rendered) => {
                let n = self.panel.weight_cards().len();
                self.clamp_focus();
                self.set_status(format!("Showing {n} effect weights"));
            }
            Ok(RenderOutcome::Ignored) => {
                self.set_warning(self.count_range_hint());
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Step the count by `delta` and commit, like a number input spinner.
    pub fn step_count(&mut self, delta: i64) {
        let current = self
            .panel
            .active_count()
            .map(|n| n as i64)
            .unwrap_or(1);
        let max = self.panel.max_effects() as i64;
        let next = (current + delta).clamp(1, max);
        self.count_input = next.to_string();
        self.commit_count();
    }

    /// Move the focused slider by `steps` increments.
    pub fn adjust_focused(&mut self, steps: i32) {
        let result = match self.focus {
            Focus::Count => {
                self.step_count(i64::from(steps.signum()));
                return;
            }
            Focus::Bounds(i) => self.panel.nudge_bounds(i, steps),
            Focus::Weight(i) => self.panel.nudge_weight(i, steps),
        };
        if let Err(e) = result {
            self.set_error(e.to_string());
        }
    }

    /// Value of the hidden output field.
    pub fn payload(&self) -> &str {
        self.panel.sink().value()
    }

    fn clamp_focus(&mut self) {
        if let Focus::Weight(i) = self.focus {
            let n = self.panel.weight_cards().len();
            if i >= n {
                self.focus = Focus::Weight(n.saturating_sub(1));
            }
        }
    }

    fn count_range_hint(&self) -> String {
        format!(
            "Diploma count must be between 1 and {}",
            self.panel.max_effects()
        )
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::warn!(%msg, "form error");
        self.status_message = Some((msg, StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> PanelConfig {
        PanelConfig {
            default_weights: vec![0.1, 0.2, 0.3],
            effect_names: vec!["A".into(), "B".into(), "C".into()],
            initial_count: 2,
            ..PanelConfig::default()
        }
    }

    #[test]
    fn starts_on_count_with_initial_render() {
        let app = AppState::new(small_config()).unwrap();
        assert_eq!(app.focus, Focus::Count);
        assert_eq!(app.count_input, "2");
        assert_eq!(app.payload(), "[0.1,0.2]");
        assert!(app.running);
    }

    #[test]
    fn focus_order_covers_all_controls() {
        let app = AppState::new(small_config()).unwrap();
        let order = app.focus_order();
        // count + 3 bounds + 2 weights
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], Focus::Count);
        assert_eq!(order[1], Focus::Bounds(0));
        assert_eq!(order[5], Focus::Weight(1));
    }

    #[test]
    fn focus_wraps() {
        let mut app = AppState::new(small_config()).unwrap();
        app.focus_prev();
        assert_eq!(app.focus, Focus::Weight(1));
        app.focus_next();
        assert_eq!(app.focus, Focus::Count);
    }

    #[test]
    fn leaving_count_commits_it() {
        let mut app = AppState::new(small_config()).unwrap();
        app.count_input = "3".into();
        app.focus_next();
        assert_eq!(app.panel.weight_cards().len(), 3);
        assert_eq!(app.payload(), "[0.1,0.2,0.0]");
    }

    #[test]
    fn bad_count_warns_and_keeps_cards() {
        let mut app = AppState::new(small_config()).unwrap();
        app.count_input = "9".into();
        app.commit_count();
        assert_eq!(app.panel.weight_cards().len(), 2);
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("between 1 and 3"));
    }

    #[test]
    fn step_count_clamps_to_range() {
        let mut app = AppState::new(small_config()).unwrap();
        app.step_count(5);
        assert_eq!(app.count_input, "3");
        app.step_count(-10);
        assert_eq!(app.count_input, "1");
        assert_eq!(app.payload(), "[0.1]");
    }

    #[test]
    fn shrinking_pulls_focus_back() {
        let mut app = AppState::new(small_config()).unwrap();
        app.focus = Focus::Weight(1);
        app.count_input = "1".into();
        app.commit_count();
        assert_eq!(app.focus, Focus::Weight(0));
    }

    #[test]
    fn adjust_weight_updates_payload() {
        let mut app = AppState::new(small_config()).unwrap();
        app.focus = Focus::Weight(1);
        app.adjust_focused(10);
        assert_eq!(app.payload(), "[0.1,0.3]");
    }
}
