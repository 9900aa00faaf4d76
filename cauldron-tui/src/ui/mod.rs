//! Top-level UI layout — count input, bounds, weights, payload, status bar.

pub mod bounds_panel;
pub mod count_input;
pub mod status_bar;
pub mod weights_panel;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::AppState;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let bounds_height = app.panel.bounds_cards().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(bounds_height),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    count_input::render(f, chunks[0], app);
    bounds_panel::render(f, chunks[1], app);
    weights_panel::render(f, chunks[2], app);
    status_bar::render_payload(f, chunks[3], app);
    status_bar::render(f, chunks[4], app);
}
