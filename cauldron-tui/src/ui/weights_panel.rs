//! Effect weight sliders — one row per active diploma.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::widgets::slider::SliderRow;

const LABEL_WIDTH: usize = 24;
const BAR_WIDTH: usize = 30;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let active = matches!(app.focus, Focus::Weight(_));
    let cards = app.panel.weight_cards();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(
            " Effect weights ({}/{}) ",
            cards.len(),
            app.panel.max_effects()
        ))
        .title_style(theme::panel_title(active));

    let inner = block.inner(area);
    let visible = inner.height as usize;
    let focused = match app.focus {
        Focus::Weight(i) => Some(i),
        _ => None,
    };
    let offset = scroll_offset(focused, cards.len(), visible);

    let lines: Vec<Line> = cards
        .iter()
        .skip(offset)
        .take(visible)
        .map(|card| {
            SliderRow {
                label: &card.label,
                ratio: card.fill_ratio(),
                value: card.display(),
                focused: focused == Some(card.index),
                label_width: LABEL_WIDTH,
                bar_width: BAR_WIDTH,
                note: card.icon.as_deref(),
            }
            .line()
        })
        .collect();

    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);
}

/// First visible row so the focused card stays on screen.
fn scroll_offset(focused: Option<usize>, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    match focused {
        Some(i) if i >= visible => (i + 1 - visible).min(total - visible),
        _ => 0,
    }
}
