//! Bounds sliders — optimizer settings outside the weight vector.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::widgets::slider::SliderRow;

const LABEL_WIDTH: usize = 28;
const BAR_WIDTH: usize = 30;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let active = matches!(app.focus, Focus::Bounds(_));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(" Bounds ")
        .title_style(theme::panel_title(active));

    let lines: Vec<Line> = app
        .panel
        .bounds_cards()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            SliderRow {
                label: &card.label,
                ratio: card.fill_ratio(),
                value: card.display(),
                focused: app.focus == Focus::Bounds(i),
                label_width: LABEL_WIDTH,
                bar_width: BAR_WIDTH,
                note: Some(&card.name),
            }
            .line()
        })
        .collect();

    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines), inner);
}
