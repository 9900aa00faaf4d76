//! Diploma count input — the field that drives how many weights show.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Count;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(" Diplomas ")
        .title_style(theme::panel_title(focused));

    let cursor = if focused { "_" } else { "" };
    let committed = app
        .panel
        .active_count()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".into());

    let line = Line::from(vec![
        Span::styled(
            format!("{}{cursor}", app.count_input),
            if focused { theme::accent_bold() } else { theme::text() },
        ),
        Span::styled(
            format!(
                "   (1-{}, showing {committed})  [0-9]edit [Enter]apply [h/l]step",
                app.panel.max_effects()
            ),
            theme::muted(),
        ),
    ]);

    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line), inner);
}
