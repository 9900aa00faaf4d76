//! Bottom lines — hidden field payload, then key hints and status.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

/// The hidden field, as the form would submit it.
pub fn render_payload(f: &mut Frame, area: Rect, app: &AppState) {
    let field = app.panel.sink();
    let line = Line::from(vec![
        Span::styled(format!(" {} = ", field.name()), theme::muted()),
        Span::styled(field.value(), theme::accent()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    // Key hints
    spans.push(Span::styled(
        " [Tab/j/k]focus [h/l]adjust [H/L]x10 [q]submit+quit",
        theme::muted(),
    ));

    // Separator
    spans.push(Span::raw(" | "));

    // Status message
    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}
