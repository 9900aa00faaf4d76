//! Labeled horizontal slider row.
//!
//! Used by the bounds and weights panels. The bar length follows the
//! control's fill ratio, never its formatted value.

use ratatui::text::{Line, Span};

use crate::theme;

/// `[=====     ]` with `width` cells between the brackets.
pub fn bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// One slider line: label, bar, value, optional trailing note.
pub struct SliderRow<'a> {
    pub label: &'a str,
    pub ratio: f64,
    pub value: &'a str,
    pub focused: bool,
    pub label_width: usize,
    pub bar_width: usize,
    pub note: Option<&'a str>,
}

impl<'a> SliderRow<'a> {
    pub fn line(self) -> Line<'a> {
        let label_style = if self.focused {
            theme::focused()
        } else {
            theme::muted()
        };
        let bar_style = if self.focused {
            theme::accent()
        } else {
            theme::fill(self.ratio)
        };

        let mut spans = vec![
            Span::styled(
                format!("{:>width$}: ", truncate(self.label, self.label_width), width = self.label_width),
                label_style,
            ),
            Span::styled(bar(self.ratio, self.bar_width), bar_style),
            Span::styled(format!(" {}", self.value), label_style),
        ];
        if let Some(note) = self.note {
            spans.push(Span::styled(format!("  {note}"), theme::neutral()));
        }
        Line::from(spans)
    }
}

/// Cut `s` to at most `max` chars, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = s.chars().take(keep).collect();
    out.push('…');
    out
}
