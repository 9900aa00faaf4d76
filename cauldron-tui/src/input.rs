//! Keyboard input dispatch — global keys, then the focused control.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Focus};

/// Steps moved by `H`/`L` (and shift-arrows).
const COARSE_STEPS: i32 = 10;

/// Handle one key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys (always available).
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    // 2. Focused control.
    match app.focus {
        Focus::Count => handle_count_key(app, key),
        Focus::Bounds(_) | Focus::Weight(_) => handle_slider_key(app, key),
    }
}

fn handle_count_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if app.count_input.len() < 4 {
                app.count_input.push(c);
            }
        }
        KeyCode::Backspace => {
            app.count_input.pop();
        }
        KeyCode::Enter => app.commit_count(),
        KeyCode::Char('h') | KeyCode::Left => app.step_count(-1),
        KeyCode::Char('l') | KeyCode::Right => app.step_count(1),
        _ => {}
    }
}

fn handle_slider_key(app: &mut AppState, key: KeyEvent) {
    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('h') => app.adjust_focused(-1),
        KeyCode::Char('l') => app.adjust_focused(1),
        KeyCode::Char('H') => app.adjust_focused(-COARSE_STEPS),
        KeyCode::Char('L') => app.adjust_focused(COARSE_STEPS),
        KeyCode::Left => app.adjust_focused(if coarse { -COARSE_STEPS } else { -1 }),
        KeyCode::Right => app.adjust_focused(if coarse { COARSE_STEPS } else { 1 }),
        _ => {}
    }
}
