//! Command line UI component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, Focus};
use crate::theme::Theme;

/// Draw the command line at the bottom of the screen
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, focus: Focus, theme: &Theme) {
    let line = if state.active {
        let text = format!(":{}", state.input.text);
        let style = Style::default().fg(theme.accent_primary);
        build_line_with_cursor(&text, state.input.cursor + 1, style, theme) // +1 for prefix
    } else if let Some(ref msg) = state.message {
        let style = if state.is_error {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        Line::from(Span::styled(msg.clone(), style))
    } else {
        Line::from(Span::styled(hint(focus), Style::default().fg(theme.fg_muted)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Hint shown when there is no message
fn hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Answer => "Enter submit  Esc shortcuts  Ctrl-R reveal  Ctrl-N mode  Ctrl-C quit",
        Focus::Normal => "i answer  a add  d delete  m mode  r reveal  : command  ? help",
        Focus::Command => "",
    }
}

/// Build a line with a visible cursor
pub fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.cursor).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}
