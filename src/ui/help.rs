//! Help overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("Enter", "Submit answer"),
    ("Esc", "Leave the answer line for shortcuts"),
    ("i", "Back to the answer line"),
    ("a", "Add a word"),
    ("d", "Delete the current word"),
    ("m / Ctrl-N", "Next iteration mode"),
    ("r / Ctrl-R", "Reveal the translation"),
    ("j / k", "Scroll the word list"),
    (":", "Command line"),
    ("Ctrl-C", "Quit"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":add <word>", "Add a word"),
    (":delete [word]", "Delete a word (default: current)"),
    (":mode <name>", "random, sequential or alphabetical"),
    (":reveal", "Reveal the translation"),
    (":q", "Quit"),
];

/// Draw the help overlay
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let heading = Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Keys", heading))];
    lines.extend(KEYS.iter().map(|(k, d)| entry(k, d, theme)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Commands", heading)));
    lines.extend(COMMANDS.iter().map(|(k, d)| entry(k, d, theme)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn entry(key: &'static str, description: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", key), Style::default().fg(theme.info)),
        Span::styled(description, Style::default().fg(theme.fg_primary)),
    ])
}
