//! UI rendering components

pub mod command_line;
pub mod help;
pub mod layout;
pub mod quiz_panel;
pub mod word_list;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{AppState, Screen};
use crate::quiz::QuizSession;
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, session: &QuizSession, theme: &Theme) {
    let full = frame.area();
    let areas = layout::split(full);

    draw_header(frame, areas.header, session, theme);
    quiz_panel::draw(frame, areas.quiz, state, session, theme);
    word_list::draw(frame, areas.words, &mut state.word_list, session, theme);
    command_line::draw(frame, areas.command_line, &state.command_line, state.focus, theme);

    if state.screen == Screen::Help {
        help::draw(frame, full, theme);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, session: &QuizSession, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " wordquiz ",
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Mode: {}", session.mode().display_name()),
            Style::default().fg(theme.fg_primary),
        ),
        Span::styled(
            format!("  Words: {}", session.words().len()),
            Style::default().fg(theme.fg_secondary),
        ),
        Span::styled(
            format!("  [{}]", session.phase().label()),
            Style::default().fg(theme.fg_muted),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg_tertiary)), area);
}
