//! Quiz panel: the word being asked, the answer line and feedback

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::command_line::build_line_with_cursor;
use crate::app::state::{AppState, Focus};
use crate::quiz::{Phase, QuizRound, QuizSession, Tone};
use crate::theme::Theme;

/// Colour for a feedback line
pub fn tone_color(tone: Tone, theme: &Theme) -> Color {
    match tone {
        Tone::Correct => theme.success,
        Tone::Incorrect => theme.error,
        Tone::Notice => theme.fg_muted,
        Tone::Error => theme.warning,
    }
}

/// Draw the quiz panel
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, session: &QuizSession, theme: &Theme) {
    let focused = state.focus == Focus::Answer;
    let border = if focused { theme.border_focused } else { theme.border };

    let title = match session.round() {
        Some(round) => format!(" Round {} ", round.id),
        None => " Quiz ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    match session.round() {
        Some(round) => push_round(&mut lines, round, state, focused, theme),
        None => push_empty(&mut lines, theme),
    }

    if let Some(feedback) = session.feedback() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            feedback.message.clone(),
            Style::default().fg(tone_color(feedback.tone, theme)).add_modifier(Modifier::BOLD),
        )));
    }

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

fn push_empty(lines: &mut Vec<Line<'static>>, theme: &Theme) {
    lines.push(Line::from(Span::styled(
        "Your word list is empty.",
        Style::default().fg(theme.fg_primary),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc then a, or type :add <word>",
        Style::default().fg(theme.fg_muted),
    )));
}

fn push_round(
    lines: &mut Vec<Line<'static>>,
    round: &QuizRound,
    state: &AppState,
    focused: bool,
    theme: &Theme,
) {
    lines.push(Line::from(Span::styled(
        "Translate this word:",
        Style::default().fg(theme.fg_muted),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        round.word.clone(),
        Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
    )));
    if let Some(translations) = round.translations.as_ref().filter(|t| !t.synonyms.is_empty()) {
        lines.push(Line::from(Span::styled(
            format!("({})", translations.synonyms.join(", ")),
            Style::default().fg(theme.fg_muted).add_modifier(Modifier::DIM),
        )));
    }
    lines.push(Line::from(""));

    match round.phase {
        Phase::Fetching => {
            lines.push(Line::from(Span::styled(
                "Looking up translations...",
                Style::default().fg(theme.info),
            )));
        }
        Phase::AwaitingAnswer => {
            let style = Style::default().fg(theme.fg_secondary);
            if focused {
                lines.push(build_line_with_cursor(
                    &format!("> {}", state.answer.text),
                    state.answer.cursor + 2, // +2 for prompt
                    style,
                    theme,
                ));
            } else {
                lines.push(Line::from(Span::styled(format!("> {}", state.answer.text), style)));
            }
        }
        Phase::Judged => {
            let answer = round.answer.clone().unwrap_or_default();
            lines.push(Line::from(Span::styled(
                format!("> {}", answer),
                Style::default().fg(theme.fg_muted),
            )));
        }
        Phase::Idle => {}
    }

    if round.revealed {
        if let Some(translations) = &round.translations {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Translation: {}", translations.authoritative),
                Style::default().fg(theme.warning),
            )));
        }
    }
}
