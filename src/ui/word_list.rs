//! Side panel listing every word, with the one being asked highlighted

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::WordListState;
use crate::quiz::QuizSession;
use crate::theme::Theme;

/// Draw the word list
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    list: &mut WordListState,
    session: &QuizSession,
    theme: &Theme,
) {
    if area.width == 0 {
        return;
    }

    let words = session.words();
    let block = Block::default()
        .title(format!(" Words ({}) ", words.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    list.visible_height = inner.height as usize;
    // Keep the offset valid after deletions
    let max_offset = words.len().saturating_sub(list.visible_height);
    list.scroll_offset = list.scroll_offset.min(max_offset);

    let current = session.current_word();
    let lines: Vec<Line> = words
        .iter()
        .enumerate()
        .skip(list.scroll_offset)
        .take(list.visible_height)
        .map(|(i, word)| {
            // Only the first of several equal entries is marked
            let is_current = Some(word.as_str()) == current && first_index(words, word) == i;
            let (prefix, style) = if is_current {
                (
                    "\u{25B6} ", // ▶
                    Style::default()
                        .fg(theme.accent_primary)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.fg_secondary))
            };
            Line::from(Span::styled(format!("{}{}", prefix, word), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn first_index(words: &[String], word: &str) -> usize {
    words.iter().position(|w| w == word).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::quiz::Selector;
    use crate::words::{IterationMode, MemoryWordStore};

    #[test]
    fn current_word_row_uses_selection_background() {
        let mut store = MemoryWordStore::with_words(["apple", "pear"]);
        store.mode = IterationMode::Sequential;
        let mut session = QuizSession::open(Box::new(store), Selector::default()).unwrap();
        session.start();
        let mut list = WordListState::default();
        let theme = Theme::default();

        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, &mut list, &session, &theme)
            })
            .unwrap();

        // Inside the border: row 1 is "apple" (current), row 2 is "pear"
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(3, 1)].symbol(), "a");
        assert_eq!(buffer[(3, 1)].bg, theme.selection);
        assert_ne!(buffer[(3, 2)].bg, theme.selection);
    }
}
