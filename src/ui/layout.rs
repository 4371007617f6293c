//! Layout utilities and common components

use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the quiz screen
pub struct ScreenLayout {
    pub header: Rect,
    pub quiz: Rect,
    pub words: Rect,
    pub command_line: Rect,
}

/// Split the frame into header, quiz panel, word list and command line
pub fn split(area: Rect) -> ScreenLayout {
    let [header, body, command_line] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .areas(area);

    // Narrow terminals drop the word list
    let (quiz, words) = if body.width >= 60 {
        let [quiz, words] =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(28)]).areas(body);
        (quiz, words)
    } else {
        (body, Rect::new(body.x, body.y, 0, 0))
    };

    ScreenLayout { header, quiz, words, command_line }
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
