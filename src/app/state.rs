//! Application state definitions

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Quiz,
    Help,
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing an answer
    #[default]
    Answer,
    /// Single-key shortcuts
    Normal,
    /// Typing a : command
    Command,
}

/// A single-line text buffer with a character-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    /// Current text
    pub text: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl LineInput {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.text.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Insert a string at cursor
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replace the whole text, cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.move_end();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the buffer empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

/// State for the command line at the bottom of the screen
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Whether a : command is being typed
    pub active: bool,
    /// Input buffer
    pub input: LineInput,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 200;

    /// Start command mode, optionally pre-filled
    pub fn enter(&mut self, prefill: &str) {
        self.active = true;
        self.input.clear();
        self.input.insert_str(prefill);
        self.message = None;
        self.history_index = None;
    }

    /// Leave command mode
    pub fn exit(&mut self) {
        self.active = false;
        self.input.clear();
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Add to history
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => {
                self.history_index = Some(self.history.len() - 1);
            }
            Some(i) if i > 0 => {
                self.history_index = Some(i - 1);
            }
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.input.set(self.history[i].clone());
        }
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        if let Some(i) = self.history_index {
            if i + 1 < self.history.len() {
                self.history_index = Some(i + 1);
                self.input.set(self.history[i + 1].clone());
            } else {
                self.history_index = None;
                self.input.clear();
            }
        }
    }
}

/// Scroll state for the word list panel
#[derive(Debug, Clone, Default)]
pub struct WordListState {
    /// First visible row
    pub scroll_offset: usize,
    /// Visible height in rows (updated on render)
    pub visible_height: usize,
}

impl WordListState {
    /// Scroll so that `index` is on screen
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        }
        if self.visible_height > 0 && index >= self.scroll_offset + self.visible_height {
            self.scroll_offset = index + 1 - self.visible_height;
        }
    }

    pub fn scroll_down(&mut self, total: usize) {
        if self.scroll_offset + self.visible_height < total {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

/// Full application state (the quiz itself lives in the controller)
#[derive(Debug, Default)]
pub struct AppState {
    pub screen: Screen,
    pub focus: Focus,
    /// Answer being typed
    pub answer: LineInput,
    pub command_line: CommandLineState,
    pub word_list: WordListState,
}
