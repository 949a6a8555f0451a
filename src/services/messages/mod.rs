// Message log service
// Sent messages in order, plus the message currently on screen

#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    history: Vec<String>,
    current: String,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `text` on screen. Non-empty text is also appended to the history;
    /// empty text just clears the screen. Returns whether it was appended.
    pub fn send(&mut self, text: &str) -> bool {
        self.current = text.to_string();
        if text.is_empty() {
            return false;
        }
        self.history.push(text.to_string());
        true
    }

    /// Show an earlier message again without adding it to the history.
    pub fn replay(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(text) => {
                self.current = text.clone();
                true
            }
            None => false,
        }
    }

    /// Remove the selected entry and clear the message on screen,
    /// whichever message that was.
    pub fn delete(&mut self, selected: Option<usize>) -> Option<String> {
        let index = selected.filter(|index| *index < self.history.len())?;
        self.current.clear();
        Some(self.history.remove(index))
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}
