/// The chat room contract: what callers of the chat kind program against.
pub trait Chat: Send {
    /// Appends a line to the room transcript.
    fn post(&mut self, author: &str, line: &str);

    /// The transcript so far, oldest first.
    fn history(&self) -> &[String];
}

/// In-memory chat room backing the [`Chat`] contract.
#[derive(Debug, Default)]
pub struct ChatServer {
    transcript: Vec<String>,
}

impl ChatServer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Chat for ChatServer {
    fn post(&mut self, author: &str, line: &str) {
        self.transcript.push(format!("{}: {}", author, line));
    }

    fn history(&self) -> &[String] {
        &self.transcript
    }
}
