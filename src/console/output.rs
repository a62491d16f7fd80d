use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Destination for everything a game prints.
pub trait Output {
    /// Emit normal text. No newline is appended.
    fn print(&mut self, text: &str);

    /// Emit error text. No newline is appended.
    fn error(&mut self, text: &str);
}

/// Writes to stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn error(&mut self, text: &str) {
        let _ = std::io::stderr().lock().write_all(text.as_bytes());
    }
}

/// Buffers text in memory. Clones share the same buffers, so a handle kept
/// outside the game sees everything the game printed.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    printed: Rc<RefCell<String>>,
    errors: Rc<RefCell<String>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn printed(&self) -> String {
        self.printed.borrow().clone()
    }

    pub fn errors(&self) -> String {
        self.errors.borrow().clone()
    }
}

impl Output for CapturedOutput {
    fn print(&mut self, text: &str) {
        self.printed.borrow_mut().push_str(text);
    }

    fn error(&mut self, text: &str) {
        self.errors.borrow_mut().push_str(text);
    }
}
