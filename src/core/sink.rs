//! User-facing progress sink.
//!
//! The lifecycle reports progress (hook output, dependency count, config
//! dumps) as it goes, so the lines are visible even if a later step fails.
//! The CLI prints them; tests collect them.

/// Receives progress lines from the lifecycle.
pub trait Sink {
    /// A single progress line.
    fn info(&mut self, message: &str);

    /// A titled block of multi-line text (hook output, config dumps).
    fn block(&mut self, title: &str, body: &str);
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct Collect {
    pub lines: Vec<String>,
}

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any collected line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Sink for Collect {
    fn info(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn block(&mut self, title: &str, body: &str) {
        self.lines.push(title.to_string());
        self.lines.extend(body.lines().map(str::to_string));
    }
}
