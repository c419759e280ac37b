//! Terminal rendering for submissions and history

use std::cell::RefCell;
use std::io::{self, Stderr, Stdout, Write};

use shared::{HistoryItemView, HistoryView, RecommendationView, SubmitUi, BUSY_LABEL};

/// Results go to `out`; busy indicator and alerts go to `err`
pub struct TerminalUi<O: Write, E: Write> {
    out: RefCell<O>,
    err: RefCell<E>,
}

impl TerminalUi<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> TerminalUi<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    /// Write to `out`, reporting failures in the log only
    pub fn print(&self, text: &str) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", text) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }

    fn eprint(&self, text: &str) {
        if let Err(e) = writeln!(self.err.borrow_mut(), "{}", text) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }
}

impl<O: Write, E: Write> SubmitUi for TerminalUi<O, E> {
    fn set_busy(&self, busy: bool) {
        if busy {
            self.eprint(BUSY_LABEL);
        }
    }

    fn alert(&self, message: &str) {
        self.eprint(message);
    }

    fn show_recommendation(&self, view: &RecommendationView) {
        self.print(&view.to_text());
    }
}

impl<O: Write, E: Write> HistoryView for TerminalUi<O, E> {
    fn show(&self, items: &[HistoryItemView]) {
        if items.is_empty() {
            self.print("No history yet.");
            return;
        }
        self.print("History:");
        for item in items {
            self.print(&format!("  {}", item.to_text()));
        }
    }
}
