//! Line-oriented terminal renderer for the interactive browser.

use std::io::Write;
use vecview_browser::{mark_first, ListItem, Renderer};

/// Prints each surface update as a block of lines.
///
/// A terminal cannot repaint a panel in place, so "replace" means printing
/// the new state below the old one. The list is remembered so the active
/// marker can be redrawn when the selection moves.
pub struct TerminalRenderer<W: Write> {
    out: W,
    items: Vec<ListItem>,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            items: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, block: &str) {
        let result = writeln!(self.out, "{}", block).and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn list_block(&self) -> String {
        if self.items.is_empty() {
            return "Collections: (none)".to_string();
        }

        let mut block = String::from("Collections:");
        for item in &self.items {
            let marker = if item.active { '*' } else { ' ' };
            block.push_str(&format!("\n {} {}", marker, item.name));
        }
        block
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_collections(&mut self, items: &[ListItem]) {
        self.items = items.to_vec();
        let block = self.list_block();
        self.write_block(&block);
    }

    fn render_collections_error(&mut self, message: &str) {
        self.items.clear();
        self.write_block(&format!("! {}", message));
    }

    fn mark_active(&mut self, name: &str) {
        mark_first(&mut self.items, name);
        self.write_block(&format!("Active collection: {}", name));
    }

    fn render_content(&mut self, content: &str) {
        self.write_block(content);
    }

    fn render_content_error(&mut self, message: &str) {
        self.write_block(&format!("! {}", message));
    }
}
