//! Display surfaces of the browser.

/// One row of the collection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub name: String,
    pub active: bool,
}

/// Put the active marker on the first row named `name` and clear it
/// everywhere else.
///
/// A service may list the same name twice; only one row is ever marked.
pub fn mark_first(items: &mut [ListItem], name: &str) {
    let mut marked = false;
    for item in items.iter_mut() {
        item.active = !marked && item.name == name;
        marked |= item.active;
    }
}

/// Sink for everything the browser shows.
///
/// Two surfaces: the collection list (with its active marker) and the single
/// content panel shared by documents, search results and inline errors.
/// Every call replaces what the surface showed before.
pub trait Renderer {
    /// Replace the collection list.
    fn render_collections(&mut self, items: &[ListItem]);

    /// Replace the collection list with an inline error.
    fn render_collections_error(&mut self, message: &str);

    /// Move the active marker to `name`, clearing it everywhere else.
    fn mark_active(&mut self, name: &str);

    /// Replace the content panel with pretty-printed JSON.
    fn render_content(&mut self, content: &str);

    /// Replace the content panel with an inline error.
    fn render_content_error(&mut self, message: &str);
}

/// What the collection list currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListSurface {
    #[default]
    Empty,
    Items(Vec<ListItem>),
    Error(String),
}

/// What the content panel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplaySurface {
    #[default]
    Empty,
    Content(String),
    Error(String),
}

/// Headless renderer that keeps the latest state of each surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub list: ListSurface,
    pub display: DisplaySurface,

    /// Number of writes to the content panel
    pub display_writes: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered rows, empty when the list shows an error.
    pub fn items(&self) -> &[ListItem] {
        match &self.list {
            ListSurface::Items(items) => items,
            _ => &[],
        }
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items().iter().map(|item| item.name.as_str()).collect()
    }

    /// Names of the rows carrying the active marker.
    pub fn active_items(&self) -> Vec<&str> {
        self.items()
            .iter()
            .filter(|item| item.active)
            .map(|item| item.name.as_str())
            .collect()
    }

    /// Text of the content panel, content or error alike.
    pub fn display_text(&self) -> Option<&str> {
        match &self.display {
            DisplaySurface::Empty => None,
            DisplaySurface::Content(text) | DisplaySurface::Error(text) => Some(text),
        }
    }

    pub fn display_error(&self) -> Option<&str> {
        match &self.display {
            DisplaySurface::Error(text) => Some(text),
            _ => None,
        }
    }

    pub fn list_error(&self) -> Option<&str> {
        match &self.list {
            ListSurface::Error(text) => Some(text),
            _ => None,
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render_collections(&mut self, items: &[ListItem]) {
        self.list = ListSurface::Items(items.to_vec());
    }

    fn render_collections_error(&mut self, message: &str) {
        self.list = ListSurface::Error(message.to_string());
    }

    fn mark_active(&mut self, name: &str) {
        if let ListSurface::Items(items) = &mut self.list {
            mark_first(items, name);
        }
    }

    fn render_content(&mut self, content: &str) {
        self.display = DisplaySurface::Content(content.to_string());
        self.display_writes += 1;
    }

    fn render_content_error(&mut self, message: &str) {
        self.display = DisplaySurface::Error(message.to_string());
        self.display_writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, active: bool) -> ListItem {
        ListItem {
            name: name.to_string(),
            active,
        }
    }

    #[test]
    fn test_mark_active_moves_marker() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_collections(&[item("a", true), item("b", false), item("c", false)]);

        renderer.mark_active("c");
        assert_eq!(renderer.active_items(), vec!["c"]);

        renderer.mark_active("missing");
        assert!(renderer.active_items().is_empty());
    }

    #[test]
    fn test_duplicate_names_get_one_marker() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_collections(&[item("a", false), item("a", false), item("b", false)]);

        renderer.mark_active("a");
        assert_eq!(renderer.active_items(), vec!["a"]);
        assert!(renderer.items()[0].active);
        assert!(!renderer.items()[1].active);
    }

    #[test]
    fn test_error_replaces_list() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_collections(&[item("a", false)]);
        renderer.render_collections_error("Error fetching collections: boom");

        assert!(renderer.items().is_empty());
        assert_eq!(renderer.list_error(), Some("Error fetching collections: boom"));
    }

    #[test]
    fn test_content_panel_is_replaced() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_content("[1]");
        renderer.render_content_error("bad");
        renderer.render_content("[2]");

        assert_eq!(renderer.display, DisplaySurface::Content("[2]".to_string()));
        assert_eq!(renderer.display_error(), None);
        assert_eq!(renderer.display_writes, 3);
    }
}
