//! Session state shared by the browser components.

use vecview_client::Collection;

/// Everything the browser remembers between events.
///
/// Only [`crate::App`] handlers mutate it.
#[derive(Debug, Default)]
pub struct AppState {
    /// Name of the selected collection. Survives refreshes and base-URL
    /// changes, even when the new list no longer contains it.
    pub(crate) active: Option<String>,

    /// The list as last rendered, in service order
    pub(crate) collections: Vec<Collection>,

    pub(crate) tickets: Tickets,
}

impl AppState {
    pub fn active_collection(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.iter().any(|c| c.name == name)
    }
}

/// Request ids, one sequence shared by every request kind.
///
/// The list surface and the content surface each remember the newest ticket
/// issued for them; a completion carrying an older ticket has been
/// superseded.
#[derive(Debug, Default)]
pub(crate) struct Tickets {
    next: u64,
    latest_list: u64,
    latest_display: u64,
}

impl Tickets {
    fn issue(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    pub(crate) fn issue_list(&mut self) -> u64 {
        self.latest_list = self.issue();
        self.latest_list
    }

    /// Claim the content panel, superseding whatever is in flight for it.
    pub(crate) fn issue_display(&mut self) -> u64 {
        self.latest_display = self.issue();
        self.latest_display
    }

    pub(crate) fn is_current_list(&self, ticket: u64) -> bool {
        ticket == self.latest_list
    }

    pub(crate) fn is_current_display(&self, ticket: u64) -> bool {
        ticket == self.latest_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_monotonic_across_surfaces() {
        let mut tickets = Tickets::default();
        let list = tickets.issue_list();
        let display = tickets.issue_display();
        assert!(display > list);

        let newer_display = tickets.issue_display();
        assert!(!tickets.is_current_display(display));
        assert!(tickets.is_current_display(newer_display));
        assert!(tickets.is_current_list(list));
    }

    #[test]
    fn test_has_collection() {
        let mut state = AppState::default();
        state.collections = vec![Collection::new("a"), Collection::new("b")];
        assert!(state.has_collection("b"));
        assert!(!state.has_collection("c"));
        assert_eq!(state.active_collection(), None);
    }
}
