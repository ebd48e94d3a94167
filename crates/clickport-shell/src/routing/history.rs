//! Session history with browser back/forward semantics.

use super::Location;

/// Ordered list of visited locations and a cursor into it.
///
/// Never empty: it is seeded with the initial location and entries are only
/// ever added or overwritten.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The active location.
    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Navigate to `location`, discarding any forward entries.
    ///
    /// Pushing the current location again is a no-op. Returns whether the
    /// history changed.
    pub fn push(&mut self, location: Location) -> bool {
        if *self.current() == location {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
        true
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of entries, at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::root())
    }
}
