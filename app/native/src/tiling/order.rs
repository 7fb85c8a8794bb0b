//! Ordered window store backing the tile layout.
//!
//! The position of a window decides which area it lives in: the first
//! `master_count` entries form the master area, the rest the stack. Every
//! mutation reports whether the ordering actually changed so callers can skip
//! a reflow for structural no-ops.

use std::collections::{HashMap, HashSet};

use super::window::{Window, WindowId};

/// An ordered collection of windows with unique membership.
#[derive(Debug, Clone, Default)]
pub struct WindowOrder {
    windows: Vec<Window>,
    positions: HashMap<WindowId, usize>,
}

impl WindowOrder {
    /// Creates an empty ordering.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Number of windows in the ordering.
    #[must_use]
    pub fn len(&self) -> usize { self.windows.len() }

    /// Returns `true` when no window is present.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.windows.is_empty() }

    /// Returns whether the window is part of the ordering.
    #[must_use]
    pub fn contains(&self, id: WindowId) -> bool { self.positions.contains_key(&id) }

    /// Returns the index of the window, if present.
    #[must_use]
    pub fn position(&self, id: WindowId) -> Option<usize> { self.positions.get(&id).copied() }

    /// Returns the head of the ordering.
    #[must_use]
    pub fn head(&self) -> Option<&Window> { self.windows.first() }

    /// Returns all windows in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Window] { &self.windows }

    /// Iterates over the windows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Window> { self.windows.iter() }

    /// Iterates over the window identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = WindowId> + '_ { self.windows.iter().map(|w| w.id) }

    /// Returns up to the first `n` windows.
    #[must_use]
    pub fn take(&self, n: usize) -> &[Window] { &self.windows[..n.min(self.windows.len())] }

    /// Returns the windows after the first `n`.
    #[must_use]
    pub fn skip(&self, n: usize) -> &[Window] { &self.windows[n.min(self.windows.len())..] }

    /// Inserts a window at the head of the ordering.
    ///
    /// Returns `false` if the window is already present; its position is left untouched.
    pub fn insert_head(&mut self, window: Window) -> bool {
        if self.contains(window.id) {
            return false;
        }
        self.windows.insert(0, window);
        self.reindex_from(0);
        true
    }

    /// Removes a window. Returns `false` if it was not present.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let Some(index) = self.positions.remove(&id) else {
            return false;
        };
        self.windows.remove(index);
        self.reindex_from(index);
        true
    }

    /// Swaps a window with its successor.
    ///
    /// No-op when the window is absent, already last, or the ordering has
    /// fewer than two members.
    pub fn move_to_next(&mut self, id: WindowId) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.windows.len() => {
                self.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Swaps a window with its predecessor.
    ///
    /// No-op when the window is absent, already the head, or the ordering has
    /// fewer than two members.
    pub fn move_to_previous(&mut self, id: WindowId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.swap(index, index - 1);
                true
            }
            _ => false,
        }
    }

    /// Moves a window to the head, keeping the relative order of the others.
    ///
    /// No-op when the window is absent or already the head.
    pub fn promote_to_head(&mut self, id: WindowId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                let window = self.windows.remove(index);
                self.windows.insert(0, window);
                self.reindex_from(0);
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `windows` has exactly the same members, ignoring order.
    #[must_use]
    pub fn same_members(&self, windows: &[Window]) -> bool {
        let other: HashSet<WindowId> = windows.iter().map(|w| w.id).collect();
        other.len() == self.positions.len() && other.iter().all(|id| self.contains(*id))
    }

    /// Copies the `counted` flag of every listed member onto the stored window.
    ///
    /// Order and membership are untouched; unknown windows are ignored and
    /// duplicates keep their first occurrence. Returns how many flags changed.
    pub fn refresh_flags(&mut self, windows: &[Window]) -> usize {
        let mut seen = HashSet::new();
        let mut changed = 0;
        for window in windows.iter().filter(|w| seen.insert(w.id)) {
            let Some(&index) = self.positions.get(&window.id) else { continue };
            let stored = &mut self.windows[index];
            if stored.counted != window.counted {
                stored.counted = window.counted;
                changed += 1;
            }
        }
        changed
    }

    /// Replaces the whole ordering with `windows`, in the given order.
    ///
    /// Duplicate entries keep their first occurrence. Returns `true` when the
    /// set of members changed; a pure reordering returns `false`.
    pub fn replace_all(&mut self, windows: impl IntoIterator<Item = Window>) -> bool {
        let mut seen = HashSet::new();
        let replacement: Vec<Window> = windows.into_iter().filter(|w| seen.insert(w.id)).collect();

        let changed = !self.same_members(&replacement);
        self.windows = replacement;
        self.positions.clear();
        self.reindex_from(0);
        changed
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.windows.swap(a, b);
        self.positions.insert(self.windows[a].id, a);
        self.positions.insert(self.windows[b].id, b);
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, window) in self.windows.iter().enumerate().skip(start) {
            self.positions.insert(window.id, index);
        }
    }
}

impl<'a> IntoIterator for &'a WindowOrder {
    type IntoIter = std::slice::Iter<'a, Window>;
    type Item = &'a Window;

    fn into_iter(self) -> Self::IntoIter { self.windows.iter() }
}

// ============================================================================
// Tests
// ============================================================================
