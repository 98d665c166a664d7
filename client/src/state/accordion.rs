//! Single-open accordion group.
//!
//! The group, not the rows, owns the open index, so "at most one row open"
//! holds by construction.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    open: Option<usize>,
}

impl AccordionState {
    /// A closed group of `len` rows.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Activate row `index`: closes it if it is the open one, otherwise opens
    /// it and closes whichever row was open. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open_index() == Some(index)
    }

    #[must_use]
    pub const fn open_index(&self) -> Option<usize> {
        self.open
    }
}
