//! Selection Summary
//!
//! Snapshot of a bulk-selection checkbox group.

/// Counts taken from the checkboxes at one moment; never kept between events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub total: usize,
    pub checked: usize,
}

impl SelectionSummary {
    pub fn new(total: usize, checked: usize) -> Self {
        Self { total, checked: checked.min(total) }
    }

    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        states.into_iter().fold(Self::default(), |acc, checked| Self {
            total: acc.total + 1,
            checked: acc.checked + usize::from(checked),
        })
    }

    /// Toolbar is visible while this holds
    pub fn any_selected(&self) -> bool {
        self.checked > 0
    }

    pub fn all_selected(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}
