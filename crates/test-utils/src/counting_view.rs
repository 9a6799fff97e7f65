use std::cell::RefCell;
use std::collections::HashMap;

use stagegate::scheduler::{ConsumedPartitionGroup, PartitionGroupView};

/// A [`PartitionGroupView`] wrapper that counts how often each group's
/// producer state is looked up.
///
/// Cache hits never reach the view, so the counts let tests assert that a
/// group shared by several vertices is evaluated at most once per pass.
#[derive(Debug)]
pub struct CountingGroupView<'a> {
    inner: &'a dyn PartitionGroupView,
    hits: RefCell<HashMap<String, u32>>,
}

impl<'a> CountingGroupView<'a> {
    pub fn new(inner: &'a dyn PartitionGroupView) -> Self {
        Self {
            inner,
            hits: RefCell::new(HashMap::new()),
        }
    }

    /// How many times `group` was looked up through this view.
    pub fn hits(&self, group: &str) -> u32 {
        self.hits.borrow().get(group).copied().unwrap_or(0)
    }

    /// Total lookups across all groups.
    pub fn total_hits(&self) -> u32 {
        self.hits.borrow().values().sum()
    }
}

impl PartitionGroupView for CountingGroupView<'_> {
    fn group(&self, name: &str) -> Option<&ConsumedPartitionGroup> {
        *self.hits.borrow_mut().entry(name.to_string()).or_insert(0) += 1;
        self.inner.group(name)
    }
}
