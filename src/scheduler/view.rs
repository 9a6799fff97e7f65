// src/scheduler/view.rs

use std::fmt::Debug;

use crate::scheduler::partition_group::ConsumedPartitionGroup;
use crate::scheduler::topology::SchedulingTopology;

/// Read-only lookup of partition-group state.
///
/// Deciders read group state through this seam rather than through
/// [`SchedulingTopology`] directly, so tests can instrument how often a
/// group's producer state is actually consulted (cache hits never reach the
/// view).
pub trait PartitionGroupView: Debug {
    fn group(&self, name: &str) -> Option<&ConsumedPartitionGroup>;
}

impl PartitionGroupView for SchedulingTopology {
    fn group(&self, name: &str) -> Option<&ConsumedPartitionGroup> {
        SchedulingTopology::group(self, name)
    }
}
