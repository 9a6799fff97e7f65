// src/scheduler/partition_group.rs

//! Partition-group scheduling state.

use tracing::{debug, warn};

use crate::types::{GroupName, ShuffleKind};

/// A set of producer partitions consumed jointly by downstream vertices as a
/// single logical input, sharing one shuffle kind.
///
/// The group is created when the job graph is built, with every partition
/// unfinished. The runtime's completion-event pipeline drives
/// [`partition_finished`](Self::partition_finished) as producers finish; the
/// unfinished count never increases within one scheduling epoch. Only a
/// failover [`reset`](Self::reset) returns the group to fully unfinished.
#[derive(Debug, Clone)]
pub struct ConsumedPartitionGroup {
    name: GroupName,
    shuffle: ShuffleKind,
    total: u32,
    unfinished: u32,
}

impl ConsumedPartitionGroup {
    /// Create a fresh group with all `total` partitions unfinished.
    ///
    /// `total` must be >= 1; the job-file validation enforces this for
    /// config-built groups.
    pub fn new(name: impl Into<GroupName>, shuffle: ShuffleKind, total: u32) -> Self {
        debug_assert!(total >= 1, "partition group must have at least one partition");
        Self {
            name: name.into(),
            shuffle,
            total,
            unfinished: total,
        }
    }

    /// Create a group with some partitions already finished.
    ///
    /// Mostly useful in tests; `unfinished` must not exceed `total`.
    pub fn with_unfinished(
        name: impl Into<GroupName>,
        shuffle: ShuffleKind,
        total: u32,
        unfinished: u32,
    ) -> Self {
        debug_assert!(unfinished <= total, "unfinished count cannot exceed total");
        Self {
            name: name.into(),
            shuffle,
            total,
            unfinished,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shuffle kind shared by every partition in the group.
    pub fn shuffle_kind(&self) -> ShuffleKind {
        self.shuffle
    }

    /// Total number of producer partitions in the group.
    pub fn size(&self) -> u32 {
        self.total
    }

    /// Number of producer partitions that have not yet finished.
    pub fn unfinished_partitions(&self) -> u32 {
        self.unfinished
    }

    /// Number of producer partitions that have finished.
    pub fn finished_partitions(&self) -> u32 {
        self.total - self.unfinished
    }

    /// Record that one producer partition of this group finished.
    ///
    /// A finish notification for an already fully finished group is ignored;
    /// producers never un-finish, so a duplicate event carries no information.
    pub fn partition_finished(&mut self) {
        if self.unfinished == 0 {
            warn!(
                group = %self.name,
                "partition finish notification for fully finished group; ignoring"
            );
            return;
        }
        self.unfinished -= 1;
        debug!(
            group = %self.name,
            unfinished = self.unfinished,
            total = self.total,
            "producer partition finished"
        );
    }

    /// Failover reset: return the group to fully unfinished.
    pub fn reset(&mut self) {
        debug!(group = %self.name, "resetting group to fully unfinished");
        self.unfinished = self.total;
    }
}
