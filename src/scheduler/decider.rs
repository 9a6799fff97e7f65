// src/scheduler/decider.rs

//! The pluggable input-consumability contract and the per-pass verdict cache.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::scheduler::partition_group::ConsumedPartitionGroup;
use crate::scheduler::topology::SchedulingTopology;
use crate::scheduler::vertex::ExecutionVertex;
use crate::scheduler::view::PartitionGroupView;
use crate::types::{ExecutionState, GroupName, VertexName};

/// Per-pass memo of group verdicts.
///
/// Created fresh at the start of one scheduling pass over a batch of
/// candidate vertices and discarded at the end of that pass. Caching across
/// passes is unsound: unfinished counts change between passes, so a stale
/// verdict could deploy a vertex whose input is not consumable. Within one
/// pass a written verdict is never overwritten, even if the underlying count
/// changes mid-pass.
///
/// Not thread-safe; the cache lives on the single-threaded coordination loop.
#[derive(Debug, Default)]
pub struct ConsumableStatusCache {
    verdicts: HashMap<GroupName, bool>,
}

impl ConsumableStatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached verdict for `group`, computing and storing it via
    /// `compute` on a miss.
    ///
    /// `compute` runs at most once per group per pass.
    pub fn check_or_compute(&mut self, group: &str, compute: impl FnOnce() -> bool) -> bool {
        if let Some(&verdict) = self.verdicts.get(group) {
            return verdict;
        }
        let verdict = compute();
        self.verdicts.insert(group.to_string(), verdict);
        verdict
    }

    /// Cached verdict for `group`, if one was computed in this pass.
    pub fn verdict(&self, group: &str) -> Option<bool> {
        self.verdicts.get(group).copied()
    }

    /// Number of groups with a cached verdict.
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

/// Decides whether a vertex's inputs permit deployment.
///
/// One implementation exists per shuffle policy; the concrete strategy is
/// selected at job-graph build time through
/// [`InputConsumableDeciderFactory`]. Implementations are stateless: all
/// mutable state lives in the caller-supplied cache, which keeps deciders
/// reentrant and trivially testable.
pub trait InputConsumableDecider: Debug {
    /// True iff every partition group consumed by `vertex` is consumable.
    ///
    /// `vertices_to_deploy` is the set of vertices being deployed in the
    /// current pass; it is part of the shared contract even though not every
    /// strategy consults it. `cache` is shared across calls within one pass
    /// and is populated with any newly computed group verdicts.
    fn is_input_consumable(
        &self,
        vertex: &ExecutionVertex,
        vertices_to_deploy: &HashSet<VertexName>,
        groups: &dyn PartitionGroupView,
        cache: &mut ConsumableStatusCache,
    ) -> bool;

    /// The per-group policy predicate: pure, side-effect free, callable
    /// independently of any cache (e.g. for diagnostics).
    fn is_consumable_based_on_finished_producers(&self, group: &ConsumedPartitionGroup) -> bool;
}

/// Shared factory contract used to select among decider strategies per job
/// configuration.
///
/// The topology and the two per-vertex retrievers are required by some
/// strategies in this interface family; stateless strategies ignore them.
pub trait InputConsumableDeciderFactory {
    fn create_instance(
        &self,
        topology: &SchedulingTopology,
        scheduled_retriever: &dyn Fn(&str) -> bool,
        execution_state_retriever: &dyn Fn(&str) -> ExecutionState,
    ) -> Box<dyn InputConsumableDecider>;
}
