// src/scheduler/pass.rs

//! One scheduling pass over a batch of candidate vertices.

use std::collections::HashSet;

use tracing::debug;

use crate::scheduler::decider::{ConsumableStatusCache, InputConsumableDecider};
use crate::scheduler::topology::SchedulingTopology;
use crate::scheduler::vertex::ExecutionVertex;
use crate::scheduler::view::PartitionGroupView;
use crate::types::VertexName;

/// Scopes one [`ConsumableStatusCache`] to one evaluation cycle over a batch
/// of candidate vertices.
///
/// The coordinator creates a fresh pass per batch; dropping the pass drops
/// the cache, so verdicts can never leak into a later pass where the
/// underlying unfinished counts have moved on.
#[derive(Debug)]
pub struct SchedulingPass<'a> {
    decider: &'a dyn InputConsumableDecider,
    vertices_to_deploy: HashSet<VertexName>,
    cache: ConsumableStatusCache,
}

impl<'a> SchedulingPass<'a> {
    /// Start a pass with a fresh cache.
    ///
    /// `vertices_to_deploy` is the set of vertices being deployed in this
    /// pass, made available to the decider per the shared contract.
    pub fn new(
        decider: &'a dyn InputConsumableDecider,
        vertices_to_deploy: HashSet<VertexName>,
    ) -> Self {
        Self {
            decider,
            vertices_to_deploy,
            cache: ConsumableStatusCache::new(),
        }
    }

    /// Whether `vertex`'s inputs permit deployment, memoizing group verdicts
    /// in this pass's cache.
    pub fn is_vertex_consumable(
        &mut self,
        vertex: &ExecutionVertex,
        groups: &dyn PartitionGroupView,
    ) -> bool {
        self.decider
            .is_input_consumable(vertex, &self.vertices_to_deploy, groups, &mut self.cache)
    }

    /// Evaluate a batch of candidates in order and return the names of those
    /// whose inputs are consumable.
    ///
    /// Unknown candidate names are skipped; the caller draws candidates from
    /// the same topology, so a miss is a wiring bug surfaced by the decider's
    /// own handling rather than a reason to abort the batch.
    pub fn consumable_vertices(
        &mut self,
        topology: &SchedulingTopology,
        candidates: &[VertexName],
    ) -> Vec<VertexName> {
        let mut consumable = Vec::new();

        for name in candidates {
            let Some(vertex) = topology.vertex(name) else {
                debug!(vertex = %name, "candidate not present in topology; skipping");
                continue;
            };
            if self.is_vertex_consumable(vertex, topology) {
                consumable.push(name.clone());
            }
        }

        consumable
    }

    /// Read-only view of this pass's cache, for diagnostics and tests.
    pub fn cache(&self) -> &ConsumableStatusCache {
        &self.cache
    }
}
