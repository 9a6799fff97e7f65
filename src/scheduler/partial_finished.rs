// src/scheduler/partial_finished.rs

//! The partial-finished consumability strategy.
//!
//! The input is considered consumable:
//!
//! - for pipelined/hybrid input: when partial producer partitions are
//!   finished;
//! - for blocking input: when all producer partitions are finished.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::scheduler::decider::{
    ConsumableStatusCache, InputConsumableDecider, InputConsumableDeciderFactory,
};
use crate::scheduler::partition_group::ConsumedPartitionGroup;
use crate::scheduler::topology::SchedulingTopology;
use crate::scheduler::vertex::ExecutionVertex;
use crate::scheduler::view::PartitionGroupView;
use crate::types::{ExecutionState, VertexName};

/// Minimum number of finished producer partitions for a pipelined/hybrid
/// group to become consumable.
pub const NUM_FINISHED_PARTITIONS_AS_CONSUMABLE: u32 = 1;

/// Stateless decider implementing the partial-finished policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartialFinishedInputConsumableDecider;

impl PartialFinishedInputConsumableDecider {
    pub fn new() -> Self {
        Self
    }
}

impl InputConsumableDecider for PartialFinishedInputConsumableDecider {
    fn is_input_consumable(
        &self,
        vertex: &ExecutionVertex,
        _vertices_to_deploy: &HashSet<VertexName>,
        groups: &dyn PartitionGroupView,
        cache: &mut ConsumableStatusCache,
    ) -> bool {
        for group_name in vertex.consumed_groups() {
            let consumable = cache.check_or_compute(group_name, || {
                match groups.group(group_name) {
                    Some(group) => {
                        let verdict = self.is_consumable_based_on_finished_producers(group);
                        debug!(
                            vertex = %vertex.name(),
                            group = %group_name,
                            verdict,
                            finished = group.finished_partitions(),
                            total = group.size(),
                            "computed group consumability"
                        );
                        verdict
                    }
                    None => {
                        // A vertex referencing a group the view cannot resolve
                        // is a wiring bug, not a runtime condition.
                        debug_assert!(false, "consumed group '{group_name}' missing from view");
                        warn!(
                            vertex = %vertex.name(),
                            group = %group_name,
                            "consumed group missing from view"
                        );
                        false
                    }
                }
            });

            // Groups after the first non-consumable one are neither computed
            // nor cached in this pass; callers querying them later compute
            // them then.
            if !consumable {
                return false;
            }
        }
        true
    }

    fn is_consumable_based_on_finished_producers(&self, group: &ConsumedPartitionGroup) -> bool {
        if group.shuffle_kind().is_blocking() {
            group.unfinished_partitions() == 0
        } else {
            group.finished_partitions() >= NUM_FINISHED_PARTITIONS_AS_CONSUMABLE
        }
    }
}

/// Factory for [`PartialFinishedInputConsumableDecider`].
///
/// The strategy needs no per-topology state, so construction ignores the
/// topology and both retrievers and always returns a fresh stateless
/// instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartialFinishedDeciderFactory;

impl PartialFinishedDeciderFactory {
    pub fn new() -> Self {
        Self
    }
}

impl InputConsumableDeciderFactory for PartialFinishedDeciderFactory {
    fn create_instance(
        &self,
        _topology: &SchedulingTopology,
        _scheduled_retriever: &dyn Fn(&str) -> bool,
        _execution_state_retriever: &dyn Fn(&str) -> ExecutionState,
    ) -> Box<dyn InputConsumableDecider> {
        Box::new(PartialFinishedInputConsumableDecider::new())
    }
}
