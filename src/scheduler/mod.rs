// src/scheduler/mod.rs

//! Scheduling state and the input-consumability decision.
//!
//! - [`partition_group`] and [`vertex`] hold the per-group and per-vertex
//!   scheduling state.
//! - [`topology`] owns both and applies producer-completion notifications.
//! - [`view`] is the read-only group-lookup seam the deciders work against.
//! - [`decider`] defines the pluggable consumability contract plus the
//!   per-pass verdict cache.
//! - [`partial_finished`] is the concrete "blocking must finish fully,
//!   pipelined/hybrid needs one finished partition" strategy.
//! - [`pass`] scopes one verdict cache to one batch of candidate vertices.

pub mod decider;
pub mod partial_finished;
pub mod partition_group;
pub mod pass;
pub mod topology;
pub mod vertex;
pub mod view;

pub use decider::{ConsumableStatusCache, InputConsumableDecider, InputConsumableDeciderFactory};
pub use partial_finished::{
    PartialFinishedDeciderFactory, PartialFinishedInputConsumableDecider,
    NUM_FINISHED_PARTITIONS_AS_CONSUMABLE,
};
pub use partition_group::ConsumedPartitionGroup;
pub use pass::SchedulingPass;
pub use topology::SchedulingTopology;
pub use vertex::ExecutionVertex;
pub use view::PartitionGroupView;
