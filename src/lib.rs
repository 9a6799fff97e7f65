// src/lib.rs

//! Input-consumability deciding for a dataflow stage scheduler.
//!
//! A downstream execution vertex may only be deployed once its inputs are
//! consumable. This crate owns that predicate:
//!
//! - [`scheduler::ConsumedPartitionGroup`] describes one logical input: a set
//!   of upstream producer partitions sharing a shuffle kind.
//! - [`scheduler::InputConsumableDecider`] is the pluggable per-vertex /
//!   per-group consumability query.
//! - [`scheduler::PartialFinishedInputConsumableDecider`] implements the
//!   policy "blocking inputs must be fully finished; pipelined/hybrid inputs
//!   need a minimum number of finished partitions".
//! - [`scheduler::SchedulingPass`] scopes the per-pass verdict cache to one
//!   batch of candidate vertices.
//!
//! The surrounding job description is loaded from TOML via [`config`].

pub mod config;
pub mod errors;
pub mod logging;
pub mod scheduler;
pub mod types;

pub use scheduler::{
    ConsumableStatusCache, ConsumedPartitionGroup, ExecutionVertex, InputConsumableDecider,
    InputConsumableDeciderFactory, PartialFinishedDeciderFactory,
    PartialFinishedInputConsumableDecider, PartitionGroupView, SchedulingPass, SchedulingTopology,
};
pub use types::{ExecutionState, GroupName, ShuffleKind, VertexName};
