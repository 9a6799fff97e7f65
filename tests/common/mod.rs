#![allow(dead_code)]

//! Shared helpers for integration tests.

use stagegate::scheduler::SchedulingTopology;
use stagegate::types::ShuffleKind;
use stagegate_test_utils::builders::JobFileBuilder;

pub use stagegate_test_utils::init_tracing;

/// A small two-stage job used by several tests:
///
/// - `map-1` produces `block-out` (blocking, 2 partitions)
/// - `map-2` produces `hyb-out` (hybrid, 3 partitions)
/// - `red-1` consumes `block-out`
/// - `red-2` consumes `hyb-out`
/// - `join` consumes `block-out` then `hyb-out`
pub fn two_stage_topology() -> SchedulingTopology {
    JobFileBuilder::new()
        .with_source_vertex("map-1")
        .with_source_vertex("map-2")
        .with_group("block-out", ShuffleKind::Blocking, 2, "map-1")
        .with_group("hyb-out", ShuffleKind::Hybrid, 3, "map-2")
        .with_vertex("red-1", &["block-out"])
        .with_vertex("red-2", &["hyb-out"])
        .with_vertex("join", &["block-out", "hyb-out"])
        .build_topology()
}
