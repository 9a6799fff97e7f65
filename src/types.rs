// src/types.rs

use std::str::FromStr;

use serde::Deserialize;

/// Canonical execution-vertex name type used throughout the crate.
pub type VertexName = String;

/// Canonical partition-group name type used throughout the crate.
pub type GroupName = String;

/// How the producer partitions of a group are handed to the consumer.
///
/// - `Blocking` / `BlockingPersistent`: the consumer may not start until every
///   producer partition in the group has finished.
/// - `Pipelined` / `Hybrid`: the consumer may start once a minimum number of
///   producer partitions have finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleKind {
    Blocking,
    BlockingPersistent,
    Pipelined,
    Hybrid,
}

impl ShuffleKind {
    /// Whether this kind requires all producer partitions to finish before
    /// consumption may begin.
    pub fn is_blocking(self) -> bool {
        matches!(self, ShuffleKind::Blocking | ShuffleKind::BlockingPersistent)
    }
}

impl FromStr for ShuffleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blocking" => Ok(ShuffleKind::Blocking),
            "blocking-persistent" => Ok(ShuffleKind::BlockingPersistent),
            "pipelined" => Ok(ShuffleKind::Pipelined),
            "hybrid" => Ok(ShuffleKind::Hybrid),
            other => Err(format!(
                "invalid shuffle kind: {other} (expected \"blocking\", \"blocking-persistent\", \"pipelined\" or \"hybrid\")"
            )),
        }
    }
}

/// Coarse execution state of a vertex, as tracked by the surrounding runtime.
///
/// The decider factory contract passes a state retriever through to strategy
/// constructors; the partial-finished strategy itself never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    Created,
    Scheduled,
    Deploying,
    Running,
    Finished,
    Failed,
    Canceled,
}
