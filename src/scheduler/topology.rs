// src/scheduler/topology.rs

//! The scheduling topology: vertices, partition groups, and the
//! producer-completion mutations applied to them.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::model::JobFile;
use crate::errors::{Result, StagegateError};
use crate::scheduler::partition_group::ConsumedPartitionGroup;
use crate::scheduler::vertex::ExecutionVertex;
use crate::types::{GroupName, VertexName};

/// Owns the scheduling state the consumability deciders read.
///
/// Both the decider queries and the producer-completion mutations run on the
/// same single-threaded coordination loop, so readers always observe a
/// consistent snapshot without locks.
#[derive(Debug)]
pub struct SchedulingTopology {
    vertices: HashMap<VertexName, ExecutionVertex>,
    groups: HashMap<GroupName, ConsumedPartitionGroup>,
}

impl SchedulingTopology {
    /// Build a topology from a validated [`JobFile`].
    ///
    /// Every group starts fully unfinished.
    pub fn from_job(job: &JobFile) -> Self {
        let mut groups = HashMap::new();
        for (name, spec) in job.group.iter() {
            groups.insert(
                name.clone(),
                ConsumedPartitionGroup::new(name.clone(), spec.shuffle, spec.partitions),
            );
        }

        let mut vertices = HashMap::new();
        for (name, spec) in job.vertex.iter() {
            vertices.insert(name.clone(), ExecutionVertex::from_spec(name.clone(), spec));
        }

        debug!(
            vertices = vertices.len(),
            groups = groups.len(),
            "built scheduling topology from job file"
        );

        Self { vertices, groups }
    }

    pub fn vertex(&self, name: &str) -> Option<&ExecutionVertex> {
        self.vertices.get(name)
    }

    pub fn group(&self, name: &str) -> Option<&ConsumedPartitionGroup> {
        self.groups.get(name)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &ExecutionVertex> {
        self.vertices.values()
    }

    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(|s| s.as_str())
    }

    /// Apply a producer-completion notification: one partition of `group`
    /// finished.
    pub fn notify_partition_finished(&mut self, group: &str) -> Result<()> {
        match self.groups.get_mut(group) {
            Some(g) => {
                g.partition_finished();
                Ok(())
            }
            None => {
                warn!(group = %group, "completion notification for unknown group");
                Err(StagegateError::GroupNotFound(group.to_string()))
            }
        }
    }

    /// Failover reset for one group: back to fully unfinished.
    pub fn reset_group(&mut self, group: &str) -> Result<()> {
        match self.groups.get_mut(group) {
            Some(g) => {
                g.reset();
                Ok(())
            }
            None => Err(StagegateError::GroupNotFound(group.to_string())),
        }
    }
}
