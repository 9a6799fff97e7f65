// src/scheduler/vertex.rs

//! Execution-vertex scheduling state.

use crate::config::model::VertexSpec;
use crate::types::{GroupName, VertexName};

/// A candidate vertex as seen by the scheduler: its name plus the *ordered*
/// list of partition groups it consumes.
///
/// The consumed order matters: consumability evaluation walks the groups in
/// this order and short-circuits on the first non-consumable one.
#[derive(Debug, Clone)]
pub struct ExecutionVertex {
    name: VertexName,
    consumed_groups: Vec<GroupName>,
}

impl ExecutionVertex {
    pub fn new(name: impl Into<VertexName>, consumed_groups: Vec<GroupName>) -> Self {
        Self {
            name: name.into(),
            consumed_groups,
        }
    }

    pub fn from_spec(name: VertexName, spec: &VertexSpec) -> Self {
        Self {
            name,
            consumed_groups: spec.consumes.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumed partition groups, in their declared order.
    ///
    /// Empty for a source vertex.
    pub fn consumed_groups(&self) -> &[GroupName] {
        &self.consumed_groups
    }
}
