// src/config/model.rs

//! Serde data model for the TOML job file.
//!
//! A job file describes the piece of the job graph the scheduler reasons
//! about: partition groups produced upstream and the vertices consuming them.
//!
//! ```toml
//! [job]
//! name = "nightly-etl"
//!
//! [group.map-out]
//! shuffle = "blocking"
//! partitions = 8
//! producer = "map"
//!
//! [vertex.map]
//!
//! [vertex.reduce]
//! consumes = ["map-out"]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::ShuffleKind;

/// `[job]` section: job-level metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSection {
    pub name: Option<String>,
}

/// One `[group.<name>]` section: a partition group produced upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupSpec {
    /// Shuffle kind shared by all partitions in the group.
    pub shuffle: ShuffleKind,
    /// Total number of producer partitions (must be >= 1).
    pub partitions: u32,
    /// Name of the vertex producing this group.
    pub producer: String,
}

/// One `[vertex.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VertexSpec {
    /// Ordered list of partition groups this vertex consumes.
    ///
    /// A vertex with an empty list is a source.
    #[serde(default)]
    pub consumes: Vec<String>,
}

/// Raw job file as deserialized from TOML, before semantic validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJobFile {
    #[serde(default)]
    pub job: JobSection,
    #[serde(default)]
    pub group: BTreeMap<String, GroupSpec>,
    #[serde(default)]
    pub vertex: BTreeMap<String, VertexSpec>,
}

/// Validated job file.
///
/// Constructed via `JobFile::try_from(raw)`; see [`crate::config::validate`]
/// for the checks applied.
#[derive(Debug, Clone)]
pub struct JobFile {
    pub job: JobSection,
    pub group: BTreeMap<String, GroupSpec>,
    pub vertex: BTreeMap<String, VertexSpec>,
}

impl JobFile {
    /// Construct without validation. Only `validate` should call this.
    pub(crate) fn new_unchecked(
        job: JobSection,
        group: BTreeMap<String, GroupSpec>,
        vertex: BTreeMap<String, VertexSpec>,
    ) -> Self {
        Self { job, group, vertex }
    }
}
