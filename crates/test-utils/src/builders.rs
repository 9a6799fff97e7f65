#![allow(dead_code)]

use std::collections::BTreeMap;

use stagegate::config::{GroupSpec, JobFile, JobSection, RawJobFile, VertexSpec};
use stagegate::scheduler::SchedulingTopology;
use stagegate::types::ShuffleKind;

/// Builder for `JobFile` to simplify test setup.
pub struct JobFileBuilder {
    raw: RawJobFile,
}

impl JobFileBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawJobFile {
                job: JobSection::default(),
                group: BTreeMap::new(),
                vertex: BTreeMap::new(),
            },
        }
    }

    pub fn with_group(
        mut self,
        name: &str,
        shuffle: ShuffleKind,
        partitions: u32,
        producer: &str,
    ) -> Self {
        self.raw.group.insert(
            name.to_string(),
            GroupSpec {
                shuffle,
                partitions,
                producer: producer.to_string(),
            },
        );
        self
    }

    pub fn with_source_vertex(self, name: &str) -> Self {
        self.with_vertex(name, &[])
    }

    pub fn with_vertex(mut self, name: &str, consumes: &[&str]) -> Self {
        self.raw.vertex.insert(
            name.to_string(),
            VertexSpec {
                consumes: consumes.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }

    pub fn build(self) -> JobFile {
        JobFile::try_from(self.raw).expect("Failed to build valid job file from builder")
    }

    /// Build the job file and a topology over it in one go.
    pub fn build_topology(self) -> SchedulingTopology {
        SchedulingTopology::from_job(&self.build())
    }
}

impl Default for JobFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
