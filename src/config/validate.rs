// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{JobFile, RawJobFile};
use crate::errors::{Result, StagegateError};

impl TryFrom<RawJobFile> for JobFile {
    type Error = crate::errors::StagegateError;

    fn try_from(raw: RawJobFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_job(&raw)?;
        Ok(JobFile::new_unchecked(raw.job, raw.group, raw.vertex))
    }
}

fn validate_raw_job(raw: &RawJobFile) -> Result<()> {
    ensure_has_vertices(raw)?;
    validate_groups(raw)?;
    validate_consumed_groups(raw)?;
    validate_job_graph(raw)?;
    Ok(())
}

fn ensure_has_vertices(raw: &RawJobFile) -> Result<()> {
    if raw.vertex.is_empty() {
        return Err(StagegateError::ConfigError(
            "job file must contain at least one [vertex.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_groups(raw: &RawJobFile) -> Result<()> {
    for (name, group) in raw.group.iter() {
        if group.partitions == 0 {
            return Err(StagegateError::ConfigError(format!(
                "group '{}' must have `partitions` >= 1 (got 0)",
                name
            )));
        }
        if !raw.vertex.contains_key(&group.producer) {
            return Err(StagegateError::ConfigError(format!(
                "group '{}' has unknown `producer` vertex '{}'",
                name, group.producer
            )));
        }
    }
    Ok(())
}

fn validate_consumed_groups(raw: &RawJobFile) -> Result<()> {
    for (name, vertex) in raw.vertex.iter() {
        let mut seen = HashSet::new();
        for group_name in vertex.consumes.iter() {
            let group = match raw.group.get(group_name) {
                Some(g) => g,
                None => {
                    return Err(StagegateError::ConfigError(format!(
                        "vertex '{}' has unknown group '{}' in `consumes`",
                        name, group_name
                    )));
                }
            };
            if !seen.insert(group_name.as_str()) {
                return Err(StagegateError::ConfigError(format!(
                    "vertex '{}' lists group '{}' twice in `consumes` (the consumed set is ordered and duplicate-free)",
                    name, group_name
                )));
            }
            if group.producer == *name {
                return Err(StagegateError::ConfigError(format!(
                    "vertex '{}' cannot consume group '{}' that it produces",
                    name, group_name
                )));
            }
        }
    }
    Ok(())
}

fn validate_job_graph(raw: &RawJobFile) -> Result<()> {
    // Build a petgraph graph over vertex names.
    //
    // Edge direction: producer -> consumer
    // For:
    //   [group.g]
    //   producer = "A"
    //   [vertex.B]
    //   consumes = ["g"]
    // we add edge A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in raw.vertex.keys() {
        graph.add_node(name.as_str());
    }

    for (consumer, vertex) in raw.vertex.iter() {
        for group_name in vertex.consumes.iter() {
            // Unknown groups were rejected above.
            if let Some(group) = raw.group.get(group_name) {
                graph.add_edge(group.producer.as_str(), consumer.as_str(), ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_) => Ok(()),
        Err(cycle) => Err(StagegateError::JobGraphCycle(format!(
            "cycle detected in job graph involving vertex '{}'",
            cycle.node_id()
        ))),
    }
}
