// tests/pass_evaluation.rs

//! Batch evaluation with `SchedulingPass`: producer completions between
//! passes, fresh caches per pass, and the factory contract.

mod common;

use std::collections::HashSet;

use stagegate::scheduler::{
    InputConsumableDeciderFactory, PartialFinishedDeciderFactory,
    PartialFinishedInputConsumableDecider, SchedulingPass,
};
use stagegate::types::ExecutionState;

fn candidates() -> Vec<String> {
    vec![
        "red-1".to_string(),
        "red-2".to_string(),
        "join".to_string(),
    ]
}

#[test]
fn nothing_is_consumable_before_any_producer_finishes() {
    common::init_tracing();

    let topology = common::two_stage_topology();
    let decider = PartialFinishedInputConsumableDecider::new();

    let mut pass = SchedulingPass::new(&decider, HashSet::new());
    let consumable = pass.consumable_vertices(&topology, &candidates());
    assert!(consumable.is_empty());
}

#[test]
fn source_candidates_are_always_consumable() {
    common::init_tracing();

    let topology = common::two_stage_topology();
    let decider = PartialFinishedInputConsumableDecider::new();

    let mut pass = SchedulingPass::new(&decider, HashSet::new());
    let consumable = pass.consumable_vertices(&topology, &["map-1".to_string()]);
    assert_eq!(consumable, vec!["map-1".to_string()]);
}

#[test]
fn hybrid_consumer_unlocks_after_one_finished_partition() {
    common::init_tracing();

    let mut topology = common::two_stage_topology();
    topology.notify_partition_finished("hyb-out").unwrap();

    let decider = PartialFinishedInputConsumableDecider::new();
    let mut pass = SchedulingPass::new(&decider, HashSet::new());
    let consumable = pass.consumable_vertices(&topology, &candidates());

    // red-2 reads only the hybrid group; red-1 and join still wait on the
    // blocking group.
    assert_eq!(consumable, vec!["red-2".to_string()]);
}

#[test]
fn blocking_consumers_unlock_once_the_group_fully_finishes() {
    common::init_tracing();

    let mut topology = common::two_stage_topology();
    topology.notify_partition_finished("hyb-out").unwrap();
    topology.notify_partition_finished("block-out").unwrap();
    topology.notify_partition_finished("block-out").unwrap();

    let decider = PartialFinishedInputConsumableDecider::new();
    let mut pass = SchedulingPass::new(&decider, HashSet::new());
    let consumable = pass.consumable_vertices(&topology, &candidates());

    assert_eq!(consumable, candidates());
    // Three distinct vertices, two shared groups: each group was computed
    // and cached once within the pass.
    assert_eq!(pass.cache().len(), 2);
}

#[test]
fn verdicts_stay_true_as_more_partitions_finish() {
    common::init_tracing();

    let mut topology = common::two_stage_topology();
    topology.notify_partition_finished("hyb-out").unwrap();

    let decider = PartialFinishedInputConsumableDecider::new();

    // red-2 is consumable from one finished partition onwards; finishing the
    // rest of the group never revokes that within the epoch.
    for _ in 0..2 {
        let mut pass = SchedulingPass::new(&decider, HashSet::new());
        let consumable = pass.consumable_vertices(&topology, &["red-2".to_string()]);
        assert_eq!(consumable, vec!["red-2".to_string()]);
        topology.notify_partition_finished("hyb-out").unwrap();
    }
}

#[test]
fn failover_reset_regresses_the_group_in_the_next_pass() {
    common::init_tracing();

    let mut topology = common::two_stage_topology();
    topology.notify_partition_finished("hyb-out").unwrap();

    let decider = PartialFinishedInputConsumableDecider::new();

    let mut pass = SchedulingPass::new(&decider, HashSet::new());
    assert_eq!(
        pass.consumable_vertices(&topology, &["red-2".to_string()]),
        vec!["red-2".to_string()]
    );
    drop(pass);

    topology.reset_group("hyb-out").unwrap();

    let mut pass = SchedulingPass::new(&decider, HashSet::new());
    assert!(pass
        .consumable_vertices(&topology, &["red-2".to_string()])
        .is_empty());
}

#[test]
fn duplicate_finish_notifications_are_ignored() {
    common::init_tracing();

    let mut topology = common::two_stage_topology();
    topology.notify_partition_finished("block-out").unwrap();
    topology.notify_partition_finished("block-out").unwrap();
    // Group is fully finished; a stray extra event must not underflow.
    topology.notify_partition_finished("block-out").unwrap();

    let group = topology.group("block-out").unwrap();
    assert_eq!(group.unfinished_partitions(), 0);
    assert_eq!(group.finished_partitions(), 2);
}

#[test]
fn unknown_group_notification_is_an_error() {
    common::init_tracing();

    let mut topology = common::two_stage_topology();
    assert!(topology.notify_partition_finished("no-such-group").is_err());
}

#[test]
fn factory_ignores_topology_and_retrievers() {
    common::init_tracing();

    let mut topology = common::two_stage_topology();
    topology.notify_partition_finished("hyb-out").unwrap();

    let factory = PartialFinishedDeciderFactory::new();
    let decider = factory.create_instance(
        &topology,
        &|_| false,
        &|_| ExecutionState::Created,
    );

    let mut pass = SchedulingPass::new(decider.as_ref(), HashSet::new());
    let consumable = pass.consumable_vertices(&topology, &candidates());
    assert_eq!(consumable, vec!["red-2".to_string()]);
}
