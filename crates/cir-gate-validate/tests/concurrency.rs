// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use std::thread;

use cir_gate_model::{AcceptanceCriterion, Cir, StatePersistence, StoryMetadata};
use cir_gate_policies::Policy;
use cir_gate_validate::{validate_cir, Report, Validator};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_values_are_thread_safe() {
    assert_send_sync::<Policy>();
    assert_send_sync::<Cir>();
    assert_send_sync::<Report>();
    assert_send_sync::<Validator<'static>>();
}

#[test]
fn one_policy_shared_by_many_threads_yields_identical_reports() {
    let policy = Arc::new(Policy::v1());
    let cir = Arc::new(Cir::new(
        StoryMetadata::new("STORY-5", ""),
        vec![
            AcceptanceCriterion::new("AC-1", "TBD").with_expected_outcome(["UNKNOWN"]),
            AcceptanceCriterion::new("AC-2", "ok"),
        ],
        StatePersistence::new(true, Vec::<String>::new()),
    ));
    let expected = validate_cir(&cir, &policy);

    let handles = (0..8)
        .map(|_| {
            let policy = Arc::clone(&policy);
            let cir = Arc::clone(&cir);
            thread::spawn(move || validate_cir(&cir, &policy))
        })
        .collect::<Vec<_>>();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), expected);
    }
}

#[test]
fn borrowed_validator_works_in_scoped_threads() {
    let policy = Policy::v1();
    let validator = Validator::new(&policy);
    let stories = (0..4)
        .map(|i| {
            Cir::new(
                StoryMetadata::new(format!("STORY-{i}"), "name"),
                vec![AcceptanceCriterion::new(format!("AC-{i}"), "d").with_expected_outcome(["o"])],
                StatePersistence::not_required(),
            )
        })
        .collect::<Vec<_>>();

    thread::scope(|scope| {
        for cir in &stories {
            scope.spawn(move || assert!(validator.validate(cir).is_valid()));
        }
    });
}
