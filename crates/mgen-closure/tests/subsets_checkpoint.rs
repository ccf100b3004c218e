use std::sync::atomic::AtomicBool;

use mgen_closure::serde_io::{
    checkpoint_from_json, checkpoint_to_json, read_json, subset_outcome_to_json, write_json,
};
use mgen_closure::{
    check_subsets, run_subsets, SubsetCheckpoint, SubsetControl, SubsetOpts, SubsetOutcome,
    SubsetProgress,
};
use mgen_core::MgenError;
use mgen_groups::Perm;

mod common;

use common::perm;

fn transpositions() -> Vec<Perm> {
    vec![
        perm(8, "(0 1)"),
        perm(8, "(2 3)"),
        perm(8, "(4 5)"),
        perm(8, "(6 7)"),
    ]
}

fn dependent_set() -> Vec<Perm> {
    let mut elements = transpositions();
    elements.push(perm(8, "(0 1)(2 3)"));
    elements
}

#[test]
fn disjoint_transpositions_are_independent() -> Result<(), MgenError> {
    let outcome = check_subsets(&transpositions(), None, &SubsetOpts::default())?;
    assert_eq!(outcome, SubsetOutcome::Independent);
    Ok(())
}

#[test]
fn first_dependent_mask_is_reported() -> Result<(), MgenError> {
    let outcome = check_subsets(&dependent_set(), None, &SubsetOpts::default())?;
    assert_eq!(
        outcome,
        SubsetOutcome::Dependent {
            mask: 0b10011,
            indices: vec![0, 1, 4],
        }
    );
    Ok(())
}

#[test]
fn central_element_counts_as_a_hit() -> Result<(), MgenError> {
    let elements = [perm(4, "(0 1)"), perm(4, "(2 3)")];
    let z = perm(4, "(0 1)(2 3)");
    assert_eq!(
        check_subsets(&elements, None, &SubsetOpts::default())?,
        SubsetOutcome::Independent
    );
    assert_eq!(
        check_subsets(&elements, Some(&z), &SubsetOpts::default())?,
        SubsetOutcome::Dependent {
            mask: 0b11,
            indices: vec![0, 1],
        }
    );
    Ok(())
}

#[test]
fn budget_interrupts_and_resume_agrees() -> Result<(), MgenError> {
    let elements = dependent_set();
    let expected = check_subsets(&elements, None, &SubsetOpts::default())?;

    let opts = SubsetOpts {
        budget: Some(5),
        ..SubsetOpts::default()
    };
    let first = check_subsets(&elements, None, &opts)?;
    let SubsetOutcome::Interrupted(checkpoint) = first else {
        panic!("expected an interrupted run, got {first:?}");
    };
    assert_eq!(checkpoint.next_mask, 6);
    assert_eq!(checkpoint.checked, 5);
    assert_eq!(checkpoint.total, 31);
    assert!(!checkpoint.is_finished());

    let mut resume = checkpoint;
    let mut rounds = 1;
    let outcome = loop {
        let mut control = SubsetControl::default();
        match run_subsets(&elements, None, Some(&resume), &opts, &mut control)? {
            SubsetOutcome::Interrupted(next) => {
                assert!(next.next_mask > resume.next_mask);
                resume = next;
                rounds += 1;
            }
            done => break done,
        }
    };
    assert_eq!(outcome, expected);
    assert_eq!(rounds, 3);
    Ok(())
}

#[test]
fn independent_run_survives_many_interruptions() -> Result<(), MgenError> {
    let elements = transpositions();
    let opts = SubsetOpts {
        budget: Some(2),
        ..SubsetOpts::default()
    };
    let mut resume: Option<SubsetCheckpoint> = None;
    let outcome = loop {
        let mut control = SubsetControl::default();
        match run_subsets(&elements, None, resume.as_ref(), &opts, &mut control)? {
            SubsetOutcome::Interrupted(next) => resume = Some(next),
            done => break done,
        }
    };
    assert_eq!(outcome, SubsetOutcome::Independent);
    Ok(())
}

#[test]
fn cancellation_stops_before_any_subset() -> Result<(), MgenError> {
    let flag = AtomicBool::new(true);
    let mut control = SubsetControl {
        cancel: Some(&flag),
        on_progress: None,
    };
    let outcome = run_subsets(
        &transpositions(),
        None,
        None,
        &SubsetOpts::default(),
        &mut control,
    )?;
    assert_eq!(
        outcome,
        SubsetOutcome::Interrupted(SubsetCheckpoint::start(4, false))
    );
    Ok(())
}

#[test]
fn progress_callback_fires_periodically() -> Result<(), MgenError> {
    let mut seen = Vec::new();
    {
        let mut control = SubsetControl {
            cancel: None,
            on_progress: Some(Box::new(|progress: SubsetProgress| {
                seen.push((progress.checked, progress.total))
            })),
        };
        let opts = SubsetOpts {
            budget: None,
            progress_every: 4,
        };
        run_subsets(&transpositions(), None, None, &opts, &mut control)?;
    }
    assert_eq!(seen, vec![(4, 15), (8, 15), (12, 15)]);
    Ok(())
}

#[test]
fn checkpoints_persist_as_json() -> Result<(), MgenError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("subsets.json");
    let opts = SubsetOpts {
        budget: Some(3),
        ..SubsetOpts::default()
    };
    let SubsetOutcome::Interrupted(checkpoint) = check_subsets(&dependent_set(), None, &opts)? else {
        panic!("expected an interrupted run");
    };
    write_json(&path, &checkpoint_to_json(&checkpoint)?)?;
    let restored = checkpoint_from_json(&read_json(&path)?)?;
    assert_eq!(restored, checkpoint);

    let outcome = run_subsets(
        &dependent_set(),
        None,
        Some(&restored),
        &SubsetOpts::default(),
        &mut SubsetControl::default(),
    )?;
    let json = subset_outcome_to_json(&outcome)?;
    assert!(json.contains("\"outcome\": \"dependent\""));
    Ok(())
}

#[test]
fn invalid_inputs_are_rejected() {
    let err = check_subsets::<Perm>(&[], None, &SubsetOpts::default()).unwrap_err();
    assert_eq!(err.code(), "empty-elements");

    let many = vec![Perm::identity(2); 64];
    let err = check_subsets(&many, None, &SubsetOpts::default()).unwrap_err();
    assert_eq!(err.code(), "too-many-elements");

    let checkpoint = SubsetCheckpoint::start(3, false);
    let err = run_subsets(
        &transpositions(),
        None,
        Some(&checkpoint),
        &SubsetOpts::default(),
        &mut SubsetControl::default(),
    )
    .unwrap_err();
    assert_eq!(err.code(), "checkpoint-mismatch");

    let pair = [perm(4, "(0 1)"), perm(4, "(2 3)")];
    let mut before_start = SubsetCheckpoint::start(2, false);
    before_start.next_mask = 0;
    let mut past_end = SubsetCheckpoint::start(2, false);
    past_end.next_mask = 5;
    past_end.checked = 4;
    let mut inconsistent = SubsetCheckpoint::start(2, false);
    inconsistent.next_mask = 2;
    inconsistent.checked = 0;
    for checkpoint in [before_start, past_end, inconsistent] {
        let err = run_subsets(
            &pair,
            None,
            Some(&checkpoint),
            &SubsetOpts::default(),
            &mut SubsetControl::default(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "invalid-checkpoint");
    }

    let mut finished = SubsetCheckpoint::start(2, false);
    finished.next_mask = 4;
    finished.checked = 3;
    let outcome = run_subsets(
        &pair,
        None,
        Some(&finished),
        &SubsetOpts::default(),
        &mut SubsetControl::default(),
    )
    .unwrap();
    assert_eq!(outcome, SubsetOutcome::Independent);
}
