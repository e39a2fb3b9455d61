use std::path::PathBuf;

use quadbench::{
    harness::{HarnessBuilder, HarnessSettings},
    profile::ProfileLoader,
    report::{load_record, WorkloadOutcome},
    sequence::SequenceSpec,
    workloads::{register_profile, BubbleSortWorkload},
    Profile, SortVariant,
};

fn profile_loader() -> ProfileLoader {
    ProfileLoader::new(env!("CARGO_MANIFEST_DIR"))
}

fn smoke_profile() -> Profile {
    profile_loader()
        .load(PathBuf::from("profiles/smoke.yaml"))
        .expect("smoke profile parses")
}

fn build_harness(profile: &Profile, report_dir: Option<PathBuf>) -> HarnessBuilder {
    let settings = HarnessSettings {
        profile_name: profile.name.clone(),
        seed: profile.seed,
        report_dir,
    };
    let mut builder = HarnessBuilder::new(settings);
    register_profile(&mut builder, profile);
    builder
}

#[test]
fn profile_loader_reads_fixtures() {
    let profile = smoke_profile();
    assert_eq!(profile.name, "smoke");
    assert_eq!(profile.sort.as_ref().unwrap().sequence.len, 200);
    let fib = profile.fibonacci.as_ref().unwrap();
    assert_eq!(fib.threads, Some(4));

    let default = profile_loader().load("profiles/default.yaml").unwrap();
    assert_eq!(default.name, "default");
    assert_eq!(default.fibonacci.unwrap().n, 38);
}

#[test]
fn missing_profile_reports_path() {
    let err = profile_loader().load("profiles/nope.yaml").unwrap_err();
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn harness_runs_workloads_in_order() {
    let profile = smoke_profile();
    let mut harness = build_harness(&profile, None).build();
    assert_eq!(harness.workload_count(), 3);

    let mut seen = Vec::new();
    let records = harness
        .run_with_hook(|record| seen.push(record.workload.clone()))
        .expect("run succeeds");

    assert_eq!(
        seen,
        vec![
            "bubble_sort_naive".to_string(),
            "bubble_sort_optimized".to_string(),
            "fibonacci_fan_out".to_string(),
        ]
    );
    match &records[2].outcome {
        WorkloadOutcome::Fibonacci { provider, report } => {
            assert_eq!(provider, "iterative");
            assert_eq!(report.sum, 6765 * 4);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn same_seed_yields_same_sort_work() {
    let profile = smoke_profile();
    let first = build_harness(&profile, None).build().run().unwrap();
    let second = build_harness(&profile, None).build().run().unwrap();

    for (a, b) in first.iter().zip(&second).take(2) {
        match (&a.outcome, &b.outcome) {
            (
                WorkloadOutcome::BubbleSort { stats: sa, .. },
                WorkloadOutcome::BubbleSort { stats: sb, .. },
            ) => assert_eq!(sa, sb),
            other => panic!("unexpected outcomes {other:?}"),
        }
    }
}

#[test]
fn harness_writes_reports() {
    let profile = smoke_profile();
    let temp = tempfile::tempdir().unwrap();
    let report_dir = temp.path().join("reports");

    build_harness(&profile, Some(report_dir.clone()))
        .build()
        .run()
        .unwrap();

    let expected = report_dir.join("smoke").join("bubble_sort_optimized.json");
    assert!(
        expected.exists(),
        "expected report {} to exist",
        expected.display()
    );
    let record = load_record(&expected).unwrap();
    assert_eq!(record.profile, "smoke");
    assert!(matches!(
        record.outcome,
        WorkloadOutcome::BubbleSort {
            variant: SortVariant::Optimized,
            len: 200,
            ..
        }
    ));
    assert!(report_dir.join("smoke").join("fibonacci_fan_out.json").exists());
}

#[test]
fn invalid_sequence_fails_the_run() {
    let settings = HarnessSettings {
        profile_name: "broken".into(),
        seed: 1,
        report_dir: None,
    };
    let mut harness = HarnessBuilder::new(settings)
        .with_workload(BubbleSortWorkload::new(
            SortVariant::Naive,
            SequenceSpec {
                len: 10,
                min: 5,
                max: 1,
            },
        ))
        .build();

    let err = harness.run().unwrap_err();
    assert!(format!("{err:#}").contains("bubble_sort_naive"));
}

fn sort_stats_for(variants: &[SortVariant], wanted: SortVariant) -> quadbench::SortStats {
    let sequence = SequenceSpec {
        len: 300,
        min: 0,
        max: 100,
    };
    let settings = HarnessSettings {
        profile_name: "stream_check".into(),
        seed: 7,
        report_dir: None,
    };
    let mut builder = HarnessBuilder::new(settings);
    for &variant in variants {
        builder.push_workload(Box::new(BubbleSortWorkload::new(variant, sequence)));
    }
    let records = builder.build().run().unwrap();
    records
        .iter()
        .find_map(|record| match &record.outcome {
            WorkloadOutcome::BubbleSort { variant, stats, .. } if *variant == wanted => {
                Some(*stats)
            }
            _ => None,
        })
        .expect("requested variant ran")
}

#[test]
fn sort_input_independent_of_other_workloads() {
    let alone = sort_stats_for(&[SortVariant::Optimized], SortVariant::Optimized);
    let with_naive = sort_stats_for(
        &[SortVariant::Naive, SortVariant::Optimized],
        SortVariant::Optimized,
    );
    assert_eq!(alone, with_naive);
}

#[test]
fn variants_in_one_run_sort_the_same_sequence() {
    let variants = [SortVariant::Naive, SortVariant::Optimized];
    let naive = sort_stats_for(&variants, SortVariant::Naive);
    let optimized = sort_stats_for(&variants, SortVariant::Optimized);

    // Swaps equal the inversion count of the shared input.
    assert_eq!(naive.swaps, optimized.swaps);
    assert_eq!(naive.passes, 300);
    assert!(optimized.comparisons <= naive.comparisons);
}
