use scf_bounds::{get_lower_bound, get_upper_bound, BoundConfig, CriticalRegimePolicy};
use scf_sweep::{run_sweep, worker_count, DensityGrid, RunOpts, SweepPlan};

fn plan(policy: CriticalRegimePolicy) -> SweepPlan {
    SweepPlan {
        sizes: vec![4, 9, 30],
        densities: DensityGrid::Linspace {
            start: 0.02,
            end: 0.98,
            points: 25,
        },
        thresholds: vec![0.9],
        bounds: BoundConfig {
            critical_regime: policy,
            ..BoundConfig::default()
        },
    }
}

fn opts(concurrency: usize) -> RunOpts {
    RunOpts {
        concurrency,
        write_csv: false,
    }
}

#[test]
fn report_is_independent_of_thread_count() {
    let plan = plan(CriticalRegimePolicy::Connected);
    let serial = run_sweep(&plan, &opts(1)).expect("serial sweep");
    let parallel = run_sweep(&plan, &opts(4)).expect("parallel sweep");
    assert_eq!(serial, parallel);
    assert_eq!(serial.plan_hash, plan.plan_hash().expect("hash"));
}

#[test]
fn curves_follow_plan_order() {
    let plan = plan(CriticalRegimePolicy::Connected);
    let report = run_sweep(&plan, &opts(2)).expect("sweep");
    let sizes: Vec<u64> = report.bound_curves.iter().map(|curve| curve.n).collect();
    assert_eq!(sizes, plan.sizes);
    let densities = plan.densities.values();
    for curve in &report.bound_curves {
        assert_eq!(curve.points.len(), densities.len());
        for (point, &p) in curve.points.iter().zip(&densities) {
            assert_eq!(point.p, p);
            assert_eq!(point.lower, get_lower_bound(curve.n, p).expect("lower"));
            assert_eq!(point.upper, get_upper_bound(curve.n, p).expect("upper"));
        }
    }
}

#[test]
fn bounds_never_cross_under_either_policy() {
    for policy in [
        CriticalRegimePolicy::Connected,
        CriticalRegimePolicy::GiantComponent,
    ] {
        let report = run_sweep(&plan(policy), &opts(2)).expect("sweep");
        assert_eq!(report.ordering_violations(), 0);
        for curve in &report.bound_curves {
            let peak = curve.summary.peak_lower.expect("non-empty curve");
            assert!(curve.points.iter().all(|point| point.lower <= peak.lower));
            assert!(curve.summary.max_gap >= curve.summary.mean_gap);
        }
    }
}

#[test]
fn plan_hash_tracks_plan_contents() {
    let base = plan(CriticalRegimePolicy::Connected);
    let mut resized = base.clone();
    resized.sizes.push(31);
    let mut reconfigured = base.clone();
    reconfigured.bounds.critical_regime = CriticalRegimePolicy::GiantComponent;
    let hash = base.plan_hash().expect("hash");
    assert_eq!(hash.len(), 64);
    assert_ne!(hash, resized.plan_hash().expect("hash"));
    assert_ne!(hash, reconfigured.plan_hash().expect("hash"));
}

#[test]
fn threshold_curves_record_crossings_and_failures() {
    let mut config = BoundConfig::default();
    config.search.max_n = 20;
    let plan = SweepPlan {
        sizes: vec![5],
        densities: DensityGrid::Explicit {
            values: vec![0.001, 0.2, 0.5, 0.9],
        },
        thresholds: vec![0.9],
        bounds: config,
    };
    let report = run_sweep(&plan, &opts(3)).expect("sweep");
    let curve = &report.threshold_curves[0];
    assert_eq!(curve.threshold, 0.9);
    let ns: Vec<Option<u64>> = curve.points.iter().map(|point| point.n).collect();
    assert_eq!(ns, vec![None, Some(5), Some(4), Some(7)]);
    assert_eq!(curve.points[0].failure.as_deref(), Some("search-exhausted"));
    assert!(curve.points[1..].iter().all(|point| point.failure.is_none()));
    assert_eq!(curve.located(), 3);
}

#[test]
fn invalid_plan_is_rejected_before_evaluation() {
    let mut bad = plan(CriticalRegimePolicy::Connected);
    bad.densities = DensityGrid::Explicit {
        values: vec![0.5, 1.0],
    };
    let err = run_sweep(&bad, &opts(1)).expect_err("p = 1 rejected");
    assert_eq!(err.code(), "plan-invalid");
}

#[test]
fn plan_thread_setting_sizes_the_pool() {
    let mut plan = plan(CriticalRegimePolicy::Connected);
    assert_eq!(worker_count(&plan, &opts(3)), 3);
    assert_eq!(worker_count(&plan, &opts(0)), 1);

    let baseline = run_sweep(&plan, &opts(1)).expect("baseline sweep");
    plan.bounds.threads = 2;
    assert_eq!(worker_count(&plan, &opts(1)), 2);
    let threaded = run_sweep(&plan, &opts(1)).expect("threaded sweep");
    assert_eq!(threaded.bound_curves, baseline.bound_curves);
    assert_eq!(threaded.threshold_curves, baseline.threshold_curves);
}

#[test]
fn repeated_sizes_are_rejected() {
    let mut plan = plan(CriticalRegimePolicy::Connected);
    plan.sizes = vec![9, 4, 9];
    let err = run_sweep(&plan, &opts(1)).expect_err("duplicate size");
    assert_eq!(err.code(), "plan-invalid");
    assert_eq!(err.info().context.get("n").map(String::as_str), Some("9"));
}
