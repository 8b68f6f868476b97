//! What the solver actually receives
//!
//! A recording backend captures the marshalled argument set so tests can
//! verify the external contract: moment-major phase table with a unit
//! leading row, forced output flags, and the single output depth pinned to
//! the top layer's optical thickness.

use approx::assert_relative_eq;
use disort_core::{
    DisortRequest, DisortSolver, DryRunSolver, RadiativeFields, SolverArgs, SolverError,
};
use std::cell::RefCell;

fn normalized_row(width: usize) -> Vec<f64> {
    let mut row = vec![0.2; width];
    row[0] = 1.0;
    row
}

#[derive(Default)]
struct RecordingSolver {
    seen: RefCell<Option<SolverArgs>>,
}

impl DisortSolver for RecordingSolver {
    fn run(&self, args: &SolverArgs) -> Result<RadiativeFields, SolverError> {
        *self.seen.borrow_mut() = Some(args.clone());
        DryRunSolver.run(args)
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}

#[test]
fn test_moment_table_is_moment_major_with_unit_leading_row() {
    let solver = RecordingSolver::default();
    let request = DisortRequest {
        dtau: vec![0.3, 0.2].into(),
        w0: vec![0.9, 0.9].into(),
        max_moments: Some(24),
        ..DisortRequest::new(2, vec![normalized_row(32); 2])
    };
    request.run(&solver).unwrap();

    let args = solver.seen.borrow().clone().unwrap();
    // Trimmed to exactly max_moments rows, one column per layer
    assert_eq!(args.pmom.nrows(), 24);
    assert_eq!(args.pmom.ncols(), 2);
    assert_eq!(args.nmom, 23);
    for lyr in 0..2 {
        assert_relative_eq!(args.pmom[(0, lyr)], 1.0);
    }
}

#[test]
fn test_forced_output_and_boundary_flags() {
    let solver = RecordingSolver::default();
    DisortRequest::new(1, vec![normalized_row(20)])
        .run(&solver)
        .unwrap();

    let args = solver.seen.borrow().clone().unwrap();
    assert!(args.usrtau, "output at user depths is always requested");
    assert!(args.usrang, "output at user angles is always requested");
    assert!(args.lamber);
    assert!(!args.plank, "thermal emission is always disabled");
    assert!(!args.onlyfl);
    assert_eq!(args.ibcnd, 0);
}

#[test]
fn test_output_depth_is_top_layer_thickness() {
    let solver = RecordingSolver::default();
    let request = DisortRequest {
        dtau: vec![0.7, 0.1, 0.05].into(),
        w0: vec![0.9; 3].into(),
        ..DisortRequest::new(3, vec![normalized_row(20); 3])
    };
    request.run(&solver).unwrap();

    let args = solver.seen.borrow().clone().unwrap();
    assert_eq!(args.utau, vec![0.7]);
    assert_eq!(args.ntau, 1);
}

#[test]
fn test_output_shapes_follow_requested_angles() {
    let request = DisortRequest {
        zen_angles: vec![-1.0, -0.3, 0.1, 0.6, 1.0].into(),
        azi_angles: vec![0.0, 90.0, 180.0].into(),
        ..DisortRequest::new(1, vec![normalized_row(20)])
    };
    let fields = request.run(&DryRunSolver).unwrap();

    assert_eq!((fields.numu, fields.nphi, fields.ntau), (5, 3, 1));
    assert_eq!(fields.uu.len(), 5 * 3);
    assert_eq!(fields.albmed.len(), 5);
    assert_eq!(fields.trnmed.len(), 5);
    assert_eq!(fields.rfldir.len(), 1);
}
