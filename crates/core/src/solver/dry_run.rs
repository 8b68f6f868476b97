//! Shape-checking stand-in backend

use crate::args::SolverArgs;
use crate::error::SolverError;
use crate::fields::RadiativeFields;
use crate::solver::DisortSolver;
use tracing::debug;

/// A backend that performs no radiative transfer.
///
/// Returns zero-filled output arrays shaped by the call's `ntau`, `numu`
/// and `nphi`. Lets callers exercise the full validation and marshalling
/// path in environments where the Fortran library is not installed, and
/// gives tests a solver whose outputs are fully predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSolver;

impl DisortSolver for DryRunSolver {
    fn run(&self, args: &SolverArgs) -> Result<RadiativeFields, SolverError> {
        debug!(
            ntau = args.ntau,
            numu = args.numu,
            nphi = args.nphi,
            "dry run, returning zero-filled fields"
        );
        Ok(RadiativeFields::zeroed(args.ntau, args.numu, args.nphi))
    }

    fn backend_name(&self) -> &'static str {
        "dry-run"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisortRequest;

    #[test]
    fn test_dry_run_fields_match_request_dimensions() {
        let request = DisortRequest {
            zen_angles: vec![-0.8, 0.2, 0.9].into(),
            azi_angles: vec![0.0, 90.0].into(),
            ..DisortRequest::new(1, vec![vec![1.0; 20]])
        };
        let fields = request.run(&DryRunSolver).unwrap();
        assert_eq!((fields.ntau, fields.numu, fields.nphi), (1, 3, 2));
        assert!(fields.shapes_consistent());
    }
}
