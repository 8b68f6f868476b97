//! Solver backend boundary
//!
//! The radiative-transfer numerics are an external collaborator reachable
//! through one call boundary, the [`DisortSolver`] trait. Two backends
//! exist:
//!
//! - `NativeDisort`: the real Fortran DISORT routine, linked through a C
//!   shim. Gated behind the `native` feature so the workspace builds in
//!   environments without the library installed.
//! - [`DryRunSolver`]: always available; performs no radiative transfer
//!   and returns zero-filled fields of the correct shapes. Useful for
//!   verifying inputs and in tests.
//!
//! # Feature Flags
//!
//! - `native`: enables the Fortran-backed [`NativeDisort`]. Off by default.

mod dry_run;

#[cfg(feature = "native")]
mod native;

pub use dry_run::DryRunSolver;

#[cfg(feature = "native")]
pub use native::NativeDisort;

use crate::args::SolverArgs;
use crate::error::SolverError;
use crate::fields::RadiativeFields;

/// Backend-agnostic interface to the discrete-ordinates solver.
///
/// Implementations receive a fully validated [`SolverArgs`] and return the
/// eight output arrays unchanged. The call is synchronous and blocking,
/// with no cancellation or timeout hook; callers needing concurrency run
/// independent invocations in separate execution contexts, since no shared
/// mutable state exists.
pub trait DisortSolver {
    /// Invoke the solver with a validated argument set.
    ///
    /// # Errors
    /// Returns [`SolverError`] carrying the backend's own failure report,
    /// verbatim. This layer never interprets it.
    fn run(&self, args: &SolverArgs) -> Result<RadiativeFields, SolverError>;

    /// Short backend identifier used in log output.
    fn backend_name(&self) -> &'static str;
}
