//! DISORT request-building and marshalling library
//!
//! A validation and marshalling layer in front of the externally authored
//! discrete-ordinates radiative-transfer solver (DISORT). The crate accepts
//! loosely typed scientific inputs (layer counts, optical depths,
//! phase-function moments, viewing angles), validates each field, reshapes
//! everything into the exact positional argument set and array layouts the
//! Fortran solver expects, invokes the solver through one call boundary, and
//! returns the solver's eight output arrays unchanged.
//!
//! No radiative-transfer numerics live here; the solver is an opaque
//! collaborator behind the [`DisortSolver`] trait.

// Input coercion and validation
pub mod error;
pub mod input;
pub mod moments;

// Request assembly and the solver boundary
pub mod args;
pub mod fields;
pub mod request;
pub mod solver;

// Re-export the caller-facing surface
pub use args::SolverArgs;
pub use error::{DisortError, ParameterError, SolverError};
pub use fields::RadiativeFields;
pub use input::ArrayInput;
pub use moments::MarshalledMoments;
pub use request::DisortRequest;
pub use solver::{DisortSolver, DryRunSolver};

#[cfg(feature = "native")]
pub use solver::NativeDisort;
