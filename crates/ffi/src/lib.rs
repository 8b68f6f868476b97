//! C ABI surface for the DISORT request builder
//!
//! Exposes the validation/marshalling layer to C callers. Every function
//! returns a [`DisortErrorCode`] (0 = success) and records a diagnostic
//! message in thread-local storage, retrievable via
//! `disort_get_last_error()`.
//!
//! `disort_validate` is always available and never invokes the solver;
//! `disort_run` exists only when the crate is built with the `native`
//! feature, which links the Fortran DISORT library through `disort-core`.

mod error;
mod helpers;
mod validate;

#[cfg(feature = "native")]
mod run;

pub use error::{disort_get_last_error, disort_get_last_error_code, DisortErrorCode};
pub use validate::disort_validate;

#[cfg(feature = "native")]
pub use run::disort_run;
