//! Error types for request validation and solver invocation
//!
//! Validation failures never reach the solver: the first failing field
//! short-circuits the whole build and the external call is skipped. Solver
//! failures are opaque to this layer and passed through verbatim.

use std::fmt;

/// Validation failure for a single request field.
///
/// Carries the name of the offending field and a human-readable message.
/// Covers type-coercion failure (non-finite values), dimension mismatch,
/// minimum-moment-count violation, and the phase-function normalization
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterError {
    field: &'static str,
    message: String,
}

impl ParameterError {
    /// Create an error for `field` with a custom message.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Create an error for a sequence whose length does not match the
    /// profile geometry.
    ///
    /// # Arguments
    /// * `field` - The name of the mismatched parameter (e.g. `"dtau"`, `"temps"`)
    /// * `expected` - The length required by the layer/level count
    /// * `got` - The length actually supplied
    pub fn dimension_mismatch(field: &'static str, expected: usize, got: usize) -> Self {
        Self::new(field, format!("dimension mismatch: expected {expected}, got {got}"))
    }

    /// Create an error for a value that could not be coerced to a finite float.
    pub fn non_finite(field: &'static str) -> Self {
        Self::new(field, "could not convert to a finite float array")
    }

    /// The name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parameter '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ParameterError {}

/// Opaque failure reported by a solver backend.
///
/// This layer makes no attempt to interpret or recover solver-internal
/// failures (numerical non-convergence, invalid internal state); whatever
/// the backend reports is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverError(pub String);

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solver failure: {}", self.0)
    }
}

impl std::error::Error for SolverError {}

/// Top-level error for one request/solve cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisortError {
    /// A request field failed validation; the solver was never invoked.
    Parameter(ParameterError),
    /// The solver backend reported a failure after a fully validated call.
    Solver(SolverError),
}

impl fmt::Display for DisortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisortError::Parameter(e) => write!(f, "invalid request: {e}"),
            DisortError::Solver(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DisortError {
    #[allow(clippy::match_same_arms)]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DisortError::Parameter(e) => Some(e),
            DisortError::Solver(e) => Some(e),
        }
    }
}

impl From<ParameterError> for DisortError {
    fn from(e: ParameterError) -> Self {
        DisortError::Parameter(e)
    }
}

impl From<SolverError> for DisortError {
    fn from(e: SolverError) -> Self {
        DisortError::Solver(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_names_field() {
        let err = ParameterError::dimension_mismatch("dtau", 3, 1);
        assert_eq!(err.field(), "dtau");
        assert_eq!(err.to_string(), "parameter 'dtau': dimension mismatch: expected 3, got 1");
    }

    #[test]
    fn test_disort_error_wraps_both_kinds() {
        let p: DisortError = ParameterError::non_finite("w0").into();
        let s: DisortError = SolverError("did not converge".into()).into();
        assert!(matches!(p, DisortError::Parameter(_)));
        assert!(s.to_string().contains("did not converge"));
    }
}
