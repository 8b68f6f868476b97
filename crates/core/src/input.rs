//! Loose input coercion
//!
//! Callers hand over scientific parameters as whatever representation is at
//! hand: a bare scalar, a `Vec`, a slice, a fixed-size array. [`ArrayInput`]
//! accepts any of them and coerces to a fixed-width `Vec<f64>` with a
//! declared [`ParameterError`] on failure. A scalar coerces to a one-element
//! sequence, so it satisfies a length check only for a single-layer profile.

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

/// A scalar or sequence-like numeric input, prior to coercion.
///
/// Construct via `From`:
/// ```
/// use disort_core::ArrayInput;
///
/// let a: ArrayInput = 0.1.into();
/// let b: ArrayInput = vec![0.1, 0.2].into();
/// let c: ArrayInput = [0.1, 0.2, 0.3].into();
/// assert_eq!(a.len(), 1);
/// assert_eq!(b.len(), 2);
/// assert_eq!(c.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayInput {
    /// A single value, treated as a one-element sequence.
    Scalar(f64),
    /// An ordered sequence of values.
    Sequence(Vec<f64>),
}

impl ArrayInput {
    /// Length of the coerced sequence (1 for a scalar).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ArrayInput::Scalar(_) => 1,
            ArrayInput::Sequence(v) => v.len(),
        }
    }

    /// Whether the coerced sequence would be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coerce to a `Vec<f64>`, rejecting NaN and infinite entries.
    ///
    /// Non-finite values are the strongly-typed remnant of "could not
    /// convert to float array": every other coercion failure is ruled out
    /// at the type level.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming `field` if any entry is not finite.
    pub fn coerce(&self, field: &'static str) -> Result<Vec<f64>, ParameterError> {
        let values = match self {
            ArrayInput::Scalar(x) => vec![*x],
            ArrayInput::Sequence(v) => v.clone(),
        };
        if values.iter().any(|x| !x.is_finite()) {
            return Err(ParameterError::non_finite(field));
        }
        Ok(values)
    }

    /// Coerce to a `Vec<f64>` of exactly `expected` entries.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming `field` on a non-finite entry or a
    /// length mismatch.
    pub fn coerce_with_len(
        &self,
        field: &'static str,
        expected: usize,
    ) -> Result<Vec<f64>, ParameterError> {
        let values = self.coerce(field)?;
        if values.len() != expected {
            return Err(ParameterError::dimension_mismatch(field, expected, values.len()));
        }
        Ok(values)
    }
}

impl From<f64> for ArrayInput {
    fn from(x: f64) -> Self {
        ArrayInput::Scalar(x)
    }
}

impl From<Vec<f64>> for ArrayInput {
    fn from(v: Vec<f64>) -> Self {
        ArrayInput::Sequence(v)
    }
}

impl From<&[f64]> for ArrayInput {
    fn from(v: &[f64]) -> Self {
        ArrayInput::Sequence(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for ArrayInput {
    fn from(v: [f64; N]) -> Self {
        ArrayInput::Sequence(v.to_vec())
    }
}

/// Coerce a scalar field, rejecting NaN and infinities.
///
/// # Errors
/// Returns [`ParameterError`] naming `field` if `value` is not finite.
pub fn coerce_scalar(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::new(field, "could not convert to a finite float"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_coerces_to_one_element_sequence() {
        let input: ArrayInput = 0.1.into();
        assert_eq!(input.coerce("dtau").unwrap(), vec![0.1]);
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_sequence_passes_through() {
        let input: ArrayInput = vec![0.1, 0.2, 0.3].into();
        assert_eq!(input.coerce_with_len("dtau", 3).unwrap(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_scalar_fails_multi_layer_length_check() {
        let input: ArrayInput = 0.1.into();
        let err = input.coerce_with_len("dtau", 3).unwrap_err();
        assert_eq!(err.field(), "dtau");
    }

    #[test]
    fn test_non_finite_rejected() {
        let input: ArrayInput = vec![0.1, f64::NAN].into();
        assert!(input.coerce("w0").is_err());
        assert!(coerce_scalar("beam_intensity", f64::INFINITY).is_err());
    }

    #[test]
    fn test_fixed_array_conversion() {
        let input: ArrayInput = [-1.0, -0.5, 0.5, 1.0].into();
        assert_eq!(input.len(), 4);
    }
}
