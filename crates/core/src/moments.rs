//! Phase-function moment table marshalling
//!
//! The caller supplies the table layer-major (rows = layers, columns =
//! Legendre moments). The solver wants it moment-major with the leading
//! coefficient of every layer equal to 1.0; that layout is a fixed contract
//! of the external boundary, not a choice of this crate. Marshalling trims
//! excess columns, rounds the leading coefficient to 5 decimals before
//! checking the normalization invariant, and transposes.

use crate::error::ParameterError;
use nalgebra::DMatrix;

/// Minimum number of total Legendre moments (including the implicit leading
/// normalization coefficient) the solver needs for a usable expansion.
pub const MIN_PHASE_MOMENTS: usize = 20;

/// Decimal places the leading coefficient is rounded to before the
/// normalization check, absorbing slight caller-side inaccuracy.
const LEADING_COEFF_DECIMALS: i32 = 5;

/// A validated, solver-ready phase-function table.
#[derive(Debug, Clone, PartialEq)]
pub struct MarshalledMoments {
    /// Moment-major table, shape (`max_moments`, `nlyr`). nalgebra stores
    /// column-major, so each layer's moments are contiguous, matching the
    /// Fortran `PMOM(0:NMOM, LYR)` layout.
    pub pmom: DMatrix<f64>,
    /// Total moment count per layer, including the leading coefficient.
    pub max_moments: usize,
    /// Usable moment count passed downstream: `max_moments - 1`, since the
    /// leading normalization coefficient is implicit and not counted.
    pub nmom: usize,
}

/// Round to a fixed number of decimal places.
fn round_decimals(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

/// Validate and marshal a layer-major moment table.
///
/// Validation order matches the external contract: moment count first
/// (inferred from the first row when `max_moments` is `None`, minimum 20),
/// then table shape, then the normalization invariant, then the transpose.
///
/// # Arguments
/// * `rows` - Layer-major table, one moment row per layer
/// * `nlyr` - Number of atmosphere layers the table must cover
/// * `max_moments` - Explicit column count override; `None` infers the
///   width of the first row
///
/// # Errors
/// Returns [`ParameterError`] on an empty or ragged table, fewer than 20
/// moments, a row-count or column-count mismatch, a non-finite entry, or a
/// leading coefficient that is not 1.0 after rounding to 5 decimals.
pub fn marshal_moments(
    rows: &[Vec<f64>],
    nlyr: usize,
    max_moments: Option<usize>,
) -> Result<MarshalledMoments, ParameterError> {
    let first_width = rows
        .first()
        .map(Vec::len)
        .ok_or_else(|| ParameterError::new("phase_moments", "table has no rows"))?;

    let max_moments = max_moments.unwrap_or(first_width);
    if max_moments < MIN_PHASE_MOMENTS {
        return Err(ParameterError::new(
            "max_moments",
            format!("please use a minimum of {MIN_PHASE_MOMENTS} phase moments, got {max_moments}"),
        ));
    }
    let nmom = max_moments - 1;

    if rows.len() != nlyr {
        return Err(ParameterError::new(
            "phase_moments",
            format!("dimension 0 (layers) mismatch: expected {nlyr}, got {}", rows.len()),
        ));
    }
    // A ragged table is the analogue of a failed 2D array conversion
    if rows.iter().any(|row| row.len() != first_width) {
        return Err(ParameterError::new(
            "phase_moments",
            "could not convert to a 2D float array: rows have unequal lengths",
        ));
    }
    // Trimming can only drop columns; a narrower table cannot be widened
    if first_width < max_moments {
        return Err(ParameterError::new(
            "phase_moments",
            format!("dimension 1 (moments) mismatch: expected {max_moments}, got {first_width}"),
        ));
    }

    if rows
        .iter()
        .any(|row| row[..max_moments].iter().any(|x| !x.is_finite()))
    {
        return Err(ParameterError::non_finite("phase_moments"));
    }

    for (lyr, row) in rows.iter().enumerate() {
        let leading = round_decimals(row[0], LEADING_COEFF_DECIMALS);
        if leading != 1.0 {
            return Err(ParameterError::new(
                "phase_moments",
                format!("first phase moment at all layers must be 1.0, layer {lyr} has {}", row[0]),
            ));
        }
    }

    // Transpose to moment-major while trimming excess columns. The leading
    // coefficient is stored rounded, as the solver receives it.
    let pmom = DMatrix::from_fn(max_moments, nlyr, |m, lyr| {
        if m == 0 {
            round_decimals(rows[lyr][0], LEADING_COEFF_DECIMALS)
        } else {
            rows[lyr][m]
        }
    });

    Ok(MarshalledMoments {
        pmom,
        max_moments,
        nmom,
    })
}
