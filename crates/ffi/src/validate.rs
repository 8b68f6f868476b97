use crate::error::{DefaultDisortError, DisortErrorCode};
use crate::helpers::{clear_last_error, request_from_raw, track_error, RawRequest};

/// Validate a DISORT request without invoking the solver.
///
/// Runs the full field-by-field validation and marshalling pass and
/// reports the first failure; the solver is never called. A return of
/// `Ok` guarantees the same parameters would produce a complete,
/// correctly shaped solver argument set.
///
/// # Parameters
/// - `num_layers`: Number of atmosphere layers
/// - `phase_moments`: Flat layer-major moment table, `num_layers * row_len` values
/// - `row_len`: Width of each moment row
/// - `max_moments`: Explicit total moment count, or 0 to infer `row_len`
/// - `dtau`/`dtau_len`: Optical thickness per layer
/// - `w0`/`w0_len`: Single-scatter albedo per layer
/// - `temps`/`temps_len`: Level temperatures (`num_layers + 1` values), or
///   null/0 for the default uniform 270.0 profile
/// - `num_streams`: Computational stream count (even, >= 2)
/// - `zen_angles`/`numu`: Output zenith cosines, strictly increasing
/// - `azi_angles`/`nphi`: Output azimuths in degrees
/// - `sol_zen_angle`: Cosine of the solar zenith angle
/// - `beam_intensity`: Incident beam intensity
/// - `surface_albedo`: Bottom-boundary albedo
/// - `accuracy`: Azimuthal series convergence criterion
///
/// # Returns
/// - `Ok` (0) if every field validates
/// - `NullPointer` (1) if a required array pointer is null
/// - `InvalidParameter` (2) with a diagnostic naming the offending field
///
/// # Safety
/// Every non-null pointer must reference a readable block of the declared
/// length.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn disort_validate(
    num_layers: usize,
    phase_moments: *const f64,
    row_len: usize,
    max_moments: usize,
    dtau: *const f64,
    dtau_len: usize,
    w0: *const f64,
    w0_len: usize,
    temps: *const f64,
    temps_len: usize,
    num_streams: usize,
    zen_angles: *const f64,
    numu: usize,
    azi_angles: *const f64,
    nphi: usize,
    sol_zen_angle: f64,
    beam_intensity: f64,
    surface_albedo: f64,
    accuracy: f64,
) -> DisortErrorCode {
    let raw = RawRequest {
        num_layers,
        phase_moments,
        row_len,
        max_moments,
        dtau,
        dtau_len,
        w0,
        w0_len,
        temps,
        temps_len,
        num_streams,
        zen_angles,
        numu,
        azi_angles,
        nphi,
        sol_zen_angle,
        beam_intensity,
        surface_albedo,
        accuracy,
    };

    let request = match request_from_raw(&raw) {
        Ok(request) => request,
        Err(e) => return track_error(&e),
    };

    match request.build() {
        Ok(_) => {
            clear_last_error();
            DisortErrorCode::Ok
        }
        Err(e) => track_error(&DefaultDisortError::invalid_parameter(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{disort_get_last_error, disort_get_last_error_code};
    use std::ffi::CStr;
    use std::ptr;

    /// Owns every input array so the raw pointers stay valid for the call.
    struct CallerArrays {
        moments: Vec<f64>,
        dtau: Vec<f64>,
        w0: Vec<f64>,
        zen: Vec<f64>,
        azi: Vec<f64>,
    }

    impl CallerArrays {
        fn single_layer() -> Self {
            Self {
                moments: vec![1.0; 20],
                dtau: vec![0.1],
                w0: vec![0.95],
                zen: vec![-1.0, -0.5, 0.5, 1.0],
                azi: vec![0.0],
            }
        }

        fn two_layers() -> Self {
            let mut moments = vec![0.3; 40];
            moments[0] = 1.0;
            moments[20] = 1.0;
            Self {
                moments,
                dtau: vec![0.2, 0.3],
                w0: vec![0.9, 0.9],
                zen: vec![-1.0, -0.5, 0.5, 1.0],
                azi: vec![0.0],
            }
        }

        fn validate(&self, num_layers: usize) -> DisortErrorCode {
            unsafe {
                disort_validate(
                    num_layers,
                    self.moments.as_ptr(),
                    self.moments.len() / num_layers,
                    0,
                    self.dtau.as_ptr(),
                    self.dtau.len(),
                    self.w0.as_ptr(),
                    self.w0.len(),
                    ptr::null(),
                    0,
                    32,
                    self.zen.as_ptr(),
                    self.zen.len(),
                    self.azi.as_ptr(),
                    self.azi.len(),
                    1.0,
                    1.0,
                    0.1,
                    1e-8,
                )
            }
        }
    }

    fn last_error_message() -> Option<String> {
        let msg = disort_get_last_error();
        if msg.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned())
    }

    #[test]
    fn test_valid_single_layer_request_returns_ok() {
        let arrays = CallerArrays::single_layer();
        assert_eq!(arrays.validate(1), DisortErrorCode::Ok);
        assert_eq!(disort_get_last_error_code(), DisortErrorCode::Ok);
        assert!(last_error_message().is_none());
    }

    #[test]
    fn test_null_dtau_reports_null_pointer() {
        let arrays = CallerArrays::single_layer();
        let code = unsafe {
            disort_validate(
                1,
                arrays.moments.as_ptr(),
                arrays.moments.len(),
                0,
                ptr::null(),
                0,
                arrays.w0.as_ptr(),
                arrays.w0.len(),
                ptr::null(),
                0,
                32,
                arrays.zen.as_ptr(),
                arrays.zen.len(),
                arrays.azi.as_ptr(),
                arrays.azi.len(),
                1.0,
                1.0,
                0.1,
                1e-8,
            )
        };

        assert_eq!(code, DisortErrorCode::NullPointer);
        assert_eq!(disort_get_last_error_code(), DisortErrorCode::NullPointer);
        assert!(last_error_message().unwrap().contains("dtau"));
    }

    #[test]
    fn test_validation_failure_names_field_in_message() {
        // Two layers with a single-entry dtau: the builder's first failure
        let mut arrays = CallerArrays::two_layers();
        arrays.dtau = vec![0.1];

        assert_eq!(arrays.validate(2), DisortErrorCode::InvalidParameter);
        assert_eq!(disort_get_last_error_code(), DisortErrorCode::InvalidParameter);
        assert!(last_error_message().unwrap().contains("dtau"));
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut bad = CallerArrays::two_layers();
        bad.w0 = vec![0.9];
        assert_eq!(bad.validate(2), DisortErrorCode::InvalidParameter);
        assert!(last_error_message().is_some());

        let good = CallerArrays::two_layers();
        assert_eq!(good.validate(2), DisortErrorCode::Ok);
        assert_eq!(disort_get_last_error_code(), DisortErrorCode::Ok);
        assert!(last_error_message().is_none());
    }
}
