use crate::error::{with_last_error_mut, DefaultDisortError, DisortErrorCode, DisortFfiError};
use disort_core::{ArrayInput, DisortRequest};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Internal helper for FFI functions to record failure details.
pub(crate) fn set_last_error(error: &impl DisortFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl DisortFfiError) -> DisortErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Internal helper called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = DisortErrorCode::Ok;
    });
}

/// Raw caller-supplied request parameters, prior to validation.
///
/// `phase_moments` is a flat layer-major block of `num_layers * row_len`
/// values. `temps` may be null (with `temps_len = 0`) to select the
/// default uniform temperature profile; `max_moments = 0` infers the count
/// from `row_len`.
pub(crate) struct RawRequest {
    pub num_layers: usize,
    pub phase_moments: *const f64,
    pub row_len: usize,
    pub max_moments: usize,
    pub dtau: *const f64,
    pub dtau_len: usize,
    pub w0: *const f64,
    pub w0_len: usize,
    pub temps: *const f64,
    pub temps_len: usize,
    pub num_streams: usize,
    pub zen_angles: *const f64,
    pub numu: usize,
    pub azi_angles: *const f64,
    pub nphi: usize,
    pub sol_zen_angle: f64,
    pub beam_intensity: f64,
    pub surface_albedo: f64,
    pub accuracy: f64,
}

/// Assemble a [`DisortRequest`] from raw pointers.
///
/// # Safety
/// Every non-null pointer must reference a readable block of the declared
/// length.
pub(crate) unsafe fn request_from_raw(raw: &RawRequest) -> Result<DisortRequest, DefaultDisortError> {
    for (name, ptr) in [
        ("phase_moments", raw.phase_moments),
        ("dtau", raw.dtau),
        ("w0", raw.w0),
        ("zen_angles", raw.zen_angles),
        ("azi_angles", raw.azi_angles),
    ] {
        if ptr.is_null() {
            return Err(DefaultDisortError::null_pointer(name));
        }
    }
    if raw.row_len == 0 {
        return Err(DefaultDisortError::invalid_parameter(
            "phase_moments row length must be positive".into(),
        ));
    }

    let table_len = raw.num_layers.checked_mul(raw.row_len).ok_or_else(|| {
        DefaultDisortError::invalid_parameter(
            "phase_moments table size overflows the address space".into(),
        )
    })?;

    let moments = std::slice::from_raw_parts(raw.phase_moments, table_len);
    let phase_moments: Vec<Vec<f64>> = moments
        .chunks_exact(raw.row_len)
        .map(<[f64]>::to_vec)
        .collect();

    unsafe fn seq(ptr: *const f64, len: usize) -> ArrayInput {
        std::slice::from_raw_parts(ptr, len).into()
    }

    let temps = if raw.temps.is_null() || raw.temps_len == 0 {
        None
    } else {
        Some(seq(raw.temps, raw.temps_len))
    };

    Ok(DisortRequest {
        dtau: seq(raw.dtau, raw.dtau_len),
        w0: seq(raw.w0, raw.w0_len),
        max_moments: (raw.max_moments > 0).then_some(raw.max_moments),
        temps,
        num_streams: raw.num_streams,
        zen_angles: seq(raw.zen_angles, raw.numu),
        azi_angles: seq(raw.azi_angles, raw.nphi),
        sol_zen_angle: raw.sol_zen_angle,
        beam_intensity: raw.beam_intensity,
        surface_albedo: raw.surface_albedo,
        accuracy: raw.accuracy,
        ..DisortRequest::new(raw.num_layers, phase_moments)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static ZEN: [f64; 4] = [-1.0, -0.5, 0.5, 1.0];
    static AZI: [f64; 1] = [0.0];

    fn raw_single_layer(moments: &[f64], dtau: &[f64], w0: &[f64]) -> RawRequest {
        RawRequest {
            num_layers: 1,
            phase_moments: moments.as_ptr(),
            row_len: moments.len(),
            max_moments: 0,
            dtau: dtau.as_ptr(),
            dtau_len: dtau.len(),
            w0: w0.as_ptr(),
            w0_len: w0.len(),
            temps: std::ptr::null(),
            temps_len: 0,
            num_streams: 32,
            zen_angles: ZEN.as_ptr(),
            numu: ZEN.len(),
            azi_angles: AZI.as_ptr(),
            nphi: AZI.len(),
            sol_zen_angle: 1.0,
            beam_intensity: 1.0,
            surface_albedo: 0.1,
            accuracy: 1e-8,
        }
    }

    #[test]
    fn test_oversized_table_rejected_before_slice_construction() {
        let moments = vec![1.0; 20];
        let dtau = [0.1];
        let w0 = [0.95];
        let raw = RawRequest {
            // num_layers * row_len would wrap around usize
            num_layers: usize::MAX / 2,
            ..raw_single_layer(&moments, &dtau, &w0)
        };

        let err = unsafe { request_from_raw(&raw) }.unwrap_err();
        assert_eq!(err.code(), DisortErrorCode::InvalidParameter);
        assert!(err.msg().contains("overflows"));
    }

    #[test]
    fn test_null_required_pointer_detected() {
        let moments = vec![1.0; 20];
        let dtau = [0.1];
        let w0 = [0.95];
        let raw = RawRequest {
            w0: std::ptr::null(),
            ..raw_single_layer(&moments, &dtau, &w0)
        };

        let err = unsafe { request_from_raw(&raw) }.unwrap_err();
        assert_eq!(err.code(), DisortErrorCode::NullPointer);
        assert!(err.msg().contains("w0"));
    }
}
