use crate::error::{DefaultDisortError, DisortErrorCode};
use crate::helpers::{clear_last_error, request_from_raw, track_error, RawRequest};
use disort_core::{DisortError, NativeDisort};

/// Validate a DISORT request and invoke the native Fortran solver.
///
/// Parameters match [`disort_validate`](crate::disort_validate); on
/// success the eight solver output arrays are copied into the
/// caller-provided buffers. The number of output depths is always 1, so
/// the required buffer sizes are:
///
/// - `out_rfldir`, `out_rfldn`, `out_flup`, `out_dfdt`, `out_uavg`: 1 value each
/// - `out_uu`: `numu * nphi` values (zenith index fastest)
/// - `out_albmed`, `out_trnmed`: `numu` values each
///
/// # Returns
/// - `Ok` (0) on success, with all output buffers populated
/// - `NullPointer` (1) if a required pointer is null
/// - `InvalidParameter` (2) if a field fails validation (solver not invoked)
/// - `SolverFailure` (3) with the backend's opaque report
///
/// # Safety
/// Input pointers must reference readable blocks of the declared lengths;
/// output pointers must reference writable blocks of the sizes above.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn disort_run(
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
    out_rfldir: *mut f64,
    out_rfldn: *mut f64,
    out_flup: *mut f64,
    out_dfdt: *mut f64,
    out_uavg: *mut f64,
    out_uu: *mut f64,
    out_albmed: *mut f64,
    out_trnmed: *mut f64,
) -> DisortErrorCode {
    let outputs = [
        ("out_rfldir", out_rfldir),
        ("out_rfldn", out_rfldn),
        ("out_flup", out_flup),
        ("out_dfdt", out_dfdt),
        ("out_uavg", out_uavg),
        ("out_uu", out_uu),
        ("out_albmed", out_albmed),
        ("out_trnmed", out_trnmed),
    ];
    for (name, ptr) in outputs {
        if ptr.is_null() {
            return track_error(&DefaultDisortError::null_pointer(name));
        }
    }

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

    let fields = match request.run(&NativeDisort) {
        Ok(fields) => fields,
        Err(DisortError::Parameter(e)) => {
            return track_error(&DefaultDisortError::invalid_parameter(e.to_string()))
        }
        Err(DisortError::Solver(e)) => {
            return track_error(&DefaultDisortError::solver_failure(e.to_string()))
        }
    };

    std::ptr::copy_nonoverlapping(fields.rfldir.as_ptr(), out_rfldir, fields.ntau);
    std::ptr::copy_nonoverlapping(fields.rfldn.as_ptr(), out_rfldn, fields.ntau);
    std::ptr::copy_nonoverlapping(fields.flup.as_ptr(), out_flup, fields.ntau);
    std::ptr::copy_nonoverlapping(fields.dfdt.as_ptr(), out_dfdt, fields.ntau);
    std::ptr::copy_nonoverlapping(fields.uavg.as_ptr(), out_uavg, fields.ntau);
    std::ptr::copy_nonoverlapping(fields.uu.as_ptr(), out_uu, fields.uu.len());
    std::ptr::copy_nonoverlapping(fields.albmed.as_ptr(), out_albmed, fields.numu);
    std::ptr::copy_nonoverlapping(fields.trnmed.as_ptr(), out_trnmed, fields.numu);

    clear_last_error();
    DisortErrorCode::Ok
}
