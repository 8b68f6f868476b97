use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// Unifies error handling across the FFI boundary: every failure carries a
/// `repr(C)` code for the caller's control flow and a message for
/// diagnostics.
pub(crate) trait DisortFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> DisortErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `DisortFfiError` for the wrapper's failure
/// scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultDisortError {
    code: DisortErrorCode,
    msg: String,
}

impl DefaultDisortError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g. `"dtau"`, `"out_uu"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: DisortErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a request field that failed validation.
    ///
    /// # Arguments
    /// * `message` - The validation diagnostic, naming the offending field
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: DisortErrorCode::InvalidParameter,
            msg: message,
        }
    }

    /// Create error for an opaque solver-backend failure.
    #[cfg(feature = "native")]
    pub fn solver_failure(message: String) -> Self {
        Self {
            code: DisortErrorCode::SolverFailure,
            msg: message,
        }
    }
}

impl DisortFfiError for DefaultDisortError {
    fn code(&self) -> DisortErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the DISORT wrapper functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisortErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A request field failed validation; the solver was never invoked.
    InvalidParameter = 2,

    /// The solver backend reported a failure after a validated call.
    SolverFailure = 3,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// Allows callers to retrieve diagnostic information after a failed call.
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, DisortErrorCode)> = const { RefCell::new((None, DisortErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, DisortErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, DisortErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred or the message cannot be converted.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is
/// thread-safe. Each thread has its own independent error state.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread
/// that sets or clears the error, or until the thread terminates.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
#[no_mangle]
pub extern "C" fn disort_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `DisortErrorCode::Ok` (0) if no error has occurred
/// - The specific error code from the last failed operation
///
/// # Thread Safety
/// Error codes are stored per-thread (thread-local storage), so this is
/// thread-safe. Each thread has its own independent error state.
#[no_mangle]
pub extern "C" fn disort_get_last_error_code() -> DisortErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
