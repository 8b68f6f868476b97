//! Fortran DISORT backend
//!
//! Binds the C shim (`libdisort_c`) that fronts the Fortran DISORT
//! routine. The shim takes the solver's positional argument list exactly
//! as frozen in [`SolverArgs`], followed by pointers to the eight
//! caller-allocated output arrays, and returns a status code (0 = ok).
//! Logicals travel as `c_int` (0/1) and the phase-moment table as a flat
//! moment-major block, which is exactly the column-major storage of the
//! marshalled `DMatrix`.

use crate::args::SolverArgs;
use crate::error::SolverError;
use crate::fields::RadiativeFields;
use crate::solver::DisortSolver;
use std::ffi::CString;
use std::os::raw::{c_char, c_double, c_int};
use tracing::debug;

#[link(name = "disort_c")]
extern "C" {
    #[allow(clippy::too_many_arguments)]
    fn disort_driver(
        nlyr: c_int,
        dtauc: *const c_double,
        ssalb: *const c_double,
        nmom: c_int,
        pmom: *const c_double,
        temper: *const c_double,
        wvnmlo: c_double,
        wvnmhi: c_double,
        usrtau: c_int,
        ntau: c_int,
        utau: *const c_double,
        nstr: c_int,
        usrang: c_int,
        numu: c_int,
        umu: *const c_double,
        nphi: c_int,
        phi: *const c_double,
        ibcnd: c_int,
        fbeam: c_double,
        umu0: c_double,
        phi0: c_double,
        fisot: c_double,
        lamber: c_int,
        albedo: c_double,
        btemp: c_double,
        ttemp: c_double,
        temis: c_double,
        plank: c_int,
        onlyfl: c_int,
        accur: c_double,
        prnt: *const c_int,
        header: *const c_char,
        rfldir: *mut c_double,
        rfldn: *mut c_double,
        flup: *mut c_double,
        dfdt: *mut c_double,
        uavg: *mut c_double,
        uu: *mut c_double,
        albmed: *mut c_double,
        trnmed: *mut c_double,
    ) -> c_int;
}

/// The real discrete-ordinates solver, reached through the C shim.
///
/// Solver-internal failures (numerical non-convergence, invalid internal
/// state) surface only as the shim's status code and are passed through
/// uninterpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDisort;

impl DisortSolver for NativeDisort {
    fn run(&self, args: &SolverArgs) -> Result<RadiativeFields, SolverError> {
        let header = CString::new(args.header.as_str())
            .map_err(|_| SolverError("header contains an interior NUL byte".into()))?;
        let prnt: Vec<c_int> = args.prnt.iter().map(|&p| c_int::from(p)).collect();

        let mut fields = RadiativeFields::zeroed(args.ntau, args.numu, args.nphi);

        debug!(nlyr = args.nlyr, nstr = args.nstr, "invoking native disort");
        let status = unsafe {
            disort_driver(
                args.nlyr as c_int,
                args.dtauc.as_ptr(),
                args.ssalb.as_ptr(),
                args.nmom as c_int,
                args.pmom.as_slice().as_ptr(),
                args.temper.as_ptr(),
                args.wvnmlo,
                args.wvnmhi,
                c_int::from(args.usrtau),
                args.ntau as c_int,
                args.utau.as_ptr(),
                args.nstr as c_int,
                c_int::from(args.usrang),
                args.numu as c_int,
                args.umu.as_ptr(),
                args.nphi as c_int,
                args.phi.as_ptr(),
                args.ibcnd,
                args.fbeam,
                args.umu0,
                args.phi0,
                args.fisot,
                c_int::from(args.lamber),
                args.albedo,
                args.btemp,
                args.ttemp,
                args.temis,
                c_int::from(args.plank),
                c_int::from(args.onlyfl),
                args.accur,
                prnt.as_ptr(),
                header.as_ptr(),
                fields.rfldir.as_mut_ptr(),
                fields.rfldn.as_mut_ptr(),
                fields.flup.as_mut_ptr(),
                fields.dfdt.as_mut_ptr(),
                fields.uavg.as_mut_ptr(),
                fields.uu.as_mut_ptr(),
                fields.albmed.as_mut_ptr(),
                fields.trnmed.as_mut_ptr(),
            )
        };

        if status != 0 {
            return Err(SolverError(format!("disort shim returned status {status}")));
        }
        Ok(fields)
    }

    fn backend_name(&self) -> &'static str {
        "native-disort"
    }
}
