//! The solver's fixed positional argument set
//!
//! [`SolverArgs`] freezes the externally imposed calling convention of the
//! DISORT routine. Field order below mirrors the positional order of the
//! external call exactly; backends must pass every field, in this order,
//! with these layouts. Nothing here is a design choice of this crate.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Fully validated, correctly shaped, correctly ordered DISORT arguments.
///
/// Produced only by [`DisortRequest::build`](crate::DisortRequest::build);
/// every invariant of the data model has already been enforced by the time
/// a value of this type exists. All fields are immutable for the duration
/// of one call and nothing persists across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // flag set mirrors the external contract
pub struct SolverArgs {
    /// Number of atmosphere layers.
    pub nlyr: usize,
    /// Optical thickness per layer, length `nlyr`.
    pub dtauc: Vec<f64>,
    /// Single-scatter albedo per layer, length `nlyr`.
    pub ssalb: Vec<f64>,
    /// Usable Legendre moment count (leading coefficient not included).
    pub nmom: usize,
    /// Phase-function table, moment-major, shape (`nmom + 1`, `nlyr`).
    pub pmom: DMatrix<f64>,
    /// Level temperatures, length `nlyr + 1`, index 0 = top of atmosphere.
    pub temper: Vec<f64>,
    /// Lower wavenumber bound; thermal handling is disabled, always 0.0.
    pub wvnmlo: f64,
    /// Upper wavenumber bound; thermal handling is disabled, always 0.0.
    pub wvnmhi: f64,
    /// Output at user depths; always `true` (auto-grid output is not used).
    pub usrtau: bool,
    /// Number of output optical depths.
    pub ntau: usize,
    /// Output optical depths, length `ntau`.
    pub utau: Vec<f64>,
    /// Number of computational streams (even, >= 2).
    pub nstr: usize,
    /// Output at user angles; always `true`.
    pub usrang: bool,
    /// Number of output zenith cosines.
    pub numu: usize,
    /// Output zenith-angle cosines, strictly increasing, length `numu`.
    pub umu: Vec<f64>,
    /// Number of output azimuth angles.
    pub nphi: usize,
    /// Output azimuth angles in degrees, length `nphi`.
    pub phi: Vec<f64>,
    /// Boundary-condition mode; always 0 (external isotropic/Lambertian
    /// default; internal-medium-albedo modes are not exposed).
    pub ibcnd: i32,
    /// Incident beam intensity.
    pub fbeam: f64,
    /// Cosine of the solar zenith angle.
    pub umu0: f64,
    /// Solar azimuth in degrees; always 0.0.
    pub phi0: f64,
    /// Isotropic top-boundary intensity; always 0.0.
    pub fisot: f64,
    /// Lambertian bottom boundary; always `true`.
    pub lamber: bool,
    /// Bottom-boundary albedo.
    pub albedo: f64,
    /// Bottom-boundary temperature; thermal handling disabled, always 0.0.
    pub btemp: f64,
    /// Top-boundary temperature; thermal handling disabled, always 0.0.
    pub ttemp: f64,
    /// Top-boundary emissivity; thermal handling disabled, always 0.0.
    pub temis: f64,
    /// Thermal emission flag; always `false` (pure shortwave/scattering).
    pub plank: bool,
    /// Flux-only flag; always `false` (intensities are requested too).
    pub onlyfl: bool,
    /// Convergence criterion for the azimuthal cosine series.
    pub accur: f64,
    /// Print-control flags; all disabled.
    pub prnt: [bool; 5],
    /// Banner passed to the solver; always empty.
    pub header: String,
}

#[cfg(test)]
mod tests {
    use crate::DisortRequest;

    #[test]
    fn test_fixed_settings_forced_on_every_build() {
        let request = DisortRequest::new(1, vec![{
            let mut row = vec![0.0; 20];
            row[0] = 1.0;
            row
        }]);
        let args = request.build().unwrap();

        assert!(args.usrtau && args.usrang && args.lamber);
        assert!(!args.plank && !args.onlyfl);
        assert_eq!(args.ibcnd, 0);
        assert_eq!(args.phi0, 0.0);
        assert_eq!(args.fisot, 0.0);
        assert_eq!((args.wvnmlo, args.wvnmhi), (0.0, 0.0));
        assert_eq!((args.btemp, args.ttemp, args.temis), (0.0, 0.0, 0.0));
        assert_eq!(args.prnt, [false; 5]);
        assert!(args.header.is_empty());
    }
}
