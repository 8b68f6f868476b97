//! The request builder
//!
//! [`DisortRequest`] is the one caller-facing surface: convenient,
//! partially defaulted scientific parameters in, a fully validated
//! [`SolverArgs`] out. Validation runs left to right and short-circuits on
//! the first failure; the solver is never invoked on any failure path.
//! Defaults are constructed fresh per call from literals, so no mutable
//! state is shared across invocations and two builds from identical inputs
//! produce identical argument sets.

use crate::args::SolverArgs;
use crate::error::{DisortError, ParameterError};
use crate::fields::RadiativeFields;
use crate::input::{coerce_scalar, ArrayInput};
use crate::moments::marshal_moments;
use crate::solver::DisortSolver;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Uniform level temperature used when the caller leaves the profile at
/// its default.
pub const DEFAULT_TEMPERATURE: f64 = 270.0;

/// A DISORT request with caller-supplied fields and literal defaults.
///
/// Required fields are the layer count and the layer-major phase-moment
/// table; everything else defaults as documented per field. Fields are
/// public so callers can use struct-update syntax:
///
/// ```
/// use disort_core::DisortRequest;
///
/// let mut row = vec![0.0; 20];
/// row[0] = 1.0;
/// let request = DisortRequest {
///     surface_albedo: 0.3,
///     ..DisortRequest::new(1, vec![row])
/// };
/// assert!(request.build().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisortRequest {
    /// Number of atmosphere layers.
    pub num_layers: usize,
    /// Phase-function table, layer-major: one Legendre moment row per
    /// layer, leading coefficient 1.0.
    pub phase_moments: Vec<Vec<f64>>,
    /// Optical thickness per layer. Default: a single-layer value of 0.1.
    pub dtau: ArrayInput,
    /// Single-scatter albedo per layer. Default: a single-layer value of 0.95.
    pub w0: ArrayInput,
    /// Explicit total moment count. Default: infer the first row's width.
    pub max_moments: Option<usize>,
    /// Level temperatures, length `num_layers + 1`, top of atmosphere
    /// first. Default: a uniform 270.0 profile across all levels.
    pub temps: Option<ArrayInput>,
    /// Number of computational streams (even, >= 2). Default: 32.
    pub num_streams: usize,
    /// Output zenith-angle cosines, strictly increasing.
    /// Default: `[-1.0, -0.5, 0.5, 1.0]`.
    pub zen_angles: ArrayInput,
    /// Output azimuth angles in degrees. Default: `[0.0]`.
    pub azi_angles: ArrayInput,
    /// Cosine of the solar zenith angle. Default: 1.0.
    pub sol_zen_angle: f64,
    /// Incident beam intensity. Default: 1.0.
    pub beam_intensity: f64,
    /// Surface albedo. Default: 0.1.
    pub surface_albedo: f64,
    /// Convergence criterion for the azimuthal cosine series. Default: 1e-8.
    pub accuracy: f64,
}

impl DisortRequest {
    /// Create a request with the two required fields and every default.
    #[must_use]
    pub fn new(num_layers: usize, phase_moments: Vec<Vec<f64>>) -> Self {
        Self {
            num_layers,
            phase_moments,
            dtau: ArrayInput::Sequence(vec![0.1]),
            w0: ArrayInput::Sequence(vec![0.95]),
            max_moments: None,
            temps: None,
            num_streams: 32,
            zen_angles: ArrayInput::Sequence(vec![-1.0, -0.5, 0.5, 1.0]),
            azi_angles: ArrayInput::Sequence(vec![0.0]),
            sol_zen_angle: 1.0,
            beam_intensity: 1.0,
            surface_albedo: 0.1,
            accuracy: 1e-8,
        }
    }

    /// Validate every field and assemble the solver's positional argument
    /// set.
    ///
    /// Validation proceeds in the external contract's order and stops at
    /// the first failure: layer count, moment count, moment table, optical
    /// depths, single-scatter albedos, temperatures, output depths, output
    /// angles, beam geometry, surface, streams, accuracy.
    ///
    /// # Errors
    /// Returns [`ParameterError`] naming the first offending field. On any
    /// error the solver is not invoked and no partial argument set escapes.
    pub fn build(&self) -> Result<SolverArgs, ParameterError> {
        let nlyr = self.num_layers;
        if nlyr == 0 {
            return Err(ParameterError::new("num_layers", "must be at least 1"));
        }
        debug!(nlyr, "validating radiative-transfer request");

        let moments = marshal_moments(&self.phase_moments, nlyr, self.max_moments)?;

        let dtauc = self.dtau.coerce_with_len("dtau", nlyr)?;
        if dtauc.iter().any(|&x| x <= 0.0) {
            return Err(ParameterError::new("dtau", "optical thickness must be positive"));
        }

        let ssalb = self.w0.coerce_with_len("w0", nlyr)?;
        if ssalb.iter().any(|&x| !(0.0..=1.0).contains(&x)) {
            return Err(ParameterError::new(
                "w0",
                "single-scatter albedo must be within [0, 1]",
            ));
        }

        let temper = match &self.temps {
            // Sentinel default: uniform profile across all level boundaries
            None => vec![DEFAULT_TEMPERATURE; nlyr + 1],
            Some(temps) => temps.coerce_with_len("temps", nlyr + 1)?,
        };

        // Output is evaluated at the top layer's optical thickness only
        let utau = vec![dtauc[0]];
        let ntau = utau.len();

        let umu = self.zen_angles.coerce("zen_angles")?;
        if umu.is_empty() {
            return Err(ParameterError::new("zen_angles", "at least one output angle required"));
        }
        if umu.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ParameterError::new(
                "zen_angles",
                "zenith cosines must be strictly increasing",
            ));
        }
        let numu = umu.len();

        let phi = self.azi_angles.coerce("azi_angles")?;
        if phi.is_empty() {
            return Err(ParameterError::new("azi_angles", "at least one output angle required"));
        }
        let nphi = phi.len();

        let umu0 = coerce_scalar("sol_zen_angle", self.sol_zen_angle)?;
        let fbeam = coerce_scalar("beam_intensity", self.beam_intensity)?;
        let albedo = coerce_scalar("surface_albedo", self.surface_albedo)?;

        let nstr = self.num_streams;
        if nstr < 2 || nstr % 2 != 0 {
            return Err(ParameterError::new(
                "num_streams",
                format!("stream count must be an even integer >= 2, got {nstr}"),
            ));
        }

        let accur = coerce_scalar("accuracy", self.accuracy)?;

        Ok(SolverArgs {
            nlyr,
            dtauc,
            ssalb,
            nmom: moments.nmom,
            pmom: moments.pmom,
            temper,
            wvnmlo: 0.0,
            wvnmhi: 0.0,
            usrtau: true,
            ntau,
            utau,
            nstr,
            usrang: true,
            numu,
            umu,
            nphi,
            phi,
            ibcnd: 0,
            fbeam,
            umu0,
            phi0: 0.0,
            fisot: 0.0,
            lamber: true,
            albedo,
            btemp: 0.0,
            ttemp: 0.0,
            temis: 0.0,
            plank: false,
            onlyfl: false,
            accur,
            prnt: [false; 5],
            header: String::new(),
        })
    }

    /// Validate, marshal, and invoke the solver in one step.
    ///
    /// # Errors
    /// Returns [`DisortError::Parameter`] if validation fails (the solver
    /// is never invoked) or [`DisortError::Solver`] with the backend's
    /// opaque report otherwise.
    pub fn run<S: DisortSolver + ?Sized>(&self, solver: &S) -> Result<RadiativeFields, DisortError> {
        let args = self.build()?;
        debug!(
            nlyr = args.nlyr,
            nstr = args.nstr,
            backend = solver.backend_name(),
            "dispatching validated request"
        );
        Ok(solver.run(&args)?)
    }
}
