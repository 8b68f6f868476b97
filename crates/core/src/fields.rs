//! Solver output fields
//!
//! The eight arrays DISORT returns, passed through unchanged. No
//! transformation, renaming, or reshaping happens on the way out; this
//! type only records the dimensions of the call so callers can index the
//! intensity field safely.

use serde::{Deserialize, Serialize};

/// The eight output arrays of one solver call.
///
/// Flux-like fields (`rfldir`, `rfldn`, `flup`, `dfdt`, `uavg`) have one
/// entry per output optical depth. `albmed` and `trnmed` have one entry per
/// output zenith cosine (meaningful in the solver's `ibcnd = 1` mode only;
/// carried through regardless). The intensity field `uu` is stored in the
/// solver's own `UU(IU, LU, J)` column-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiativeFields {
    /// Number of output optical depths of this call.
    pub ntau: usize,
    /// Number of output zenith cosines of this call.
    pub numu: usize,
    /// Number of output azimuth angles of this call.
    pub nphi: usize,
    /// Downward direct flux, length `ntau`.
    pub rfldir: Vec<f64>,
    /// Downward diffuse flux, length `ntau`.
    pub rfldn: Vec<f64>,
    /// Upward diffuse flux, length `ntau`.
    pub flup: Vec<f64>,
    /// Flux divergence d(net flux)/d(optical depth), length `ntau`.
    pub dfdt: Vec<f64>,
    /// Mean intensity including the direct beam, length `ntau`.
    pub uavg: Vec<f64>,
    /// Intensity, length `numu * ntau * nphi`, zenith index fastest.
    pub uu: Vec<f64>,
    /// Albedo of the medium per incident beam angle cosine, length `numu`.
    pub albmed: Vec<f64>,
    /// Transmissivity of the medium per incident beam angle cosine, length `numu`.
    pub trnmed: Vec<f64>,
}

impl RadiativeFields {
    /// Create zero-filled fields with the correct shapes for the given
    /// output dimensions.
    #[must_use]
    pub fn zeroed(ntau: usize, numu: usize, nphi: usize) -> Self {
        Self {
            ntau,
            numu,
            nphi,
            rfldir: vec![0.0; ntau],
            rfldn: vec![0.0; ntau],
            flup: vec![0.0; ntau],
            dfdt: vec![0.0; ntau],
            uavg: vec![0.0; ntau],
            uu: vec![0.0; numu * ntau * nphi],
            albmed: vec![0.0; numu],
            trnmed: vec![0.0; numu],
        }
    }

    /// Intensity at zenith-cosine index `iu`, depth index `lu`, azimuth
    /// index `j`.
    ///
    /// # Panics
    /// Panics if an index is out of bounds for the call's dimensions.
    #[must_use]
    pub fn intensity(&self, iu: usize, lu: usize, j: usize) -> f64 {
        assert!(
            iu < self.numu && lu < self.ntau && j < self.nphi,
            "Intensity index out of bounds"
        );
        self.uu[(j * self.ntau + lu) * self.numu + iu]
    }

    /// Whether every array length matches the declared dimensions.
    #[must_use]
    pub fn shapes_consistent(&self) -> bool {
        self.rfldir.len() == self.ntau
            && self.rfldn.len() == self.ntau
            && self.flup.len() == self.ntau
            && self.dfdt.len() == self.ntau
            && self.uavg.len() == self.ntau
            && self.uu.len() == self.numu * self.ntau * self.nphi
            && self.albmed.len() == self.numu
            && self.trnmed.len() == self.numu
    }
}
