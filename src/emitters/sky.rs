// Copyright @yucwang 2026

use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// Vertical gradient lighting every escaping ray. It is the only light in
/// the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyGradient {
    horizon: RGBSpectrum,
    zenith: RGBSpectrum,
}

impl Default for SkyGradient {
    fn default() -> Self {
        Self::new(RGBSpectrum::white(), RGBSpectrum::new(0.529, 0.808, 0.922))
    }
}

impl SkyGradient {
    pub fn new(horizon: RGBSpectrum, zenith: RGBSpectrum) -> Self {
        Self { horizon, zenith }
    }

    /// Radiance arriving from direction `dir`; `dir` need not be normalized.
    pub fn eval(&self, dir: &Vector3f) -> RGBSpectrum {
        let t = 0.5 * (dir.normalize().y + 1.0);
        self.horizon.lerp(&self.zenith, t)
    }
}
