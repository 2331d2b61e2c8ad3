/// Wien's displacement constant (m·K).
pub const WIEN_DISPLACEMENT: f64 = 2.8977721e-3;

/// The constants entering Planck's law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Planck's constant (J·s)
    pub h: f64,
    /// Speed of light (m/s)
    pub c: f64,
    /// Boltzmann's constant (J/K)
    pub kb: f64,
}

impl PhysicalConstants {
    pub const DEFAULT: Self = Self {
        h: 6.626e-34,
        c: 3.0e8,
        kb: 1.381e-23,
    };

    /// Spectral radiance in W·sr⁻¹·m⁻³ for a wavelength in meters and a
    /// temperature in Kelvin.
    ///
    /// Non-physical inputs are not rejected: `lambda == 0.0` yields NaN and
    /// `t == 0.0` yields `0.0`, straight from IEEE-754 arithmetic.
    #[inline]
    pub fn spectral_radiance(&self, lambda: f64, t: f64) -> f64 {
        let Self { h, c, kb } = *self;
        let lambda5 = (lambda * lambda) * (lambda * lambda) * lambda;

        (2.0 * h * c * c / lambda5) / (((h * c) / (lambda * kb * t)).exp() - 1.0)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::DEFAULT
    }
}
