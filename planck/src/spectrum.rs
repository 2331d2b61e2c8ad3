use crate::blackbody::black_body_vec;

/// `n` evenly spaced values over `[start, end]`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // keep the upper bound exact
            v[n - 1] = end;
            v
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumConfig {
    /// Shortest sampled wavelength (m)
    pub lambda_min: f64,
    /// Longest sampled wavelength (m)
    pub lambda_max: f64,
    pub samples: usize,
    /// Kelvin
    pub temperature: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            lambda_min: 1e-9,
            lambda_max: 3e-6,
            samples: 500,
            // surface of the sun
            temperature: 5800.0,
        }
    }
}

/// Sampled radiance curve. `radiance[i]` belongs to `wavelengths[i]`.
#[derive(Debug, Clone)]
// deny manual construct
#[non_exhaustive]
pub struct Spectrum {
    pub wavelengths: Vec<f64>,
    pub radiance: Vec<f64>,
    pub temperature: f64,
}

impl Spectrum {
    pub fn new(wavelengths: Vec<f64>, temperature: f64) -> Self {
        let radiance = black_body_vec(&wavelengths, temperature);

        if radiance.iter().any(|r| !r.is_finite()) {
            log::warn!("Non-finite radiance at T = {} K", temperature);
        }

        Self {
            wavelengths,
            radiance,
            temperature,
        }
    }

    pub fn evaluate(config: &SpectrumConfig) -> Self {
        log::debug!(
            "Evaluating {} samples over [{:e}, {:e}] m at {} K",
            config.samples,
            config.lambda_min,
            config.lambda_max,
            config.temperature
        );

        Self::new(
            linspace(config.lambda_min, config.lambda_max, config.samples),
            config.temperature,
        )
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    pub fn wavelengths_nm(&self) -> Vec<f64> {
        self.wavelengths.iter().map(|l| l * 1e9).collect()
    }

    /// `[nm, radiance]` pairs ready for plotting.
    pub fn points_nm(&self) -> Vec<[f64; 2]> {
        self.wavelengths
            .iter()
            .zip(self.radiance.iter())
            .map(|(l, r)| [l * 1e9, *r])
            .collect()
    }

    /// Wavelength (m) and radiance of the largest finite sample.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.wavelengths
            .iter()
            .zip(self.radiance.iter())
            .filter(|(_, r)| r.is_finite())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(l, r)| (*l, *r))
    }

    /// Indices of samples strictly greater than both neighbours.
    pub fn local_maxima(&self) -> Vec<usize> {
        self.radiance
            .windows(3)
            .enumerate()
            .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Legend text, e.g. `T = 5800 K`.
    pub fn label(&self) -> String {
        format!("T = {} K", self.temperature)
    }
}
