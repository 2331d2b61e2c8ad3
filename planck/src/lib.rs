//! Spectral radiance of an ideal black body.

pub mod blackbody;
pub mod constants;
pub mod spectrum;

pub use blackbody::{black_body, black_body_normalized, black_body_vec, spectral_radiance};
pub use constants::PhysicalConstants;
pub use spectrum::{linspace, Spectrum, SpectrumConfig};
