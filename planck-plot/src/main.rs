use std::error::Error;

use planck::{
    black_body_normalized, blackbody::wien_peak_wavelength, Spectrum, SpectrumConfig,
};
use render::Figure;

mod render;

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let config = SpectrumConfig::default();
    let spectrum = Spectrum::evaluate(&config);

    if let Some((lambda, radiance)) = spectrum.peak() {
        let mut relative = [0.0];
        black_body_normalized(&[lambda], config.temperature, &mut relative);

        log::info!(
            "Peak at {:.1} nm ({:e} W/sr/m^3, {:.4} of the Wien maximum), Wien predicts {:.1} nm",
            lambda * 1e9,
            radiance,
            relative[0],
            wien_peak_wavelength(config.temperature) * 1e9
        );
    }

    render::show(Figure::default(), &spectrum)?;

    Ok(())
}
