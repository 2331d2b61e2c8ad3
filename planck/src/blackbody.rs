use crate::constants::{PhysicalConstants, WIEN_DISPLACEMENT};

/// Planck's law with the default constants. `lambda` in meters, `t` in Kelvin.
pub fn spectral_radiance(lambda: f64, t: f64) -> f64 {
    PhysicalConstants::DEFAULT.spectral_radiance(lambda, t)
}

/// Evaluates every wavelength in `lambda` (meters) at temperature `t`,
/// writing `le[i]` for `lambda[i]`.
pub fn black_body(lambda: &[f64], t: f64, le: &mut [f64]) {
    assert_eq!(lambda.len(), le.len());

    for (l, le) in lambda.iter().zip(le.iter_mut()) {
        *le = spectral_radiance(*l, t);
    }
}

pub fn black_body_vec(lambda: &[f64], t: f64) -> Vec<f64> {
    let mut le = vec![0.0; lambda.len()];
    black_body(lambda, t, &mut le);
    le
}

/// Peak emission wavelength in meters.
pub fn wien_peak_wavelength(t: f64) -> f64 {
    WIEN_DISPLACEMENT / t
}

/// Like [`black_body`] but scaled so the radiance at the Wien peak is 1.
pub fn black_body_normalized(lambda: &[f64], t: f64, le: &mut [f64]) {
    black_body(lambda, t, le);
    let max_l = spectral_radiance(wien_peak_wavelength(t), t);

    for l in le.iter_mut() {
        *l /= max_l;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SUN: f64 = 5800.0;

    fn rel_err(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_radiance_at_500nm() {
        // 2hc²/λ⁵ / (e^(hc/λkT) - 1) worked out by hand for λ = 500 nm
        let reference = 2.6861732150117254e13;
        assert!(rel_err(spectral_radiance(5e-7, SUN), reference) < 1e-3);
    }

    #[test]
    fn test_elementwise_correspondence() {
        let lambda = [3e-6, 1e-7, 5e-7, 8e-7, 2e-6];
        let le = black_body_vec(&lambda, SUN);

        assert_eq!(le.len(), lambda.len());
        for (l, le) in lambda.iter().zip(le.iter()) {
            assert_eq!(*le, spectral_radiance(*l, SUN));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(black_body_vec(&[], SUN).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_mismatched_output_len() {
        let mut le = [0.0; 2];
        black_body(&[5e-7; 3], SUN, &mut le);
    }

    #[test]
    fn test_endpoint_baseline() {
        // hc/λkT ≈ 2482 at 1 nm, exp overflows to inf and the quotient is 0
        assert_eq!(spectral_radiance(1e-9, SUN), 0.0);

        let far_ir = spectral_radiance(3e-6, SUN);
        assert!(far_ir.is_finite());
        assert!(far_ir > 0.0);
        assert!(far_ir < spectral_radiance(5e-7, SUN) * 0.05);
    }

    #[test]
    fn test_non_physical_inputs_pass_through() {
        assert!(spectral_radiance(0.0, SUN).is_nan());
        assert_eq!(spectral_radiance(5e-7, 0.0), 0.0);
    }

    #[test]
    fn test_hotter_is_brighter() {
        for l in [2e-7, 5e-7, 1e-6, 3e-6] {
            assert!(spectral_radiance(l, 2.0 * SUN) > spectral_radiance(l, SUN));
        }
    }

    #[test]
    fn test_wien_peak() {
        let peak = wien_peak_wavelength(SUN);
        assert!((peak - 4.996e-7).abs() < 1e-9);

        let left = spectral_radiance(peak * 0.99, SUN);
        let right = spectral_radiance(peak * 1.01, SUN);
        let center = spectral_radiance(peak, SUN);
        assert!(center > left && center > right);
    }

    #[test]
    fn test_normalized() {
        let lambda = [wien_peak_wavelength(SUN), 3e-6];
        let mut le = [0.0; 2];
        black_body_normalized(&lambda, SUN, &mut le);

        assert!((le[0] - 1.0).abs() < 1e-12);
        assert!(le[1] > 0.0 && le[1] < 1.0);
    }
}
