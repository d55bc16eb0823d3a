//! Odd-length, DC-normalized 1-D Gaussian kernel construction for the
//! separable blur pass.

/// Hard ceiling on blur filter width; layout clamps its computed width to
/// this before requesting a kernel.
pub const MAX_FILTER_WIDTH: u32 = 63;

/// Builds a kernel of length `width` (forced odd, clamped to
/// `[1, MAX_FILTER_WIDTH]`) whose entries sum to 1 within floating-point
/// tolerance.
///
/// `K[i] = Phi(i - k + 1) - Phi(i - k)` where `Phi` is the standard normal
/// CDF with `sigma = (2k)/8`, `k = width / 2`; the raw entries are then
/// renormalized so they sum exactly to 1.
///
/// # Example
/// ```
/// use gt_core::kernel::build;
/// let k = build(7);
/// let sum: f64 = k.iter().sum();
/// assert!((sum - 1.0).abs() < 1e-5);
/// assert_eq!(k.len(), 7);
/// ```
#[must_use]
pub fn build(width: u32) -> Vec<f64> {
    let width = (width.clamp(1, MAX_FILTER_WIDTH)) | 1;
    let k = (width / 2) as i64;
    if k == 0 {
        return vec![1.0];
    }
    let sigma = (2 * k) as f64 / 8.0;
    let phi = |x: f64| 0.5 * (1.0 + erf(x / (std::f64::consts::SQRT_2 * sigma)));

    let mut kernel = Vec::with_capacity(width as usize);
    let mut sum = 0.0;
    for i in 0..width as i64 {
        let v = phi((i - k + 1) as f64) - phi((i - k) as f64);
        kernel.push(v);
        sum += v;
    }
    if sum > 0.0 {
        for v in &mut kernel {
            *v /= sum;
        }
    }
    kernel
}

/// Abramowitz & Stegun 7.1.26 rational approximation of `erf`; max
/// absolute error ~1.5e-7, plenty for an 8-bit-per-channel blur kernel.
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}
