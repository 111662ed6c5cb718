use super::Point2;

/// Normalizes an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Native planar angle of the direction `from -> to`, in degrees `[0, 360)`.
///
/// 0° points along +x and the angle grows counter-clockwise as seen on
/// screen, i.e. towards -y since y grows downwards. A zero-length direction
/// yields 0°.
#[must_use]
pub fn native_angle(from: &Point2, to: &Point2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    normalize_degrees((-dy).atan2(dx).to_degrees())
}

/// Converts a native planar angle into a compass bearing.
///
/// The bearing is 0° pointing up on screen and grows clockwise.
#[must_use]
pub fn bearing_from_native(native: f64) -> f64 {
    normalize_degrees(90.0 - native)
}

/// Compass bearing of the direction `from -> to`, in degrees `[0, 360)`.
#[must_use]
pub fn bearing(from: &Point2, to: &Point2) -> f64 {
    bearing_from_native(native_angle(from, to))
}

/// Circular absolute difference of two angles in degrees, in `[0, 180]`.
#[must_use]
pub fn angle_abs_diff(a: f64, b: f64) -> f64 {
    let d = normalize_degrees(a - b);
    d.min(360.0 - d)
}

/// Population variance of `values` (sum of squared deviations divided by
/// the count). Returns `0.0` for an empty slice.
#[must_use]
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}
