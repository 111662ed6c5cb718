pub mod angle_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type in screen-style coordinates (y grows downwards).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `true` if `a` and `b` differ by at most [`TOLERANCE`].
#[must_use]
pub fn almost_equal(a: f64, b: f64) -> bool {
    almost_equal_eps(a, b, TOLERANCE)
}

/// Returns `true` if `a` and `b` differ by at most `epsilon`.
#[must_use]
pub fn almost_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Wraps a possibly negative or overflowing index into `0..n`.
///
/// `n` must be non-zero.
#[must_use]
pub fn wrap_index(i: isize, n: usize) -> usize {
    #[allow(clippy::cast_possible_wrap)]
    let n = n as isize;
    #[allow(clippy::cast_sign_loss)]
    let wrapped = i.rem_euclid(n) as usize;
    wrapped
}
