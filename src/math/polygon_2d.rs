use super::{almost_equal, wrap_index, Point2};

/// Vertex winding of a polygon as seen on screen (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    /// Fewer than three effective vertices.
    InvalidTooSmall,
}

/// Finds a vertex that lies on the convex hull: smallest y, and on ties
/// the smallest x. The earliest index wins on exact ties.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn find_corner_point(points: &[Point2]) -> Option<usize> {
    let mut corner = None;
    let mut min_y = f64::MAX;
    let mut min_x_at_min_y = f64::MAX;

    for (i, pt) in points.iter().enumerate() {
        if pt.y > min_y {
            continue;
        }
        if almost_equal(pt.y, min_y) && pt.x >= min_x_at_min_y {
            continue;
        }
        corner = Some(i);
        min_y = pt.y;
        min_x_at_min_y = pt.x;
    }
    corner
}

/// Classifies the winding of the open vertex ring `points`.
///
/// `points` must not repeat the first vertex at the end. The sign of the
/// orientation determinant at a convex hull corner decides the winding; an
/// exactly zero determinant reports [`Orientation::CounterClockwise`].
#[must_use]
pub fn polygon_orientation(points: &[Point2]) -> Orientation {
    let n = points.len();
    if n <= 2 {
        return Orientation::InvalidTooSmall;
    }
    let Some(corner) = find_corner_point(points) else {
        return Orientation::InvalidTooSmall;
    };

    #[allow(clippy::cast_possible_wrap)]
    let corner_i = corner as isize;
    let a = &points[wrap_index(corner_i - 1, n)];
    let b = &points[corner];
    let c = &points[wrap_index(corner_i + 1, n)];

    //     | 1 xa ya |
    // det | 1 xb yb |
    //     | 1 xc yc |
    let det = (b.x * c.y + a.x * b.y + a.y * c.x) - (a.y * b.x + b.y * c.x + a.x * c.y);
    if det > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rotated(points: &[Point2], k: usize) -> Vec<Point2> {
        let mut out = points[k..].to_vec();
        out.extend_from_slice(&points[..k]);
        out
    }

    #[test]
    fn triangle_and_reverse_have_opposite_winding() {
        let tri = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)];
        let rev = [p(0.0, 0.0), p(4.0, 4.0), p(4.0, 0.0)];
        assert_eq!(polygon_orientation(&tri), Orientation::Clockwise);
        assert_eq!(polygon_orientation(&rev), Orientation::CounterClockwise);
    }

    #[test]
    fn too_small() {
        assert_eq!(polygon_orientation(&[]), Orientation::InvalidTooSmall);
        assert_eq!(
            polygon_orientation(&[p(0.0, 0.0), p(1.0, 1.0)]),
            Orientation::InvalidTooSmall
        );
    }

    #[test]
    fn collinear_triple_is_counter_clockwise() {
        let line = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        assert_eq!(polygon_orientation(&line), Orientation::CounterClockwise);
    }

    #[test]
    fn invariant_under_rotation_of_start_vertex() {
        // Concave "L" shape, clockwise on screen.
        let shape = [
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 3.0),
            p(5.0, 3.0),
            p(5.0, 5.0),
            p(0.0, 5.0),
        ];
        let expected = polygon_orientation(&shape);
        assert_eq!(expected, Orientation::Clockwise);

        let reversed: Vec<Point2> = shape.iter().rev().copied().collect();
        for k in 0..shape.len() {
            assert_eq!(polygon_orientation(&rotated(&shape, k)), expected);
            assert_eq!(
                polygon_orientation(&rotated(&reversed, k)),
                Orientation::CounterClockwise
            );
        }
    }

    #[test]
    fn corner_point_prefers_min_y_then_min_x() {
        let pts = [p(3.0, 1.0), p(2.0, 0.0), p(1.0, 0.0), p(0.0, 2.0)];
        assert_eq!(find_corner_point(&pts), Some(2));
        assert_eq!(find_corner_point(&[]), None);
    }

    #[test]
    fn corner_point_earliest_index_on_exact_tie() {
        let pts = [p(5.0, 5.0), p(1.0, 0.0), p(3.0, 3.0), p(1.0, 0.0)];
        assert_eq!(find_corner_point(&pts), Some(1));
    }

    #[test]
    fn square_is_clockwise_on_screen() {
        let square = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_eq!(polygon_orientation(&square), Orientation::Clockwise);
        let reversed: Vec<Point2> = square.iter().rev().copied().collect();
        assert_eq!(polygon_orientation(&reversed), Orientation::CounterClockwise);
    }

    #[test]
    fn corner_point_y_within_tolerance_counts_as_tie() {
        // The second y is lower by less than TOLERANCE, so the x tie-break
        // applies and the earlier point with smaller x keeps the corner.
        let pts = [p(1.0, 1e-12), p(2.0, 0.0)];
        assert_eq!(find_corner_point(&pts), Some(0));
        // A strictly lower y with smaller x wins.
        let pts = [p(2.0, 1e-12), p(1.0, 0.0)];
        assert_eq!(find_corner_point(&pts), Some(1));
        // A y above the running minimum never replaces it, whatever its x.
        let pts = [p(2.0, 0.0), p(1.0, 1e-12)];
        assert_eq!(find_corner_point(&pts), Some(0));
    }
}
