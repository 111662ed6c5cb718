use crate::math::almost_equal_eps;

use super::annotate::LabelSegment;

/// Lengths closer than this are treated as equal when ordering.
pub const LENGTH_TIE_TOLERANCE: f64 = 0.001;

/// Returns `true` if `a` should be listed before `b`: longer first, and for
/// lengths equal within [`LENGTH_TIE_TOLERANCE`] the lower start index first.
/// Hidden segments have no start index and order before any index.
#[must_use]
pub fn goes_before(a: &LabelSegment, b: &LabelSegment) -> bool {
    if almost_equal_eps(a.length(), b.length(), LENGTH_TIE_TOLERANCE) {
        a.index_from() < b.index_from()
    } else {
        a.length() > b.length()
    }
}

/// Stable merge sort by [`goes_before`].
///
/// The tolerance makes the comparator intransitive, so this avoids the
/// standard library sorts, which may panic on inconsistent orderings.
#[must_use]
pub fn sort_by_length(mut segments: Vec<LabelSegment>) -> Vec<LabelSegment> {
    if segments.len() <= 1 {
        return segments;
    }
    let right = segments.split_off(segments.len() / 2);
    merge(sort_by_length(segments), sort_by_length(right))
}

fn merge(left: Vec<LabelSegment>, right: Vec<LabelSegment>) -> Vec<LabelSegment> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => goes_before(b, a),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        if take_right {
            out.extend(right.next());
        } else {
            out.extend(left.next());
        }
    }
    out
}
