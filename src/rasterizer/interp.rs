//! Linear interpolation over an inclusive integer range.
//!
//! These are the workhorses of scan conversion: every edge walk and every
//! horizontal span is one of these sequences.

/// Interpolate from `d0` at `i0` to `d1` at `i1`, one value per integer step.
///
/// Returns `i1 - i0 + 1` values walked at constant slope; the first equals
/// `d0` and the last lands on `d1` up to floating error. The degenerate
/// range `i0 == i1` yields exactly `[d0]`, since a zero-length step has no
/// rate of change to divide by. Callers normalize so `i0 <= i1`.
pub fn interpolate(i0: i32, d0: f32, i1: i32, d1: f32) -> Vec<f32> {
    if i0 == i1 {
        return vec![d0];
    }
    debug_assert!(i0 < i1, "interpolation range must be normalized");

    let slope = (d1 - d0) / (i1 - i0) as f32;
    let mut values = Vec::with_capacity((i1 - i0 + 1) as usize);
    let mut d = d0;
    for _ in i0..=i1 {
        values.push(d);
        d += slope;
    }
    values
}

/// Integer variant of [`interpolate`] for pixel coordinates.
///
/// The walk is carried in `f32` and truncated at each emission, so rounding
/// error never compounds across a long edge.
pub fn interpolate_int(i0: i32, d0: i32, i1: i32, d1: i32) -> Vec<i32> {
    if i0 == i1 {
        return vec![d0];
    }
    debug_assert!(i0 < i1, "interpolation range must be normalized");

    let slope = (d1 - d0) as f32 / (i1 - i0) as f32;
    let mut values = Vec::with_capacity((i1 - i0 + 1) as usize);
    let mut d = d0 as f32;
    for _ in i0..=i1 {
        values.push(d as i32);
        d += slope;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_yields_single_value() {
        assert_eq!(interpolate(3, 7.5, 3, 99.0), vec![7.5]);
        assert_eq!(interpolate_int(-2, 4, -2, 10), vec![4]);
    }

    #[test]
    fn endpoints_and_length() {
        let values = interpolate(0, 1.0, 10, 6.0);
        assert_eq!(values.len(), 11);
        assert!((values[0] - 1.0).abs() < 1e-6);
        assert!((values[10] - 6.0).abs() < 1e-4);
    }

    #[test]
    fn successive_differences_are_constant() {
        let values = interpolate(0, -3.0, 8, 5.0);
        let step = values[1] - values[0];
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-5);
        }
    }

    #[test]
    fn integer_variant_tracks_real_walk() {
        let values = interpolate_int(0, 0, 9, 3);
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], 0);
        assert_eq!(values[9], 3);
        // Monotonic: truncation never steps backwards on a rising edge.
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }
}
