//! Easing curves.

/// Cubic ease-in-out. Accelerates through the first half, decelerates
/// through the second; input outside 0..=1 is clamped.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Cubic ease-out, for motion that should start at gesture speed and
/// decelerate into its target.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    1.0 - u * u * u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_fixed() {
        for ease in [ease_in_out_cubic, ease_out_cubic] {
            assert_eq!(ease(0.0), 0.0);
            assert_eq!(ease(1.0), 1.0);
            assert_eq!(ease(-1.0), 0.0);
            assert_eq!(ease(2.0), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for ease in [ease_in_out_cubic, ease_out_cubic] {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = ease(step as f32 / 100.0);
                assert!(value >= last);
                last = value;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        for step in 0..=50 {
            let t = step as f32 / 100.0;
            let a = ease_in_out_cubic(t);
            let b = ease_in_out_cubic(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-5);
        }
    }
}
