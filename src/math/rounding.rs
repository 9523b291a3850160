//! SD score presentation rounding.

/// Round an SD score to one decimal place, half away from zero.
///
/// Negative zero is normalized to `0.0` so `-0.04` prints as `0.0`.
pub fn round_sd(z: f64) -> f64 {
    let rounded = (z * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_sd(1.113), 1.1);
        assert_eq!(round_sd(1.25), 1.3);
        assert_eq!(round_sd(-1.25), -1.3);
        assert_eq!(round_sd(-2.449), -2.4);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let r = round_sd(-0.04);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }
}
