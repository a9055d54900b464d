/// Stake conviction boost.
///
/// Formula: `min(ceiling, 1 + log10(stake + 1) × coefficient)`
/// Range: 1.0 – ceiling. `boost(0) = 1.0`, non-decreasing in stake.
///
/// With the defaults (ceiling 2.0, coefficient 0.25) the boost saturates at
/// a stake of 9 999 tokens.
pub fn calculate(stake: f64, ceiling: f64, coefficient: f64) -> f64 {
    if !stake.is_finite() || stake <= 0.0 {
        return 1.0;
    }
    let boost = 1.0 + (stake + 1.0).log10() * coefficient;
    boost.clamp(1.0, ceiling.max(1.0))
}

/// Smallest stake at which the boost reaches `ceiling`.
///
/// Infinite when the coefficient is zero (the boost never grows).
pub fn saturation_stake(ceiling: f64, coefficient: f64) -> f64 {
    if coefficient <= 0.0 {
        return f64::INFINITY;
    }
    10f64.powf((ceiling - 1.0) / coefficient) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stake_is_neutral() {
        assert_eq!(calculate(0.0, 2.0, 0.25), 1.0);
    }

    #[test]
    fn garbage_stake_is_neutral() {
        assert_eq!(calculate(-5.0, 2.0, 0.25), 1.0);
        assert_eq!(calculate(f64::NAN, 2.0, 0.25), 1.0);
    }

    #[test]
    fn capped_at_ceiling() {
        assert_eq!(calculate(1e30, 2.0, 0.25), 2.0);
        assert_eq!(calculate(f64::MAX, 2.0, 0.25), 2.0);
    }

    #[test]
    fn saturation_point_matches_formula() {
        let s = saturation_stake(2.0, 0.25);
        assert!((s - 9_999.0).abs() < 1e-6);
        assert!((calculate(s, 2.0, 0.25) - 2.0).abs() < 1e-12);
        assert!(calculate(s / 2.0, 2.0, 0.25) < 2.0);
    }

    #[test]
    fn flat_when_coefficient_is_zero() {
        assert_eq!(calculate(1_000.0, 2.0, 0.0), 1.0);
        assert!(saturation_stake(2.0, 0.0).is_infinite());
    }
}
