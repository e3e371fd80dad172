use num_traits::{Float, FromPrimitive};

/// `base * (1 + rate)^years`
pub fn compound<T>(base: T, rate: T, years: u32) -> T
where
    T: Float + FromPrimitive,
{
    let exp = T::from_u32(years).unwrap_or_else(T::zero);
    base * (T::one() + rate).powf(exp)
}

/// `percent / 100` as a fraction.
pub fn pct_to_fraction<T>(percent: T) -> T
where
    T: Float + FromPrimitive,
{
    percent / T::from_f64(100.0).unwrap_or_else(T::one)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_zero_is_the_base() {
        assert_eq!(compound(123.0_f64, 0.15, 0), 123.0);
    }

    #[test]
    fn compounds_annually() {
        let v = compound(100.0_f64, 0.15, 2);
        assert!((v - 132.25).abs() < 1e-9);
        let v32 = compound(100.0_f32, 0.05, 1);
        assert!((v32 - 105.0).abs() < 1e-4);
    }

    #[test]
    fn percent_conversion() {
        assert_eq!(pct_to_fraction(50.0_f64), 0.5);
        assert_eq!(pct_to_fraction(0.0_f64), 0.0);
    }
}
