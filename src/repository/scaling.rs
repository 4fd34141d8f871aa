//! Display Scaling
//!
//! Source of the physical-to-logical conversion factor, injectable so the
//! geometry store is testable without a real display.

/// Provides the display scaling factor (physical px per logical px)
pub trait ScalingProvider: Send + Sync {
    /// Raw factor as reported by the platform, if the query succeeds
    fn query(&self) -> Option<f64>;

    /// Factor safe to divide by: failed queries and degenerate values
    /// (zero, negative, non-finite) fall back to 1.0.
    fn scale_factor(&self) -> f64 {
        match self.query() {
            Some(factor) if factor.is_finite() && factor > 0.0 => factor,
            _ => 1.0,
        }
    }
}

/// Fixed factor, for tests and headless use
pub struct FixedScaling(pub f64);

impl ScalingProvider for FixedScaling {
    fn query(&self) -> Option<f64> {
        Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_factor_passes_through() {
        assert_eq!(FixedScaling(1.5).scale_factor(), 1.5);
    }

    #[test]
    fn test_degenerate_factors_fall_back() {
        assert_eq!(FixedScaling(0.0).scale_factor(), 1.0);
        assert_eq!(FixedScaling(-2.0).scale_factor(), 1.0);
        assert_eq!(FixedScaling(f64::NAN).scale_factor(), 1.0);
        assert_eq!(FixedScaling(f64::INFINITY).scale_factor(), 1.0);
    }

    #[test]
    fn test_failed_query_falls_back() {
        struct NoDisplay;
        impl ScalingProvider for NoDisplay {
            fn query(&self) -> Option<f64> {
                None
            }
        }
        assert_eq!(NoDisplay.scale_factor(), 1.0);
    }
}
