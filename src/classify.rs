//! Banded severity classification against a baseline
//!
//! A value within one standard deviation of the historical mean is business
//! as usual, and between one and two it is worth a look. At two or beyond
//! it is either a data problem or a real one. Missing values get their own
//! tier so they surface in reports instead of vanishing.

use serde::{Deserialize, Serialize};

use crate::baseline::Baseline;

/// Classification outcome for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Within one standard deviation of the baseline mean.
    Sane,
    /// Between one and two standard deviations below the mean.
    BorderlineLow,
    /// Between one and two standard deviations above the mean.
    BorderlineHigh,
    /// Two or more standard deviations from the mean.
    Insane,
    /// The period was reported without a value.
    DataMissing,
    /// The baseline or value was malformed (non-finite, negative std-dev).
    ///
    /// Unreachable for any baseline the calculator produces; kept so a
    /// calculation bug surfaces as data to investigate rather than a
    /// silent misclassification.
    Unclassified,
}

impl Tier {
    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Sane => "Sane",
            Tier::BorderlineLow => "Borderline (low)",
            Tier::BorderlineHigh => "Borderline (high)",
            Tier::Insane => "Insane",
            Tier::DataMissing => "Data Missing",
            Tier::Unclassified => "Unclassified",
        }
    }

    /// True for every tier that warrants attention in the report.
    pub fn is_flagged(&self) -> bool {
        !matches!(self, Tier::Sane)
    }

    pub fn is_borderline(&self) -> bool {
        matches!(self, Tier::BorderlineLow | Tier::BorderlineHigh)
    }
}

/// Classify a value against a baseline.
///
/// The missing-value check precedes all numeric comparisons. Band
/// boundaries escalate: a deviation of exactly one standard deviation is
/// borderline, exactly two is insane. With a zero std-dev the history was
/// constant, so only exact agreement with the mean is sane and any
/// deviation is insane.
///
/// Never fails and never panics; malformed inputs map to
/// [`Tier::Unclassified`].
pub fn classify(value: Option<f64>, baseline: &Baseline) -> Tier {
    let Some(value) = value else {
        return Tier::DataMissing;
    };

    let Baseline { mean, std_dev } = *baseline;
    if !value.is_finite() || !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Tier::Unclassified;
    }

    if std_dev == 0.0 {
        return if value == mean { Tier::Sane } else { Tier::Insane };
    }

    let deviation = (value - mean).abs();
    if deviation >= 2.0 * std_dev {
        Tier::Insane
    } else if deviation >= std_dev {
        if value < mean {
            Tier::BorderlineLow
        } else {
            Tier::BorderlineHigh
        }
    } else {
        Tier::Sane
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASELINE: Baseline = Baseline {
        mean: 15.0,
        std_dev: 3.0,
    };

    #[test]
    fn test_within_one_sigma_is_sane() {
        assert_eq!(classify(Some(14.0), &BASELINE), Tier::Sane);
        assert_eq!(classify(Some(15.0), &BASELINE), Tier::Sane);
        assert_eq!(classify(Some(17.9), &BASELINE), Tier::Sane);
        assert_eq!(classify(Some(12.1), &BASELINE), Tier::Sane);
    }

    #[test]
    fn test_between_one_and_two_sigma_is_borderline() {
        assert_eq!(classify(Some(19.0), &BASELINE), Tier::BorderlineHigh);
        assert_eq!(classify(Some(11.0), &BASELINE), Tier::BorderlineLow);
    }

    #[test]
    fn test_beyond_two_sigma_is_insane() {
        assert_eq!(classify(Some(25.0), &BASELINE), Tier::Insane);
        assert_eq!(classify(Some(5.0), &BASELINE), Tier::Insane);
    }

    #[test]
    fn test_boundary_one_sigma_escalates_to_borderline() {
        // 18 == mean + std_dev, 12 == mean - std_dev
        assert_eq!(classify(Some(18.0), &BASELINE), Tier::BorderlineHigh);
        assert_eq!(classify(Some(12.0), &BASELINE), Tier::BorderlineLow);
    }

    #[test]
    fn test_boundary_two_sigma_escalates_to_insane() {
        // 21 == mean + 2*std_dev, 9 == mean - 2*std_dev
        assert_eq!(classify(Some(21.0), &BASELINE), Tier::Insane);
        assert_eq!(classify(Some(9.0), &BASELINE), Tier::Insane);
    }

    #[test]
    fn test_missing_value_precedes_everything() {
        assert_eq!(classify(None, &BASELINE), Tier::DataMissing);
        let degenerate = Baseline {
            mean: 0.0,
            std_dev: 0.0,
        };
        assert_eq!(classify(None, &degenerate), Tier::DataMissing);
        let malformed = Baseline {
            mean: f64::NAN,
            std_dev: -1.0,
        };
        assert_eq!(classify(None, &malformed), Tier::DataMissing);
    }

    #[test]
    fn test_zero_std_dev_exact_mean_is_sane() {
        let flat = Baseline {
            mean: 70.0,
            std_dev: 0.0,
        };
        assert_eq!(classify(Some(70.0), &flat), Tier::Sane);
    }

    #[test]
    fn test_zero_std_dev_any_deviation_is_insane() {
        let flat = Baseline {
            mean: 70.0,
            std_dev: 0.0,
        };
        assert_eq!(classify(Some(70.0001), &flat), Tier::Insane);
        assert_eq!(classify(Some(69.9999), &flat), Tier::Insane);
    }

    #[test]
    fn test_negative_std_dev_is_unclassified() {
        let broken = Baseline {
            mean: 15.0,
            std_dev: -3.0,
        };
        assert_eq!(classify(Some(15.0), &broken), Tier::Unclassified);
    }

    #[test]
    fn test_non_finite_inputs_are_unclassified() {
        assert_eq!(classify(Some(f64::NAN), &BASELINE), Tier::Unclassified);
        assert_eq!(classify(Some(f64::INFINITY), &BASELINE), Tier::Unclassified);
        let nan_mean = Baseline {
            mean: f64::NAN,
            std_dev: 3.0,
        };
        assert_eq!(classify(Some(15.0), &nan_mean), Tier::Unclassified);
        let inf_std = Baseline {
            mean: 15.0,
            std_dev: f64::INFINITY,
        };
        assert_eq!(classify(Some(15.0), &inf_std), Tier::Unclassified);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tier::Sane.label(), "Sane");
        assert_eq!(Tier::BorderlineLow.label(), "Borderline (low)");
        assert_eq!(Tier::BorderlineHigh.label(), "Borderline (high)");
        assert_eq!(Tier::Insane.label(), "Insane");
        assert_eq!(Tier::DataMissing.label(), "Data Missing");
        assert_eq!(Tier::Unclassified.label(), "Unclassified");
    }

    #[test]
    fn test_flagged_and_borderline_predicates() {
        assert!(!Tier::Sane.is_flagged());
        assert!(Tier::BorderlineLow.is_flagged());
        assert!(Tier::Insane.is_flagged());
        assert!(Tier::DataMissing.is_flagged());
        assert!(Tier::BorderlineLow.is_borderline());
        assert!(Tier::BorderlineHigh.is_borderline());
        assert!(!Tier::Insane.is_borderline());
    }
}
