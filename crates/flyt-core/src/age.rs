use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Unit a relative age is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl AgeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeUnit::Seconds => "seconds",
            AgeUnit::Minutes => "minutes",
            AgeUnit::Hours => "hours",
            AgeUnit::Days => "days",
        }
    }
}

impl std::fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable elapsed time, bucketed into a single unit.
///
/// Displays as `(3 hours ago)`. The bucket is picked from the whole number of
/// elapsed seconds; upper bounds are exclusive, so exactly 60 seconds is
/// reported in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeAge {
    pub value: i64,
    pub unit: AgeUnit,
}

impl RelativeAge {
    /// Classify an elapsed duration. Negative durations (clock skew) count as zero.
    pub fn from_elapsed(elapsed: TimeDelta) -> Self {
        let seconds = elapsed.num_seconds().max(0);

        if seconds < SECONDS_PER_MINUTE {
            Self {
                value: seconds,
                unit: AgeUnit::Seconds,
            }
        } else if seconds < SECONDS_PER_HOUR {
            Self {
                value: rounded_ratio(seconds, SECONDS_PER_MINUTE),
                unit: AgeUnit::Minutes,
            }
        } else if seconds < SECONDS_PER_DAY {
            Self {
                value: rounded_ratio(seconds, SECONDS_PER_HOUR),
                unit: AgeUnit::Hours,
            }
        } else {
            Self {
                value: rounded_ratio(seconds, SECONDS_PER_DAY),
                unit: AgeUnit::Days,
            }
        }
    }

    /// Age of something created at `created_at`, seen from `now`.
    pub fn between(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_elapsed(now - created_at)
    }
}

impl std::fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} ago)", self.value, self.unit)
    }
}

// Inputs are non-negative, so f64::round (half away from zero) is half-up here.
fn rounded_ratio(seconds: i64, per_unit: i64) -> i64 {
    (seconds as f64 / per_unit as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age(seconds: i64) -> String {
        RelativeAge::from_elapsed(TimeDelta::seconds(seconds)).to_string()
    }

    #[test]
    fn test_zero_seconds() {
        assert_eq!(age(0), "(0 seconds ago)");
    }

    #[test]
    fn test_each_bucket() {
        assert_eq!(age(3), "(3 seconds ago)");
        assert_eq!(age(3 * SECONDS_PER_MINUTE), "(3 minutes ago)");
        assert_eq!(age(3 * SECONDS_PER_HOUR), "(3 hours ago)");
        assert_eq!(age(3 * SECONDS_PER_DAY), "(3 days ago)");
    }

    #[test]
    fn test_bucket_boundaries_are_exclusive() {
        assert_eq!(age(59), "(59 seconds ago)");
        assert_eq!(age(60), "(1 minutes ago)");
        assert_eq!(age(SECONDS_PER_HOUR - 1), "(60 minutes ago)");
        assert_eq!(age(SECONDS_PER_HOUR), "(1 hours ago)");
        assert_eq!(age(SECONDS_PER_DAY), "(1 days ago)");
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(age(89), "(1 minutes ago)");
        assert_eq!(age(90), "(2 minutes ago)");
        assert_eq!(age(SECONDS_PER_HOUR + 30 * SECONDS_PER_MINUTE), "(2 hours ago)");
        assert_eq!(age(SECONDS_PER_DAY + 11 * SECONDS_PER_HOUR), "(1 days ago)");
    }

    #[test]
    fn test_sub_second_precision_is_truncated() {
        let elapsed = TimeDelta::milliseconds(59_999);
        assert_eq!(
            RelativeAge::from_elapsed(elapsed).to_string(),
            "(59 seconds ago)"
        );
    }

    #[test]
    fn test_negative_elapsed_clamps_to_zero() {
        assert_eq!(age(-30), "(0 seconds ago)");
    }

    #[test]
    fn test_between() {
        let now = Utc::now();
        let created_at = now - TimeDelta::hours(4);
        let age = RelativeAge::between(created_at, now);

        assert_eq!(age.value, 4);
        assert_eq!(age.unit, AgeUnit::Hours);
    }

    #[test]
    fn test_serializes_unit_lowercase() {
        let age = RelativeAge {
            value: 2,
            unit: AgeUnit::Minutes,
        };
        let json = serde_json::to_string(&age).unwrap();
        assert_eq!(json, r#"{"value":2,"unit":"minutes"}"#);
    }
}
