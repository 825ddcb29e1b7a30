//! Adaptive step selection for the fine time axis.
//!
//! The step is chosen from a fixed ladder by the length of the view window:
//!
//! | Window shorter than | Step |
//! |---------------------|------|
//! | 1 minute | 1 second |
//! | 1 hour | 1 minute |
//! | 1 day | 1 hour |
//! | 7 days | 1 day |
//! | 30 days | 7 days |
//! | 365 days | 30 days |
//! | otherwise | 365 days |

use std::fmt;

use chrono::TimeDelta;
use thiserror::Error;

/// A tick interval of the fine axis. Variants are ordered by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("cannot choose an axis step for a non-positive duration ({0})")]
    NonPositiveDuration(TimeDelta),
}

impl Step {
    /// Chooses the step for a window of the given length.
    ///
    /// ```
    /// # use chrono::TimeDelta;
    /// # use chronoline::step::Step;
    /// assert_eq!(Step::resolve(TimeDelta::hours(5)).unwrap(), Step::Hour);
    /// assert_eq!(Step::resolve(TimeDelta::days(7)).unwrap(), Step::Week);
    /// assert!(Step::resolve(TimeDelta::zero()).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NonPositiveDuration`] for zero or negative
    /// durations.
    pub fn resolve(duration: TimeDelta) -> Result<Step, StepError> {
        if duration <= TimeDelta::zero() {
            return Err(StepError::NonPositiveDuration(duration));
        }

        let step = if duration < TimeDelta::minutes(1) {
            Step::Second
        } else if duration < TimeDelta::hours(1) {
            Step::Minute
        } else if duration < TimeDelta::days(1) {
            Step::Hour
        } else if duration < TimeDelta::days(7) {
            Step::Day
        } else if duration < TimeDelta::days(30) {
            Step::Week
        } else if duration < TimeDelta::days(365) {
            Step::Month
        } else {
            Step::Year
        };
        Ok(step)
    }

    /// Length of one step.
    pub fn duration(self) -> TimeDelta {
        match self {
            Step::Second => TimeDelta::seconds(1),
            Step::Minute => TimeDelta::minutes(1),
            Step::Hour => TimeDelta::hours(1),
            Step::Day => TimeDelta::days(1),
            Step::Week => TimeDelta::days(7),
            Step::Month => TimeDelta::days(30),
            Step::Year => TimeDelta::days(365),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Second => "1s",
            Step::Minute => "1min",
            Step::Hour => "1h",
            Step::Day => "1d",
            Step::Week => "7d",
            Step::Month => "30d",
            Step::Year => "365d",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            (TimeDelta::seconds(1), Step::Second),
            (TimeDelta::seconds(59), Step::Second),
            (TimeDelta::seconds(60), Step::Minute),
            (TimeDelta::minutes(59), Step::Minute),
            (TimeDelta::hours(1), Step::Hour),
            (TimeDelta::hours(23), Step::Hour),
            (TimeDelta::days(1), Step::Day),
            (TimeDelta::days(6), Step::Day),
            (TimeDelta::days(7), Step::Week),
            (TimeDelta::days(29), Step::Week),
            (TimeDelta::days(30), Step::Month),
            (TimeDelta::days(364), Step::Month),
            (TimeDelta::days(365), Step::Year),
            (TimeDelta::days(365 * 40), Step::Year),
            (TimeDelta::nanoseconds(1), Step::Second),
            (TimeDelta::hours(24) - TimeDelta::nanoseconds(1), Step::Hour),
        ];

        for (duration, expected) in cases {
            assert_eq!(Step::resolve(duration), Ok(expected), "duration {duration}");
        }
    }

    #[test]
    fn test_non_positive_duration() {
        assert_eq!(
            Step::resolve(TimeDelta::seconds(-5)),
            Err(StepError::NonPositiveDuration(TimeDelta::seconds(-5)))
        );
    }

    #[test]
    fn test_step_order_matches_duration() {
        let steps = [
            Step::Second,
            Step::Minute,
            Step::Hour,
            Step::Day,
            Step::Week,
            Step::Month,
            Step::Year,
        ];
        for pair in steps.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].duration() < pair[1].duration());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::Week.to_string(), "7d");
    }

    proptest! {
        #[test]
        fn step_is_monotonic(a in 1i64..(400 * 86_400), b in 1i64..(400 * 86_400)) {
            let (short, long) = (a.min(b), a.max(b));
            let short_step = Step::resolve(TimeDelta::seconds(short)).unwrap();
            let long_step = Step::resolve(TimeDelta::seconds(long)).unwrap();
            prop_assert!(short_step <= long_step);
        }
    }
}
