//! Time remaining until a target instant.

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Whole days, hours, minutes, and seconds left before a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeRemaining {
    /// Whole days remaining.
    pub days: i64,
    /// Hours past the whole days, `0..24`.
    pub hours: i64,
    /// Minutes past the whole hours, `0..60`.
    pub minutes: i64,
    /// Seconds past the whole minutes, `0..60`.
    pub seconds: i64,
}

impl TimeRemaining {
    /// Break the distance from `now` to `target` into calendar units.
    ///
    /// Every unit is zero once `target` is not in the future.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, Utc};
    /// use rsvp_backend::domain::TimeRemaining;
    ///
    /// let now = Utc::now();
    /// let left = TimeRemaining::until(now + Duration::seconds(90_061), now);
    /// assert_eq!((left.days, left.hours, left.minutes, left.seconds), (1, 1, 1, 1));
    /// ```
    pub fn until<A, B>(target: DateTime<A>, now: DateTime<B>) -> Self
    where
        A: TimeZone,
        B: TimeZone,
    {
        let distance = target.timestamp_millis() - now.timestamp_millis();
        if distance <= 0 {
            return Self::default();
        }
        Self {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Whether every unit is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Countdown to a scheduled event as returned by `GET /api/countdown`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    /// Event being counted down to.
    pub title: String,
    /// Event start in its local offset.
    pub target: DateTime<FixedOffset>,
    /// Whether the event has started.
    pub elapsed: bool,
    /// Units left before `target`.
    #[serde(flatten)]
    pub remaining: TimeRemaining,
}

impl Countdown {
    /// Measure the countdown to `target` at instant `now`.
    pub fn measure<Tz: TimeZone>(
        title: impl Into<String>,
        target: DateTime<FixedOffset>,
        now: DateTime<Tz>,
    ) -> Self {
        Self {
            title: title.into(),
            target,
            elapsed: target.timestamp_millis() <= now.timestamp_millis(),
            remaining: TimeRemaining::until(target, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rstest::rstest;

    #[rstest]
    #[case::sub_second(999, (0, 0, 0, 0))]
    #[case::one_of_each(90_061_000, (1, 1, 1, 1))]
    #[case::just_under_a_day(86_399_999, (0, 23, 59, 59))]
    fn splits_distance_into_units(#[case] millis: i64, #[case] expected: (i64, i64, i64, i64)) {
        let now = Utc::now();
        let left = TimeRemaining::until(now + Duration::milliseconds(millis), now);
        assert_eq!(
            (left.days, left.hours, left.minutes, left.seconds),
            expected
        );
    }

    #[rstest]
    #[case::now(0)]
    #[case::past(-5_000)]
    fn past_targets_are_zero(#[case] millis: i64) {
        let now = Utc::now();
        let left = TimeRemaining::until(now + Duration::milliseconds(millis), now);
        assert!(left.is_zero());
    }

    #[rstest]
    fn countdown_flattens_remaining_units() {
        let now = Utc::now();
        let target = (now + Duration::seconds(61)).fixed_offset();
        let value = serde_json::to_value(Countdown::measure("Wedding Ceremony", target, now))
            .expect("serialise");
        assert_eq!(value["elapsed"], false);
        assert_eq!(value["minutes"], 1);
        assert_eq!(value["seconds"], 1);
        assert_eq!(value["title"], "Wedding Ceremony");
    }
}
