//! PostgreSQL `interval` value: independent months/days/microseconds fields
//! with no cross-unit normalization.

use std::ops::Add;

/// A PostgreSQL interval: `months`, `days`, and `seconds`+`microseconds`
/// tracked independently, matching the wire triple `(months, days, microseconds)`.
///
/// None of the fields are normalized against each other — `Interval::new(0,
/// 0, 90, 0)` and `Interval::new(0, 0, 0, 90_000_000)` render identically
/// but are distinct in memory until rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub seconds: i64,
    pub microseconds: i64,
}

impl Interval {
    pub fn new(months: i32, days: i32, seconds: i64, microseconds: i64) -> Self {
        Self {
            months,
            days,
            seconds,
            microseconds,
        }
    }

    pub fn months(months: i32) -> Self {
        Self::new(months, 0, 0, 0)
    }

    pub fn days(days: i32) -> Self {
        Self::new(0, days, 0, 0)
    }

    pub fn seconds(seconds: i64) -> Self {
        Self::new(0, 0, seconds, 0)
    }

    pub fn microseconds(microseconds: i64) -> Self {
        Self::new(0, 0, 0, microseconds)
    }

    /// Fieldwise sum; the identity is `Interval::default()`.
    pub fn add(self, other: Self) -> Self {
        Self {
            months: self.months + other.months,
            days: self.days + other.days,
            seconds: self.seconds + other.seconds,
            microseconds: self.microseconds + other.microseconds,
        }
    }

    /// Builds an `Interval` from the binary wire triple `(months, days,
    /// microseconds)`, splitting `microseconds` into whole seconds and a
    /// microsecond remainder.
    pub fn from_wire_triple(months: i32, days: i32, microseconds: i64) -> Self {
        Self::new(
            months,
            days,
            microseconds / 1_000_000,
            microseconds % 1_000_000,
        )
    }

    /// Renders as an ISO-8601 duration, e.g. `"P3M7DT30.2S"`.
    pub fn to_iso8601_string(&self) -> String {
        if *self == Self::default() {
            return "PT0S".to_owned();
        }

        let mut out = String::from("P");
        if self.months != 0 {
            out.push_str(&format!("{}M", self.months));
        }
        if self.days != 0 {
            out.push_str(&format!("{}D", self.days));
        }

        let extra_seconds = self.microseconds / 1_000_000;
        let micros = self.microseconds % 1_000_000;
        let total_seconds = self.seconds + extra_seconds;

        if total_seconds == 0 && micros == 0 {
            return out;
        }

        out.push('T');
        if micros == 0 {
            out.push_str(&format!("{total_seconds}S"));
        } else {
            let fraction = format!("{:06}", micros.abs());
            let fraction = fraction.trim_end_matches('0');
            out.push_str(&format!("{total_seconds}.{fraction}S"));
        }
        out
    }
}

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Interval::add(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_renders_pt0s() {
        assert_eq!(Interval::default().to_iso8601_string(), "PT0S");
    }

    #[test]
    fn months_days_and_fractional_seconds() {
        let iv = Interval::new(3, 7, 30, 200_000);
        assert_eq!(iv.to_iso8601_string(), "P3M7DT30.2S");
    }

    #[test]
    fn small_fraction_keeps_leading_zeros() {
        assert_eq!(Interval::microseconds(2).to_iso8601_string(), "PT0.000002S");
        assert_eq!(Interval::microseconds(20_000).to_iso8601_string(), "PT0.02S");
        assert_eq!(Interval::microseconds(200_000).to_iso8601_string(), "PT0.2S");
    }

    #[test]
    fn months_or_days_only_omits_time_designator() {
        assert_eq!(Interval::months(1).to_iso8601_string(), "P1M");
        assert_eq!(Interval::days(2).to_iso8601_string(), "P2D");
    }

    #[test]
    fn add_is_commutative_and_associative_with_identity() {
        let a = Interval::new(1, 2, 3, 4);
        let b = Interval::new(5, -6, 7, -8);
        let c = Interval::new(-1, 0, 2, 500_000);

        assert_eq!(a.add(b), b.add(a));
        assert_eq!(a.add(b).add(c), a.add(b.add(c)));
        assert_eq!(a.add(Interval::default()), a);
    }

    #[test]
    fn from_wire_triple_splits_microseconds() {
        let iv = Interval::from_wire_triple(1, 14, 79_000);
        assert_eq!(iv, Interval::new(1, 14, 0, 79_000));

        let iv = Interval::from_wire_triple(0, 0, 1_500_000);
        assert_eq!(iv, Interval::new(0, 0, 1, 500_000));
    }

    #[test]
    fn from_wire_triple_handles_negative_microseconds() {
        // Truncating division: -1_500_000 / 1_000_000 == -1, remainder -500_000.
        let iv = Interval::from_wire_triple(0, 0, -1_500_000);
        assert_eq!(iv, Interval::new(0, 0, -1, -500_000));
    }
}
