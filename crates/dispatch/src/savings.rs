use chrono::{DateTime, Datelike, Utc};

/// On-demand cost of the instance class, currency units per hour.
pub const HOURLY_RATE: f64 = 0.0104;

/// Assumed idle duration recovered by each stop, in hours.
///
/// A policy constant, not a measurement. Idle time is never inferred
/// from telemetry.
pub const IDLE_HOURS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    pub hours_saved: f64,
    pub cost_saved: f64,
    pub week_number: u32,
}

/// Deterministic savings estimate for one stop at `now`.
///
/// `cost_saved` is rate times hours and carries at most four decimal
/// places, so it converts losslessly to the JSON number on the wire.
pub fn estimate_savings(now: DateTime<Utc>) -> Savings {
    Savings {
        hours_saved: IDLE_HOURS,
        cost_saved: HOURLY_RATE * IDLE_HOURS,
        week_number: now.iso_week().week(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn estimate_is_the_fixed_policy_value() {
        let savings: Savings = estimate_savings(Utc::now());

        assert_eq!(12.0, savings.hours_saved);
        assert_eq!(0.1248, savings.cost_saved);
    }

    #[test]
    fn week_number_is_the_iso_week() {
        // 2020-12-31 falls in ISO week 53
        let end_of_2020 = Utc.with_ymd_and_hms(2020, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(53, estimate_savings(end_of_2020).week_number);

        // 2024-01-01 is a Monday, ISO week 1
        let start_of_2024 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(1, estimate_savings(start_of_2024).week_number);
    }
}
