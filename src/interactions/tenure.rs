use std::fmt;

use chrono::prelude::*;

/// Whole-year length used by the decomposition.
pub const DAYS_PER_YEAR: i64 = 365;
/// Whole-month length used by the decomposition.
pub const DAYS_PER_MONTH: i64 = 30;

/// First day at eMudhra.
pub fn employment_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 6, 29).expect("2022-06-29 should be a valid date")
}

/// Elapsed time decomposed into 365-day years and 30-day months. The
/// decomposition is approximate, not calendar-accurate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl Tenure {
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let total_days = end.signed_duration_since(start).num_days();
        let remainder = total_days % DAYS_PER_YEAR;
        Tenure {
            years: total_days / DAYS_PER_YEAR,
            months: remainder / DAYS_PER_MONTH,
            days: remainder % DAYS_PER_MONTH,
        }
    }

    pub fn since(start: NaiveDate) -> Self {
        Self::between(start, Local::now().date_naive())
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Years, {} Months, and {} Days.",
            self.years, self.months, self.days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exactly_one_year() {
        let tenure = Tenure::between(date(2022, 6, 29), date(2023, 6, 29));
        assert_eq!(
            tenure,
            Tenure {
                years: 1,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_same_day_is_zero() {
        let tenure = Tenure::between(date(2022, 6, 29), date(2022, 6, 29));
        assert_eq!(
            tenure,
            Tenure {
                years: 0,
                months: 0,
                days: 0
            }
        );
    }

    #[test]
    fn test_decomposition_uses_fixed_lengths() {
        // 400 days = 365 + 35 = 1 year, 1 month, 5 days
        let tenure = Tenure::between(date(2022, 6, 29), date(2023, 8, 3));
        assert_eq!(
            tenure,
            Tenure {
                years: 1,
                months: 1,
                days: 5
            }
        );
    }

    #[test]
    fn test_leap_days_drift_the_count() {
        // two calendar years spanning 2024-02-29 come out a day over
        let tenure = Tenure::between(date(2022, 6, 29), date(2024, 6, 29));
        assert_eq!(
            tenure,
            Tenure {
                years: 2,
                months: 0,
                days: 1
            }
        );
    }

    #[test]
    fn test_display_format() {
        let tenure = Tenure {
            years: 2,
            months: 3,
            days: 4,
        };
        assert_eq!(tenure.to_string(), "2 Years, 3 Months, and 4 Days.");

        let singular = Tenure {
            years: 1,
            months: 0,
            days: 1,
        };
        // the sentence never inflects
        assert_eq!(singular.to_string(), "1 Years, 0 Months, and 1 Days.");
    }
}
