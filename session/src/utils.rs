use chrono::{Datelike, Local, NaiveDate};

/// Storage key scoping one calendar day: `day-{dayOfYear}-{year}`, with a
/// 1-based day of year taken from the local date.
pub fn day_key() -> String {
    day_key_for(Local::now().date_naive())
}

pub fn day_key_for(date: NaiveDate) -> String {
    format!("day-{}-{}", date.ordinal(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn day_of_year_is_one_based() {
        assert_eq!(day_key_for(date(2022, 1, 1)), "day-1-2022");
    }

    #[test]
    fn day_of_year_counts_across_months() {
        assert_eq!(day_key_for(date(2022, 2, 3)), "day-34-2022");
    }

    #[test]
    fn leap_years_reach_day_366() {
        assert_eq!(day_key_for(date(2024, 12, 31)), "day-366-2024");
    }

    #[test]
    fn today_produces_a_well_formed_key() {
        let key = day_key();

        assert!(key.starts_with("day-"));
        assert_eq!(key.split('-').count(), 3);
    }
}
