use chrono::NaiveDate;
use working_hours::{DateRange, WorkingHoursError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn same_day_range_yields_one_day() {
    let range = DateRange::new(date(2024, 1, 6), date(2024, 1, 6)).unwrap();
    let days: Vec<_> = range.expand_days().collect();
    assert_eq!(days, vec![date(2024, 1, 6)]);
}

#[test]
fn three_day_range_includes_both_endpoints() {
    let range = DateRange::parse("2024-01-01", "2024-01-03").unwrap();
    assert_eq!(range.len_days(), 3);
    let days: Vec<_> = range.expand_days().collect();
    assert_eq!(days, vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]);
}

#[test]
fn start_after_end_is_invalid_range() {
    let err = DateRange::parse("2024-01-07", "2024-01-01").unwrap_err();
    assert_eq!(
        err,
        WorkingHoursError::InvalidRange {
            start: date(2024, 1, 7),
            end: date(2024, 1, 1),
        }
    );
}

#[test]
fn malformed_dates_are_invalid_date() {
    for (start, end) in [
        ("not-a-date", "2024-01-01"),
        ("2024-01-01", "2024-13-01"),
        ("", "2024-01-01"),
    ] {
        assert!(
            matches!(
                DateRange::parse(start, end),
                Err(WorkingHoursError::InvalidDate { .. })
            ),
            "expected {start:?}..{end:?} to be rejected"
        );
    }
}

#[test]
fn crosses_leap_day_and_year_boundary() {
    let leap: Vec<_> = DateRange::new(date(2024, 2, 27), date(2024, 3, 1))
        .unwrap()
        .expand_days()
        .collect();
    assert_eq!(
        leap,
        vec![date(2024, 2, 27), date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
    );

    let new_year: Vec<_> = DateRange::new(date(2023, 12, 30), date(2024, 1, 2))
        .unwrap()
        .expand_days()
        .collect();
    assert_eq!(new_year.len(), 4);
    assert_eq!(new_year[2], date(2024, 1, 1));
}

#[test]
fn daylight_saving_weekend_has_no_gaps_or_duplicates() {
    // Europe and the US both switch clocks around these dates.
    let range = DateRange::parse("2024-03-09", "2024-03-31").unwrap();
    let days: Vec<_> = range.expand_days().collect();
    assert_eq!(days.len(), 23);
    assert!(days.windows(2).all(|w| w[0].succ_opt() == Some(w[1])));
}

#[test]
fn length_matches_inclusive_day_count_for_a_full_year() {
    let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    assert_eq!(range.len_days(), 366);
    assert_eq!(range.expand_days().count(), 366);
}
