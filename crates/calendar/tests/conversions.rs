use ticketdesk_calendar::{CalendarDate, MAX_ORDINAL, days_in_month, is_leap_year};

/// Steps one day forward by rolling day, month and year counters.
fn step(day: &mut u8, month: &mut u8, year: &mut u16) {
    *day += 1;
    if *day > days_in_month(*month, i64::from(*year)).unwrap() {
        *day = 1;
        *month += 1;
        if *month > 12 {
            *month = 1;
            *year += 1;
        }
    }
}

#[test]
fn ordinal_matches_day_by_day_walk_over_full_range() {
    let (mut day, mut month, mut year) = (1u8, 1u8, 1u16);
    for ordinal in 1..=MAX_ORDINAL {
        let date = CalendarDate::from_ordinal(ordinal).unwrap();
        assert_eq!(
            (date.day(), date.month(), date.year()),
            (day, month, year),
            "from_ordinal({ordinal})"
        );
        assert_eq!(date.to_ordinal(), ordinal, "to_ordinal of {date}");
        if ordinal < MAX_ORDINAL {
            step(&mut day, &mut month, &mut year);
        }
    }
    assert_eq!((day, month, year), (31, 12, 9999));
}

#[test]
fn constructed_dates_round_trip() {
    for year in [1, 4, 99, 100, 400, 1582, 1900, 2000, 2023, 2024, 9999] {
        for month in 1..=12u8 {
            let last = days_in_month(month, i64::from(year)).unwrap();
            for day in [1, 15, last] {
                let date = CalendarDate::new(i32::from(day), i32::from(month), year).unwrap();
                let back = CalendarDate::from_ordinal(date.to_ordinal()).unwrap();
                assert_eq!(back, date, "round trip of {date}");
            }
        }
    }
}

#[test]
fn year_lengths_follow_leap_rule() {
    for year in 1..9999 {
        let start = CalendarDate::new(1, 1, year).unwrap();
        let next = CalendarDate::new(1, 1, year + 1).unwrap();
        let expected = if is_leap_year(i64::from(year)) { 366 } else { 365 };
        assert_eq!(next.days_since(start), expected, "year {year}");
    }
}

#[test]
fn leap_year_reference_rule() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));

    assert!(CalendarDate::new(1, 1, 2000).unwrap().is_leap_year());
    assert!(!CalendarDate::new(1, 1, 1900).unwrap().is_leap_year());
}

#[test]
fn parsed_and_formatted_short_form_agree() {
    let date = CalendarDate::new(7, 11, 987).unwrap();
    let text = date.to_string();
    assert_eq!(text, "07/11/0987");
    assert_eq!(text.parse::<CalendarDate>().unwrap(), date);
}
