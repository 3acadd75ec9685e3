use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

/// Source of "now" for all date bucketing and statistics.
///
/// Injected everywhere a calendar decision is made so that day-boundary
/// behaviour can be tested without waiting for midnight.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Current date truncated to day granularity.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// The calendar day before today.
    fn yesterday(&self) -> NaiveDate {
        self.today() - Duration::days(1)
    }

    /// Whether a timestamp falls on today's local calendar date.
    fn is_today(&self, t: DateTime<Local>) -> bool {
        is_same_day(t, self.now())
    }

    /// Whether a timestamp falls on yesterday's local calendar date.
    fn is_yesterday(&self, t: DateTime<Local>) -> bool {
        falls_on(t, self.yesterday())
    }
}

/// Wall-clock implementation used by the running app.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a fixed moment. Used by tests to cross day boundaries.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// True iff both timestamps share the local-timezone year, month and day.
pub fn is_same_day(a: DateTime<Local>, b: DateTime<Local>) -> bool {
    a.date_naive() == b.date_naive()
}

/// True iff a timestamp falls on the given local calendar date.
pub fn falls_on(t: DateTime<Local>, date: NaiveDate) -> bool {
    t.date_naive() == date
}

/// Short day/month label for task rows, e.g. "5 Jan".
pub fn format_short(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// Two-letter day-of-week label, indexed 0=Sunday..6=Saturday.
pub fn day_abbrev(date: NaiveDate) -> &'static str {
    const DAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
    DAYS[date.weekday().num_days_from_sunday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_fixed_clock_today_and_yesterday() {
        let clock = FixedClock(local(2024, 3, 15, 9));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(
            clock.yesterday(),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
        );
    }

    #[test]
    fn test_yesterday_crosses_month_boundary() {
        let clock = FixedClock(local(2024, 3, 1, 0));
        assert_eq!(
            clock.yesterday(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_is_same_day_ignores_time_of_day() {
        assert!(is_same_day(local(2024, 3, 15, 0), local(2024, 3, 15, 23)));
        assert!(!is_same_day(local(2024, 3, 15, 23), local(2024, 3, 16, 0)));
    }

    #[test]
    fn test_is_today_and_is_yesterday() {
        let clock = FixedClock(local(2024, 3, 15, 12));
        assert!(clock.is_today(local(2024, 3, 15, 1)));
        assert!(clock.is_yesterday(local(2024, 3, 14, 23)));
        assert!(!clock.is_today(local(2024, 3, 14, 23)));
        assert!(!clock.is_yesterday(local(2024, 3, 13, 12)));
    }

    #[test]
    fn test_format_short() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_short(date), "5 Jan");
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_short(date), "25 Dec");
    }

    #[test]
    fn test_day_abbrev_indexed_from_sunday() {
        // 2024-03-10 was a Sunday
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(day_abbrev(sunday), "Su");
        assert_eq!(day_abbrev(sunday + Duration::days(1)), "Mo");
        assert_eq!(day_abbrev(sunday + Duration::days(6)), "Sa");
    }
}
