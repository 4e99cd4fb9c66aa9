use std::fmt::Display;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

const HOUR_TO_SEC: u32 = 60 * 60;
const MINUTE_TO_SEC: u32 = 60;
const DAY_TO_SEC: u32 = 24 * HOUR_TO_SEC;

/// A time of day with minute resolution, stored as seconds since midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u32);

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hm_string())
    }
}

impl Time {
    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub fn to_hm_string(&self) -> String {
        let h = self.0 / HOUR_TO_SEC;
        let m = (self.0 % HOUR_TO_SEC) / MINUTE_TO_SEC;
        format!("{:02}:{:02}", h, m)
    }

    /// Parses a `HH:MM` string. Hours must be below 24 and minutes below 60.
    pub fn from_hm(time: &str) -> Option<Self> {
        let mut split = time.trim().split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        if split.next().is_some() || hours >= 24 || minutes >= 60 {
            return None;
        }
        Some(Self(hours * HOUR_TO_SEC + minutes * MINUTE_TO_SEC))
    }

    pub fn to_naive(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0 % DAY_TO_SEC, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Whole minutes from `now` until the next occurrence of this time of day.
    /// A time already passed today resolves to tomorrow, so the result always
    /// lies in `0..1440`.
    pub fn minutes_until(&self, now: NaiveDateTime) -> i64 {
        let mut scheduled = now.date().and_time(self.to_naive());
        if scheduled < now {
            scheduled += TimeDelta::days(1);
        }
        (scheduled - now).num_minutes()
    }
}

#[cfg(test)]
fn at(hms: (u32, u32, u32)) -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2025, 10, 15)
        .unwrap()
        .and_hms_opt(hms.0, hms.1, hms.2)
        .unwrap()
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "08:00";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "23:59";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_single_digit_hour() {
    assert_eq!(Time::from_hm("8:05").unwrap().as_seconds(), 8 * 3600 + 5 * 60);
}

#[test]
fn invalid_time_test_1() {
    assert!(Time::from_hm("24:00").is_none());
    assert!(Time::from_hm("10:60").is_none());
    assert!(Time::from_hm("10").is_none());
    assert!(Time::from_hm("10:00:00").is_none());
    assert!(Time::from_hm("ab:cd").is_none());
}

#[test]
fn eta_later_today() {
    let departure = Time::from_hm("10:00").unwrap();
    assert_eq!(departure.minutes_until(at((8, 30, 0))), 90);
}

#[test]
fn eta_exactly_now() {
    let departure = Time::from_hm("10:00").unwrap();
    assert_eq!(departure.minutes_until(at((10, 0, 0))), 0);
}

#[test]
fn eta_rolls_over_to_tomorrow() {
    let departure = Time::from_hm("08:00").unwrap();
    assert_eq!(departure.minutes_until(at((9, 0, 0))), 23 * 60);
    // One second past departure is just under a full day away.
    assert_eq!(departure.minutes_until(at((8, 0, 1))), 1439);
}

#[test]
fn eta_truncates_partial_minutes() {
    let departure = Time::from_hm("10:00").unwrap();
    assert_eq!(departure.minutes_until(at((9, 58, 30))), 1);
}

#[test]
fn eta_always_within_a_day() {
    for dep_minute in (0..1440).step_by(37) {
        let departure = Time::from_hm(&format!("{:02}:{:02}", dep_minute / 60, dep_minute % 60))
            .unwrap();
        for now_second in (0..86_400).step_by(611) {
            let now = at((now_second / 3600, (now_second % 3600) / 60, now_second % 60));
            let eta = departure.minutes_until(now);
            assert!((0..1440).contains(&eta), "eta {eta} out of range");
        }
    }
}
