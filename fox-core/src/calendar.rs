use std::time::{SystemTime, UNIX_EPOCH};

/// Days elapsed before the start of each month; index 0 is a sentinel.
pub const MONTH_LENGTHS: [u32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

const DAY_OF_WEEK_TRIGGERS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

pub const WEEKDAY_NAMES: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

pub const WEEKDAY_NAMES_UPPER: [&str; 7] =
    ["SUNDAY", "MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY"];

pub const MONTH_NAMES: [&str; 13] = [
    "", "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// How far in the future the game is set.
pub const YEARS_AHEAD: u32 = 500;

/// In-game date. One wall-clock second is one in-game hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceDate {
    pub year: u32,
    /// 1..=12
    pub month: u32,
    /// 1..=31
    pub day: u32,
    /// 0..=23
    pub hour: u32,
}

impl SpaceDate {
    /// Pure function of the elapsed seconds; the calendar has no leap years.
    pub fn from_elapsed(elapsed: u64, start_year: u32) -> Self {
        let mut days = elapsed / 24 + 1;
        let mut years = 0u64;
        while days > 365 {
            days -= 365;
            years += 1;
        }
        let days = days as u32;

        let month = MONTH_LENGTHS
            .iter()
            .position(|&len| len >= days)
            .unwrap_or(12)
            .max(1);

        Self {
            year: start_year.saturating_add(years as u32),
            month: month as u32,
            day: days - MONTH_LENGTHS[month - 1],
            hour: (elapsed % 24) as u32,
        }
    }

    pub fn day_of_week(&self) -> usize {
        day_of_week(self.year, self.month, self.day)
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.day_of_week()]
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// `WEDNESDAY 3/1/2525 04:17 UTC`. The colon is replaced by a space when
    /// `colon` is false.
    pub fn stamp(&self, minutes: u32, colon: bool) -> String {
        format!(
            "{} {}/{}/{} {:02}{}{:02} UTC",
            WEEKDAY_NAMES_UPPER[self.day_of_week()],
            self.day,
            self.month,
            self.year,
            self.hour,
            if colon { ':' } else { ' ' },
            minutes
        )
    }
}

/// Sakamoto's method. 0 is Sunday.
pub fn day_of_week(year: u32, month: u32, day: u32) -> usize {
    let month = month.clamp(1, 12);
    let y = if month < 3 { year.saturating_sub(1) } else { year };
    ((y + y / 4 - y / 100 + y / 400 + DAY_OF_WEEK_TRIGGERS[month as usize - 1] + day) % 7) as usize
}

/// Sub-second jitter shown as minutes: 1000 ms map onto 0..=59.
pub fn minutes(now_ms: u64) -> u32 {
    (((now_ms % 1000) as f64 / 16.5) as u32).min(59)
}

/// Current year, UTC.
pub fn current_year() -> u32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_from_unix(secs)
}

pub fn year_from_unix(secs: u64) -> u32 {
    // civil-from-days over 400-year eras
    let days = (secs / 86_400) as i64 + 719_468;
    let era = days.div_euclid(146_097);
    let doe = days.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    year as u32
}

pub fn start_year() -> u32 {
    current_year() + YEARS_AHEAD
}
