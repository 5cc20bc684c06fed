//! Lithuanian public holidays and their computation (DK 123 str. 1 d.).
//!
//! Static holidays: 12 fixed dates. Moveable holidays: Easter Sunday and
//! Monday, Mother's Day (first Sunday of May), Father's Day (first Sunday
//! of June). 16 holiday dates per year in total.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A fixed-date holiday: month, day and Lithuanian name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticHoliday {
    /// Month, 1-12.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Lithuanian name.
    pub name: &'static str,
}

/// The 12 fixed-date holidays.
pub const STATIC_HOLIDAYS: &[StaticHoliday] = &[
    StaticHoliday { month: 1, day: 1, name: "Naujųjų metų diena" },
    StaticHoliday { month: 2, day: 16, name: "Lietuvos valstybės atkūrimo diena" },
    StaticHoliday { month: 3, day: 11, name: "Lietuvos nepriklausomybės atkūrimo diena" },
    StaticHoliday { month: 5, day: 1, name: "Tarptautinė darbo diena" },
    StaticHoliday { month: 6, day: 24, name: "Rasos ir Joninių diena" },
    StaticHoliday { month: 7, day: 6, name: "Valstybės (Mindaugo karūnavimo) diena" },
    StaticHoliday { month: 8, day: 15, name: "Žolinė (Švč. Mergelės Marijos ėmimo į dangų diena)" },
    StaticHoliday { month: 11, day: 1, name: "Visų Šventųjų diena" },
    StaticHoliday { month: 11, day: 2, name: "Mirusiųjų atminimo (Vėlinių) diena" },
    StaticHoliday { month: 12, day: 24, name: "Kūčių diena" },
    StaticHoliday { month: 12, day: 25, name: "Kalėdų pirma diena" },
    StaticHoliday { month: 12, day: 26, name: "Kalėdų antra diena" },
];

/// Computes the date of Easter Sunday for the given year.
///
/// Anonymous Gregorian Computus, valid for the Gregorian calendar
/// (from 1583 onward).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dk_engine::config::get_easter_sunday;
///
/// assert_eq!(
///     get_easter_sunday(2026),
///     NaiveDate::from_ymd_opt(2026, 4, 5).unwrap()
/// );
/// ```
pub fn get_easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    // The computus always yields a valid March or April date
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| panic!("computus produced invalid date for year {year}"))
}

/// Returns the first Sunday of the given month.
pub(crate) fn first_sunday_of_month(year: i32, month: u32) -> NaiveDate {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| panic!("invalid month {month}"));
    let days_until_sunday = match first_day.weekday() {
        Weekday::Sun => 0,
        wd => 7 - wd.number_from_monday() as i64,
    };
    first_day + Duration::days(days_until_sunday)
}

/// Returns every Lithuanian public holiday of the given year.
///
/// 12 static dates plus Easter Sunday, Easter Monday, Mother's Day and
/// Father's Day: exactly 16 dates, all within the queried year.
pub fn get_holidays(year: i32) -> Vec<NaiveDate> {
    let mut holidays: Vec<NaiveDate> = STATIC_HOLIDAYS
        .iter()
        .map(|h| {
            NaiveDate::from_ymd_opt(year, h.month, h.day)
                .unwrap_or_else(|| panic!("invalid static holiday {}-{}", h.month, h.day))
        })
        .collect();

    let easter_sunday = get_easter_sunday(year);
    holidays.push(easter_sunday);
    holidays.push(easter_sunday + Duration::days(1));

    // Mother's Day: first Sunday of May
    holidays.push(first_sunday_of_month(year, 5));

    // Father's Day: first Sunday of June
    holidays.push(first_sunday_of_month(year, 6));

    holidays
}

/// Returns true if the date is a Lithuanian public holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    get_holidays(date.year()).contains(&date)
}

/// Returns the Lithuanian name of the holiday falling on `date`, if any.
///
/// Moveable holidays get their conventional names; when Easter Monday or a
/// moveable Sunday coincides with a static date, the static name wins.
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    if let Some(h) = STATIC_HOLIDAYS
        .iter()
        .find(|h| h.month == date.month() && h.day == date.day())
    {
        return Some(h.name);
    }

    let easter = get_easter_sunday(date.year());
    if date == easter {
        return Some("Šv. Velykos");
    }
    if date == easter + Duration::days(1) {
        return Some("Antroji šv. Velykų diena");
    }
    if date == first_sunday_of_month(date.year(), 5) {
        return Some("Motinos diena");
    }
    if date == first_sunday_of_month(date.year(), 6) {
        return Some("Tėvo diena");
    }
    None
}

/// Returns true if `date` is a pre-holiday work day (prieššventinė diena).
///
/// Three mechanical conditions (DK 112 str. 6 d.):
/// 1. the date falls on Monday-Friday,
/// 2. the date itself is not a holiday,
/// 3. the immediately following calendar day is a holiday.
///
/// The following-day lookup spans year boundaries: Dec 31 checks Jan 1 of
/// the next year.
pub fn is_pre_holiday(date: NaiveDate) -> bool {
    let weekday = date.weekday();
    if weekday == Weekday::Sat || weekday == Weekday::Sun {
        return false;
    }

    if is_holiday(date) {
        return false;
    }

    is_holiday(date + Duration::days(1))
}
