use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use doctor_cell::date_key;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of the 1st, Sunday = 0 (Sakamoto's method).
pub fn first_weekday(year: i32, month0: u32) -> u32 {
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month0 < 2 { year - 1 } else { year };
    let idx = month0.min(11) as usize;
    (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + OFFSETS[idx] + 1).rem_euclid(7)
        as u32
}

/// The month shown by the date picker. Only year and month are tracked, so
/// stepping never has to carry a day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    /// Zero-based, January = 0.
    pub month0: u32,
}

impl MonthView {
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        (month0 < 12).then_some(Self { year, month0 })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self { year: self.year + 1, month0: 0 }
        } else {
            Self { year: self.year, month0: self.month0 + 1 }
        }
    }

    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            Self { year: self.year - 1, month0: 11 }
        } else {
            Self { year: self.year, month0: self.month0 - 1 }
        }
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month0)
    }

    pub fn leading_blanks(&self) -> u32 {
        first_weekday(self.year, self.month0)
    }

    /// Blank cells up to the 1st's weekday column, then each day in order.
    pub fn grid(&self) -> Vec<Option<u32>> {
        let blanks = self.leading_blanks() as usize;
        let mut cells = Vec::with_capacity(blanks + self.days() as usize);
        cells.extend(std::iter::repeat(None).take(blanks));
        cells.extend((1..=self.days()).map(Some));
        cells
    }

    pub fn contains(&self, day: u32) -> bool {
        (1..=self.days()).contains(&day)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    pub fn date_key(&self, day: u32) -> String {
        date_key(self.year, self.month0, day)
    }

    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize % 12], self.year)
    }

    /// Annotates the grid for rendering. `has_slots` answers whether a date
    /// key has any open time.
    pub fn cells<F>(&self, today: NaiveDate, selected_key: Option<&str>, has_slots: F) -> Vec<CalendarCell>
    where
        F: Fn(&str) -> bool,
    {
        self.grid()
            .into_iter()
            .map(|cell| match cell {
                None => CalendarCell::blank(),
                Some(day) => {
                    let key = self.date_key(day);
                    let past = self.date(day).map_or(true, |date| date < today);
                    let available = has_slots(&key);
                    CalendarCell {
                        day: Some(day),
                        selected: selected_key == Some(key.as_str()),
                        selectable: available && !past,
                        available,
                        past,
                        date_key: Some(key),
                    }
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub date_key: Option<String>,
    pub available: bool,
    pub past: bool,
    pub selectable: bool,
    pub selected: bool,
}

impl CalendarCell {
    fn blank() -> Self {
        Self {
            day: None,
            date_key: None,
            available: false,
            past: false,
            selectable: false,
            selected: false,
        }
    }
}
