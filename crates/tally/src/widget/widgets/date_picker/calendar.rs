//! Calendar arithmetic for the date picker.

/// Month names shown on the month wheel, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Check if a year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a month.
///
/// `month` is zero-based (0 = January). Indices outside `0..12` roll over
/// into neighbouring years, so `days_in_month(12, 2024)` is January 2025 and
/// `days_in_month(-1, 2025)` is December 2024.
pub fn days_in_month(month: i32, year: i32) -> u32 {
    let year = year + month.div_euclid(12);
    match month.rem_euclid(12) {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// The fixed, ordered list of years a year wheel offers.
///
/// Built once from the year the picker was constructed in and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRange {
    first: i32,
    len: usize,
}

impl YearRange {
    /// Years `center - span ..= center + span`, cut off at the limits of
    /// `i32`.
    pub fn centered_on(center: i32, span: u32) -> Self {
        let span = i32::try_from(span).unwrap_or(i32::MAX);
        let first = center.saturating_sub(span);
        let last = center.saturating_add(span);
        Self {
            first,
            len: (i64::from(last) - i64::from(first) + 1) as usize,
        }
    }

    /// Number of years in the range.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a range holds at least its centre year.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First (smallest) year.
    pub fn first(&self) -> i32 {
        self.first
    }

    /// Last (largest) year.
    pub fn last(&self) -> i32 {
        (i64::from(self.first) + self.len as i64 - 1) as i32
    }

    /// Whether `year` is offered.
    pub fn contains(&self, year: i32) -> bool {
        (self.first..=self.last()).contains(&year)
    }

    /// Exact index of `year`, if it is in the range.
    pub fn index_of(&self, year: i32) -> Option<usize> {
        self.contains(year).then(|| self.offset_of(year))
    }

    /// Index of `year`, clamped to the first or last entry when out of range.
    pub fn nearest_index(&self, year: i32) -> usize {
        self.offset_of(year.clamp(self.first, self.last()))
    }

    fn offset_of(&self, year: i32) -> usize {
        (i64::from(year) - i64::from(self.first)) as usize
    }

    /// Year at `index`, clamped to the range bounds.
    pub fn year_at(&self, index: usize) -> i32 {
        (i64::from(self.first) + index.min(self.len - 1) as i64) as i32
    }

    /// All years in order.
    pub fn years(&self) -> Vec<i32> {
        (self.first..=self.last()).collect()
    }
}
