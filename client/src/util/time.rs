//! Display formatting for the server's local date-time strings.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// `2025-06-01T18:05:00` -> `Jun 1, 2025, 6:05 PM`.
///
/// Anything that does not parse is returned unchanged.
pub fn format_date_time(raw: &str) -> String {
    parse(raw).map_or_else(|| raw.to_owned(), |dt| dt.to_string())
}

struct DateTime {
    year: u16,
    month: usize,
    day: u8,
    hour: u8,
    minute: u8,
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hour12, meridiem) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(
            f,
            "{} {}, {}, {}:{:02} {}",
            MONTHS[self.month - 1],
            self.day,
            self.year,
            hour12,
            self.minute,
            meridiem
        )
    }
}

fn parse(raw: &str) -> Option<DateTime> {
    let (date, time) = raw.trim().split_once('T')?;
    let mut date_parts = date.splitn(3, '-');
    let year = date_parts.next()?.parse().ok()?;
    let month: usize = date_parts.next()?.parse().ok()?;
    let day: u8 = date_parts.next()?.parse().ok()?;
    let mut time_parts = time.splitn(3, ':');
    let hour: u8 = time_parts.next()?.parse().ok()?;
    let minute: u8 = time_parts.next()?.get(..2)?.parse().ok()?;

    let valid = (1..=12).contains(&month) && (1..=31).contains(&day) && hour < 24 && minute < 60;
    valid.then_some(DateTime { year, month, day, hour, minute })
}
