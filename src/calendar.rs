use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

/// US federal holidays, 2024 through 2027.
const HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (2024, 1, 1, "New Year's Day"),
    (2024, 1, 15, "Martin Luther King Jr. Day"),
    (2024, 2, 19, "Presidents' Day"),
    (2024, 5, 27, "Memorial Day"),
    (2024, 6, 19, "Juneteenth"),
    (2024, 7, 4, "Independence Day"),
    (2024, 9, 2, "Labor Day"),
    (2024, 10, 14, "Columbus Day"),
    (2024, 11, 11, "Veterans Day"),
    (2024, 11, 28, "Thanksgiving Day"),
    (2024, 12, 25, "Christmas Day"),
    (2025, 1, 1, "New Year's Day"),
    (2025, 1, 20, "Martin Luther King Jr. Day"),
    (2025, 2, 17, "Presidents' Day"),
    (2025, 5, 26, "Memorial Day"),
    (2025, 6, 19, "Juneteenth"),
    (2025, 7, 4, "Independence Day"),
    (2025, 9, 1, "Labor Day"),
    (2025, 10, 13, "Columbus Day"),
    (2025, 11, 11, "Veterans Day"),
    (2025, 11, 27, "Thanksgiving Day"),
    (2025, 12, 25, "Christmas Day"),
    (2026, 1, 1, "New Year's Day"),
    (2026, 1, 19, "Martin Luther King Jr. Day"),
    (2026, 2, 16, "Presidents' Day"),
    (2026, 5, 25, "Memorial Day"),
    (2026, 6, 19, "Juneteenth"),
    (2026, 7, 4, "Independence Day"),
    (2026, 9, 7, "Labor Day"),
    (2026, 10, 12, "Columbus Day"),
    (2026, 11, 11, "Veterans Day"),
    (2026, 11, 26, "Thanksgiving Day"),
    (2026, 12, 25, "Christmas Day"),
    (2027, 1, 1, "New Year's Day"),
    (2027, 1, 18, "Martin Luther King Jr. Day"),
    (2027, 2, 15, "Presidents' Day"),
    (2027, 5, 31, "Memorial Day"),
    (2027, 6, 19, "Juneteenth"),
    (2027, 7, 4, "Independence Day"),
    (2027, 9, 6, "Labor Day"),
    (2027, 10, 11, "Columbus Day"),
    (2027, 11, 11, "Veterans Day"),
    (2027, 11, 25, "Thanksgiving Day"),
    (2027, 12, 25, "Christmas Day"),
];

const QUOTES: &[(&str, &str)] = &[
    ("The secret of getting ahead is getting started.", "Mark Twain"),
    ("Focus on being productive instead of busy.", "Tim Ferriss"),
    ("Do what you can, with what you have, where you are.", "Theodore Roosevelt"),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("Your time is limited, don't waste it living someone else's life.", "Steve Jobs"),
    ("It's not that I'm so smart, it's just that I stay with problems longer.", "Albert Einstein"),
    ("Success is not final, failure is not fatal: it is the courage to continue that counts.", "Winston Churchill"),
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Simplicity is the ultimate sophistication.", "Leonardo da Vinci"),
    ("Done is better than perfect.", "Sheryl Sandberg"),
    ("The best time to plant a tree was 20 years ago. The second best time is now.", "Chinese Proverb"),
    ("Action is the foundational key to all success.", "Pablo Picasso"),
    ("Start where you are. Use what you have. Do what you can.", "Arthur Ashe"),
    ("A journey of a thousand miles begins with a single step.", "Lao Tzu"),
    ("You don't have to be great to start, but you have to start to be great.", "Zig Ziglar"),
    ("The future depends on what you do today.", "Mahatma Gandhi"),
    ("Work hard in silence, let your success be the noise.", "Frank Ocean"),
    ("Dreams don't work unless you do.", "John C. Maxwell"),
    ("Small daily improvements are the key to staggering long-term results.", "Robin Sharma"),
    ("Productivity is never an accident. It is always the result of commitment to excellence.", "Paul J. Meyer"),
    ("Don't count the days, make the days count.", "Muhammad Ali"),
    ("Either you run the day, or the day runs you.", "Jim Rohn"),
    ("The harder you work for something, the greater you'll feel when you achieve it.", "Unknown"),
    ("Push yourself, because no one else is going to do it for you.", "Unknown"),
    ("Great things never come from comfort zones.", "Unknown"),
    ("Wake up with determination. Go to bed with satisfaction.", "Unknown"),
    ("It always seems impossible until it's done.", "Nelson Mandela"),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt"),
    ("The only limit to our realization of tomorrow is our doubts of today.", "Franklin D. Roosevelt"),
    ("What you get by achieving your goals is not as important as what you become.", "Zig Ziglar"),
];

fn holidays() -> impl Iterator<Item = Holiday> {
    HOLIDAYS.iter().filter_map(|&(y, m, d, name)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| Holiday { date, name })
    })
}

pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    holidays().find(|holiday| holiday.date == date)
}

/// `month` is 1-based.
pub fn holidays_in_month(year: i32, month: u32) -> Vec<Holiday> {
    holidays()
        .filter(|holiday| holiday.date.year() == year && holiday.date.month() == month)
        .collect()
}

/// The same quote for every request on a given day.
pub fn daily_quote(date: NaiveDate) -> Quote {
    let (text, author) = QUOTES[date.ordinal() as usize % QUOTES.len()];
    Quote { text, author }
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// "Friday, October 16"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn finds_holidays() {
        assert_eq!(holiday_on(day(2026, 7, 4)).map(|h| h.name), Some("Independence Day"));
        assert!(holiday_on(day(2026, 7, 5)).is_none());
        let november = holidays_in_month(2026, 11);
        assert_eq!(november.len(), 2);
        assert_eq!(november[1].name, "Thanksgiving Day");
    }

    #[test]
    fn quote_is_stable_within_a_day_and_rotates() {
        let jan1 = daily_quote(day(2026, 1, 1));
        assert_eq!(jan1, daily_quote(day(2026, 1, 1)));
        assert_eq!(jan1.author, "Tim Ferriss");
        assert_ne!(jan1, daily_quote(day(2026, 1, 2)));
    }

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
    }

    #[test]
    fn formats_long_date() {
        assert_eq!(long_date(day(2026, 10, 16)), "Friday, October 16");
    }
}
