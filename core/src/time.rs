use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Weekday};
use anyhow::{anyhow, Result};

/// Parses a date relative to the local today.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    parse_date_from(input, Local::now().date_naive())
}

pub fn parse_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    // 2. Weekday names mean the next such day, never today
    if let Ok(weekday) = parse_weekday(input) {
        let mut days_needed = weekday.num_days_from_monday() as i64
            - today.weekday().num_days_from_monday() as i64;
        if days_needed <= 0 {
            days_needed += 7;
        }
        return Ok(today + Duration::days(days_needed));
    }

    // 3. Explicit formats
    if let Ok(d) = NaiveDate::parse_from_str(input, "%d/%m/%Y") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d);
    }

    Err(anyhow!("Could not parse date: {} (expected dd/mm/yyyy)", input))
}

pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| anyhow!("Could not parse time: {} (expected hh:mm)", input))
}

pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday: {}", s)),
    }
}
