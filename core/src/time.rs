use chrono::{Datelike, Local, NaiveDate};
use anyhow::{anyhow, Context, Result};

/// Parses an elapsed duration in `H:MM:SS` form into hours.
///
/// A leading `-` negates the result. Each component may be fractional and
/// is not range-checked, so `0:90:00` is 1.5 hours.
pub fn parse_duration(input: &str) -> Option<f64> {
    let (negative, body) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let mut values = [0.0_f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part.parse::<f64>().ok()?;
    }
    let [hours, minutes, seconds] = values;

    let total = hours + minutes / 60.0 + seconds / 3600.0;
    Some(if negative { -total } else { total })
}

/// Formats fractional hours as `HH:MM`, dropping partial minutes.
///
/// Minutes are truncated toward zero, so negative input renders with a sign
/// on both fields (`-1.5` -> `-1:-30`). Hours above 99 widen the field.
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0) as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    format!("{:02}:{:02}", h, m)
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month: {}-{:02}", year, month))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow!("Month out of range: {}-{:02}", year, month))?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Parses `YYYY-MM`.
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    let (year_str, month_str) = input
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("Expected YYYY-MM, got '{}'", input))?;

    let year: i32 = year_str.parse().with_context(|| format!("Invalid year in '{}'", input))?;
    let month: u32 = month_str.parse().with_context(|| format!("Invalid month in '{}'", input))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month must be between 1 and 12, got {}", month));
    }
    Ok((year, month))
}

pub fn current_month() -> (i32, u32) {
    let today = Local::now().date_naive();
    (today.year(), today.month())
}
