// src/utils/date.rs

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// "YYYY-MM-DD" または RFC 3339 を UTC の暦日に変換
pub fn parse_day(value: &str) -> AppResult<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
                value
            ))
        })
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 月の初日と末日（両端含む）
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(
            "Month must be between 1 and 12".to_string(),
        ));
    }

    let invalid_year = || AppError::BadRequest(format!("Invalid year: {}", year));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid_year)?;
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid_year)?;
    let last = next_month_first.pred_opt().ok_or_else(invalid_year)?;

    Ok((first, last))
}

/// month と year が両方指定された場合のみ採用し、それ以外は今月
pub fn resolve_month(month: Option<u32>, year: Option<i32>) -> (i32, u32) {
    match (month, year) {
        (Some(month), Some(year)) => (year, month),
        _ => {
            let now = today();
            (now.year(), now.month())
        }
    }
}
