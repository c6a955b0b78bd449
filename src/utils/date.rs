use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Monday on or before the given date. Anchors the weekly target ledger.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Expand a period expression into an inclusive date range.
///
/// Supported: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and `start:end` ranges of
/// the same shapes (e.g. `2025-06:2025-08`).
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if p.contains(':') {
        let parts: Vec<&str> = p.split(':').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid range: {}", p));
        }
        let (s, _) = single_period_bounds(parts[0])?;
        let (_, e) = single_period_bounds(parts[1])?;
        return Ok((s, e));
    }
    single_period_bounds(p)
}

fn single_period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d") {
        let mut d = first;
        while d.month() == first.month() {
            d = d.succ_opt().unwrap();
        }
        return Ok((first, d.pred_opt().unwrap()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(format!("Invalid year: {}", p))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}
