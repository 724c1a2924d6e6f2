use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

lazy_static! {
    static ref MONTHS: HashSet<&'static str> = [
        "JANUARY", "FEBRUARY", "MARCH", "APRIL", "MAY", "JUNE",
        "JULY", "AUGUST", "SEPTEMBER", "OCTOBER", "NOVEMBER", "DECEMBER",
    ]
    .into_iter()
    .collect();
    static ref WEEKDAYS: HashSet<&'static str> = [
        "SUNDAY", "MONDAY", "TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY", "SATURDAY",
    ]
    .into_iter()
    .collect();
}

/// Kind of a word that can answer a "when" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalKind {
    Year,
    Month,
    Weekday,
}

/// Digits only, with a value in 1000..=9999. Leading zeros are allowed ("01999").
pub fn is_year(token: &str) -> bool {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let significant = token.trim_start_matches('0');
    if significant.len() != 4 {
        return false;
    }
    matches!(significant.parse::<u16>(), Ok(1000..=9999))
}

pub fn is_month(token: &str) -> bool {
    MONTHS.contains(token)
}

pub fn is_weekday(token: &str) -> bool {
    WEEKDAYS.contains(token)
}

/// Classify an uppercase token. Checked in order year, month, weekday.
pub fn classify(token: &str) -> Option<TemporalKind> {
    if is_year(token) {
        Some(TemporalKind::Year)
    } else if is_month(token) {
        Some(TemporalKind::Month)
    } else if is_weekday(token) {
        Some(TemporalKind::Weekday)
    } else {
        None
    }
}
