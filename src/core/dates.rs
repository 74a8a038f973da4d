use chrono::{Days, Months, NaiveDate};

/// Computes the eligibility cutoff: `today` plus a calendar-aware month
/// offset, then a day offset. Adding months clamps at month end
/// (Jan 31 + 1 month = Feb 28/29), matching calendar arithmetic rather
/// than a fixed 30-day window.
pub fn cutoff_date(today: NaiveDate, months: u32, days: u32) -> NaiveDate {
    today + Months::new(months) + Days::new(u64::from(days))
}

/// Translates an English three-letter month abbreviation to its
/// Portuguese counterpart. Unmapped input is passed through unchanged.
pub fn translate_month_abbrev(month: &str) -> &str {
    match month {
        "Jan" => "Jan",
        "Feb" => "Fev",
        "Mar" => "Mar",
        "Apr" => "Abr",
        "May" => "Mai",
        "Jun" => "Jun",
        "Jul" => "Jul",
        "Aug" => "Ago",
        "Sep" => "Set",
        "Oct" => "Out",
        "Nov" => "Nov",
        "Dec" => "Dez",
        other => other,
    }
}

/// Formats a date as `<Mon>-<YY>` with the month abbreviation localized,
/// e.g. 2026-02-10 becomes `Fev-26`. Used as a billet tag.
pub fn month_year_tag(date: NaiveDate) -> String {
    let english = date.format("%b-%y").to_string();
    match english.split_once('-') {
        Some((month, year)) => format!("{}-{}", translate_month_abbrev(month), year),
        None => english,
    }
}
