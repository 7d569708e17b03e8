//! Pure formatting and classification helpers for product display.
//!
//! All functions here are referentially transparent: anything that depends
//! on the calendar takes `today` as a parameter instead of reading the
//! clock, so callers decide once per render what "now" means.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;

/// A release stays "new" for this many trailing days, inclusive.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Format an integer amount of minor currency units (cents) as a US dollar
/// string with two fraction digits and thousands grouping, e.g. `$1,234.56`.
///
/// Integer arithmetic only; there is no rounding because the input is
/// already integral cents.
pub fn format_price(minor_units: u32) -> String {
    let dollars = minor_units / 100;
    let cents = minor_units % 100;
    format!("${}.{cents:02}", group_thousands(dollars))
}

/// Render `count` with `label`, pluralized with a trailing `s` for every
/// count except exactly one. Zero is plural: `0 Colors`.
pub fn pluralize(label: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {label}")
    } else {
        format!("{count} {label}s")
    }
}

/// Whether `release_date` falls within the trailing new-release window of
/// `today`. A shoe released exactly [`NEW_RELEASE_WINDOW_DAYS`] ago is still
/// new; one day older is not. Future-dated releases count as new.
pub fn is_new_release(release_date: NaiveDate, today: NaiveDate) -> bool {
    (today - release_date).num_days() <= NEW_RELEASE_WINDOW_DAYS
}

/// Insert `,` separators every three digits, e.g. `1234567` -> `1,234,567`.
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
