//! Lithuanian display formatting: comma as the decimal separator.

/// Formats minutes as hours with two decimals and a comma separator.
///
/// # Example
///
/// ```
/// use dk_engine::format::hours_to_display;
///
/// assert_eq!(hours_to_display(480), "8,00");
/// assert_eq!(hours_to_display(90), "1,50");
/// ```
pub fn hours_to_display(minutes: i64) -> String {
    format_decimal_lt(minutes as f64 / 60.0, 2)
}

/// Formats minutes as "HH:MM", with a leading minus for negative
/// values. Hours may exceed 24.
pub fn minutes_to_hhmm(minutes: i64) -> String {
    let total = minutes.abs();
    let sign = if minutes < 0 { "-" } else { "" };
    format!("{sign}{:02}:{:02}", total / 60, total % 60)
}

/// Formats a number with a comma as the decimal separator.
pub fn format_decimal_lt(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}").replace('.', ",")
}

/// Formats a minute difference as signed hours: "+2,00", "-1,00" or
/// "0,00".
pub fn format_difference(minutes: i64) -> String {
    let formatted = format_decimal_lt((minutes as f64 / 60.0).abs(), 2);
    match minutes {
        m if m > 0 => format!("+{formatted}"),
        m if m < 0 => format!("-{formatted}"),
        _ => formatted,
    }
}
