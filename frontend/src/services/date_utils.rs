use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use shared::Locale;

/// Current local date as a value for `<input type="date">`.
pub fn current_date_value() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Current local time as a value for `<input type="time">`.
pub fn current_time_value() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Render an RFC 3339 timestamp in the viewer's timezone using the
/// locale's conventional order. Unparseable input is shown as-is.
pub fn format_date_time(rfc3339: &str, locale: Locale) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(rfc3339) else {
        return rfc3339.to_string();
    };
    let local = parsed.with_timezone(&Local);
    match locale {
        Locale::En => local.format("%m/%d/%Y, %H:%M").to_string(),
        Locale::PtBr => local.format("%d/%m/%Y %H:%M").to_string(),
    }
}

/// Combine date and time input values into an RFC 3339 UTC timestamp.
/// The inputs are interpreted as local wall-clock time.
pub fn combine_date_time(date: &str, time: &str) -> String {
    let raw = format!("{date}T{time}");
    let fallback = || format!("{raw}:00Z");
    match NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M") {
        Ok(naive) => match Local.from_local_datetime(&naive).earliest() {
            Some(local) => local.with_timezone(&Utc).to_rfc3339(),
            None => fallback(),
        },
        Err(_) => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_combine_date_time_round_trips_through_utc() {
        let combined = combine_date_time("2024-03-10", "14:30");
        let parsed = DateTime::parse_from_rfc3339(&combined).expect("valid rfc3339");
        let local = parsed.with_timezone(&Local);
        assert_eq!(local.format("%Y-%m-%d").to_string(), "2024-03-10");
        assert_eq!(local.format("%H:%M").to_string(), "14:30");
    }

    #[wasm_bindgen_test]
    fn test_combine_date_time_falls_back_on_garbage() {
        assert_eq!(combine_date_time("not-a-date", "25:99"), "not-a-dateT25:99:00Z");
    }

    #[wasm_bindgen_test]
    fn test_format_date_time_keeps_unparseable_input() {
        assert_eq!(format_date_time("soon", Locale::En), "soon");
    }

    #[wasm_bindgen_test]
    fn test_format_date_time_locale_ordering() {
        let en = format_date_time("2024-03-10T14:30:00Z", Locale::En);
        let pt = format_date_time("2024-03-10T14:30:00Z", Locale::PtBr);
        assert!(en.contains(", "));
        assert!(!pt.contains(','));
    }
}
