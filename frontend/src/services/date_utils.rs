use chrono::NaiveDate;

/// Current local calendar date from the browser clock.
///
/// This is the only place the "current date" is read; everything below it
/// takes the date as an explicit parameter.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        // JavaScript months are 0-indexed
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Format an ISO date string for display, e.g. "Mon, Oct 16".
///
/// Falls back to the raw string when it does not parse.
pub fn format_display_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %b %-d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2023-10-16"), "Mon, Oct 16");
        assert_eq!(format_display_date("2023-10-15"), "Sun, Oct 15");
    }

    #[test]
    fn test_format_display_date_falls_back_on_garbage() {
        assert_eq!(format_display_date("soon"), "soon");
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_is_a_real_date() {
        let date = today();
        assert!(date.format("%Y-%m-%d").to_string().len() >= 10);
    }
}
