use chrono::{Datelike, NaiveDate};
use common::DateLabel;
use wasm_bindgen::JsValue;

/// Dates formatted the way the browser's locale prints them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDateLabel;

impl DateLabel for BrowserDateLabel {
    fn label(&self, date: NaiveDate) -> String {
        // Local midnight of `date`
        let js_date = js_sys::Date::new_with_year_month_day(
            date.year() as u32,
            date.month0() as i32,
            date.day() as i32,
        );
        js_date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
    }
}
