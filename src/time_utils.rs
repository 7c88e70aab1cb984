use js_sys::Date;
use wasm_bindgen::JsValue;

/// Localized date label for a raw millisecond value, as the browser renders
/// it. A value the `Date` constructor cannot interpret (NaN) yields the
/// literal `"Invalid Date"`.
pub fn format_date_local(millis: f64) -> String {
    let date = Date::new(&JsValue::from_f64(millis));
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// Full localized date-time string.
pub fn format_datetime_local(millis: f64) -> String {
    let date = Date::new(&JsValue::from_f64(millis));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}
