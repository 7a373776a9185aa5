pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

/// "HH:MM" in the browser's local timezone, for the autosave indicator.
pub(crate) fn clock_label(ms: i64) -> String {
    let d = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
    format!("{:02}:{:02}", d.get_hours(), d.get_minutes())
}
