//! Browser utilities shared by the page components.
//!
//! Thin wrappers over `web_sys`/`js_sys` for the few window APIs the pages
//! use: alerts and confirmations, location and history, the document title,
//! and local-time date conversions. All of them degrade to a no-op (or an
//! empty value) when the window is not available.

use js_sys::Date;
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent};
use yew::html::TargetCast;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking confirmation prompt; a missing window counts as "cancel".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn redirect(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(href) {
            log::error!("Redirect to {href} failed: {err:?}");
        }
    }
}

pub fn location_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn location_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Drops the query string from the address bar without reloading.
pub fn strip_query() {
    if let Some(window) = web_sys::window() {
        let path = location_pathname();
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
        }
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let date = Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        None
    } else {
        Some(date)
    }
}

/// Deadline formatted with the browser's locale, `N/A` when unusable.
pub fn locale_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| String::from(date.to_locale_date_string("default", &JsValue::UNDEFINED)))
        .unwrap_or_else(|| "N/A".to_string())
}

/// `datetime-local` input value (local time) to an ISO-8601 UTC instant.
pub fn local_input_to_iso(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    parse_date(value).map(|date| String::from(date.to_iso_string()))
}

/// Stored instant to a `datetime-local` input value in local time.
pub fn iso_to_local_input(raw: Option<&str>) -> String {
    match raw.and_then(parse_date) {
        Some(date) => format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            date.get_full_year(),
            date.get_month() + 1,
            date.get_date(),
            date.get_hours(),
            date.get_minutes()
        ),
        None => String::new(),
    }
}

pub fn now_iso() -> String {
    String::from(Date::new_0().to_iso_string())
}

pub fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: InputEvent) -> String {
    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
    textarea.value()
}
