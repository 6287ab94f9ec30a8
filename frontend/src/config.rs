use web_sys::{window, Element};
use shared::constants::CSRF_META_NAME;
use shared::settings::SpinSettings;
use shared::shared_roulette::PageData;

/// `<script type="application/json">` element the server renders page data into.
pub const PAGE_DATA_ELEMENT_ID: &str = "roulette-data";
pub const SPIN_SETTINGS_ATTRIBUTE: &str = "data-spin-settings";

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let Ok(host) = location.host() {
            if !host.is_empty() {
                // Same origin as the page so the session and CSRF cookies are sent
                let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
                return format!("{}//{}", protocol, host);
            }
        }
    }

    // Default to the Django dev server
    "http://127.0.0.1:8000".to_string()
}

/// Token from `<meta name="csrf-token">`, or empty when the tag is missing.
pub fn csrf_token() -> String {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", CSRF_META_NAME)).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
        .unwrap_or_default()
}

fn page_data_element() -> Option<Element> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_DATA_ELEMENT_ID))
}

pub fn load_page_data() -> PageData {
    let raw = match page_data_element().and_then(|el| el.text_content()) {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            log::warn!("No #{} element found; starting with empty page data", PAGE_DATA_ELEMENT_ID);
            return PageData::default();
        }
    };

    match serde_json::from_str::<PageData>(&raw) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to parse page data: {}", e);
            PageData::default()
        }
    }
}

pub fn load_spin_settings() -> SpinSettings {
    page_data_element()
        .and_then(|el| el.get_attribute(SPIN_SETTINGS_ATTRIBUTE))
        .map(|raw| SpinSettings::from_json(&raw))
        .unwrap_or_default()
}
