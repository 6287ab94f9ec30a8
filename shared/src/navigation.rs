use url::form_urlencoded;

use crate::constants::{BACKEND_PAGE_PATH, DRAW_PAGE_PATH};

fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
    format!("{}?{}", path, query.finish())
}

/// Draw page for a configuration. `None` when nothing is selected.
pub fn draw_page_url(config_id: &str) -> Option<String> {
    let config_id = config_id.trim();
    if config_id.is_empty() {
        return None;
    }
    Some(with_query(DRAW_PAGE_PATH, &[("config", config_id)]))
}

/// Admin page for a configuration. `None` when nothing is selected.
pub fn backend_page_url(config_id: &str) -> Option<String> {
    let config_id = config_id.trim();
    if config_id.is_empty() {
        return None;
    }
    Some(with_query(BACKEND_PAGE_PATH, &[("config", config_id)]))
}

/// Admin page with an archived activity's history opened.
pub fn activity_detail_url(config_id: Option<&str>, activity_name: &str) -> String {
    match config_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => with_query(BACKEND_PAGE_PATH, &[("config", id), ("activity", activity_name)]),
        None => with_query(BACKEND_PAGE_PATH, &[("activity", activity_name)]),
    }
}

/// Where to go once a new activity has been created.
pub fn after_new_activity_url(config_id: Option<&str>) -> String {
    config_id
        .and_then(draw_page_url)
        .unwrap_or_else(|| DRAW_PAGE_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_redirects() {
        assert_eq!(draw_page_url("4").as_deref(), Some("/?config=4"));
        assert_eq!(backend_page_url("4").as_deref(), Some("/backend/?config=4"));
        assert_eq!(draw_page_url(""), None);
        assert_eq!(backend_page_url("  "), None);
    }

    #[test]
    fn test_after_new_activity() {
        assert_eq!(after_new_activity_url(Some("7")), "/?config=7");
        assert_eq!(after_new_activity_url(Some("")), "/");
        assert_eq!(after_new_activity_url(None), "/");
    }

    #[test]
    fn test_activity_detail_escapes_name() {
        assert_eq!(
            activity_detail_url(Some("2"), "A&B"),
            "/backend/?config=2&activity=A%26B"
        );
        assert_eq!(activity_detail_url(None, "x y"), "/backend/?activity=x+y");
    }
}
