use super::*;

#[test]
fn defaults_match_page_contract() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.attribute, "data-theme");
    assert_eq!(config.toggle_selector, ".theme-toggle");
    assert_eq!(config.color_scheme_query, "(prefers-color-scheme: dark)");
}

#[test]
fn icon_and_title_follow_active_theme() {
    let config = ThemeConfig::default();
    assert_eq!(config.icon_class(Theme::Dark), "fas fa-moon");
    assert_eq!(config.icon_class(Theme::Light), "fas fa-sun");
    assert_eq!(config.title(Theme::Dark), "Switch to light mode");
    assert_eq!(config.title(Theme::Light), "Switch to dark mode");
}

#[test]
fn from_json_merges_partial_overrides_with_defaults() {
    let config =
        ThemeConfig::from_json(r##"{"storage_key":"site-theme","toggle_selector":"#mode"}"##).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.toggle_selector, "#mode");
    assert_eq!(config.attribute, DEFAULT_ATTRIBUTE);
    assert_eq!(config.dark_title, DEFAULT_DARK_TITLE);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(ThemeConfig::from_json("not json"), Err(ThemeError::Config(_))));
    assert!(matches!(ThemeConfig::from_json(r#"{"attribute":7}"#), Err(ThemeError::Config(_))));
}
