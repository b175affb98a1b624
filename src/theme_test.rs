use super::*;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_between_the_two_themes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn as_str_matches_display_and_serde() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.to_string(), theme.as_str());
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, format!("\"{}\"", theme.as_str()));
        assert_eq!(serde_json::from_str::<Theme>(&json).unwrap(), theme);
    }
}

#[test]
fn from_str_accepts_exact_values() {
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
}

#[test]
fn from_str_rejects_case_and_whitespace_variants() {
    for raw in ["DARK", "Dark", " dark", "dark\n", "LIGHT"] {
        let err = raw.parse::<Theme>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(ref got) if got == raw));
    }
}

#[test]
fn from_str_rejects_unknown_values() {
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert!(matches!(err, ThemeError::UnknownTheme(ref raw) if raw == "sepia"));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn from_prefers_dark_maps_signal() {
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    assert!(Theme::from_prefers_dark(true).is_dark());
}
