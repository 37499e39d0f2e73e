use mimic_paint::Color;
use mimic_theme::*;
use std::fs;

#[test]
fn parses_full_config() {
    let config = ThemeConfig::from_toml_str(
        r##"
style = "classic"

[scrollbar]
thumb_inactive = "#C1C1C1"
thumb_active = "#A8A8A8"
track = "#80F0F0F0"
"##,
    )
    .unwrap();

    assert_eq!(config.style, ThemeStyle::Classic);
    assert_eq!(
        config.scrollbar,
        Some(ScrollbarColors::new(
            Color::from_hex(0xC1C1C1),
            Color::from_hex(0xA8A8A8),
            Color(0x80F0_F0F0),
        ))
    );
}

#[test]
fn empty_config_is_auto() {
    let config = ThemeConfig::from_toml_str("").unwrap();
    assert_eq!(config, ThemeConfig::default());
    assert_eq!(config.style, ThemeStyle::Auto);
    assert_eq!(config.scrollbar, None);
}

#[test]
fn round_trips_through_toml() {
    let config = ThemeConfig {
        style: ThemeStyle::Adwaita,
        scrollbar: Some(ScrollbarColors::new(Color::RED, Color::GREEN, Color::BLUE)),
    };
    let text = config.to_toml().unwrap();
    assert!(text.contains("style = \"adwaita\""));
    assert_eq!(ThemeConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn rejects_bad_values() {
    assert!(matches!(
        ThemeConfig::from_toml_str("style = \"aqua\""),
        Err(ThemeError::ConfigParse(_))
    ));
    assert!(matches!(
        ThemeConfig::from_toml_str(
            "[scrollbar]\nthumb_inactive = \"grey\"\nthumb_active = \"#000000\"\ntrack = \"#000000\"\n"
        ),
        Err(ThemeError::ConfigParse(_))
    ));
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("mimic-theme-missing/mimic.toml");
    match ThemeConfig::load(&path) {
        Err(ThemeError::ConfigRead { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ConfigRead, got {other:?}"),
    }
}

#[test]
fn load_and_build() {
    let dir = std::env::temp_dir().join(format!("mimic-theme-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mimic.toml");
    fs::write(
        &path,
        "style = \"fluent\"\n\n[scrollbar]\nthumb_inactive = \"#010203\"\nthumb_active = \"#040506\"\ntrack = \"#070809\"\n",
    )
    .unwrap();

    let config = ThemeConfig::load(&path).unwrap();
    let theme = config.build();
    assert_eq!(theme.name(), WindowsTheme::NAME);
    assert_eq!(theme.scrollbar_colors().track, Color::from_hex(0x070809));

    fs::remove_dir_all(&dir).unwrap();
}
