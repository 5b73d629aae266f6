use std::collections::BTreeMap;
use std::io::Write;

use zcovid::domain::ReferenceTable;
use zcovid::{initialize, Config, Screen, Theme};

fn config_map(pairs: &[(&str, String)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

#[test]
fn reference_file_replaces_bundled_table() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"country": "Atlantis", "continent": "Europe"}}, {{"country": "Lemuria", "continent": "Asia"}}]"#
    )
    .unwrap();

    let config = Config::from_zellij(&config_map(&[(
        "reference_file",
        file.path().display().to_string(),
    )]));
    let state = initialize(&config);

    assert_eq!(state.reference.len(), 2);
    assert_eq!(state.reference.continent_of("Atlantis"), Some("Europe"));
}

#[test]
fn malformed_reference_file_falls_back_to_bundled() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();

    let config = Config::from_zellij(&config_map(&[(
        "reference_file",
        file.path().display().to_string(),
    )]));
    let state = initialize(&config);

    assert_eq!(state.reference.len(), ReferenceTable::bundled().unwrap().len());
}

#[test]
fn theme_file_wins_over_theme_name() {
    let mut custom = Theme::default();
    custom.name = "hospital-green".to_string();
    custom.colors.stat_value_fg = "#00aa55".to_string();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml::to_string(&custom).unwrap().as_bytes())
        .unwrap();

    let config = Config::from_zellij(&config_map(&[
        ("theme", "catppuccin-latte".to_string()),
        ("theme_file", file.path().display().to_string()),
    ]));
    let state = initialize(&config);

    assert_eq!(state.theme, custom);
}

#[test]
fn broken_theme_file_falls_back_to_theme_name() {
    let config = Config::from_zellij(&config_map(&[
        ("theme", "catppuccin-frappe".to_string()),
        ("theme_file", "/nonexistent/theme.toml".to_string()),
    ]));
    let state = initialize(&config);

    assert_eq!(state.theme.name, "catppuccin-frappe");
}

#[test]
fn start_screen_and_base_url_reach_the_state() {
    let config = Config::from_zellij(&config_map(&[
        ("start_screen", "regions".to_string()),
        ("api_base_url", "http://localhost:3000/".to_string()),
    ]));
    let state = initialize(&config);

    assert_eq!(state.screen, Screen::Regions);
    assert_eq!(state.base_url, "http://localhost:3000");
}
