use super::*;

#[test]
fn test_empty_toml_gives_defaults() {
    assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let config = MatchConfig::from_toml_str("num_games = 4\ndepth = 2\nverbose = false\n").unwrap();
    assert_eq!(config.num_games, 4);
    assert_eq!(config.depth, 2);
    assert!(!config.verbose);
    assert_eq!(config.max_moves, 200);
    assert!(config.alternate_colors);
}

#[test]
fn test_bad_toml_is_an_error() {
    let err = MatchConfig::from_toml_str("depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_reports_path() {
    let err = MatchConfig::load("does/not/exist.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("exist.toml")),
        other => panic!("expected io error, got {other}"),
    }
}
