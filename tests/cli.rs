use lifeterm_lib::cli::{exit_code, parse_from};
use lifeterm_lib::model::config::AppConfig;

#[test]
fn test_flags_override_config() {
    let args = parse_from(["lifeterm", "-2", "-nc", "-nh", "-ni", "--seed", "9"]).unwrap();
    let mut config = AppConfig::default();
    args.apply_to(&mut config);

    assert!(config.display.double_height);
    assert!(!config.display.use_colors);
    assert!(!config.display.show_history);
    assert!(!config.display.show_info);
    assert_eq!(config.simulation.seed, Some(9));
}

#[test]
fn test_absent_flags_keep_file_values() {
    let mut config = AppConfig::from_toml(
        r#"
        [display]
        double_height = true
        use_colors = false
        "#,
    )
    .unwrap();
    parse_from(["lifeterm"]).unwrap().apply_to(&mut config);
    assert!(config.display.double_height);
    assert!(!config.display.use_colors);
}

#[test]
fn test_log_level_flag_is_validated() {
    let mut config = AppConfig::default();
    parse_from(["lifeterm", "--log-level", "chatty"])
        .unwrap()
        .apply_to(&mut config);
    assert!(config.validate().is_err());
}

#[test]
fn test_exit_codes() {
    assert_eq!(exit_code(&parse_from(["lifeterm", "--help"]).unwrap_err()), 0);
    assert_eq!(exit_code(&parse_from(["lifeterm", "--bogus"]).unwrap_err()), 1);
}
