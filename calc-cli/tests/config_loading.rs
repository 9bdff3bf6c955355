//! Loads the engine configuration from fixture files on disk and runs a
//! session with it.

use std::path::{Path, PathBuf};

use calc_cli::{
    session::parse_script,
    settings::{SettingsError, load_engine_config},
};
use calc_core::{CalculatorEngine, EngineConfigError, FixedClock, SizeTier};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_config() {
    let config = load_engine_config(Some(fixture("engine.toml").as_path()))
        .expect("fixture config should load");

    assert_eq!(config.magic_trigger_count, 3);
    assert_eq!(config.medium_tier_min_len, 8);
    assert_eq!(config.small_tier_min_len, 12);
}

#[test]
fn test_invalid_fixture_is_rejected() {
    let result = load_engine_config(Some(fixture("invalid_engine.toml").as_path()));

    assert!(matches!(
        result,
        Err(SettingsError::Invalid(
            EngineConfigError::InvalidTierThresholds {
                medium: 12,
                small: 8
            }
        ))
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let path = fixture("does_not_exist.toml");

    let error = load_engine_config(Some(path.as_path())).unwrap_err();

    assert!(matches!(error, SettingsError::Read { .. }));
    assert!(error.to_string().contains("does_not_exist.toml"));
}

#[test]
fn test_fixture_config_delays_magic_until_third_add() {
    let config = load_engine_config(Some(fixture("engine.toml").as_path())).unwrap();
    let mut engine = CalculatorEngine::with_config(FixedClock::at(2, 16, 22, 44), config).unwrap();

    engine.press_all(&parse_script("1 add 2 add").unwrap());
    assert!(!engine.state().is_magic_mode());

    engine.press_all(&parse_script("3 add").unwrap());
    assert!(engine.state().is_magic_mode());
    assert_eq!(engine.state().magic_target_value(), "2162238");
}

#[test]
fn test_fixture_config_moves_tier_thresholds() {
    let config = load_engine_config(Some(fixture("engine.toml").as_path())).unwrap();
    let mut engine = CalculatorEngine::with_config(FixedClock::at(2, 16, 22, 44), config).unwrap();

    // "1,234,567" is 9 characters: medium under the fixture thresholds
    let display = engine.press_all(&parse_script("1 2 3 4 5 6 7").unwrap());

    assert_eq!(display.tier, SizeTier::Medium);
}
