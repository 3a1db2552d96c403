//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, defaults, and
//! validation.

use bpsim_core::common::ConfigError;
use bpsim_core::config::*;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_predictions);
    assert_eq!(config.predictor.kind, BranchPredictor::GShare);
    assert_eq!(config.predictor.btb_size, 256);
    assert_eq!(config.predictor.bhr_size, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_tournament_config_defaults() {
    let tournament = TournamentConfig::default();
    assert!(!tournament.update_global_history);
    assert!(!tournament.train_meta_on_prediction);
}

#[test]
fn test_branch_predictor_enum() {
    assert_eq!(BranchPredictor::default(), BranchPredictor::GShare);
    assert_ne!(BranchPredictor::GShare, BranchPredictor::Tournament);
}

#[test]
fn test_json_deserialization_full() {
    let json = r#"{
        "general": { "trace_predictions": true },
        "predictor": {
            "kind": "Tournament",
            "btb_size": 1024,
            "bhr_size": 14,
            "tournament": {
                "update_global_history": true,
                "train_meta_on_prediction": false
            }
        }
    }"#;

    let config = Config::from_json(json).unwrap();
    assert!(config.general.trace_predictions);
    assert_eq!(config.predictor.kind, BranchPredictor::Tournament);
    assert_eq!(config.predictor.btb_size, 1024);
    assert_eq!(config.predictor.bhr_size, 14);
    assert!(config.predictor.tournament.update_global_history);
    assert!(!config.predictor.tournament.train_meta_on_prediction);
}

#[test]
fn test_json_deserialization_empty_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert!(!config.general.trace_predictions);
    assert_eq!(config.predictor.kind, BranchPredictor::GShare);
    assert_eq!(config.predictor.btb_size, 256);
    assert_eq!(config.predictor.bhr_size, 8);
}

#[test]
fn test_json_deserialization_partial_predictor() {
    let config = Config::from_json(r#"{ "predictor": { "bhr_size": 4 } }"#).unwrap();
    assert_eq!(config.predictor.bhr_size, 4);
    assert_eq!(config.predictor.btb_size, 256);
    assert_eq!(config.predictor.tournament, TournamentConfig::default());
}

#[rstest]
#[case("GShare", BranchPredictor::GShare)]
#[case("gshare", BranchPredictor::GShare)]
#[case("GSHARE", BranchPredictor::GShare)]
#[case("Tournament", BranchPredictor::Tournament)]
#[case("tournament", BranchPredictor::Tournament)]
#[case("GShare+", BranchPredictor::Tournament)]
#[case("GSharePlus", BranchPredictor::Tournament)]
fn test_predictor_kind_aliases(#[case] name: &str, #[case] kind: BranchPredictor) {
    let json = format!(r#"{{ "predictor": {{ "kind": "{name}" }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().predictor.kind, kind);
}

#[rstest]
#[case("gshare", BranchPredictor::GShare)]
#[case("GShare", BranchPredictor::GShare)]
#[case("tournament", BranchPredictor::Tournament)]
#[case("gshare+", BranchPredictor::Tournament)]
#[case("GSharePlus", BranchPredictor::Tournament)]
fn test_predictor_from_str(#[case] name: &str, #[case] kind: BranchPredictor) {
    assert_eq!(name.parse::<BranchPredictor>().unwrap(), kind);
}

#[test]
fn test_predictor_from_str_unknown() {
    assert_eq!(
        "tage".parse::<BranchPredictor>().unwrap_err(),
        ConfigError::UnknownPredictor("tage".to_string())
    );
}

#[test]
fn test_json_invalid_btb_size_rejected() {
    let err = Config::from_json(r#"{ "predictor": { "btb_size": 100 } }"#).unwrap_err();
    assert_eq!(err, ConfigError::BtbSizeNotPowerOfTwo(100));
}

#[test]
fn test_json_invalid_history_rejected() {
    let err = Config::from_json(r#"{ "predictor": { "bhr_size": 0 } }"#).unwrap_err();
    assert_eq!(err, ConfigError::HistoryBitsOutOfRange(0));
}

#[test]
fn test_json_malformed_rejected() {
    let err = Config::from_json(r#"{ "predictor": "#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_json_unknown_kind_rejected() {
    let err = Config::from_json(r#"{ "predictor": { "kind": "Perceptron" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[rstest]
#[case(1, 1)]
#[case(2, 8)]
#[case(4096, 16)]
#[case(1 << 31, 32)]
fn test_validate_geometry_accepts(#[case] btb: u32, #[case] bhr: u32) {
    assert!(validate_geometry(btb, bhr).is_ok());
}

#[rstest]
#[case(0, 8, ConfigError::BtbSizeNotPowerOfTwo(0))]
#[case(255, 8, ConfigError::BtbSizeNotPowerOfTwo(255))]
#[case(u32::MAX, 8, ConfigError::BtbSizeNotPowerOfTwo(u32::MAX))]
#[case(256, 0, ConfigError::HistoryBitsOutOfRange(0))]
#[case(256, 33, ConfigError::HistoryBitsOutOfRange(33))]
fn test_validate_geometry_rejects(#[case] btb: u32, #[case] bhr: u32, #[case] err: ConfigError) {
    assert_eq!(validate_geometry(btb, bhr).unwrap_err(), err);
}

#[test]
fn test_btb_checked_before_history() {
    assert_eq!(
        validate_geometry(0, 0).unwrap_err(),
        ConfigError::BtbSizeNotPowerOfTwo(0)
    );
}
