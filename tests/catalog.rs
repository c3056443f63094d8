use std::fs;

use launch_sizing_calculator::config::{self, EngineConfig, load_engines, load_propellants};
use launch_sizing_calculator::core::constants::G0;
use launch_sizing_calculator::propulsion::{Engine, EngineError, Propellant, PropellantError};
use launch_sizing_calculator::sizing::catalog::{self, CatalogError};
use launch_sizing_calculator::core::propellants::PropellantKind;
use tempfile::tempdir;

#[test]
fn shipped_catalogs_load_and_convert() {
    let propellant_configs =
        load_propellants("configs/propellants.yaml").expect("propellants catalog");
    assert_eq!(propellant_configs.len(), 3);
    let propellants = propellant_configs
        .iter()
        .map(catalog::propellant_from_config)
        .collect::<Result<Vec<_>, _>>()
        .expect("convert propellants");

    let engine_configs = load_engines("configs/engines.yaml").expect("engines catalog");
    let engine =
        catalog::select_engine(&engine_configs, &propellants, Some("RL10")).expect("select RL10");

    assert!((engine.thrust_n - 110_100.0).abs() < 1e-6);
    assert!((engine.isp_s - 465.5).abs() < 1e-9);
    assert!((engine.mixture_ratio - 6.0).abs() < 1e-12);

    // Dry mass falls back to the pump-fed relationship.
    assert!((engine.dry_mass_kg - 165.311).abs() < 0.01);

    let expected_flow = engine.thrust_n / (engine.isp_s * G0);
    assert!((engine.mass_flow_kg_s() - expected_flow).abs() < 1e-12);
}

#[test]
fn catalog_selection_is_case_insensitive_and_defaults_to_first() {
    let propellant_configs =
        load_propellants("configs/propellants.yaml").expect("propellants catalog");
    let propellants = propellant_configs
        .iter()
        .map(catalog::propellant_from_config)
        .collect::<Result<Vec<_>, _>>()
        .expect("convert propellants");
    let engine_configs = load_engines("configs/engines.yaml").expect("engines catalog");

    let lower = catalog::select_engine(&engine_configs, &propellants, Some("rl10"))
        .expect("case-insensitive lookup");
    assert_eq!(lower.name, "RL10");

    let first = catalog::select_engine(&engine_configs, &propellants, None).expect("default");
    assert_eq!(first.name, engine_configs[0].name);
}

#[test]
fn toml_directory_catalogs_load_sorted() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("01_rl10.toml"),
        r#"name = "RL10"
thrust_n = 110100.0
isp_s = 465.5
fuel = "LH2"
oxidizer = "LOX"
mixture_ratio = 6.0
"#,
    )
    .expect("write rl10");
    fs::write(
        dir.path().join("02_rd180.toml"),
        r#"name = "RD-180"
thrust_n = 3830000.0
isp_s = 338.0
fuel = "RP-1"
oxidizer = "LOX"
mixture_ratio = 2.4
dry_mass_kg = 5480.0
"#,
    )
    .expect("write rd180");

    let engines = load_engines(dir.path()).expect("load directory");
    assert_eq!(engines.len(), 2);
    assert_eq!(engines[0].name, "RL10");
    assert_eq!(engines[1].name, "RD-180");
    assert_eq!(engines[1].dry_mass_kg, Some(5480.0));
    assert_eq!(engines[0].dry_mass_kg, None);
}

#[test]
fn unknown_propellant_kind_fails_to_parse() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("propellants.yaml");
    fs::write(
        &path,
        "- name: CH4\n  kind: methane\n  density_kg_m3: 422.0\n  reference_temperature_k: 111.0\n",
    )
    .expect("write");
    assert!(matches!(
        load_propellants(&path),
        Err(config::ConfigError::Parse(_))
    ));
}

#[test]
fn missing_references_surface_typed_errors() {
    let cfg = EngineConfig {
        name: "RL10".to_string(),
        thrust_n: 110_100.0,
        isp_s: 465.5,
        fuel: "LH2".to_string(),
        oxidizer: "LOX".to_string(),
        mixture_ratio: 6.0,
        dry_mass_kg: None,
    };

    assert!(matches!(
        catalog::engine_from_config(&cfg, &[]),
        Err(CatalogError::PropellantNotFound(_))
    ));
    assert!(matches!(
        catalog::select_engine(&[], &[], None),
        Err(CatalogError::EmptyCatalog)
    ));
    assert!(matches!(
        catalog::select_engine(&[cfg], &[], Some("Raptor")),
        Err(CatalogError::EngineNotFound(_))
    ));
}

#[test]
fn invalid_record_parameters_are_rejected() {
    assert!(matches!(
        Propellant::new("LOX", PropellantKind::Lox, 0.0, 88.71),
        Err(PropellantError::NonPositiveDensity(_))
    ));

    let lox = Propellant::new("LOX", PropellantKind::Lox, 1140.0, 88.71).expect("lox");
    let lh2 = Propellant::new("LH2", PropellantKind::Lh2, 41.0, 20.15).expect("lh2");
    assert!(matches!(
        Engine::new("X", 0.0, 465.5, lh2.clone(), lox.clone(), 6.0, None),
        Err(EngineError::NonPositiveThrust(_))
    ));
    assert!(matches!(
        Engine::new("X", 110.1e3, 0.0, lh2.clone(), lox.clone(), 6.0, None),
        Err(EngineError::NonPositiveIsp(_))
    ));
    assert!(matches!(
        Engine::new("X", 110.1e3, 465.5, lh2.clone(), lox.clone(), -1.0, None),
        Err(EngineError::NonPositiveMixtureRatio(_))
    ));
    assert!(matches!(
        Engine::new("X", 110.1e3, 465.5, lh2, lox, 6.0, Some(0.0)),
        Err(EngineError::NonPositiveDryMass(_))
    ));
}

#[test]
fn version_smoke() {
    assert!(!launch_sizing_calculator::version().is_empty());
}
