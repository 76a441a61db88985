//! The global engine is process-wide, so this binary holds a single test.

use ziwei_rs::{
    BirthInput, EngineConfig, Gender, HourInput, PalaceName, ZiweiError, chart, destiny, health,
    init, is_initialized, lunar_date, transformations,
};

#[test]
fn global_engine_lifecycle() {
    let input = BirthInput::new(1990, 1, 1, HourInput::Clock(0), Gender::Male, "golden");

    // Table lookups work without an engine.
    assert_eq!(lunar_date(1990, 1, 1).unwrap().to_string(), "己巳年臘月初五");
    assert_eq!(transformations("己").unwrap().lu.name(), "武曲");

    assert!(!is_initialized());
    assert!(matches!(chart(&input), Err(ZiweiError::NotInitialized)));

    let config = EngineConfig {
        reference_year: Some(2025),
        ..EngineConfig::default()
    };
    init(config.clone()).unwrap();
    assert!(is_initialized());
    assert!(matches!(init(config), Err(ZiweiError::AlreadyInitialized)));

    let c = chart(&input).unwrap();
    assert_eq!(c.header.lunar_label, "己巳年十二月初五");
    assert_eq!(destiny(&input, 2026).unwrap().activated_palace, PalaceName::Siblings);
    let h = health(&input).unwrap();
    assert!(h.used_fallback);
    assert_eq!(h.source_palace, PalaceName::Parents);

    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains("\"命宮\""));
}
