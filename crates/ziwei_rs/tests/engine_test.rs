use ziwei_rs::{
    ActivationAnchor, BirthInput, ChartEngine, EngineConfig, Gender, HourInput, PalaceName,
    Transformation, ZiweiError,
};

fn config() -> EngineConfig {
    EngineConfig {
        reference_year: Some(2025),
        ..EngineConfig::default()
    }
}

fn reference_input() -> BirthInput {
    BirthInput::new(1990, 1, 1, HourInput::Clock(0), Gender::Male, "golden")
}

#[test]
fn engine_builds_chart_with_reference_age() {
    let eng = ChartEngine::new(config()).unwrap();
    assert_eq!(eng.reference_year(), 2025);
    let chart = eng.chart(&reference_input()).unwrap();
    assert_eq!(chart.header.age, Some(37));
    assert_eq!(chart.life_palace().label(), "丁丑");
}

#[test]
fn engine_destiny_follows_configured_anchor() {
    let fixed = ChartEngine::new(config()).unwrap();
    let chart = fixed.chart(&reference_input()).unwrap();
    assert_eq!(fixed.destiny(&chart, 2025).activated_palace, PalaceName::Life);

    let relative = ChartEngine::new(EngineConfig {
        activation_anchor: ActivationAnchor::BirthYear,
        ..config()
    })
    .unwrap();
    assert_eq!(relative.destiny(&chart, 1990).activated_palace, PalaceName::Siblings);
}

#[test]
fn engine_loads_description_overrides() {
    let dir = std::env::temp_dir().join(format!("ziwei_rs_desc_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("desc.toml");
    std::fs::write(&path, "[\"夫妻\"]\n\"祿\" = \"覆寫文字\"\n").unwrap();

    let eng = ChartEngine::new(EngineConfig {
        descriptions_path: Some(path),
        ..config()
    })
    .unwrap();
    let chart = eng.chart(&reference_input()).unwrap();
    let rec = eng.destiny(&chart, 2025);
    assert_eq!(rec.transformations[0].transformation, Transformation::Lu);
    assert_eq!(rec.transformations[0].description, "覆寫文字");
    assert_eq!(eng.descriptions().len(), 48);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn engine_rejects_invalid_config_and_missing_overrides() {
    let bad = EngineConfig {
        log_filter: String::new(),
        ..config()
    };
    assert!(matches!(ChartEngine::new(bad), Err(ZiweiError::Config(_))));

    let missing = EngineConfig {
        descriptions_path: Some("/nonexistent/desc.toml".into()),
        ..config()
    };
    assert!(matches!(ChartEngine::new(missing), Err(ZiweiError::Insight(_))));
}

#[test]
fn engine_surfaces_input_errors() {
    let eng = ChartEngine::new(config()).unwrap();
    let out_of_range = BirthInput::new(2101, 1, 1, HourInput::Clock(0), Gender::Male, "");
    assert!(matches!(eng.chart(&out_of_range), Err(ZiweiError::Chart(_))));
    assert!(matches!(eng.lunar_date(1900, 1, 30), Err(ZiweiError::Calendar(_))));
    assert!(matches!(eng.transformations("X"), Err(ZiweiError::Chart(_))));
    assert_eq!(eng.transformations("癸").unwrap().ji.name(), "貪狼");
}
