use proptest::prelude::*;
use ziwei_chart::{ALL_PALACE_NAMES, BirthInput, Gender, HourInput, build_chart_from_birth};
use ziwei_insight::{ActivationAnchor, DescriptionTable, activation_for_year, analyze_health};

fn birth() -> impl Strategy<Value = BirthInput> {
    (1901i32..=2099, 1u32..=12, 1u32..=28, 0u32..24, any::<bool>()).prop_map(
        |(y, m, d, h, male)| {
            let gender = if male { Gender::Male } else { Gender::Female };
            BirthInput::new(y, m, d, HourInput::Clock(h), gender, "prop")
        },
    )
}

fn anchor() -> impl Strategy<Value = ActivationAnchor> {
    prop_oneof![
        Just(ActivationAnchor::default()),
        Just(ActivationAnchor::BirthYear),
        (1900i32..=2100).prop_map(|year| ActivationAnchor::Fixed { year }),
    ]
}

proptest! {
    #[test]
    fn activation_repeats_every_twelve_years(
        input in birth(),
        year in 1800i32..2300,
        anchor in anchor(),
    ) {
        let chart = build_chart_from_birth(&input, None).unwrap();
        let table = DescriptionTable::builtin();
        let a = activation_for_year(&chart, year, anchor, &table);
        let b = activation_for_year(&chart, year + 12, anchor, &table);
        prop_assert_eq!(a.activated_index, b.activated_index);
        prop_assert_eq!(a.activated_palace, b.activated_palace);
        prop_assert_eq!(a.activated_palace, ALL_PALACE_NAMES[a.activated_index as usize]);
        prop_assert_eq!(&a.transformations, &b.transformations);
    }

    #[test]
    fn transformed_stars_always_located(input in birth(), year in 1900i32..2200) {
        let chart = build_chart_from_birth(&input, None).unwrap();
        let rec = activation_for_year(
            &chart,
            year,
            ActivationAnchor::default(),
            &DescriptionTable::builtin(),
        );
        prop_assert_eq!(rec.transformations.len(), 4);
        for t in &rec.transformations {
            prop_assert!(t.palace.is_some());
            prop_assert!(!t.description.is_empty());
        }
    }

    #[test]
    fn health_fallback_flag_matches_palace(input in birth()) {
        let chart = build_chart_from_birth(&input, None).unwrap();
        let r = analyze_health(&chart);
        let health_empty = chart.palace(ziwei_chart::PalaceName::Health).is_empty();
        prop_assert_eq!(r.used_fallback, health_empty);
        prop_assert_eq!(r.tips.len(), r.body_parts.len());
    }
}
