//! Pinned reference charts. Any table or formula change that alters these
//! outputs is a regression.

use ziwei_calendar::Branch;
use ziwei_chart::{
    BirthInput, ChartData, DecadeDirection, FiveElementsBureau, Gender, HourInput, PlacedStar,
    Star, Transformation, build_chart_from_birth,
};

struct Row {
    branch: &'static str,
    stem: &'static str,
    name: &'static str,
    main: &'static [&'static str],
    malefic: &'static [&'static str],
    lucky: &'static [&'static str],
    minor: &'static [&'static str],
    da_xian: (u32, u32),
}

const fn row(
    branch: &'static str,
    stem: &'static str,
    name: &'static str,
    main: &'static [&'static str],
    malefic: &'static [&'static str],
    lucky: &'static [&'static str],
    minor: &'static [&'static str],
    da_xian: (u32, u32),
) -> Row {
    Row {
        branch,
        stem,
        name,
        main,
        malefic,
        lucky,
        minor,
        da_xian,
    }
}

fn names(stars: &[PlacedStar]) -> Vec<&'static str> {
    stars.iter().map(|p| p.star.name()).collect()
}

fn check_rows(chart: &ChartData, rows: &[Row; 12]) {
    for (p, r) in chart.palaces.iter().zip(rows) {
        let at = r.branch;
        assert_eq!(p.branch.name(), r.branch);
        assert_eq!(p.stem.name(), r.stem, "stem at {at}");
        assert_eq!(p.name.name(), r.name, "name at {at}");
        assert_eq!(names(&p.main_stars), r.main, "main at {at}");
        assert_eq!(names(&p.malefic_stars), r.malefic, "malefic at {at}");
        assert_eq!(names(&p.lucky_stars), r.lucky, "lucky at {at}");
        assert_eq!(names(&p.minor_stars), r.minor, "minor at {at}");
        assert_eq!((p.da_xian.start_age, p.da_xian.end_age), r.da_xian, "da xian at {at}");
    }
}

fn chart(year: i32, month: u32, day: u32, hour: HourInput, gender: Gender) -> ChartData {
    let input = BirthInput::new(year, month, day, hour, gender, "golden");
    build_chart_from_birth(&input, Some(2025)).unwrap()
}

const REF_1990: [Row; 12] = [
    row("子", "丙", "兄弟", &["太陽"], &[], &["天魁"], &[], (20, 29)),
    row("丑", "丁", "命宮", &["天府"], &[], &[], &["天哭"], (10, 19)),
    row("寅", "丙", "父母", &["天機", "太陰"], &[], &[], &[], (120, 129)),
    row("卯", "丁", "福德", &["紫微", "貪狼"], &["火星"], &["左輔"], &[], (110, 119)),
    row("辰", "戊", "田宅", &["巨門"], &[], &["文曲"], &["天喜"], (100, 109)),
    row("巳", "己", "官祿", &["天相"], &["陀羅"], &[], &[], (90, 99)),
    row("午", "庚", "交友", &["天梁"], &[], &["祿存"], &[], (80, 89)),
    row("未", "辛", "遷移", &["廉貞", "七殺"], &["擎羊"], &[], &[], (70, 79)),
    row("申", "壬", "疾厄", &[], &[], &["天鉞"], &[], (60, 69)),
    row("酉", "癸", "財帛", &[], &[], &[], &[], (50, 59)),
    row("戌", "甲", "子女", &["天同"], &["鈴星"], &["文昌"], &["紅鸞"], (40, 49)),
    row(
        "亥",
        "乙",
        "夫妻",
        &["武曲", "破軍"],
        &["地空", "地劫"],
        &["右弼"],
        &["天馬", "天虛"],
        (30, 39),
    ),
];

#[test]
fn reference_1990_01_01_zi_hour_male() {
    let c = chart(1990, 1, 1, HourInput::Branch(Branch::Zi), Gender::Male);
    let h = &c.header;
    assert_eq!(h.lunar_label, "己巳年十二月初五");
    assert_eq!(h.solar_date, "1990-01-01");
    assert_eq!(h.year.to_string(), "己巳");
    assert_eq!(h.zodiac.name(), "蛇");
    assert_eq!(h.bureau, FiveElementsBureau::Water2);
    assert_eq!(h.yin_yang, "陰男");
    assert_eq!(h.life_branch, Branch::Chou);
    assert_eq!(h.body_branch, Branch::Chou);
    assert_eq!(h.ziwei_branch, Branch::Mao);
    assert_eq!(h.da_xian_direction, DecadeDirection::Reverse);
    assert_eq!(h.age, Some(37));
    check_rows(&c, &REF_1990);
    assert!(c.life_palace().is_body);
}

#[test]
fn reference_1990_clock_hour_matches_branch_label() {
    let a = chart(1990, 1, 1, HourInput::Branch(Branch::Zi), Gender::Male);
    let b = chart(1990, 1, 1, HourInput::Clock(0), Gender::Male);
    assert_eq!(a, b);
}

#[test]
fn reference_1990_transformations() {
    let c = chart(1990, 1, 1, HourInput::Clock(0), Gender::Male);
    let t = c.transformed_stars();
    let got: Vec<(Transformation, Star, &str)> = t
        .iter()
        .map(|ts| (ts.transformation, ts.star, ts.palace.map_or("", |p| p.name())))
        .collect();
    assert_eq!(
        got,
        vec![
            (Transformation::Lu, Star::Wuqu, "夫妻"),
            (Transformation::Quan, Star::Tanlang, "福德"),
            (Transformation::Ke, Star::Tianliang, "交友"),
            (Transformation::Ji, Star::Wenqu, "田宅"),
        ]
    );
    let wuqu = c.find_star(Star::Wuqu).unwrap();
    assert_eq!(wuqu.main_stars[0].to_string(), "武曲化祿");
    assert_eq!(wuqu.main_stars[1].transformation, None);
}

const REF_2000: [Row; 12] = [
    row("子", "戊", "田宅", &["天機"], &[], &[], &[], (31, 40)),
    row("丑", "己", "官祿", &["紫微", "破軍"], &[], &["天魁"], &[], (41, 50)),
    row("寅", "戊", "交友", &[], &[], &[], &["天馬", "天哭"], (51, 60)),
    row("卯", "己", "遷移", &["天府"], &["鈴星"], &[], &[], (61, 70)),
    row("辰", "庚", "疾厄", &["太陰"], &["地劫"], &["左輔"], &[], (71, 80)),
    row("巳", "辛", "財帛", &["廉貞", "貪狼"], &[], &["文昌"], &["天喜"], (81, 90)),
    row("午", "壬", "子女", &["巨門"], &["地空"], &[], &[], (91, 100)),
    row("未", "癸", "夫妻", &["天相"], &["陀羅", "火星"], &["天鉞"], &[], (101, 110)),
    row("申", "甲", "兄弟", &["天同", "天梁"], &[], &["祿存"], &[], (111, 120)),
    row("酉", "乙", "命宮", &["武曲", "七殺"], &["擎羊"], &["文曲"], &[], (1, 10)),
    row("戌", "丙", "父母", &["太陽"], &[], &["右弼"], &["天虛"], (11, 20)),
    row("亥", "丁", "福德", &[], &[], &[], &["紅鸞"], (21, 30)),
];

#[test]
fn reference_2000_lunar_new_year_si_hour_male() {
    let c = chart(2000, 2, 5, HourInput::Clock(9), Gender::Male);
    let h = &c.header;
    assert_eq!(h.lunar_label, "庚辰年一月初一");
    assert_eq!(h.hour, Branch::Si);
    assert_eq!(h.yin_yang, "陽男");
    assert_eq!(h.bureau, FiveElementsBureau::Water2);
    assert_eq!(h.life_branch, Branch::You);
    assert_eq!(h.body_branch, Branch::Wei);
    assert_eq!(h.da_xian_direction, DecadeDirection::Forward);
    check_rows(&c, &REF_2000);
    assert!(c.body_palace().is_body);
    assert_eq!(c.palaces.iter().filter(|p| p.is_body).count(), 1);
}

#[test]
fn reference_1976_leap_eighth_month_female() {
    let c = chart(1976, 10, 3, HourInput::Clock(22), Gender::Female);
    let h = &c.header;
    assert_eq!(h.lunar_label, "丙辰年閏八月初十");
    assert!(h.lunar_date.is_leap);
    assert_eq!(h.bureau, FiveElementsBureau::Wood3);
    assert_eq!(h.yin_yang, "陽女");
    assert_eq!(h.life_branch, Branch::Xu);
    assert_eq!(h.ziwei_branch, Branch::Wei);
    assert_eq!(h.da_xian_direction, DecadeDirection::Reverse);
    let parents = c.palace_at(Branch::Hai);
    assert_eq!(parents.name.name(), "父母");
    assert_eq!(names(&parents.lucky_stars), ["文昌", "左輔", "天魁"]);
    assert_eq!(parents.main_stars[0].transformation, Some(Transformation::Ji));
    assert!(c.palace_at(Branch::Shen).star_all().is_empty());
}

#[test]
fn chart_serializes_with_canonical_labels() {
    let c = chart(1990, 1, 1, HourInput::Clock(0), Gender::Male);
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["header"]["bureau"], "水二局");
    assert_eq!(v["header"]["year"]["stem"], "己");
    assert_eq!(v["palaces"][1]["name"], "命宮");
    assert_eq!(v["palaces"][11]["main_stars"][0]["star"], "武曲");
    assert_eq!(v["palaces"][11]["main_stars"][0]["transformation"], "祿");
    assert!(v["palaces"][11]["main_stars"][1].get("transformation").is_none());
    assert_eq!(v["palaces"][0]["da_xian"]["start_age"], 20);
    assert_eq!(v["header"]["transformations"]["忌"], "文曲");
}
