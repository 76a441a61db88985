use std::fmt::Display;
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use ziwei_rs::{
    BirthInput, ChartData, ChartEngine, EngineConfig, FourTransformations, Gender,
    HealthAnalysisResult, HourInput, LunarDate, Palace, YearDestinyRecord, init_default_tracing,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    /// Engine config TOML (defaults to $ZIWEI_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Solar birth date (YYYY-MM-DD)
    date: String,
    /// Birth hour: 0-23 or a branch label such as 子 / 午時
    #[arg(long)]
    hour: String,
    /// Gender: M/F (also 男/女, male/female)
    #[arg(long)]
    gender: String,
    /// Display name
    #[arg(long, default_value = "")]
    name: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a solar date to the lunar calendar
    Lunar {
        /// Solar date (YYYY-MM-DD)
        date: String,
    },
    /// Build the 12-palace natal chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Activated palace and natal transformations for a calendar year
    Destiny {
        #[command(flatten)]
        birth: BirthArgs,
        /// Calendar year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Health hints from the Health Palace
    Health {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Four Transformations for a Heavenly Stem
    Transformations {
        /// Stem label, e.g. 甲
        stem: String,
    },
}

fn fail(e: impl Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .unwrap_or_else(|e| fail(format!("invalid date {s:?} (expected YYYY-MM-DD): {e}")))
}

fn load_config(path: Option<&PathBuf>) -> EngineConfig {
    let loaded = match path {
        Some(p) => EngineConfig::load(p),
        None => EngineConfig::from_env(),
    };
    loaded.unwrap_or_else(|e| fail(e))
}

fn birth_input(args: &BirthArgs) -> BirthInput {
    let date = parse_date(&args.date);
    let hour: HourInput = args.hour.parse().unwrap_or_else(|e| fail(e));
    let gender: Gender = args.gender.parse().unwrap_or_else(|e| fail(e));
    BirthInput::new(
        date.year(),
        date.month(),
        date.day(),
        hour,
        gender,
        args.name.clone(),
    )
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn print_lunar(solar: NaiveDate, lunar: &LunarDate) {
    let leap = if lunar.is_leap { " (leap)" } else { "" };
    println!("Solar: {solar}");
    println!("Lunar: {lunar}{leap}");
    println!(
        "  Year {} ({}), month {}, day {}",
        lunar.year,
        lunar.year_stem_branch().zodiac().name(),
        lunar.month,
        lunar.day
    );
}

fn stars_line(p: &Palace) -> String {
    let all: Vec<String> = p.star_all().iter().map(ToString::to_string).collect();
    if all.is_empty() {
        "-".to_string()
    } else {
        all.join(" ")
    }
}

fn print_chart(chart: &ChartData) {
    let h = &chart.header;
    if !h.name.is_empty() {
        println!("Name:    {}", h.name);
    }
    println!("Solar:   {}", h.solar_date);
    println!("Lunar:   {}  {}時", h.lunar_label, h.hour);
    println!("Zodiac:  {}   Bureau: {}   {}", h.zodiac.name(), h.bureau, h.yin_yang);
    if let Some(age) = h.age {
        println!("Age:     {age}");
    }
    println!(
        "Life:    {}   Body: {}   Ziwei: {}",
        h.life_branch, h.body_branch, h.ziwei_branch
    );
    println!();
    for p in chart.palaces_by_role() {
        let body = if p.is_body { "身" } else { "  " };
        println!(
            "{} {:<4}{} {:>7}  {}",
            p.label(),
            p.name.name(),
            body,
            p.da_xian.to_string(),
            stars_line(p)
        );
    }
}

fn print_destiny(rec: &YearDestinyRecord) {
    println!(
        "{} ({}): activated palace {} ({}, index {})",
        rec.year, rec.year_pillar, rec.activated_palace, rec.activated_branch, rec.activated_index
    );
    if let (Some(age), Some(dx)) = (rec.age, rec.da_xian_palace) {
        println!("  Age {age}, Da Xian in {dx}");
    }
    for t in &rec.transformations {
        let palace = t.palace.map_or("-", |p| p.name());
        println!("  {}{} @ {}: {}", t.star, t.transformation, palace, t.description);
    }
}

fn print_health(r: &HealthAnalysisResult) {
    let note = if r.used_fallback {
        " (Health Palace empty, read from Parents)"
    } else {
        ""
    };
    println!("Source: {} ({}){note}", r.source_palace, r.source_branch);
    let stars: Vec<String> = r.stars.iter().map(ToString::to_string).collect();
    println!("Stars:  {}", if stars.is_empty() { "-".to_string() } else { stars.join(" ") });
    for (part, tip) in r.body_parts.iter().zip(&r.tips) {
        println!("  {}: {tip}", part.name());
    }
}

fn print_transformations(ft: &FourTransformations) {
    for (t, star) in ft.pairs() {
        println!("{}{}: {}", ft.stem, t.label(), star);
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    let _ = init_default_tracing(&config.log_filter);
    let engine = ChartEngine::new(config).unwrap_or_else(|e| fail(e));

    match cli.command {
        Commands::Lunar { date } => {
            let solar = parse_date(&date);
            let lunar = engine
                .lunar_date(solar.year(), solar.month(), solar.day())
                .unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&lunar);
            } else {
                print_lunar(solar, &lunar);
            }
        }

        Commands::Chart { birth } => {
            let input = birth_input(&birth);
            let chart = engine.chart(&input).unwrap_or_else(|e| fail(e));
            info!(life = %chart.header.life_branch, bureau = %chart.header.bureau, "chart built");
            if cli.json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Destiny { birth, year } => {
            let input = birth_input(&birth);
            let chart = engine.chart(&input).unwrap_or_else(|e| fail(e));
            let year = year.unwrap_or_else(|| Local::now().year());
            let rec = engine.destiny(&chart, year);
            info!(year, palace = %rec.activated_palace, "destiny resolved");
            if cli.json {
                print_json(&rec);
            } else {
                print_destiny(&rec);
            }
        }

        Commands::Health { birth } => {
            let input = birth_input(&birth);
            let chart = engine.chart(&input).unwrap_or_else(|e| fail(e));
            let result = engine.health(&chart);
            if cli.json {
                print_json(&result);
            } else {
                print_health(&result);
            }
        }

        Commands::Transformations { stem } => {
            let ft = engine.transformations(&stem).unwrap_or_else(|e| fail(e));
            if cli.json {
                print_json(&ft);
            } else {
                print_transformations(&ft);
            }
        }
    }
}
