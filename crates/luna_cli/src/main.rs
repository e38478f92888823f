use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, FixedOffset, Utc};
use clap::{Args, Parser, Subcommand};
use log::info;
use luna_config::LunaConfig;
use luna_core::{AnalyticEphemeris, GeoLocation};
use luna_phase::{
    MoonObservation, ObserverConfig, OrbitDiagram, classify_phase, compute_observation,
    observations_for_range,
};
use luna_render::{render_orbit_svg, render_phase_svg, write_svg};
use luna_time::{CivilDate, UtcOffset};

#[derive(Parser)]
#[command(name = "luna", about = "Moon phase calculator")]
struct Cli {
    /// Path to a JSON config file (default: $LUNA_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the configured observer.
#[derive(Args, Clone, Copy)]
struct ObserverArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// UTC offset as +HH:MM, -HH:MM or whole minutes
    #[arg(long, allow_hyphen_values = true, value_parser = parse_offset)]
    utc_offset: Option<UtcOffset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Moon phase, illumination and rise/set for one date
    Observe {
        /// Local date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        observer: ObserverArgs,
    },
    /// Write phase.svg and orbit.svg for one date
    Render {
        /// Local date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
        /// Output directory (created if missing)
        #[arg(long)]
        out_dir: PathBuf,
        #[command(flatten)]
        observer: ObserverArgs,
    },
    /// One line per day starting at a date
    Calendar {
        /// First local date (YYYY-MM-DD), default today
        #[arg(long)]
        from: Option<String>,
        /// Number of days
        #[arg(long, default_value = "30")]
        days: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        observer: ObserverArgs,
    },
    /// Phase name for an illumination percentage
    Classify {
        /// Illuminated percent of the disk (0-100)
        illumination: f64,
        /// Moon is waning (default: waxing)
        #[arg(long)]
        waning: bool,
    },
}

fn parse_offset(s: &str) -> Result<UtcOffset, String> {
    let minutes = if let Some((h, m)) = s.split_once(':') {
        let sign = if h.starts_with('-') { -1 } else { 1 };
        let hours: i32 = h
            .trim_start_matches(['+', '-'])
            .parse()
            .map_err(|e| format!("hours: {e}"))?;
        let mins: i32 = m.parse().map_err(|e| format!("minutes: {e}"))?;
        if !(0..60).contains(&mins) {
            return Err(format!("minutes out of range: {mins}"));
        }
        sign * (hours * 60 + mins)
    } else {
        s.parse().map_err(|e| format!("expected +HH:MM or minutes, got {s}: {e}"))?
    };
    UtcOffset::from_minutes(minutes).map_err(|e| e.to_string())
}

fn parse_date(s: &str) -> Result<CivilDate, String> {
    s.parse::<CivilDate>().map_err(|e| e.to_string())
}

/// Today's date in the observer's time zone.
fn today(offset: UtcOffset) -> Result<CivilDate, String> {
    let zone = FixedOffset::east_opt(offset.minutes() * 60)
        .ok_or_else(|| format!("unsupported offset {offset}"))?;
    let d = Utc::now().with_timezone(&zone).date_naive();
    CivilDate::new(d.year(), d.month(), d.day()).map_err(|e| e.to_string())
}

fn resolve_date(arg: Option<&str>, offset: UtcOffset) -> Result<CivilDate, String> {
    match arg {
        Some(s) => parse_date(s),
        None => today(offset),
    }
}

fn load_config(path: Option<&Path>) -> Result<LunaConfig, String> {
    LunaConfig::resolve(path).map_err(|e| e.to_string())
}

fn observer_config(config: &LunaConfig, args: ObserverArgs) -> Result<ObserverConfig, String> {
    let base = config.observer_config().map_err(|e| e.to_string())?;
    let location = GeoLocation::new(
        args.lat.unwrap_or(base.location.latitude_deg),
        args.lon.unwrap_or(base.location.longitude_deg),
        base.location.altitude_m,
    );
    location.validate().map_err(|e| e.to_string())?;
    Ok(ObserverConfig::new(
        location,
        args.utc_offset.unwrap_or(base.utc_offset),
    ))
}

fn print_observation(name: &str, obs: &MoonObservation) {
    println!("Date:         {} ({name})", obs.date());
    println!(
        "Phase:        {} ({})",
        obs.phase(),
        obs.phase().korean_name()
    );
    println!("Illumination: {:.1}%", obs.illumination());
    println!(
        "Elongation:   {:.2} deg ({})",
        obs.angle_degrees(),
        if obs.is_waxing() { "waxing" } else { "waning" }
    );
    println!("Moonrise:     {}", obs.rise());
    println!("Moonset:      {}", obs.set());
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Observe {
            date,
            json,
            observer,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let obs_config = observer_config(&config, observer)?;
            let date = resolve_date(date.as_deref(), obs_config.utc_offset)?;
            let obs = compute_observation(&AnalyticEphemeris, date, &obs_config)
                .map_err(|e| e.to_string())?;
            if json {
                println!("{}", to_json(&obs)?);
            } else {
                print_observation(&config.observer.name, &obs);
            }
        }

        Commands::Render {
            date,
            out_dir,
            observer,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let obs_config = observer_config(&config, observer)?;
            let settings = config.geometry_settings();
            let date = resolve_date(date.as_deref(), obs_config.utc_offset)?;
            let obs = compute_observation(&AnalyticEphemeris, date, &obs_config)
                .map_err(|e| e.to_string())?;

            fs::create_dir_all(&out_dir)
                .map_err(|e| format!("cannot create {}: {e}", out_dir.display()))?;
            let phase_svg = render_phase_svg(&obs, &settings).map_err(|e| e.to_string())?;
            let diagram = OrbitDiagram::new(obs.angle(), &settings);
            let orbit_svg = render_orbit_svg(&diagram, &format!("{} orbit", obs.date()))
                .map_err(|e| e.to_string())?;

            for (file, svg) in [("phase.svg", phase_svg), ("orbit.svg", orbit_svg)] {
                let path = out_dir.join(file);
                write_svg(&path, &svg).map_err(|e| e.to_string())?;
                info!("wrote {}", path.display());
                println!("{}", path.display());
            }
        }

        Commands::Calendar {
            from,
            days,
            json,
            observer,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let obs_config = observer_config(&config, observer)?;
            let start = resolve_date(from.as_deref(), obs_config.utc_offset)?;
            let observations = observations_for_range(&AnalyticEphemeris, start, days, &obs_config)
                .map_err(|e| e.to_string())?;
            if json {
                println!("{}", to_json(&observations)?);
            } else {
                println!(
                    "{:<10}  {:>6}  {:>7}  {:<16}  {:>5}  {:>5}",
                    "date", "lit%", "angle", "phase", "rise", "set"
                );
                for o in &observations {
                    println!(
                        "{:<10}  {:>6.1}  {:>7.2}  {:<16}  {:>5}  {:>5}",
                        o.date().to_string(),
                        o.illumination(),
                        o.angle_degrees(),
                        o.phase().name(),
                        o.rise().to_string(),
                        o.set().to_string()
                    );
                }
            }
        }

        Commands::Classify {
            illumination,
            waning,
        } => {
            if !(0.0..=100.0).contains(&illumination) {
                return Err(format!("illumination must be within [0, 100], got {illumination}"));
            }
            let phase = classify_phase(illumination, !waning);
            println!("{} ({})", phase.name(), phase.korean_name());
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_formats() {
        assert_eq!(parse_offset("+09:00").unwrap(), UtcOffset::KST);
        assert_eq!(parse_offset("540").unwrap(), UtcOffset::KST);
        assert_eq!(parse_offset("-03:30").unwrap().minutes(), -210);
        assert_eq!(parse_offset("0").unwrap(), UtcOffset::UTC);
    }

    #[test]
    fn offset_rejects_garbage() {
        assert!(parse_offset("+09:75").is_err());
        assert!(parse_offset("+15:00").is_err());
        assert!(parse_offset("nine").is_err());
    }

    #[test]
    fn date_parsing() {
        let d = parse_date("2024-02-29").unwrap();
        assert_eq!(d, CivilDate::new(2024, 2, 29).unwrap());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("29/02/2024").is_err());
        // proleptic Gregorian: 1500 is not a leap year
        assert!(parse_date("1500-02-29").is_err());
        let early = parse_date("1500-03-01").unwrap();
        assert_eq!(early, CivilDate::new(1500, 2, 28).unwrap().add_days(1));
    }

    #[test]
    fn observer_overrides_apply() {
        let config = LunaConfig::default();
        let args = ObserverArgs {
            lat: Some(-33.87),
            lon: None,
            utc_offset: Some(UtcOffset::from_minutes(600).unwrap()),
        };
        let obs = observer_config(&config, args).unwrap();
        assert!((obs.location.latitude_deg + 33.87).abs() < 1e-12);
        assert!((obs.location.longitude_deg - 126.978).abs() < 1e-12);
        assert_eq!(obs.utc_offset.minutes(), 600);
    }

    #[test]
    fn observer_override_validated() {
        let args = ObserverArgs {
            lat: Some(95.0),
            lon: None,
            utc_offset: None,
        };
        assert!(observer_config(&LunaConfig::default(), args).is_err());
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "luna", "observe", "--date", "2024-01-26", "--lat", "-33.9", "--json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Observe { json: true, .. }));
        let cli = Cli::try_parse_from(["luna", "classify", "50", "--waning"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Classify { waning: true, .. }
        ));
    }
}
