use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use zodiya_natal::{
    GeoLocation, NatalCalculator, NatalConfig, NatalContext, NatalPositions, SignPosition,
    ascendant_residual, deg_to_dms, position_in_sign, solve_ascendant,
};
use zodiya_time::{UtcInstant, julian_centuries};

#[derive(Parser)]
#[command(name = "zodiya", about = "Sun, Moon and Ascendant signs for a birth instant")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sun, Moon and Ascendant with their signs
    Natal {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Ascendant with sidereal time and horizon residual
    Ascendant {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Julian Date and centuries since J2000.0
    Jd {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

fn parse_instant(date: &str) -> Result<UtcInstant> {
    let instant: UtcInstant = date
        .parse()
        .with_context(|| format!("invalid --date {date:?}"))?;
    instant
        .validate()
        .with_context(|| format!("invalid --date {date:?}"))?;
    Ok(instant)
}

fn describe(label: &str, pos: &SignPosition, lon: f64) {
    println!(
        "{label:<10} {:>11.6} deg  {:<12} {}",
        lon,
        pos.sign.name(),
        pos.dms
    );
}

fn print_natal(p: &NatalPositions) {
    describe("Sun", &p.sun_position(), p.sun_longitude);
    describe("Moon", &p.moon_position(), p.moon_longitude);
    describe("Ascendant", &p.ascendant_position(), p.ascendant_longitude);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Natal {
            date,
            lat,
            lon,
            config,
            json,
        } => {
            let instant = parse_instant(&date)?;
            let config = match config {
                Some(path) => {
                    info!("loading configuration from {}", path.display());
                    NatalConfig::load(&path)
                        .with_context(|| format!("loading {}", path.display()))?
                }
                None => NatalConfig::default(),
            };
            let positions = NatalCalculator::new(config)
                .calculate(&instant, lat, lon)
                .context("natal calculation failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&positions)?);
            } else {
                print_natal(&positions);
            }
        }

        Commands::Sign { lon } => {
            let pos = position_in_sign(lon);
            println!(
                "{} (index {}) - {} ({:.4} deg in sign)",
                pos.sign.name(),
                pos.sign_index,
                pos.dms,
                pos.degrees_in_sign
            );
        }

        Commands::Ascendant { date, lat, lon } => {
            let instant = parse_instant(&date)?;
            let location = GeoLocation::new(lat, lon);
            location.validate().context("invalid observer location")?;
            let ctx = NatalContext::new(&instant, &location);
            let config = NatalConfig::default();
            let asc = solve_ascendant(
                ctx.lst_rad,
                location.latitude_rad(),
                ctx.obliquity_rad,
                &config.ascendant,
            )
            .context("ascendant search failed")?;
            let residual =
                ascendant_residual(asc, ctx.lst_rad, location.latitude_rad(), ctx.obliquity_rad);
            let asc_deg = asc.to_degrees();
            let pos = position_in_sign(asc_deg);
            println!("LST:       {:.6} deg", ctx.lst_rad.to_degrees());
            println!("Obliquity: {:.6} deg", ctx.obliquity_rad.to_degrees());
            println!("Ascendant: {asc_deg:.6} deg  {} {}", pos.sign.name(), pos.dms);
            println!(
                "Residual:  alt {:.2e} deg, sin H {:.4}",
                residual.altitude_rad.to_degrees(),
                residual.sin_hour_angle
            );
        }

        Commands::Jd { date } => {
            let instant = parse_instant(&date)?;
            let jd = instant.to_jd();
            println!("JD: {jd:.6}");
            println!("T:  {:.10} centuries since J2000.0", julian_centuries(jd));
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }

    Ok(())
}
