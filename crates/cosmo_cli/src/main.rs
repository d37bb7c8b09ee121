use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cosmo_rs::{
    CalendarDate, CosmoConfig, CosmoError, RelationshipInsights, SystemSign, ZodiacProfile,
    ZodiacSystem, arabic_position, is_leap_year,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cosmo", about = "Multi-system zodiac profile calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Fixed seed for compatibility scores
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Read settings from this TOML file instead of the default layers
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// All six signs plus shared themes
    Profile {
        /// Birth date (DD/MM/YYYY or YYYY-MM-DD)
        date: String,
        /// Birth time (HH:MM)
        #[arg(long)]
        time: Option<String>,
    },
    /// Western sun sign
    Western { date: String },
    /// Chinese animal and element
    Chinese { date: String },
    /// Vedic nakshatra
    Nakshatra { date: String },
    /// Mayan day sign
    Mayan { date: String },
    /// Celtic tree sign
    Celtic { date: String },
    /// Arabic lunar mansion with approximate solar longitude
    Mansion { date: String },
    /// Best and challenging matches with advice
    Compat { date: String },
    /// Score a candidate against a primary birth date
    Match {
        date: String,
        /// Candidate birth date
        candidate: String,
    },
    /// Per-trait scores across systems
    Metrics { date: String },
    /// Gregorian leap-year check
    Leap { year: i32 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            match err.downcast_ref::<CosmoError>() {
                Some(CosmoError::Calendar(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => CosmoConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CosmoConfig::load()?,
    };
    if cli.seed.is_some() {
        config.compatibility.seed = cli.seed;
    }

    init_tracing(cli.quiet, cli.verbose, &config.logging.level)?;
    cosmo_rs::init(config)?;

    let json = cli.json;
    match cli.command {
        Commands::Profile { date, time } => {
            let p = cosmo_rs::parse_and_classify(&date, time.as_deref())?;
            if json {
                emit_json(&p)?;
            } else {
                print_profile(&p);
            }
        }

        Commands::Western { date } => single(&date, ZodiacSystem::Western, json)?,
        Commands::Chinese { date } => single(&date, ZodiacSystem::Chinese, json)?,
        Commands::Nakshatra { date } => single(&date, ZodiacSystem::Vedic, json)?,
        Commands::Mayan { date } => single(&date, ZodiacSystem::Mayan, json)?,
        Commands::Celtic { date } => single(&date, ZodiacSystem::Celtic, json)?,

        Commands::Mansion { date } => {
            let parsed: CalendarDate = date.parse().map_err(CosmoError::from)?;
            let p = cosmo_rs::parse_and_classify(&date, None)?;
            let pos = arabic_position(parsed);
            if json {
                emit_json(&serde_json::json!({
                    "position": pos,
                    "mansion": p.arabic,
                }))?;
            } else {
                println!(
                    "{} ({}) - mansion {} ({:.4} deg sun, {:.4} deg in mansion)",
                    p.arabic.arabic_name,
                    p.arabic.mansion,
                    p.arabic.number,
                    pos.tropical_longitude_deg,
                    pos.degrees_in_mansion
                );
                println!("Key star: {}", p.arabic.key_star);
                println!("{}", p.arabic.description);
            }
        }

        Commands::Compat { date } => {
            let p = cosmo_rs::parse_and_classify(&date, None)?;
            let insights = cosmo_rs::compute_compatibility(&p);
            if json {
                emit_json(&insights)?;
            } else {
                print_insights(&insights);
            }
        }

        Commands::Match { date, candidate } => {
            let primary = cosmo_rs::parse_and_classify(&date, None)?;
            let other = cosmo_rs::parse_and_classify(&candidate, None)?;
            let result = cosmo_rs::score_match(&primary, &other);
            if json {
                emit_json(&result)?;
            } else {
                println!("{:.1} ({})", result.score, result.relationship);
            }
        }

        Commands::Metrics { date } => {
            let p = cosmo_rs::parse_and_classify(&date, None)?;
            let rows = cosmo_rs::personality_metrics(&p);
            if json {
                emit_json(&rows)?;
            } else {
                println!(
                    "{:<14} {:>7} {:>7} {:>5} {:>5} {:>6} {:>6}",
                    "trait", "western", "chinese", "vedic", "mayan", "celtic", "mean"
                );
                for r in &rows {
                    println!(
                        "{:<14} {:>7} {:>7} {:>5} {:>5} {:>6} {:>6.1}",
                        r.personality_trait.name(),
                        r.western,
                        r.chinese,
                        r.vedic,
                        r.mayan,
                        r.celtic,
                        r.mean
                    );
                }
            }
        }

        Commands::Leap { year } => {
            let leap = is_leap_year(year);
            if json {
                emit_json(&serde_json::json!({ "year": year, "leap": leap }))?;
            } else if leap {
                println!("{year} is a leap year");
            } else {
                println!("{year} is not a leap year");
            }
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("COSMO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn single(date: &str, system: ZodiacSystem, json: bool) -> anyhow::Result<()> {
    let p = cosmo_rs::parse_and_classify(date, None)?;
    let sign = p.signs()[usize::from(system.index())];
    if json {
        return emit_json(&sign);
    }
    print_sign(&sign);
    if let SystemSign::Chinese(c) = sign {
        println!("Element: {} - {}", c.element.name(), c.element_description);
    }
    Ok(())
}

fn print_sign(sign: &SystemSign) {
    println!("{}: {}", sign.system(), sign.name());
    println!("  {}", sign.qualities().join(", "));
    println!("  {}", sign.description());
}

fn print_profile(p: &ZodiacProfile) {
    for sign in p.signs() {
        print_sign(&sign);
    }
    println!();
    println!("Unified themes:");
    for theme in &p.unified_themes {
        println!("  - {theme}");
    }
    println!("Integration opportunities:");
    for item in &p.integration_opportunities {
        println!("  - {item}");
    }
}

fn print_insights(insights: &RelationshipInsights) {
    println!("Best matches:");
    for m in &insights.best_matches {
        println!(
            "  {:<8} {:<18} {:>5.1} ({})",
            m.system.name(),
            m.sign,
            m.score,
            m.relationship
        );
    }
    println!("Challenging matches:");
    for m in &insights.challenging_matches {
        println!(
            "  {:<8} {:<18} {:>5.1} ({})",
            m.system.name(),
            m.sign,
            m.score,
            m.relationship
        );
    }
    for (title, list) in [
        ("Empowering connections", &insights.empowering_connections),
        ("Growth opportunities", &insights.growth_opportunities),
        ("Communication tips", &insights.communication_tips),
    ] {
        println!("{title}:");
        for line in list {
            println!("  - {line}");
        }
    }
}
