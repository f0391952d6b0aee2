use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dasha_core::dasha::{
    DEFAULT_DASHA_LEVEL, DashaPeriod, nakshatra_index_from_f64, validate_max_level,
    vimshottari_birth_balance,
};
use dasha_core::{
    BirthSeed, DashaConfig, DashaError, DashaMode, DashaSnapshot, dasha_snapshot, format_jd,
    nakshatra_from_longitude, parse_utc, parse_utc_jd, tribhagi_timeline, vimshottari_timeline,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dasha", about = "Vimshottari and Tribhagi dasha CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Birth inputs shared by every timeline command.
#[derive(Args)]
struct SeedArgs {
    /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
    #[arg(long)]
    birth_date: String,
    /// Moon's nakshatra index at birth (0 = Ashwini); `1` and `1.0` both accepted
    #[arg(long)]
    nakshatra: f64,
    /// Fraction of the nakshatra still ahead of the Moon, in (0, 1]
    #[arg(long)]
    fraction: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Vimshottari,
    Tribhagi,
}

impl From<ModeArg> for DashaMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Vimshottari => DashaMode::Vimshottari,
            ModeArg::Tribhagi => DashaMode::Tribhagi,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Vimshottari period tree
    Timeline {
        #[command(flatten)]
        seed: SeedArgs,
        /// Deepest level to print or serialize (0-2, default 2)
        #[arg(long, default_value_t = DEFAULT_DASHA_LEVEL)]
        max_level: u8,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the 27 Tribhagi parts with their overlapping antardashas
    Tribhagi {
        #[command(flatten)]
        seed: SeedArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Active periods at a query instant
    Snapshot {
        #[command(flatten)]
        seed: SeedArgs,
        /// Query UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        query_date: String,
        /// Structure to query (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Deepest level to resolve, 0-2 (overrides the config file)
        #[arg(long)]
        max_level: Option<u8>,
        /// JSON config file with `mode` and `max_level`
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Derive the birth seed from the Moon's sidereal longitude
    Seed {
        /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth_date: String,
        /// Moon's sidereal ecliptic longitude in degrees
        #[arg(long)]
        moon_lon: f64,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn exit_with(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn build_seed(args: &SeedArgs) -> BirthSeed {
    let birth = parse_utc(&args.birth_date).unwrap_or_else(|e| exit_with(e));
    let index = nakshatra_index_from_f64(args.nakshatra).unwrap_or_else(|e| exit_with(e));
    BirthSeed::from_utc(birth, index, args.fraction).unwrap_or_else(|e| exit_with(e))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => exit_with(e),
    }
}

/// Drop sub-periods below `depth_left` further levels.
fn prune_tree(periods: &mut [DashaPeriod], depth_left: u8) {
    for period in periods {
        if depth_left == 0 {
            period.children.clear();
        } else {
            prune_tree(&mut period.children, depth_left - 1);
        }
    }
}

fn print_period_tree(periods: &[DashaPeriod], depth_left: u8) {
    for period in periods {
        let indent = "  ".repeat(period.level as usize + 1);
        println!(
            "{}[{}] {} {} ({} - {}, {:.1} days)",
            indent,
            period.order,
            period.level.name(),
            period.graha.english_name(),
            format_jd(period.start_jd),
            format_jd(period.end_jd),
            period.duration_days(),
        );
        if depth_left > 0 {
            print_period_tree(&period.children, depth_left - 1);
        }
    }
}

fn print_snapshot(snapshot: &DashaSnapshot) {
    println!(
        "Dasha Snapshot ({}) at {}\n",
        snapshot.mode.name(),
        format_jd(snapshot.query_jd)
    );
    for period in &snapshot.periods {
        let indent = "  ".repeat(period.level as usize);
        let part = period
            .part
            .map(|p| format!(" Part {} ({})", p.number(), p.name()))
            .unwrap_or_default();
        println!(
            "{}{}: {}{} ({} - {}, {:.1} days)",
            indent,
            period.level.name(),
            period.graha.english_name(),
            part,
            format_jd(period.start_jd),
            format_jd(period.end_jd),
            period.duration_days(),
        );
    }
}

fn snapshot_config(
    mode: Option<ModeArg>,
    max_level: Option<u8>,
    config: Option<PathBuf>,
) -> Result<DashaConfig, DashaError> {
    let mut resolved = match config {
        Some(path) => DashaConfig::from_json_file(&path)?,
        None => DashaConfig::default(),
    };
    if let Some(mode) = mode {
        resolved.mode = mode.into();
    }
    if let Some(level) = max_level {
        resolved.max_level = level;
    }
    resolved.validate()?;
    debug!(
        mode = resolved.mode.name(),
        max_level = resolved.max_level,
        "snapshot config resolved"
    );
    Ok(resolved)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Timeline {
            seed,
            max_level,
            json,
        } => {
            validate_max_level(max_level).unwrap_or_else(|e| exit_with(e));
            let seed = build_seed(&seed);
            let mut timeline = vimshottari_timeline(&seed).unwrap_or_else(|e| exit_with(e));
            if json {
                prune_tree(&mut timeline.mahadashas, max_level);
                print_json(&timeline);
                return;
            }
            println!(
                "Vimshottari Timeline for birth {} ({} levels)\n",
                format_jd(timeline.birth_jd),
                max_level + 1
            );
            println!("  Anchor:  {}", format_jd(timeline.anchor_jd));
            println!("  Balance: {:.4} years", timeline.balance_years);
            println!("  End:     {}\n", format_jd(timeline.end_jd()));
            print_period_tree(&timeline.mahadashas, max_level);
        }

        Commands::Tribhagi { seed, json } => {
            let seed = build_seed(&seed);
            let parts = tribhagi_timeline(&seed).unwrap_or_else(|e| exit_with(e));
            if json {
                print_json(&parts);
                return;
            }
            println!(
                "Tribhagi Parts for birth {} ({} parts)\n",
                format_jd(seed.birth_jd),
                parts.len()
            );
            for part in &parts {
                let lords: Vec<&str> = part
                    .children
                    .iter()
                    .map(|ad| ad.graha.english_name())
                    .collect();
                println!(
                    "  {} Part {} ({}) {} - {}, {:.1} days",
                    part.graha.english_name(),
                    part.part.number(),
                    part.part.name(),
                    format_jd(part.start_jd),
                    format_jd(part.end_jd),
                    part.duration_days(),
                );
                println!("    Antardashas: {}", lords.join(", "));
            }
        }

        Commands::Snapshot {
            seed,
            query_date,
            mode,
            max_level,
            config,
            json,
        } => {
            let seed = build_seed(&seed);
            let query_jd = parse_utc_jd(&query_date).unwrap_or_else(|e| exit_with(e));
            let config =
                snapshot_config(mode, max_level, config).unwrap_or_else(|e| exit_with(e));
            match dasha_snapshot(&seed, query_jd, &config) {
                Ok(Some(snapshot)) if json => print_json(&snapshot),
                Ok(Some(snapshot)) => print_snapshot(&snapshot),
                Ok(None) => println!("no active period"),
                Err(e) => exit_with(e),
            }
        }

        Commands::Seed {
            birth_date,
            moon_lon,
            json,
        } => {
            let birth_jd = parse_utc_jd(&birth_date).unwrap_or_else(|e| exit_with(e));
            let seed =
                BirthSeed::from_moon_longitude(birth_jd, moon_lon).unwrap_or_else(|e| exit_with(e));
            if json {
                print_json(&seed);
                return;
            }
            let balance = vimshottari_birth_balance(&seed).unwrap_or_else(|e| exit_with(e));
            let info = nakshatra_from_longitude(moon_lon);
            println!(
                "Nakshatra:       {} (index {}, pada {})",
                info.nakshatra.name(),
                seed.nakshatra_index,
                info.pada
            );
            println!("Fraction left:   {:.6}", seed.fraction_remaining);
            println!("Birth lord:      {}", balance.graha.english_name());
            println!("Balance:         {:.4} years", balance.balance_years);
            println!("Anchor:          {}", format_jd(balance.anchor_jd));
        }
    }
}
