use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seating::{format_participant_list, parse_participant_list, render_tables, TournamentRecord};
use seating_cli::{generate_tournament, Archive, Config, GenerationResult};
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory where tournaments are stored
    #[arg(short, long, global = true, default_value = "tournaments")]
    directory: PathBuf,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the tables for a new tournament and store them
    Generate {
        /// Name of the tournament
        #[arg(short, long)]
        name: String,

        /// Date of the tournament, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// File with one participant per line, in the form "1. Name".
        /// Read from stdin if not given.
        #[arg(short, long)]
        participants: Option<PathBuf>,

        /// How many games to play
        #[arg(short = 'g', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=20))]
        num_games: u8,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List stored tournaments
    List,
    /// Show the tables of a stored tournament
    Show {
        /// File name as printed by `list`
        file_name: String,
    },
}

fn read_participant_text(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read participants from '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_tournament(record: &TournamentRecord) {
    println!("Tournament: {} ({})\n", record.name, record.date);
    println!("{}", render_tables(&record.tables));
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let archive = Archive::new(args.directory);

    match args.command {
        Command::Generate {
            name,
            date,
            participants,
            num_games,
            seed,
        } => {
            let text = read_participant_text(participants.as_ref())?;
            let participants = parse_participant_list(&text)?;
            debug!(
                num_participants = participants.len(),
                "Participants:\n{}",
                format_participant_list(&participants)
            );

            // Get a random seed
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut config = Config {
                rng: StdRng::seed_from_u64(seed),
                archive,
            };

            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            match generate_tournament(&mut config, &name, date, &participants, usize::from(num_games))? {
                GenerationResult::Stored { record, path } => {
                    print_tournament(&record);
                    eprintln!("\nSeating stored in {}", path.display());
                }
                GenerationResult::NoParticipants => {
                    warn!("The participant list is empty, nothing was generated");
                }
            }
        }
        Command::List => {
            let file_names = archive.list()?;
            if file_names.is_empty() {
                warn!(
                    directory = %archive.directory().display(),
                    "No stored tournaments yet, use `generate` to create one"
                );
            }
            for file_name in file_names {
                println!("{}", file_name);
            }
        }
        Command::Show { file_name } => {
            let record = archive.load(&file_name)?;
            print_tournament(&record);
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
