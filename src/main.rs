use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mucat::{Catalog, CatalogReport, ingest};

#[derive(Parser)]
#[command(name = "mucat", version, about)]
struct Cli {
    /// Increase verbosity (-v = info, -vv = debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Albums CSV file
    #[arg(short = 'a', long = "albums", value_name = "ALBUMS_CSV", required = true)]
    albums: PathBuf,

    /// Songs CSV file
    #[arg(short = 's', long = "songs", value_name = "SONGS_CSV")]
    songs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all song names in alphabetical order
    Songs,

    /// List album names, optionally only those released in a given year
    Albums {
        #[arg(short = 'y', long = "year")]
        year: Option<i32>,
    },

    /// Print a summary of the catalog
    Stats {
        /// Output as JSON instead of plain text
        #[arg(long = "json", default_value_t = false)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logger(cli.verbosity);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut catalog = Catalog::new();

    ingest::read_albums(&mut catalog, File::open(&cli.albums)?)?;
    if let Some(ref songs) = cli.songs {
        ingest::read_songs(&mut catalog, File::open(songs)?)?;
    }

    match cli.command {
        Commands::Songs => {
            for name in catalog.ordered_song_names() {
                println!("{}", name);
            }
        }
        Commands::Albums { year } => {
            let names = match year {
                Some(year) => catalog.albums_in_year(year),
                None => catalog.album_names(),
            };
            for name in names {
                println!("{}", name);
            }
        }
        Commands::Stats { json } => {
            let report = CatalogReport::from(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }

    Ok(())
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}
