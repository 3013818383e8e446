//! versioned CLI
//!
//! Runs the built-in walkthrough or replays an operation script against a
//! persistent list of JSON values.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use serde_json::Value;

use versioned::PersistentArray;
use versioned::PersistentList;
use versioned::VersionId;
use versioned::config::Config;
use versioned::logging;
use versioned::ops::Script;

#[derive(Parser)]
#[command(name = "versioned")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Persistent sequences with full version history")]
struct Cli {
    /// JSON config file (log level and destination)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through gets, sets and appends across versions
    Demo,

    /// Replay a JSON operation script, printing one outcome per line
    Replay {
        /// Script file: {"initial": [...], "ops": [...]}
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {}", err);
                return ExitCode::from(2);
            }
        },
        None => Config::default(),
    };

    if let Err(err) = logging::init(&config.log) {
        eprintln!("warning: logging disabled: {}", err);
    }

    let result = match cli.command {
        Commands::Demo => demo().map_err(|err| err.to_string()),
        Commands::Replay { script } => replay(&script),
    };

    return match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    };
}

fn demo() -> versioned::Result<()> {
    let v0 = VersionId::INITIAL;

    println!("== array [1, 2, 3, 4, 5]");
    let mut array = PersistentArray::new([1, 2, 3, 4, 5]);
    println!("get(0, 0) = {}", array.get(v0, 0)?);
    println!("get(0, 4) = {}", array.get(v0, 4)?);
    let v1 = array.set(v0, 2, 10)?;
    println!("set(0, 2, 10) -> version {}", v1);
    println!("get(0, 2) = {}", array.get(v0, 2)?);
    println!("get({}, 2) = {}", v1, array.get(v1, 2)?);
    match array.get(v0, 10) {
        Ok(value) => println!("get(0, 10) = {}", value),
        Err(err) => println!("get(0, 10) failed: {}", err),
    }

    println!();
    println!("== list [10, 20, 30]");
    let mut list = PersistentList::new([10, 20, 30]);
    let v1 = list.append(v0, 40)?;
    println!("append(0, 40) -> version {}", v1);
    println!("get_size(0) = {}", list.get_size(v0)?);
    println!("get_size({}) = {}", v1, list.get_size(v1)?);
    println!("get({}, 3) = {}", v1, list.get(v1, 3)?);

    println!();
    println!("== list [1, 2, 3]");
    let mut list = PersistentList::new([1, 2, 3]);
    let v1 = list.append(v0, 4)?;
    let v2 = list.set(v1, 0, 10)?;
    let v3 = list.append(v2, 5)?;
    for version in [v0, v1, v2, v3] {
        println!("version {}: {:?}", version, list.to_vec(version)?);
    }
    match list.get(VersionId(10), 0) {
        Ok(value) => println!("get(10, 0) = {}", value),
        Err(err) => println!("get(10, 0) failed: {}", err),
    }
    println!(
        "{} versions hold {} distinct nodes",
        list.version_count(),
        list.shared_node_count()
    );

    return Ok(());
}

fn replay(path: &Path) -> Result<(), String> {
    let text = fs::read_to_string(path).map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    let script: Script<Value> = serde_json::from_str(&text).map_err(|err| format!("failed to parse script: {}", err))?;

    let (list, outcomes) = script.run();
    for outcome in &outcomes {
        let line = serde_json::to_string(outcome).map_err(|err| err.to_string())?;
        println!("{}", line);
    }
    tracing::info!(
        ops = outcomes.len(),
        versions = list.version_count(),
        "replay finished"
    );
    return Ok(());
}
