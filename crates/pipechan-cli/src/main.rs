//! pipechan CLI: run, validate and explain channel recipes.

use clap::{Parser, Subcommand};
use pipechan_core::config::{unescape_delimiter, ChannelConfig};
use pipechan_core::Channel;
use pipechan_io::writers::delimited::DelimitedWriter;
use pipechan_io::writers::jsonl::write_jsonl;
use pipechan_recipe::{evaluate, parse_yaml_recipe, run, Recipe};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pipechan")]
#[command(about = "Build, reshape and print tabular channels", long_about = None)]
struct Cli {
    /// Cell delimiter for files and printed output (overrides PIPECHAN_DELIMITER)
    #[arg(long, global = true)]
    delimiter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a recipe YAML file
    Run {
        /// Path to the recipe YAML file
        #[arg(short, long)]
        recipe: PathBuf,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a recipe YAML file (syntax and step order)
    Validate {
        /// Path to the recipe YAML file
        #[arg(short, long)]
        recipe: PathBuf,
    },

    /// Show the steps of a recipe and the shape of its result
    Explain {
        /// Path to the recipe YAML file
        #[arg(short, long)]
        recipe: PathBuf,
    },

    /// Build a channel from comma-separated records and print it
    Argv {
        /// Records, e.g. `a,1 b,2 c,3`
        records: Vec<String>,

        /// Print JSON lines instead of delimited text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ChannelConfig::from_env();
    if let Some(d) = cli.delimiter {
        config.delimiter = unescape_delimiter(&d);
    }

    match cli.command {
        Commands::Run { recipe, json } => {
            if let Err(e) = run_recipe(&recipe, &config, json) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Validate { recipe } => {
            if let Err(e) = load_recipe(&recipe) {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
            println!("✓ Recipe is valid");
        }
        Commands::Explain { recipe } => {
            if let Err(e) = explain_recipe(&recipe, &config) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Argv { records, json } => {
            if let Err(e) = print_argv(&records, &config, json) {
                eprintln!("Error: {}", e);
                for hint in hints(&*e) {
                    eprintln!("  hint: {}", hint);
                }
                std::process::exit(1);
            }
        }
    }
}

fn load_recipe(path: &Path) -> Result<Recipe, Box<dyn std::error::Error>> {
    let yaml_content = fs::read_to_string(path)?;
    Ok(parse_yaml_recipe(&yaml_content)?)
}

fn run_recipe(
    path: &Path,
    config: &ChannelConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = load_recipe(path)?;
    let report = run(&recipe, config)?;
    log::info!("recipe {} produced {} rows", path.display(), report.length);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &report.sink {
        Some(dest) => {
            println!("✓ Recipe executed successfully");
            println!("  Duration: {}ms", report.duration_ms());
            println!("  Shape: {} rows x {} columns", report.length, report.width);
            println!("  Written to: {}", dest);
            println!("  Digest: {}", report.digest);
        }
        None => print_channel(&report.channel, config, false)?,
    }
    Ok(())
}

fn explain_recipe(path: &Path, config: &ChannelConfig) -> Result<(), Box<dyn std::error::Error>> {
    let recipe = load_recipe(path)?;
    let channel = evaluate(&recipe, config)?;

    println!("Recipe Steps");
    println!("============");
    println!();
    println!("  0. {}", recipe.source);
    for (i, op) in recipe.ops.iter().enumerate() {
        println!("  {}. {}", i + 1, op);
    }
    if let Some(sink) = &recipe.sink {
        println!("  {}. {}", recipe.ops.len() + 1, sink);
    }
    println!();
    println!("Result:");
    println!("  Length: {} rows", channel.length());
    println!("  Width: {} columns", channel.width());
    println!("  Digest: {}", channel.digest()?);

    Ok(())
}

fn print_argv(
    records: &[String],
    config: &ChannelConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let channel = pipechan_io::from_args_with(records, config)?;
    print_channel(&channel, config, json)
}

fn print_channel(
    channel: &Channel,
    config: &ChannelConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout().lock();
    if json {
        write_jsonl(channel, stdout)?;
    } else {
        DelimitedWriter::to_writer(stdout, &config.delimiter)?.write_channel(channel)?;
    }
    Ok(())
}

fn hints(e: &(dyn std::error::Error + 'static)) -> Vec<String> {
    match e.downcast_ref::<pipechan_io::Error>() {
        Some(io_err) => io_err
            .channel_error()
            .map(|c| c.suggestions())
            .unwrap_or_default(),
        None => vec![],
    }
}
