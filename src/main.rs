// Halite II Autonomous Fleet - Main Entry Point
use clap::{Parser, Subcommand};
use halite_admiral::client::StdioTransport;
use halite_admiral::storage::load_recording;
use halite_admiral::{admiral, verbosity, Admiral, BotConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "halite_admiral", about = "Halite II fleet bot")]
struct Cli {
    /// Path to the TOML configuration, created with defaults if missing
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Bot name sent to the server (overrides the configuration)
    #[arg(long)]
    name: Option<String>,

    /// Increase log detail (-v basic, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game over stdin/stdout (default)
    Play,
    /// Re-run the decision engine on a recorded game
    Replay {
        /// JSON lines file written by a recording-enabled game
        file: String,
        /// Only replay this turn
        #[arg(long)]
        turn: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = BotConfig::load_or_create(&cli.config)?;
    if let Some(name) = cli.name {
        config.bot.name = name;
    }
    config.validate()?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(config, cli.verbose).await,
        Command::Replay { file, turn } => replay(config, cli.verbose, &file, turn),
    }
}

async fn play(config: BotConfig, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let (mut admiral, initial_map) = Admiral::connect(config, StdioTransport::new()).await?;

    let log_path = verbosity::log_file_path(&admiral.config().bot.log_dir, admiral.my_id(), &admiral.config().bot.name);
    verbosity::init_file_logging(&log_path, verbose)?;
    admiral.config().print_summary();
    admiral.log_initial_intelligence(&initial_map);

    match admiral.run_game().await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!("❌ game loop failed: {}", e);
            Err(e.into())
        }
    }
}

fn replay(config: BotConfig, verbose: u8, file: &str, turn: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    verbosity::init_stderr_logging(verbose);

    let records = load_recording(file)?;
    println!("📼 Loaded {} recorded turns from {}", records.len(), file);

    let results = admiral::replay(&config, &records, turn);
    if results.is_empty() {
        return Err(format!("no recorded turn matches {:?}", turn).into());
    }

    let mut mismatches = 0;
    for result in &results {
        let line = halite_admiral::client::protocol::encode_moves(&result.replayed);
        if result.matches() {
            println!("✅ turn {}: {}", result.turn, line);
        } else {
            mismatches += 1;
            println!("❌ turn {}: {}", result.turn, line);
            println!("   recorded: {}", halite_admiral::client::protocol::encode_moves(&result.recorded));
        }
    }

    println!("📊 {} turns replayed, {} differ from the recording", results.len(), mismatches);
    Ok(())
}
