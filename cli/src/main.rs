mod error_formatter;
mod formatter;
mod interactive;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use mathema::{Engine, Taxonomy};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mathema")]
#[command(about = "Equations the way they are taught.")]
#[command(
    long_about = "Mathema classifies school-level equations into curriculum chapters, finds their domain of definition and solves them.\nGreek function names (ημ, συν, εφ, σφ), ^ powers and implicit multiplication are accepted as typed."
)]
#[command(version)]
struct Cli {
    /// Chapter taxonomy JSON file (default: the built-in curriculum)
    #[arg(long, global = true, env = "MATHEMA_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify, analyze and solve an equation or system
    ///
    /// Separate the equations of a system with commas.
    ///
    /// Examples:
    ///   mathema solve "x^2-5x+6=0"
    ///   mathema solve "ημ(x)=0.5"
    ///   mathema solve "x+y=5, x-y=1"
    Solve {
        /// The equation(s) to solve
        input: String,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
        /// Number of chapter matches to show
        #[arg(long, default_value = "3")]
        top: usize,
    },
    /// Rank the curriculum chapters an input belongs to
    Classify {
        /// The equation(s) to classify
        input: String,
    },
    /// Show the input rewritten into parser syntax
    Normalize {
        /// The text to normalize
        input: String,
    },
    /// Prompt for equations until an empty line
    Interactive,
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: POST /solve with {input}, GET /classify?input=..., GET /health
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_engine(cli.taxonomy.as_deref()).and_then(|engine| match &cli.command {
        Commands::Solve { input, json, top } => solve_command(&engine, input, *json, *top),
        Commands::Classify { input } => classify_command(&engine, input),
        Commands::Normalize { input } => normalize_command(&engine, input),
        Commands::Interactive => interactive::run_interactive(&engine),
        Commands::Server { host, port } => server_command(engine, host, *port),
    });

    if let Err(e) = result {
        if let Some(mathema_err) = e.downcast_ref::<mathema::MathemaError>() {
            eprintln!("{}", error_formatter::format_error(mathema_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "mathema=debug" } else { "mathema=warn" };
    let filter = if verbose {
        EnvFilter::new(default_filter)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_engine(taxonomy: Option<&Path>) -> Result<Engine> {
    let taxonomy = match taxonomy {
        Some(path) => Taxonomy::from_path(path)?,
        None => Taxonomy::builtin()?,
    };
    Ok(Engine::new(taxonomy))
}

fn solve_command(engine: &Engine, input: &str, json: bool, top: usize) -> Result<()> {
    let response = engine.analyze(input)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_response(&response, top));
    }
    Ok(())
}

fn classify_command(engine: &Engine, input: &str) -> Result<()> {
    let matches = engine.classify(input);
    let formatter = Formatter::default();
    print!("{}", formatter.format_matches(&matches));
    Ok(())
}

fn normalize_command(engine: &Engine, input: &str) -> Result<()> {
    println!("{}", engine.normalize(input));
    Ok(())
}

fn server_command(engine: Engine, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            println!(
                "Starting HTTP server with {} chapter(s) loaded",
                engine.taxonomy().chapters.len()
            );
            server::http::start_server(engine, host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (engine, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}
