//! Wireframe CLI - Bridge interface for the API layer
//!
//! Commands: svg, html, spec, bundle
//! Artifacts go to stdout, logs to stderr (RUST_LOG)
//! Returns 2 on malformed wireframe input

use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use wireframe_core::{
    render_markup, render_vector, synthesize_specification, SynthesisPipeline,
};

#[derive(Parser)]
#[command(name = "wireframe-cli")]
#[command(about = "Wireframe CLI - Wireframe Synthesis Engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a wireframe JSON file
    #[arg(short, long, global = true, conflicts_with = "payload")]
    input: Option<PathBuf>,

    /// Inline wireframe JSON
    #[arg(short, long, global = true)]
    payload: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the vector (SVG) document
    Svg,

    /// Render the markup (HTML) document
    Html,

    /// Synthesize the design specification
    Spec {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Write all artifacts plus a manifest to a directory
    Bundle {
        /// Output directory
        #[arg(short, long)]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let raw = match (&cli.input, &cli.payload) {
        (Some(path), _) => match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => return fail(format!("Failed to read {}: {}", path.display(), e), ExitCode::FAILURE),
        },
        (None, Some(payload)) => payload.clone(),
        (None, None) => return fail("Either --input or --payload is required", ExitCode::FAILURE),
    };

    let value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => return fail(format!("Malformed wireframe: {}", e), ExitCode::from(2)),
    };

    let pipeline = SynthesisPipeline::new();
    let wireframe = match pipeline.decode(&value) {
        Ok(w) => w,
        Err(e) => return fail(e, ExitCode::from(2)),
    };

    match cli.command {
        Commands::Svg => {
            println!("{}", render_vector(&wireframe));
            ExitCode::SUCCESS
        }

        Commands::Html => {
            println!("{}", render_markup(&wireframe));
            ExitCode::SUCCESS
        }

        Commands::Spec { pretty } => {
            let spec = synthesize_specification(&wireframe);
            let encoded = if pretty {
                serde_json::to_string_pretty(&spec)
            } else {
                serde_json::to_string(&spec)
            };
            match encoded {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(e, ExitCode::FAILURE),
            }
        }

        Commands::Bundle { out_dir } => {
            let written = pipeline
                .synthesize_wireframe_at(&wireframe, chrono::Utc::now())
                .and_then(|bundle| bundle.write_to_dir(&out_dir).map(|_| bundle));

            match written {
                Ok(bundle) => {
                    let output = serde_json::json!({
                        "success": true,
                        "manifest": bundle.manifest(),
                    });
                    println!("{}", output);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(e, ExitCode::FAILURE),
            }
        }
    }
}

fn fail(error: impl Display, code: ExitCode) -> ExitCode {
    let output = serde_json::json!({
        "success": false,
        "error": error.to_string(),
    });
    println!("{}", output);
    code
}
