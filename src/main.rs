use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use depscope::analysis::{handle_request, AnalyzeRequest, AnalyzeResponse};
use depscope::export::{export_to_string, ExportData, ExportFormat};

#[derive(Parser)]
#[command(name = "depscope")]
#[command(version = "0.1.0")]
#[command(about = "Dependency usage scanner for Angular and Node.js projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a project for usages of a component or for route registrations
    Analyze {
        /// Project root to scan (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Component to search for (required for angular analysis)
        #[arg(short, long)]
        component: Option<String>,

        /// Analyzer to run: angular or node
        #[arg(short = 't', long = "type")]
        kind: String,

        /// Output format: json or markdown
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            source,
            component,
            kind,
            format,
            output,
        }) => run_analyze(source, component, kind, &format, output),
        Some(Commands::Version) => {
            println!("depscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("DepScope - Dependency Usage Scanner");
            println!("Run 'depscope analyze --type angular --component <Name>' to scan a project");
            println!("Run 'depscope --help' for more information");
            Ok(())
        }
    }
}

fn run_analyze(
    source: PathBuf,
    component: Option<String>,
    kind: String,
    format: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse().map_err(anyhow::Error::msg)?;

    let request = AnalyzeRequest {
        source,
        component,
        kind,
    };
    let response = handle_request(&request)?;

    let files = match response {
        // The boundary answers an unusable request with a flat `false`.
        AnalyzeResponse::Rejected => {
            println!("false");
            return Ok(());
        }
        AnalyzeResponse::Reports(files) => files,
    };

    let data = ExportData {
        source: request.source.display().to_string(),
        kind: request.kind.to_lowercase(),
        component: request.component.clone(),
        files,
    };
    let rendered = export_to_string(format, &data)?;

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            println!(
                "📄 Report written to {} ({} occurrence(s) in {} file(s))",
                path.display(),
                data.occurrence_count(),
                data.file_count()
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
