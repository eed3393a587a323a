//! ExtractKit CLI - Command-line interface for article extraction

use clap::{Parser, Subcommand, ValueEnum};
use extractkit::{
    ExtractionType, Extractor, GeminiClient, StatusReport, DEFAULT_MODEL,
};
use std::io::{self, Write};

/// Output format for subcommands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// ExtractKit - fetch a web page and produce a structured LLM summary
#[derive(Parser, Debug)]
#[command(name = "extractkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract an article from a URL and summarize it
    Extract {
        /// URL to fetch
        url: String,

        /// Extraction type
        #[arg(long, short = 't', default_value = "summary")]
        extraction_type: String,

        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
    /// List the available extraction types
    Types {
        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
    /// Report generation client configuration
    Status {
        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            url,
            extraction_type,
            output,
        } => run_extract(&url, &extraction_type, output).await,
        Commands::Types { output } => run_types(output),
        Commands::Status { output } => run_status(output),
    }
}

async fn run_extract(url: &str, extraction_type: &str, output: OutputFormat) {
    let client = match GeminiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let extractor = match Extractor::new(Box::new(client)) {
        Ok(extractor) => extractor,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let request = extractkit::ExtractionRequest {
        url: url.to_string(),
        extraction_type: extraction_type.to_string(),
    };
    let result = extractor.extract(&request).await;

    match output {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            if result.success {
                if let Some(title) = &result.title {
                    writeln_safe(&format!("Title: {}", title));
                }
                if let (Some(ty), Some(len)) = (&result.extraction_type, result.content_length) {
                    writeln_safe(&format!("Type: {} ({} chars of content)", ty, len));
                }
                writeln_safe("");
                if let Some(text) = &result.extracted_text {
                    writeln_safe(text);
                }
            } else if let Some(error) = &result.error {
                eprintln!("Error: {}", error);
            }
        }
    }

    if !result.success {
        std::process::exit(1);
    }
}

fn run_types(output: OutputFormat) {
    match output {
        OutputFormat::Json => {
            let types: Vec<serde_json::Value> = ExtractionType::ALL
                .iter()
                .map(|ty| {
                    serde_json::json!({
                        "id": ty.id(),
                        "name": ty.name(),
                        "description": ty.description(),
                    })
                })
                .collect();
            print_json(&serde_json::json!({ "types": types }));
        }
        OutputFormat::Text => {
            for ty in ExtractionType::ALL {
                writeln_safe(&format!(
                    "{:<12} {} - {}",
                    ty.id(),
                    ty.name(),
                    ty.description()
                ));
            }
        }
    }
}

fn run_status(output: OutputFormat) {
    let report = status_report();
    match output {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            writeln_safe(&format!("model: {}", report.model));
            writeln_safe(&format!("api_configured: {}", report.api_configured));
        }
    }
}

/// Build the status report without any network call
fn status_report() -> StatusReport {
    let api_configured = std::env::var("GEMINI_API_KEY")
        .map(|key| !key.trim().is_empty())
        .unwrap_or(false);
    let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    StatusReport {
        api_configured,
        model,
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        std::process::exit(1);
    });
    writeln_safe(&json);
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
