//! CLI entry point: run the built-in evaluation cases against Ollama.

use bpmn_eval::backends::OllamaGenerator;
use bpmn_eval::eval::{builtin_cases, EvalHarness, Evaluator, render_table};
use clap::Parser;

/// Evaluate LLM-based BPMN element extraction (precision/recall).
#[derive(Parser)]
#[command(name = "bpmn-eval", version, about)]
struct Cli {
    /// Ollama model to query.
    #[arg(long, default_value = bpmn_eval::backends::ollama::DEFAULT_MODEL)]
    model: String,

    /// Ollama base URL.
    #[arg(long, default_value = bpmn_eval::backends::ollama::DEFAULT_URL)]
    url: String,

    /// Similarity threshold for fuzzy label matching.
    #[arg(long, default_value_t = 0.7)]
    threshold: f64,

    /// Emit the full per-case results as JSON instead of the table.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let generator = OllamaGenerator::new()
        .with_model(&cli.model)
        .with_url(&cli.url);
    let harness = EvalHarness::new(Box::new(generator), Evaluator::new(cli.threshold));

    let reports = harness.run(&builtin_cases());

    for report in &reports {
        if let Some(reason) = &report.failure {
            eprintln!("[!] {} failed: {reason}", report.name);
            eprintln!("    Check that Ollama is running and the model is available:");
            eprintln!("    ollama run {}", cli.model);
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize reports: {e}"),
        }
    } else {
        print!("{}", render_table(&reports));
    }
}
