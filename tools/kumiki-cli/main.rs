use clap::Parser;
use kumiki::prelude::*;
use std::fs;
use std::time::Instant;

/// A deterministic graph-to-source compiler for visual multi-agent workflows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file saved by the canvas
    workflow_path: String,

    /// Write the generated script to this file instead of stdout
    #[arg(short, long)]
    out: Option<String>,

    /// Print the full result (code, diagnostics, dependencies) as JSON
    #[arg(long)]
    json: bool,

    /// Override the model identifier used by the generated client factory
    #[arg(short, long)]
    model: Option<String>,
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    // --- 1. File loading ---
    let load_start = Instant::now();
    let workflow_json = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &cli.workflow_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and conversion ---
    let raw: UiWorkflow = serde_json::from_str(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));
    let graph = raw
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    eprintln!(
        "Loaded workflow with {} nodes and {} edges in {:?}",
        graph.nodes.len(),
        graph.edges.len(),
        load_duration
    );

    // --- 3. Compilation ---
    let compile_start = Instant::now();
    let mut builder = Compiler::builder(graph);
    if let Some(model) = &cli.model {
        builder = builder.with_model(model);
    }
    let result = builder.build().compile();
    eprintln!("Compilation finished in {:?}", compile_start.elapsed());

    // Diagnostics are advisory; report them and keep going.
    for diagnostic in &result.errors {
        eprintln!("warning: {}", diagnostic);
    }
    eprintln!("Script dependencies: {}", result.dependencies.join(", "));

    // --- 4. Output ---
    let output = if cli.json {
        serde_json::to_string_pretty(&result)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)))
    } else {
        result.code
    };

    match &cli.out {
        Some(path) => {
            fs::write(path, &output).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output file '{}': {}", path, e))
            });
            eprintln!("Wrote generated script to '{}'", path);
        }
        None => println!("{}", output),
    }
}
