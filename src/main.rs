use anyhow::Context;
use clap::{Parser, Subcommand};

use parkgraph::error::GraphError;
use parkgraph::graph::{IsolationReport, PermitGraph};
use parkgraph::{Result, model, render, roster};

#[derive(Parser)]
#[command(name = "parkgraph")]
#[command(about = "Campus parking permit graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the permit graph as Graphviz DOT (validates while running).
    Report {
        #[arg(long)]
        roster: String,

        #[arg(short = 'o', long)]
        out: String,

        /// Optional JSON summary (totals + isolated nodes).
        #[arg(long)]
        summary: Option<String>,
    },
    /// Interactive queries against the roster.
    Query {
        #[arg(long)]
        roster: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            roster,
            out,
            summary,
        } => {
            let graph = load_graph(&roster)?;
            let data = model::build_report_data(&graph)?;

            warn_isolated(&data.isolation);

            let dot = render::render_dot(&data);
            std::fs::write(&out, dot).with_context(|| format!("write {}", out))?;
            println!("Wrote {}", out);

            if let Some(path) = summary {
                let json = serde_json::to_string_pretty(&data)?;
                std::fs::write(&path, json).with_context(|| format!("write {}", path))?;
                println!("Wrote {}", path);
            }
        }
        Commands::Query { roster } => {
            let graph = load_graph(&roster)?;
            warn_isolated(&graph.validate());
            query_loop(&graph)?;
        }
    }

    Ok(())
}

/// load → normalize → build. The graph is rebuilt fresh on every run;
/// there is no persisted graph state to get stale.
fn load_graph(path: &str) -> Result<PermitGraph> {
    let records = roster::parse_roster_file(path)?;
    let pairs = roster::normalize(&records)?;
    let graph = PermitGraph::build(&pairs)?;
    Ok(graph)
}

fn warn_isolated(report: &IsolationReport) {
    for permit in &report.isolated_permits {
        eprintln!("WARN: permit '{}' grants no lots", permit);
    }
    for lot in &report.isolated_lots {
        eprintln!("WARN: lot '{}' is not granted by any permit", lot);
    }
}

/// Line-oriented prompt loop. Unknown names re-prompt; everything else
/// aborts with the underlying error.
fn query_loop(graph: &PermitGraph) -> Result<()> {
    use std::io::{BufRead, Write};

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("commands: permit <name> | lot <name> | quit");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        let result = match cmd {
            "quit" | "exit" => break,
            "permit" if !arg.is_empty() => graph.lots_for_permit(arg),
            "lot" if !arg.is_empty() => graph.permits_for_lot(arg),
            _ => {
                println!("commands: permit <name> | lot <name> | quit");
                continue;
            }
        };

        match result {
            Ok(names) if names.is_empty() => println!("(none)"),
            Ok(names) => {
                for name in names {
                    println!("{}", name);
                }
            }
            Err(GraphError::NodeNotFound { kind, identifier }) => {
                println!("no {} named '{}'", kind, identifier);
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
