//! notion-blocks - Notion export HTML to a JSON block tree

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use notion_blocks::{ParseOptions, parse_bytes};

#[derive(Parser)]
#[command(name = "notion-blocks")]
#[command(version, about = "Convert Notion export HTML into a JSON block tree", long_about = None)]
#[command(after_help = "EXAMPLES:
    notion-blocks page.html               Print the block tree of page.html
    notion-blocks page.html -o tree.json  Write it to tree.json
    pbpaste | notion-blocks --flat        Read stdin, keep list blocks unmerged")]
struct Cli {
    /// Input HTML file (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output JSON file (writes stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Keep adjacent list blocks as separate top-level nodes
    #[arg(long)]
    flat: bool,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let bytes = read_input(cli.input.as_deref())
        .map_err(|e| format!("reading {}: {e}", cli.input.as_deref().unwrap_or("stdin")))?;

    let options = ParseOptions::new().with_normalize_lists(!cli.flat);
    let nodes = parse_bytes(&bytes, &options);
    log::info!("{} top-level blocks", nodes.len());

    let mut json = if cli.compact {
        serde_json::to_string(&nodes)
    } else {
        serde_json::to_string_pretty(&nodes)
    }
    .map_err(|e| e.to_string())?;
    json.push('\n');

    match cli.output.as_deref() {
        Some(path) => fs::write(path, json).map_err(|e| format!("writing {path}: {e}")),
        None => io::stdout()
            .write_all(json.as_bytes())
            .map_err(|e| e.to_string()),
    }
}

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) if path != "-" => fs::read(path),
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
