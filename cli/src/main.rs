//! unxmind CLI - XMind to Markdown conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use unxmind::{parse_file, render, RenderOptions};

#[derive(Parser)]
#[command(name = "unxmind")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert XMind mind maps to Markdown outlines", long_about = None)]
struct Cli {
    /// Input XMind file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// List marker character
    #[arg(long, default_value_t = '-')]
    marker: char,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(&cli.input)?;
    log::debug!(
        "parsed {} content with {} sheet(s)",
        doc.format(),
        doc.sheet_count()
    );

    let options = RenderOptions::new().with_list_marker(cli.marker);
    let markdown = render::to_markdown(&doc, &options)?;

    write_output(&markdown, cli.output.as_deref())
}

fn write_output(markdown: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}
