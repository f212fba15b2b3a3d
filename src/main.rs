mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use reelvault::pipeline;
use reelvault_parser::output::{LibraryFormat, OutputFormat};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "reelvault=debug,reelvault_parser=debug,reelvault_common=debug".to_string()
        } else {
            "reelvault=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Link {
            source,
            dest,
            dry_run,
        } => link(&source, &dest, dry_run),
        Commands::Parse { name, json } => parse_name(&name, json),
        Commands::Version => {
            println!("reelvault {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn link(source: &Path, dest: &Path, dry_run: bool) -> Result<()> {
    if !source.is_dir() {
        anyhow::bail!("Source directory does not exist: {:?}", source);
    }

    let report = pipeline::run(source, dest, dry_run)?;

    if dry_run {
        println!(
            "[DRY RUN] Would create {} hardlinks in {:?}",
            report.created, dest
        );
    } else {
        println!("Created {} hardlinks in {:?}", report.created, dest);
    }
    if report.existing > 0 {
        println!("Skipped {} links that already exist", report.existing);
    }

    if !report.already_named.is_empty() {
        println!("\nAlready following the library convention:");
        for path in &report.already_named {
            println!("  {}", path.display());
        }
    }
    if !report.unparsable.is_empty() {
        println!("\nSkipped files (unable to extract name/year):");
        for path in &report.unparsable {
            println!("  {}", path.display());
        }
    }

    Ok(())
}

fn parse_name(name: &str, json: bool) -> Result<()> {
    let release = reelvault_parser::parse(name);

    if json {
        println!("{}", serde_json::to_string_pretty(&release)?);
        return Ok(());
    }

    match &release.title_year {
        Some(title_year) => {
            println!("Title:   {}", title_year.title);
            println!("Year:    {}", title_year.year);
        }
        None => println!("Title:   (not found)"),
    }
    println!("Source:  {}", release.source);
    match release.quality {
        Some(quality) => println!("Quality: {}", quality),
        None => println!("Quality: (not found)"),
    }

    if let Some(library_name) = LibraryFormat.format(&release) {
        println!("Folder:  {}", library_name.folder_name);
        println!("File:    {}", library_name.file_stem);
    }

    Ok(())
}
