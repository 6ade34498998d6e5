//! `litscope load` - load a Scopus CSV export and print it

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use litscope_core::{Document, DocumentRecord, DocumentSet};
use litscope_scopus::ScopusCsvLoader;

use super::styled_table;
use crate::config::{Config, OutputFormat};

/// Longest title shown in table output before truncation
const TITLE_WIDTH: usize = 60;

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Scopus CSV export
    pub path: PathBuf,

    /// Print all documents as a JSON array instead of a table
    #[arg(long)]
    pub json: bool,

    /// Fail on author entries without name and initials
    #[arg(long)]
    pub strict_authors: bool,

    /// Rows shown in table output (default from config)
    #[arg(long)]
    pub limit: Option<usize>,
}

pub fn run(args: LoadArgs, config: &Config) -> Result<()> {
    let mut scopus = config.scopus.clone();
    scopus.strict_authors |= args.strict_authors;

    let docs = ScopusCsvLoader::new()
        .with_config(scopus)
        .load(&args.path)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;

    log::info!("Loaded {} documents from {}", docs.len(), args.path.display());

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match format {
        OutputFormat::Json => print_json(&docs),
        OutputFormat::Table => {
            print_table(&docs, args.limit.unwrap_or(config.output.max_rows));
            Ok(())
        }
    }
}

fn print_json(docs: &DocumentSet) -> Result<()> {
    let records: Vec<DocumentRecord> = docs.iter().map(DocumentRecord::from_document).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &records).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

fn print_table(docs: &DocumentSet, max_rows: usize) {
    let mut table = styled_table(&["#", "Title", "First author", "Year", "Cited by", "Type"]);

    for (i, doc) in docs.iter().take(max_rows).enumerate() {
        table.add_row(summary_row(i + 1, doc));
    }

    println!("{table}");
    if docs.len() > max_rows {
        println!("... {} more documents", docs.len() - max_rows);
    }
}

fn summary_row(index: usize, doc: &dyn Document) -> Vec<String> {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    vec![
        index.to_string(),
        or_dash(doc.title().map(|t| truncate(t, TITLE_WIDTH))),
        or_dash(
            doc.authors()
                .and_then(|a| a.first())
                .map(|a| a.name().to_string()),
        ),
        or_dash(doc.publication_year().map(|y| y.to_string())),
        or_dash(doc.citation_count().map(|c| c.to_string())),
        or_dash(doc.source_type().map(String::from)),
    ]
}

/// Cut `text` to at most `width` characters, marking the cut with `…`
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
