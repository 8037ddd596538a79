use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use upilens_core::LedgerError;
use upilens_insights::export::{condensed_lines, write_csv};
use upilens_insights::summary::{
    cost_control_suggestions, monthly_spending, spending_by_category, top_expenses,
    weekday_spending,
};
use upilens_insights::{Ledger, parse_statement};

#[derive(Parser, Debug)]
#[command(name = "upilens", version, about = "UPI statement ledger and spending analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement and print the ledger with spending summaries
    Analyze {
        /// Statement PDF (must be text-extractable)
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Pre-extracted statement text (skips PDF extraction)
        #[arg(long)]
        text: Option<PathBuf>,

        /// Number of top expenses to print (default: 10)
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Export the parsed ledger as CSV (or JSON with --json)
    Export {
        /// Statement PDF (must be text-extractable)
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Pre-extracted statement text (skips PDF extraction)
        #[arg(long)]
        text: Option<PathBuf>,

        /// Output file path
        #[arg(long)]
        out: PathBuf,

        /// Write JSON instead of CSV
        #[arg(long)]
        json: bool,
    },

    /// Print the condensed line form used to prompt an external report
    /// generator
    Condense {
        /// Statement PDF (must be text-extractable)
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Pre-extracted statement text (skips PDF extraction)
        #[arg(long)]
        text: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { pdf, text, top } => {
            let ledger = load_ledger(pdf, text)?;
            print_analysis(&ledger, top);
        }

        Command::Export { pdf, text, out, json } => {
            let ledger = load_ledger(pdf, text)?;
            if json {
                let body = serde_json::to_string_pretty(&ledger)?;
                fs::write(&out, body).with_context(|| format!("writing {}", out.display()))?;
            } else {
                let file = fs::File::create(&out)
                    .with_context(|| format!("creating {}", out.display()))?;
                write_csv(&ledger.transactions, file)?;
            }
            println!(
                "Wrote {} records to {}",
                ledger.transactions.len(),
                out.display()
            );
        }

        Command::Condense { pdf, text } => {
            let ledger = load_ledger(pdf, text)?;
            println!("{}", condensed_lines(&ledger.transactions));
        }
    }

    Ok(())
}

/// Read the statement from PDF or pre-extracted text and run the parse
/// pipeline, printing block warnings and empty-result hints on stderr.
fn load_ledger(pdf: Option<PathBuf>, text: Option<PathBuf>) -> Result<Ledger> {
    let raw = match (pdf, text) {
        (Some(path), _) => extract_pdf_text(&path)?,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => bail!("pass --pdf <statement.pdf> or --text <statement.txt>"),
    };

    let ledger = match parse_statement(&raw) {
        Ok(ledger) => ledger,
        Err(err) => {
            if let Some(LedgerError::EmptyResult { source }) = err.downcast_ref::<LedgerError>() {
                eprintln!("No transactions found. Possible reasons:");
                eprintln!("  1. The statement doesn't match the expected {source} layout");
                eprintln!("  2. The PDF text extraction failed");
                eprintln!("  3. The statement is empty");
            }
            return Err(err);
        }
    };

    for warning in &ledger.warnings {
        eprintln!(
            "warning: skipped malformed block at {}: {}",
            warning.header, warning.reason
        );
    }

    Ok(ledger)
}

/// PDF-to-text collaborator: whole-document extraction with page breaks
/// normalized to newlines, or an explicit extraction failure.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let text = pdf_extract::extract_text(path)
        .map_err(|e| LedgerError::ExtractionFailure(e.to_string()))?;
    if text.trim().is_empty() {
        bail!(LedgerError::ExtractionFailure(format!(
            "{} produced no text",
            path.display()
        )));
    }
    Ok(text)
}

fn print_analysis(ledger: &Ledger, top: usize) {
    println!("Detected source: {}", ledger.source);
    println!("Parsed {} transactions\n", ledger.transactions.len());

    for t in &ledger.transactions {
        println!(
            "{} | {} | {:>10.2} | {} | {}",
            t.display_date, t.txn_type, t.amount, t.category, t.description
        );
    }

    let by_category = spending_by_category(&ledger.transactions);
    if !by_category.is_empty() {
        println!("\nSpending by category:");
        for (category, total) in &by_category {
            println!("  {category}: Rs {total:.2}");
        }
    }

    let monthly = monthly_spending(&ledger.transactions);
    if !monthly.is_empty() {
        println!("\nMonthly spending:");
        for (bucket, total) in &monthly {
            println!("  {bucket}: Rs {total:.2}");
        }
    }

    let top_list = top_expenses(&ledger.transactions, top);
    if !top_list.is_empty() {
        println!("\nTop expenses:");
        for t in top_list {
            println!("  {} | Rs {:.2} | {}", t.display_date, t.amount.abs(), t.description);
        }
    }

    let weekdays = weekday_spending(&ledger.transactions);
    if !weekdays.is_empty() {
        println!("\nSpending by day of week:");
        for (day, total) in &weekdays {
            println!("  {day}: Rs {total:.2}");
        }
    }

    let suggestions = cost_control_suggestions(&ledger.transactions);
    if !suggestions.is_empty() {
        println!("\nCost-control suggestions:");
        for s in &suggestions {
            println!(
                "  {}: spent Rs {:.2}. {} Potential savings: Rs {:.2} (15%)",
                s.category, s.spent, s.advice, s.potential_savings
            );
        }
    }
}
