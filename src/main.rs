//! SimInvest engine CLI
//!
//! Derives dashboard, account and investment views from a snapshot data directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::time::Instant;

use siminvest_engine::presentation::{format_currency, format_gain};
use siminvest_engine::projection::{expected_return, project, InvestmentTerms, YearSeries};
use siminvest_engine::source::{
    fetch_account, fetch_dashboard, fetch_investment, DirectorySource, SnapshotSource, DEFAULT_DATA_PATH,
};
use siminvest_engine::view::{curve_terminus, derive_account, derive_dashboard, derive_investment};
use siminvest_engine::PresentationConfig;

#[derive(Debug, Parser)]
#[command(name = "siminvest", version, about = "Derive investment dashboard views from a data snapshot")]
struct Cli {
    /// Directory holding accounts, transactions and investments files
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    data_dir: PathBuf,

    /// JSON file overriding presentation labels and formats
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the derived view as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Portfolio totals and investment cards
    Dashboard,

    /// Balance curve and ledger of one account
    Account { id: u64 },

    /// Growth projection of one investment
    Investment { id: u64 },

    /// Expected return of a new simulation
    Simulate {
        #[arg(long)]
        principal: Decimal,
        /// Annual rate in percent
        #[arg(long)]
        rate: Decimal,
        #[arg(long)]
        months: u32,
        /// Monthly PAC contribution
        #[arg(long, default_value = "0")]
        monthly: Decimal,
    },

    /// Project every investment and write the yearly curves to CSV
    ProjectAll {
        #[arg(long, default_value = "projections.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => PresentationConfig::from_json_path(path)
            .with_context(|| format!("Failed to load presentation config {}", path.display()))?,
        None => PresentationConfig::default(),
    };
    let source = DirectorySource::new(&cli.data_dir);

    match cli.command {
        Command::Dashboard => {
            let snapshot = fetch_dashboard(&source).context("Failed to load dashboard")?;
            let view = derive_dashboard(&snapshot, &cfg);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }

            println!("Total balance:         {}", view.totals.total_balance);
            println!("Total invested:        {}", view.totals.total_invested);
            println!("Total expected return: {}", view.totals.total_expected_return);
            println!();
            println!("{:>5} {:<20} {:>10} {:>14} {:>12}", "ID", "Asset", "Status", "Invested", "Gain");
            println!("{}", "-".repeat(65));
            for card in view.confirmed.iter().chain(view.pending.iter()) {
                let status = if card.confirmed { "confirmed" } else { "pending" };
                println!(
                    "{:>5} {:<20} {:>10} {:>14} {:>12}",
                    card.id, card.asset, status, card.invested, card.expected_gain
                );
            }
        }

        Command::Account { id } => {
            let snapshot = fetch_account(&source, id)
                .with_context(|| format!("Failed to load account {}", id))?;
            let view = derive_account(&snapshot, &cfg);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }

            println!("Account {}: {}", view.account.id, view.account.name);
            println!("  Stored balance: {}", view.balance);
            println!("  Ledger balance: {}", format_currency(curve_terminus(&view.balance_curve), &cfg));
            println!();
            for (label, row) in view.chart.labels.iter().zip(&view.transactions) {
                println!("{:<16} {:<10} {:>12}", label, row.kind_label, row.amount);
            }
            if view.transactions.is_empty() {
                println!("  (no transactions)");
            }
        }

        Command::Investment { id } => {
            let snapshot = fetch_investment(&source, id)
                .with_context(|| format!("Failed to load investment {}", id))?;
            let view = derive_investment(&snapshot, &cfg);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }

            println!("Investment {}: {}", view.investment.id, view.investment.asset);
            println!("  Amount:          {}", view.amount);
            println!("  Monthly PAC:     {}", view.monthly_contribution);
            println!("  Expected return: {}", view.expected_return);
            println!("  Start:           {}", view.start_date);
            println!("  Maturity:        {}", view.maturity_date);
            println!();
            print_series(&view.projection);
        }

        Command::Simulate { principal, rate, months, monthly } => {
            let gain = expected_return(principal, monthly, rate, months)?;
            let terms = InvestmentTerms::new(principal, rate, months, Some(monthly), gain);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&project(&terms))?);
                return Ok(());
            }

            println!("Expected return: {}", format_gain(gain, &cfg));
            println!();
            print_series(&project(&terms));
        }

        Command::ProjectAll { output } => {
            let start = Instant::now();
            let investments = source.investments().context("Failed to load investments")?;
            println!("Loaded {} investments", investments.len());

            // Projections are independent
            let results: Vec<(u64, String, YearSeries)> = investments
                .par_iter()
                .map(|inv| (inv.id, inv.asset.clone(), project(&InvestmentTerms::from(inv))))
                .collect();

            let mut writer = csv::Writer::from_path(&output)
                .with_context(|| format!("Unable to create {}", output.display()))?;
            writer.write_record(["InvestmentId", "Asset", "Year", "Gain", "Principal", "Contribution"])?;
            for (id, asset, series) in &results {
                for point in &series.points {
                    writer.write_record([
                        id.to_string(),
                        asset.clone(),
                        point.year.to_string(),
                        point.gain.to_string(),
                        point.principal.to_string(),
                        point.contribution.to_string(),
                    ])?;
                }
            }
            writer.flush()?;

            println!("Projections written to {} in {:?}", output.display(), start.elapsed());
        }
    }

    Ok(())
}

fn print_series(series: &YearSeries) {
    println!("{:>4} {:>14} {:>14} {:>14}", "Year", "Gain", "Principal", "With PAC");
    println!("{}", "-".repeat(49));
    for p in &series.points {
        println!("{:>4} {:>14} {:>14} {:>14}", p.year, p.gain, p.principal, p.contribution);
    }
}
