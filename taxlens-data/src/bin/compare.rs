use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use taxlens_core::{Currency, ExchangeRate, RankBy, TaxResolver, rank};
use taxlens_data::{CatalogLoader, FALLBACK_USD_CAD_RATE};
use tracing::info;

/// Compare income tax burdens across North American jurisdictions.
///
/// Resolves the given gross income against every requested jurisdiction
/// (US states and Canadian provinces, federal tax included), converting
/// between CAD and USD with the supplied exchange rate, and prints a
/// ranking plus an optional per-bracket breakdown.
#[derive(Parser, Debug)]
#[command(name = "taxlens-compare")]
#[command(version, about, long_about = None)]
struct Args {
    /// Gross annual income in the input currency
    #[arg(short, long)]
    income: Decimal,

    /// Currency the income is entered in
    #[arg(short, long, default_value = "USD", value_parser = parse_currency)]
    currency: Currency,

    /// Currency to display all amounts in (defaults to the input currency)
    #[arg(short, long, value_parser = parse_currency)]
    display: Option<Currency>,

    /// USD to CAD exchange rate (1 USD = RATE CAD)
    #[arg(short, long, default_value_t = FALLBACK_USD_CAD_RATE)]
    rate: Decimal,

    /// Jurisdiction codes to compare (defaults to the whole catalog)
    #[arg(short, long, value_delimiter = ',')]
    jurisdictions: Vec<String>,

    /// Sort order for the ranking
    #[arg(long, value_enum, default_value_t = SortOrder::TaxAsc)]
    sort: SortOrder,

    /// Print per-bracket narration lines for each jurisdiction
    #[arg(short, long, default_value_t = false)]
    breakdown: bool,

    /// Path to an alternative catalog JSON file (defaults to the embedded
    /// 2025 table)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortOrder {
    /// Lowest total tax first
    TaxAsc,
    /// Highest total tax first
    TaxDesc,
    /// Highest after-tax income first
    TakeHome,
}

impl From<SortOrder> for RankBy {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::TaxAsc => RankBy::TotalTaxAscending,
            SortOrder::TaxDesc => RankBy::TotalTaxDescending,
            SortOrder::TakeHome => RankBy::AfterTaxIncomeDescending,
        }
    }
}

fn parse_currency(s: &str) -> Result<Currency, String> {
    Currency::parse(&s.to_uppercase()).ok_or_else(|| format!("unsupported currency: {s}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
            CatalogLoader::parse(file)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?
        }
        None => CatalogLoader::north_america_2025().context("Failed to load embedded catalog")?,
    };
    info!(
        tax_year = catalog.tax_year,
        jurisdictions = catalog.jurisdictions.len(),
        "catalog loaded"
    );

    let rate = ExchangeRate::new(args.rate)
        .with_context(|| format!("Invalid exchange rate: {}", args.rate))?;
    let display = args.display.unwrap_or(args.currency);

    let codes: Vec<&str> = if args.jurisdictions.is_empty() {
        catalog.jurisdictions.iter().map(|j| j.code.as_str()).collect()
    } else {
        args.jurisdictions.iter().map(String::as_str).collect()
    };
    if codes.is_empty() {
        bail!("No jurisdictions to compare");
    }

    let resolver = TaxResolver::new(&catalog);
    let ranked = rank(
        &resolver,
        &codes,
        args.income,
        args.currency,
        display,
        rate,
        args.sort.into(),
    )?;

    println!(
        "Tax year {} | income {}{} | displayed in {} | 1 USD = {} CAD",
        catalog.tax_year,
        args.currency.symbol(),
        args.income,
        display,
        rate
    );
    println!();

    for (position, entry) in ranked.iter().enumerate() {
        let symbol = entry.display_currency.symbol();
        println!(
            "{:>2}. {} ({}): total {}{}, federal {}{}, regional {}{}, effective {:.1}%, take-home {}{}",
            position + 1,
            entry.jurisdiction_name,
            entry.jurisdiction_code,
            symbol,
            entry.display.total_tax,
            symbol,
            entry.display.federal_tax,
            symbol,
            entry.display.regional_tax,
            entry.display.effective_rate * Decimal::ONE_HUNDRED,
            symbol,
            entry.display.after_tax_income,
        );

        if args.breakdown {
            if entry.needs_conversion {
                println!(
                    "      computed on {}{} ({} native)",
                    entry.bracket_currency.symbol(),
                    entry.gross_income_native,
                    entry.bracket_currency
                );
            }
            for line in &entry.federal_bracket_lines {
                println!("      federal: {line}");
            }
            for line in &entry.regional_bracket_lines {
                println!("      regional: {line}");
            }
        }
    }

    Ok(())
}
