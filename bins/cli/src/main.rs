//! weiconv - denomination converter
//!
//! Usage:
//!   weiconv 342.5 ether --to wei
//!   weiconv 342500000 12
//!   weiconv --lenient --json 1.5 gwei

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weiunits_core::{Denomination, DenominationSelector, UnitConverter};
use weiunits_shared::{ConverterConfig, ParseMode};

/// Convert amounts between wei and ether denominations.
#[derive(Debug, Parser)]
#[command(name = "weiconv", version)]
struct Cli {
    /// Amount as base-10 decimal text.
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Source denomination: a name such as `gwei`, or its offset above wei such as `9`.
    unit: String,

    /// Target denomination.
    #[arg(long, value_enum, default_value_t = Target::Ether)]
    to: Target,

    /// Treat unparseable amounts as zero instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Print the result as a JSON object.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    Wei,
    Ether,
}

fn parse_selector(unit: &str) -> anyhow::Result<DenominationSelector> {
    if let Ok(offset) = unit.parse::<i64>() {
        return Ok(DenominationSelector::Offset(offset));
    }
    let denomination: Denomination = unit.parse()?;
    Ok(DenominationSelector::Named(denomination))
}

fn run(cli: &Cli, config: &ConverterConfig) -> anyhow::Result<String> {
    let mode = if cli.lenient {
        ParseMode::Lenient
    } else {
        config.parse_mode
    };
    let converter = UnitConverter::new(mode);
    let selector = parse_selector(&cli.unit)?;

    let value = match cli.to {
        Target::Wei => converter.to_base_unit(cli.amount.as_str(), selector)?.to_string(),
        Target::Ether => converter
            .to_whole_unit(cli.amount.as_str(), selector)?
            .to_string(),
    };

    if !cli.json {
        return Ok(value);
    }

    let from = match selector {
        DenominationSelector::Named(denomination) => denomination,
        DenominationSelector::Offset(offset) => converter.resolve(offset)?,
    };
    let to = match cli.to {
        Target::Wei => Denomination::Wei,
        Target::Ether => Denomination::Ether,
    };
    let body = serde_json::json!({
        "amount": cli.amount,
        "from": from,
        "to": to,
        "value": value,
    });
    Ok(body.to_string())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConverterConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output = run(&cli, &config)?;
    info!(amount = %cli.amount, unit = %cli.unit, to = ?cli.to, "Conversion complete");
    println!("{output}");

    Ok(())
}
