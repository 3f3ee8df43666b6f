//! Demo 1: Market Scanner
//!
//! Showcases: Public market data, symbol vs address lookups, list scanning
//!
//! Run: cargo run --bin market_scan [PAIR ...]

use colored::*;
use dexlab_rest::{DexLabClient, RestError};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

const DEFAULT_PAIRS: [&str; 3] = ["SRM/USDT", "RAY/USDT", "SOL/USDC"];

fn number(value: &Value, key: &str) -> Option<Decimal> {
    match value.get(key)? {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s).ok(),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  DEXLAB MARKET SCANNER".cyan().bold());
    println!("{}", "  DexLab SDK Demo - Public REST Endpoints".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let pairs: Vec<String> = if args.is_empty() {
        DEFAULT_PAIRS.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    let client = DexLabClient::new()?;

    let markets = client.get_markets().await?;
    let count = markets.as_array().map(Vec::len).unwrap_or_default();
    println!("{} {} markets listed\n", "✓".green(), count);

    println!(
        "  {:<12} {:>14} {:>16}  {}",
        "PAIR".white().bold(),
        "PRICE".white().bold(),
        "VOLUME".white().bold(),
        "ADDRESS".white().bold()
    );
    println!("  {}", "─".repeat(58));

    for pair in &pairs {
        let market = match client.get_market(pair).await {
            Ok(market) => market,
            Err(RestError::NotFound { market }) => {
                println!("  {:<12} {}", market.yellow(), "not listed".dimmed());
                continue;
            }
            Err(e) => {
                println!("  {:<12} {}", pair.red(), e);
                continue;
            }
        };

        let price = client
            .get_price(pair)
            .await
            .ok()
            .and_then(|p| number(&p, "price"))
            .map(|p| format!("{:.4}", p))
            .unwrap_or_else(|| "-".to_string());

        let volume = client
            .get_volume(pair)
            .await
            .ok()
            .and_then(|v| number(&v, "volume"))
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());

        let address = market
            .get("address")
            .and_then(Value::as_str)
            .unwrap_or("-");

        println!(
            "  {:<12} {:>14} {:>16}  {}",
            pair.to_uppercase().cyan(),
            price.green(),
            volume,
            address.dimmed()
        );
    }

    println!();
    match client.market().get_total_volume().await {
        Ok(total) => println!("{} Total traded value: {}", "✓".green(), total),
        Err(e) => println!("{} Total volume unavailable: {}", "✗".red(), e),
    }

    Ok(())
}
