//! Demo 2: Account Overview
//!
//! Showcases: Wallet-key authentication, balances, open orders, unsettled funds
//!
//! Run: DEXLAB_WALLET_KEY=... cargo run --bin account_overview [COIN] [QUOTE]
//!
//! Set DEXLAB_PLACE_DEMO_ORDER=1 to also place (and cancel) a far-from-market
//! limit order.

use colored::*;
use dexlab_rest::{Credentials, DexLabClient, OrderRequest, OrderSide, RestError};
use rust_decimal_macros::dec;
use serde_json::Value;

fn print_section(title: &str, result: Result<Value, RestError>) {
    println!("{}", title.white().bold());
    match result {
        Ok(Value::Array(items)) if items.is_empty() => println!("  {}", "(none)".dimmed()),
        Ok(Value::Array(items)) => {
            for item in items {
                println!("  {}", item);
            }
        }
        Ok(other) => println!("  {}", other),
        Err(RestError::Api { message, .. }) => println!("  {} {}", "API error:".red(), message),
        Err(e) => println!("  {} {}", "Error:".red(), e),
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  DEXLAB ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "  DexLab SDK Demo - Private REST Endpoints".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set DEXLAB_WALLET_KEY to run this demo.");
            return Ok(());
        }
    };

    let mut args = std::env::args().skip(1);
    let coin = args.next().unwrap_or_else(|| "SRM".to_string());
    let quote = args.next().unwrap_or_else(|| "USDT".to_string());

    let client = DexLabClient::with_credentials(credentials)?;
    println!("{} Authenticated client ready\n", "✓".green());

    print_section("BALANCES", client.get_balances().await);
    print_section(
        &format!("OPEN ORDERS {}/{}", coin, quote),
        client.get_open_orders(&coin, &quote).await,
    );
    print_section(
        &format!("UNSETTLED {}/{}", coin, quote),
        client.account()?.get_unsettled_balance(&coin, &quote).await,
    );

    if std::env::var("DEXLAB_PLACE_DEMO_ORDER").is_ok() {
        let order = OrderRequest::limit(OrderSide::Buy, coin.as_str(), quote.as_str(), dec!(1), dec!(0.0001));
        println!("{} Placing {} order...", "→".yellow(), order.side);

        let placed = client.place_order(&order).await?;
        println!("  {}", placed);

        if let Some(id) = placed.get("orderId").and_then(Value::as_str) {
            let cancelled = client.cancel_order(id).await?;
            println!("{} Cancelled: {}", "✓".green(), cancelled);
        }
    }

    Ok(())
}
