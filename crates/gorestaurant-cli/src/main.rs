use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use gorestaurant_api::GoRestaurantClient;
use gorestaurant_core::{
    Backend, Config, DetailController, OrderListController, PriceFormatter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gorestaurant")]
#[command(version, about = "Browse, favorite and order food from a GoRestaurant backend", long_about = None)]
struct Cli {
    /// Backend URL, overrides the config file
    #[arg(long, env = "GORESTAURANT_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show a food, its extras and the total for a selection
    Food {
        id: u64,
        #[command(flatten)]
        selection: Selection,
    },
    /// Add a food to favorites
    Favorite {
        id: u64,
        /// Remove it instead
        #[arg(long)]
        remove: bool,
    },
    /// Place an order
    Order {
        id: u64,
        #[command(flatten)]
        selection: Selection,
    },
    /// List past orders
    Orders,
}

#[derive(clap::Args)]
struct Selection {
    /// How many of the food itself
    #[arg(short, long, default_value_t = 1)]
    quantity: u32,

    /// Extras as ID=QTY, repeatable
    #[arg(short, long = "extra", value_parser = parse_extra)]
    extras: Vec<(u64, u32)>,
}

fn parse_extra(raw: &str) -> Result<(u64, u32), String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{}'", raw))?;
    let id = id.trim().parse().map_err(|e| format!("bad extra id: {}", e))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|e| format!("bad extra quantity: {}", e))?;
    Ok((id, quantity))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gorestaurant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().context("Failed to load config")?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }

    let client = GoRestaurantClient::with_timeout(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )?;
    tracing::debug!("Using backend at {}", client.base_url());
    let backend: Arc<dyn Backend> = Arc::new(client);
    let formatter = PriceFormatter::new(&config.currency)?;

    match cli.command {
        Some(Commands::Food { id, selection }) => {
            let mut detail = DetailController::load(backend, formatter, id).await?;
            apply_selection(&mut detail, &selection);
            print_detail(&detail);
        }
        Some(Commands::Favorite { id, remove }) => {
            let mut detail = DetailController::load(backend, formatter, id)
                .await?
                .with_favorite(remove);
            let favorite = detail.toggle_favorite().await?;
            if favorite {
                println!("Added {} to favorites", detail.food().name);
            } else {
                println!("Removed {} from favorites", detail.food().name);
            }
        }
        Some(Commands::Order { id, selection }) => {
            let mut detail = DetailController::load(backend, formatter, id)
                .await?
                .with_id_strategy(config.orders.id_strategy);
            apply_selection(&mut detail, &selection);
            let order = detail.submit_order().await?;
            match order.id {
                Some(order_id) => println!("Order #{} placed: {}", order_id, detail.formatted_total()),
                None => println!("Order placed: {}", detail.formatted_total()),
            }
        }
        Some(Commands::Orders) => {
            let mut list = OrderListController::new(backend, formatter);
            let orders = list.load_orders().await?;
            if orders.is_empty() {
                println!("No orders yet");
            }
            for order in orders {
                println!("#{:<4} {:<30} {:>14}", order.id, order.name, order.formatted_price);
                if !order.description.is_empty() {
                    println!("      {}", order.description);
                }
            }
        }
        None => {
            println!("No command specified. Try --help");
        }
    }

    Ok(())
}

fn apply_selection(detail: &mut DetailController, selection: &Selection) {
    for _ in 1..selection.quantity {
        detail.increment_food();
    }

    for &(extra_id, quantity) in &selection.extras {
        if detail.extra(extra_id).is_none() {
            tracing::warn!("Food {} has no extra {}", detail.food().id, extra_id);
            continue;
        }
        for _ in 0..quantity {
            detail.increment_extra(extra_id);
        }
    }
}

fn print_detail(detail: &DetailController) {
    let food = detail.food();
    println!("{} ({})", food.name, food.formatted_price);
    if !food.description.is_empty() {
        println!("{}", food.description);
    }

    if !detail.extras().is_empty() {
        println!();
        println!("Extras:");
        for extra in detail.extras() {
            println!("  [{}] {:<24} x{}", extra.id, extra.name, extra.quantity);
        }
    }

    println!();
    println!("Quantity: {}", detail.quantity());
    println!("Total:    {}", detail.formatted_total());
}
