use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use shared::domain::format_usd;
use storefront_core::{
    build_cod_draft, AddressForm, BundledCatalog, Cart, CatalogSource, JsonFileCatalog,
    LocalOrderGateway, OrderGateway, ProductGrid, ShowcaseController, SortKey,
    TRANSITION_DURATION,
};
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long, default_value_t = 3)]
    showcase_steps: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let products = match &args.catalog {
        Some(path) => JsonFileCatalog::new(path).load().await?,
        None => BundledCatalog.load().await?,
    };
    info!("catalog ready with {} products", products.len());

    let mut showcase = ShowcaseController::new(products.clone())?;
    println!("Showcase opens on: {}", showcase.current_item().name);
    for _ in 0..args.showcase_steps {
        if showcase.request_next(Instant::now()) {
            tokio::time::sleep(TRANSITION_DURATION).await;
            showcase.poll(Instant::now());
        }
        println!("Showcase advanced to: {}", showcase.current_item().name);
    }

    let mut grid = ProductGrid::new(products.clone());
    grid.set_sort(SortKey::Popularity);
    println!("{}", grid.summary_line());
    for product in grid.visible().iter().take(3) {
        println!("  {} - {}", product.name, format_usd(product.price_cents));
    }

    let mut cart = Cart::default();
    for product in products.iter().take(2) {
        cart.add(product);
    }
    if let Some(first) = products.first() {
        cart.set_quantity(first.id, 2);
    }
    println!(
        "Cart holds {} items, subtotal {}",
        cart.total_quantity(),
        format_usd(cart.subtotal_cents())
    );

    let form = AddressForm {
        email: "demo@verdantharvest.example".to_string(),
        phone: "+92300 1234567".to_string(),
        name: "Demo Shopper".to_string(),
        address: "12 Orchard Lane".to_string(),
        city: "Lahore".to_string(),
        postal_code: "54000".to_string(),
        state: "Punjab".to_string(),
        country: "Pakistan".to_string(),
    };
    let address = form
        .validate()
        .map_err(|errors| anyhow::anyhow!("demo address failed {} field checks", errors.len()))?;
    cart.set_address(address);

    let draft = build_cod_draft(&cart).map_err(|blocked| anyhow::anyhow!(blocked.toast()))?;
    let receipt = LocalOrderGateway::default().place_cod_order(&draft).await?;
    println!(
        "Order placed: order_id={} total={} placed_at={}",
        receipt.order_id.0,
        format_usd(receipt.total_cents),
        receipt.placed_at
    );

    Ok(())
}
