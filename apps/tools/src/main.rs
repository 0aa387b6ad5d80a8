use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::domain::{format_usd, Product};
use storefront_core::{demo_products, CatalogSource, JsonFileCatalog};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a catalog file for structural problems.
    Validate { path: PathBuf },
    /// Print every product in a catalog file.
    List { path: PathBuf },
    /// Write the bundled demo catalog to a file.
    SeedDemo { path: PathBuf },
}

fn catalog_problems(products: &[Product]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            problems.push(format!("duplicate product id {}", product.id.0));
        }
        if product.name.trim().is_empty() {
            problems.push(format!("product {} has an empty name", product.id.0));
        }
        if product.category.trim().is_empty() {
            problems.push(format!("product {} has an empty category", product.id.0));
        }
        if product.price_cents <= 0 {
            problems.push(format!("product {} has a non-positive price", product.id.0));
        }
        if product.benefits.is_empty() {
            problems.push(format!("product {} lists no benefits", product.id.0));
        }
    }
    problems
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { path } => {
            let products = JsonFileCatalog::new(&path).load().await?;
            let problems = catalog_problems(&products);
            if problems.is_empty() {
                println!("catalog ok: {} products in {}", products.len(), path.display());
            } else {
                for problem in &problems {
                    println!("problem: {problem}");
                }
                anyhow::bail!("{} problem(s) in {}", problems.len(), path.display());
            }
        }
        Command::List { path } => {
            let products = JsonFileCatalog::new(&path).load().await?;
            for product in &products {
                println!(
                    "id={} name={:?} category={} price={}",
                    product.id.0,
                    product.name,
                    product.category,
                    format_usd(product.price_cents)
                );
            }
        }
        Command::SeedDemo { path } => {
            let products = demo_products();
            let serialized = serde_json::to_string_pretty(&products)?;
            tokio::fs::write(&path, serialized).await?;
            println!("wrote {} demo products to {}", products.len(), path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_passes_validation() {
        assert!(catalog_problems(&demo_products()).is_empty());
    }

    #[test]
    fn flags_duplicates_and_bad_prices() {
        let mut products = demo_products();
        products[1].id = products[0].id;
        products[2].price_cents = 0;

        let problems = catalog_problems(&products);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("duplicate product id"));
        assert!(problems[1].contains("non-positive price"));
    }
}
