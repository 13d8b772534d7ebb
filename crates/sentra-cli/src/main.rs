//! SentraIntel Catalog CLI
//!
//! Thin wrapper around sentra-catalog for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # List all product categories
//! sentra categories
//!
//! # List products in one category
//! sentra products sentra-shield
//!
//! # Show the full detail block for a product
//! sentra show sentra-geolock
//!
//! # Search across the whole catalog
//! sentra search perimeter
//!
//! # Search one category with facets, as JSON
//! sentra search perimeter --category sentra-shield --type Perimeter --json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use sentra_catalog::{Catalog, Product, ProductCategory, ProductFilter};

/// SentraIntel - Product Catalog Browser
#[derive(Parser)]
#[command(name = "sentra")]
#[command(version = "0.1.0")]
#[command(about = "SentraIntel - Product Catalog Browser")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all product categories
    Categories,

    /// List products in a category
    Products {
        /// Category slug (e.g. sentra-route)
        category_slug: String,
    },

    /// Show the full detail block for a product
    Show {
        /// Product slug (e.g. sentra-geolock)
        product_slug: String,
    },

    /// Search products by free text and facets
    Search {
        /// Case-insensitive substring matched against name, description, and features
        query: String,

        /// Restrict to products carrying one of these badge texts (repeatable)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Restrict to products compatible with one of these systems (repeatable)
        #[arg(long = "compatible-with")]
        compatible_with: Vec<String>,

        /// Search a single category instead of the whole catalog
        #[arg(short, long)]
        category: Option<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let catalog = Catalog::get();

    match cli.command {
        Commands::Categories => {
            println!("SentraIntel product lines:");
            println!();
            for category in catalog.categories() {
                println!("{} ({})", category.name, category.slug());
                println!("  {}", category.description);
                if let Some(tagline) = &category.tagline {
                    println!("  Tagline: {}", tagline);
                }
                println!("  Products: {}", category.products.len());
                println!();
            }
        }

        Commands::Products { category_slug } => {
            let category = catalog.require_category(&category_slug)?;
            println!("{} - {}", category.name, category.description);
            println!();
            for product in &category.products {
                print_product_line(product);
            }
        }

        Commands::Show { product_slug } => {
            let (category, product) = catalog.require_product(&product_slug)?;
            print_product_detail(category, product);
        }

        Commands::Search {
            query,
            types,
            compatible_with,
            category,
            json,
        } => {
            let filter = ProductFilter {
                query,
                types,
                compatibility: compatible_with,
            };

            let scope: Vec<&ProductCategory> = match category {
                Some(slug) => vec![catalog.require_category(&slug)?],
                None => catalog.categories().iter().collect(),
            };

            let mut hits: Vec<(&ProductCategory, &Product)> = Vec::new();
            for category in scope {
                for index in filter.apply(&category.products) {
                    hits.push((category, &category.products[index]));
                }
            }
            tracing::debug!(hits = hits.len(), "search complete");

            if json {
                let results: Vec<serde_json::Value> = hits
                    .iter()
                    .map(|(category, product)| {
                        serde_json::json!({
                            "category": category.slug(),
                            "slug": product.slug(),
                            "product": product,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if hits.is_empty() {
                println!("No products matched.");
            } else {
                println!("{} match(es):", hits.len());
                println!();
                for (category, product) in hits {
                    println!("[{}]", category.name);
                    print_product_line(product);
                }
            }
        }
    }

    Ok(())
}

fn print_product_line(product: &Product) {
    match &product.badge {
        Some(badge) => println!("{} [{}]", product.name, badge.text),
        None => println!("{}", product.name),
    }
    println!("  Slug: {}", product.slug());
    println!("  {}", product.description);
    println!();
}

fn print_product_detail(category: &ProductCategory, product: &Product) {
    println!("{}", product.name);
    println!("Category: {} ({})", category.name, category.slug());
    if let Some(badge) = &product.badge {
        println!("Badge: {}", badge.text);
    }
    println!();
    println!("{}", product.description);
    println!();

    println!("Features:");
    for feature in &product.features {
        println!("  - {}", feature);
    }

    let Some(details) = &product.details else {
        return;
    };

    if let Some(overview) = &details.overview {
        println!();
        println!("Overview:");
        println!("  {}", overview);
    }

    if !details.specifications.is_empty() {
        println!();
        println!("Specifications:");
        for (label, value) in &details.specifications {
            println!("  {}: {}", label, value);
        }
    }

    if !details.use_cases.is_empty() {
        println!();
        println!("Use cases:");
        for use_case in &details.use_cases {
            println!("  - {}", use_case);
        }
    }

    if !details.benefits.is_empty() {
        println!();
        println!("Benefits:");
        for benefit in &details.benefits {
            println!("  - {}", benefit);
        }
    }

    if !details.compatible_with.is_empty() {
        println!();
        println!("Compatible with:");
        for system in &details.compatible_with {
            println!("  - {}", system);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
