//! shelfsort: sort and page the sample catalog from the command line.
//!
//! Examples:
//! - `shelfsort --list`: print the sorters the active configuration allows
//! - `shelfsort --sorter "Name (descending)" --page 1 --page-size 2`
//! - `SHELFSORT_CONFIG=sorters.json shelfsort`: apply a configuration file

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use shelfsort_core::ProductId;
use shelfsort_infra::config::load_from_file;
use shelfsort_infra::read_model::InMemoryProductRepository;
use shelfsort_products::{parse_date, Product, ProductRepository};
use shelfsort_sorting::{
    InMemorySorterRegistry, PaginationOptions, ProductSorter, SorterConfig,
};

#[derive(Parser, Debug)]
#[command(name = "shelfsort", about = "Sort and paginate the sample product catalog")]
struct Cli {
    /// JSON sorter configuration (disabled sorters, default page size).
    #[arg(long, env = "SHELFSORT_CONFIG")]
    config: Option<PathBuf>,

    /// Registered sorter name.
    #[arg(long, default_value = "Price (ascending)")]
    sorter: String,

    /// Page number (values below 1 are treated as 1).
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Items per page. Defaults to the configured page size.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    page_size: i64,

    /// List available sorters and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
}

/// (id, name, price, created, sales, views)
const SAMPLE_CATALOG: &[(i64, &str, f64, &str, u64, u64)] = &[
    (1, "Alabaster Table", 12.99, "2019-01-04", 32, 730),
    (2, "Zebra Table", 44.49, "2012-01-04", 301, 3279),
    (3, "Coffee Table", 10.00, "2014-05-28", 1048, 20123),
];

fn sample_products() -> Result<Vec<Product>> {
    SAMPLE_CATALOG
        .iter()
        .map(|&(id, name, price, created, sales, views)| {
            let created = parse_date(created).with_context(|| format!("sample product {id}"))?;
            Product::new(ProductId::new(id), name, price, created, sales, views)
                .with_context(|| format!("sample product {id}"))
        })
        .collect()
}

fn load_config(path: Option<PathBuf>) -> Result<SorterConfig> {
    match path {
        Some(path) => load_from_file(&path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => {
            tracing::info!("no configuration file given; using defaults");
            Ok(SorterConfig::default())
        }
    }
}

fn main() -> Result<()> {
    shelfsort_observability::init();
    let cli = Cli::parse();

    let repo = InMemoryProductRepository::new();
    repo.save(&sample_products()?)?;

    let sorter = ProductSorter::new(InMemorySorterRegistry::with_defaults());
    sorter.set_config(Some(Arc::new(load_config(cli.config)?)));

    let mut available = sorter.available_sorters();
    available.sort();

    if cli.list {
        println!("Available sorters:");
        for name in &available {
            println!("- {name}");
        }
        return Ok(());
    }

    let products = repo.get_all()?;
    let page = sorter
        .sort_and_paginate(&products, &cli.sorter, PaginationOptions::new(cli.page, cli.page_size))
        .with_context(|| format!("available sorters: {}", available.join(", ")))?;

    println!(
        "Products sorted by {} (page {}/{}, {} per page, {} total):",
        cli.sorter,
        page.page,
        page.total_pages.max(1),
        page.page_size,
        page.total_items
    );
    for product in &page.items {
        println!("{product}");
    }
    if page.has_prev {
        println!("<< previous page: --page {}", page.page - 1);
    }
    if page.has_next {
        println!(">> next page: --page {}", page.page + 1);
    }

    Ok(())
}
