use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guide_catalog::{
    application::{CatalogService, CategorySummary},
    domain::{DomainError, Query, Resource, SubmissionForm},
    infrastructure::{
        adapters::{memory::InMemoryCatalog, seed},
        cli::{summary_line, Cli, Commands},
        config::Settings,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "guide_catalog=debug,info"
    } else {
        "guide_catalog=info,warn,error"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env().context("Invalid configuration")?;

    let seed = match &settings.seed_file {
        Some(path) => seed::load_file(path)
            .with_context(|| format!("Failed to load seed file {}", path.display()))?,
        None => seed::builtin(),
    };

    let store = Arc::new(InMemoryCatalog::initialize(seed));
    let service = CatalogService::new(store, settings.submit_delay);

    match cli.command {
        Commands::List { limit } => {
            let resources = service.list().await;
            let shown = limit.unwrap_or(resources.len());
            if cli.json {
                print_json(&resources.into_iter().take(shown).collect::<Vec<_>>())?;
            } else {
                println!("{} resources:", resources.len());
                for resource in resources.iter().take(shown) {
                    print_resource(resource);
                }
            }
        }

        Commands::Search { term, category, limit } => {
            let query = Query::new(term.unwrap_or_default(), category);
            let resources = service.browse(&query).await;
            let shown = limit.unwrap_or(resources.len());

            if cli.json {
                print_json(&resources.into_iter().take(shown).collect::<Vec<_>>())?;
            } else {
                println!("{}", summary_line(&query, resources.len()));
                if resources.is_empty() {
                    println!("No resources found. Try adjusting your search terms or category filter.");
                }
                for resource in resources.iter().take(shown) {
                    print_resource(resource);
                }
            }
        }

        Commands::Show { id } => match service.find(&id).await {
            Ok(resource) => {
                if cli.json {
                    print_json(&resource)?;
                } else {
                    print_resource(&resource);
                }
            }
            Err(e) => {
                eprintln!("Error fetching resource: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Add {
            title,
            description,
            category,
            url,
            tags,
        } => {
            let form = SubmissionForm {
                title,
                description,
                category,
                url,
                tags,
            };

            if !settings.submit_delay.is_zero() && !cli.json {
                println!("Adding resource...");
            }

            match service.submit(&form).await {
                Ok(resource) => {
                    if cli.json {
                        print_json(&resource)?;
                    } else {
                        println!("Resource added successfully!");
                        print_resource(&resource);
                        println!("\nCatalog now holds {} resources", service.list().await.len());
                    }
                }
                Err(DomainError::Validation(errors)) => {
                    eprintln!("Resource was not added:");
                    for (field, error) in errors.iter() {
                        eprintln!("  {}: {}", field, error);
                    }
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error adding resource: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Categories => {
            let summaries = service.category_summaries().await;
            if cli.json {
                print_json(&summaries)?;
            } else {
                println!("Categories:");
                for CategorySummary { category, description, count } in summaries {
                    println!("  {:<18} {:>3}  {}", category.as_str(), count, description);
                }
            }
        }
    }

    Ok(())
}

fn print_resource(resource: &Resource) {
    println!("\n--- {} ---", resource.title);
    println!("ID: {}", resource.id);
    println!("Category: {}", resource.category);
    println!("URL: {}", resource.url);
    println!("Added: {}", resource.date_added);
    println!("Tags: {}", resource.tags.join(", "));
    println!(
        "Description: {}",
        if resource.description.chars().count() > 150 {
            let truncated: String = resource.description.chars().take(150).collect();
            format!("{}...", truncated)
        } else {
            resource.description.clone()
        }
    );
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
