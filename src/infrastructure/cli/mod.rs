use clap::{Parser, Subcommand};

use crate::domain::{CategoryFilter, Query};

#[derive(Parser)]
#[command(name = "guide-catalog")]
#[command(about = "Browse, search and submit curated study guides")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print records as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every resource, newest first
    List {
        /// Limit number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Search resources by text and category
    Search {
        /// Text matched against titles, descriptions and tags
        term: Option<String>,

        /// Category to restrict to ("All" for every category)
        #[arg(short, long, default_value = "All", value_parser = parse_category_filter)]
        category: CategoryFilter,

        /// Limit number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single resource by ID
    Show {
        /// Resource ID
        id: String,
    },

    /// Submit a new resource
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// One of: DSA, Programming, IoT, AI/ML, Aptitude, Semester Notes, Competitive Exams, More
        #[arg(long)]
        category: String,

        #[arg(long)]
        url: String,

        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },

    /// List categories with their resource counts
    Categories,
}

pub fn parse_category_filter(value: &str) -> Result<CategoryFilter, String> {
    value.parse().map_err(|e| format!("{}", e))
}

/// "Showing N resources in X for "term"", as shown above a result list.
pub fn summary_line(query: &Query, count: usize) -> String {
    let mut line = format!(
        "Showing {} {}",
        count,
        if count == 1 { "resource" } else { "resources" }
    );
    if let CategoryFilter::Only(category) = query.category {
        line.push_str(&format!(" in {}", category));
    }
    if !query.term.is_empty() {
        line.push_str(&format!(" for \"{}\"", query.term));
    }
    line
}
