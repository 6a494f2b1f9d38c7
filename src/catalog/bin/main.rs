use std::process::ExitCode;

use bookstore::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use bookstore::catalog::factory;
use bookstore::core::command::{Command, CommandError};
use bookstore::core::domain::Configuration;
use bookstore::utils::logging::setup_tracing;
use clap::Parser;
use tracing::{error, info};

/// Search the book catalog by ISBN or by title/author.
#[derive(Debug, Parser)]
#[command(name = "search", version)]
struct Args {
    /// Query words; a query containing "ISBN" is looked up by isbn
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// JSON catalog file to search instead of the built-in sample
    #[arg(long, env = "BOOKSTORE_CATALOG")]
    catalog: Option<String>,

    /// Branch name reported in logs
    #[arg(long, env = "BOOKSTORE_BRANCH", default_value = "dev")]
    branch: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn configuration(&self) -> Configuration {
        let config = Configuration::new(self.branch.as_str());
        match &self.catalog {
            Some(path) => config.with_catalog_path(path.as_str()),
            None => config,
        }
    }
}

fn run(args: &Args) -> Result<String, CommandError> {
    let config = args.configuration();
    let svc = factory::create_catalog_service(&config, config.store())?;
    let req = SearchBooksCommandRequest::new(args.query.join(" ").as_str());
    let res = SearchBooksCommand::new(svc).execute(req)?;
    info!(query = res.query.as_str(), kind = %res.kind, found = res.books.len(), "search completed");
    Ok(serde_json::to_string_pretty(&res)?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(args.json, args.verbose);

    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(?err, "search failed");
            ExitCode::FAILURE
        }
    }
}
