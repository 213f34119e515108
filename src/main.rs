use clap::Parser;
use log::LevelFilter;
use std::io::Write;
use std::str::FromStr;
use tagcombo::application::{
    init::init, CompositionService, ConfigService, ListTagsService, SearchOptions, SearchService,
};
use tagcombo::cli::{
    format_composition_list, format_composition_view, format_page_list, format_page_list_json,
    format_tag_list, Cli, Commands, ComposeAction,
};
use tagcombo::domain::ResolveStrategy;
use tagcombo::error::TagcomboError;
use tagcombo::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// RUST_LOG wins when set; otherwise warnings, raised by each -v
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TagcomboError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Search {
            query,
            scope,
            strategy,
            json,
        } => {
            let strategy = strategy
                .as_deref()
                .map(ResolveStrategy::from_str)
                .transpose()
                .map_err(TagcomboError::Config)?;

            let repo = FileSystemRepository::discover()?;
            let pages = SearchService::new(repo).execute(SearchOptions {
                query: query.join(" "),
                scope,
                strategy,
            })?;

            if json {
                println!("{}", format_page_list_json(&pages));
            } else {
                print!("{}", format_page_list(&pages));
                if pages.is_empty() {
                    println!();
                }
            }
            Ok(())
        }
        Commands::Compose { action } => {
            let repo = FileSystemRepository::discover()?;
            let service = CompositionService::new(repo);

            match action {
                ComposeAction::Get { tag } => {
                    println!("{}", service.get(&tag));
                }
                ComposeAction::Set { tag, components } => {
                    let text = service.set(&tag, &components)?;
                    println!("{} = {}", tag, text);
                }
                ComposeAction::Remove { tag } => {
                    if service.remove(&tag)? {
                        println!("Removed composition of {}", tag);
                    } else {
                        println!("No composition stored for {}", tag);
                    }
                }
                ComposeAction::Show { tag } => {
                    print!("{}", format_composition_view(&service.show(&tag)?));
                }
                ComposeAction::List => {
                    let compositions = service.list();
                    print!("{}", format_composition_list(&compositions));
                    if compositions.is_empty() {
                        println!();
                    }
                }
            }
            Ok(())
        }
        Commands::Tags => {
            let repo = FileSystemRepository::discover()?;
            let tags = ListTagsService::new(repo).execute()?;
            print!("{}", format_tag_list(&tags));
            if tags.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("extensions = {}", config.extensions.join(","));
                println!("hidden_namespaces = {}", config.hidden_namespaces.join(","));
                println!("strategy = {}", config.strategy);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: tagcombo config [--list | <key> [<value>]]");
                println!("Valid keys: extensions, hidden_namespaces, strategy, created");
                Ok(())
            }
        }
    }
}
