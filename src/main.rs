use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use serde::Serialize;

use gamepulse::cli::{BrowseCommand, Cli, Commands, BROWSE_HELP};
use gamepulse::config::Config;
use gamepulse::domain::{CategoryFilter, Scoreboard, NO_SUMMARY};
use gamepulse::errors::{GamePulseError, GamePulseResult};
use gamepulse::logging::init_logging;
use gamepulse::services::{Dashboard, DashboardService, MovieService, Page, ScoreService};
use gamepulse::sources::tmdb::TmdbSource;
use gamepulse::sources::SourceRegistry;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let quiet = matches!(cli.command, Commands::Feed { json: true, .. });
    init_logging(cli.verbose, quiet);

    let config = Config::from_env().context("could not load configuration")?;
    let source_registry = SourceRegistry::from_config(&config);

    match cli.command {
        Commands::Feed {
            category,
            page,
            json,
        } => cmd_feed(&config, &source_registry, category, page, json).await?,
        Commands::Browse => cmd_browse(&config, &source_registry).await?,
        Commands::Scores => cmd_scores(&config, &source_registry).await,
        Commands::Movies {
            details,
            rotate,
            list,
        } => cmd_movies(&config, details, rotate, &list).await?,
        Commands::Categories => cmd_categories(&config),
    }

    Ok(())
}

/// Load the dashboard in the background. `None` when interrupted with Ctrl-C,
/// in which case the in-flight fetches are aborted.
async fn load_dashboard(
    config: &Config,
    source_registry: &SourceRegistry,
) -> Option<Dashboard> {
    let service = Arc::new(DashboardService::from_registry(
        source_registry,
        config.categories.clone(),
        config.layout(),
    ));

    let pending = service.spawn_load();
    tokio::select! {
        dashboard = pending.settle() => dashboard,
        _ = tokio::signal::ctrl_c() => {
            println!("Cancelled.");
            None
        }
    }
}

/// Map a typed filter onto the configured spelling of its category
fn resolve_filter(config: &Config, filter: CategoryFilter) -> GamePulseResult<CategoryFilter> {
    match filter {
        CategoryFilter::All => Ok(CategoryFilter::All),
        CategoryFilter::Only(category) => config
            .categories
            .iter()
            .find(|tracked| **tracked == category)
            .map(|tracked| CategoryFilter::Only(tracked.clone()))
            .ok_or_else(|| GamePulseError::UnknownCategory(category.to_string())),
    }
}

#[derive(Serialize)]
struct FeedOutput<'a> {
    degraded: bool,
    advisory: Option<&'a str>,
    #[serde(flatten)]
    page: Page<'a>,
    scoreboard: &'a Scoreboard,
}

async fn cmd_feed(
    config: &Config,
    source_registry: &SourceRegistry,
    filter: CategoryFilter,
    page: usize,
    json: bool,
) -> GamePulseResult<()> {
    let filter = resolve_filter(config, filter)?;

    let Some(mut dashboard) = load_dashboard(config, source_registry).await else {
        return Ok(());
    };

    dashboard.on_category_changed(filter);
    if !dashboard.on_page_requested(page) {
        return Err(GamePulseError::InvalidInput(format!(
            "Page {} is out of range (1-{})",
            page,
            dashboard.current_page().total_pages
        )));
    }

    if json {
        let output = FeedOutput {
            degraded: dashboard.is_degraded(),
            advisory: dashboard.advisory(),
            page: dashboard.current_page(),
            scoreboard: dashboard.scoreboard(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_advisory(&dashboard);
    print_page(&dashboard.current_page());

    Ok(())
}

fn print_advisory(dashboard: &Dashboard) {
    if let Some(advisory) = dashboard.advisory() {
        println!("Note: {}\n", advisory);
    }
}

fn print_page(page: &Page<'_>) {
    if page.empty {
        println!("No {} news right now.\n", page.category);
    }

    for article in &page.items {
        println!("[{}] {}", article.category, article.title);
        match &article.source {
            Some(source) => println!("  {} | {}", article.timestamp, source),
            None => println!("  {}", article.timestamp),
        }
        if article.summary != NO_SUMMARY {
            println!("  {}", article.summary);
        }
        println!();
    }

    println!(
        "Page {} of {} ({})",
        page.current_page, page.total_pages, page.category
    );
}

fn print_scoreboard(scoreboard: &Scoreboard) {
    if scoreboard.is_empty() {
        return;
    }

    let label = if scoreboard.simulated { " (simulated)" } else { "" };

    if !scoreboard.live.is_empty() {
        println!("Live{}:", label);
        for live in &scoreboard.live {
            println!("  [{}] {}", live.category, live);
        }
        println!();
    }

    if !scoreboard.fixtures.is_empty() {
        println!("Upcoming{}:", label);
        for fixture in &scoreboard.fixtures {
            println!("  {}", fixture);
        }
        println!();
    }
}

async fn cmd_browse(config: &Config, source_registry: &SourceRegistry) -> GamePulseResult<()> {
    let Some(mut dashboard) = load_dashboard(config, source_registry).await else {
        return Ok(());
    };

    print_advisory(&dashboard);
    print_scoreboard(dashboard.scoreboard());
    print_page(&dashboard.current_page());
    println!("\n{}", BROWSE_HELP);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match input.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let current = dashboard.state().current_page;
        let requested = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                println!("{}", BROWSE_HELP);
                continue;
            }
            BrowseCommand::Category(filter) => {
                match resolve_filter(config, filter) {
                    Ok(filter) => print_page(&dashboard.on_category_changed(filter)),
                    Err(e) => println!("{}", e),
                }
                continue;
            }
            BrowseCommand::Next => current + 1,
            BrowseCommand::Prev => current.saturating_sub(1),
            BrowseCommand::Page(page) => page,
        };

        if dashboard.on_page_requested(requested) {
            print_page(&dashboard.current_page());
        } else {
            println!(
                "No page {}. Pages run from 1 to {}.",
                requested,
                dashboard.current_page().total_pages
            );
        }
    }

    Ok(())
}

async fn cmd_scores(config: &Config, source_registry: &SourceRegistry) {
    let service = ScoreService::new(
        source_registry.scores(),
        source_registry.simulated().clone(),
    );
    let scoreboard = service.load(&config.categories, Utc::now()).await;

    if scoreboard.is_empty() {
        println!("No matches for the tracked categories.");
        return;
    }

    print_scoreboard(&scoreboard);
}

async fn cmd_movies(
    config: &Config,
    details: Option<u64>,
    rotate: i64,
    list: &[u64],
) -> GamePulseResult<()> {
    let service = MovieService::new(TmdbSource::from_config(config)?);
    let mut shelf = service.shelf().await?;

    for movie_id in list {
        shelf.toggle_listed(*movie_id)?;
    }
    shelf.rotate(rotate);

    match details {
        Some(movie_id) => {
            let credits = service.details(movie_id).await?;

            if let Some(movie) = shelf.find(movie_id) {
                println!("{}\n", movie.title);
                if !movie.overview.is_empty() {
                    println!("{}\n", movie.overview);
                }
            }

            println!("Director: {}", credits.director());
            println!("Producers: {}", credits.producers());
            println!("\nCast:");
            for member in credits.top_cast() {
                if member.character.is_empty() {
                    println!("  {}", member.name);
                } else {
                    println!("  {} as {}", member.name, member.character);
                }
            }
        }
        None => {
            if shelf.movies().is_empty() {
                println!("No trending movies right now.");
                return Ok(());
            }

            let featured = shelf.featured().map(|m| m.id);
            println!("Trending this week:\n");
            for movie in shelf.movies() {
                let marker = if Some(movie.id) == featured { "*" } else { " " };
                let listed = if shelf.is_listed(movie.id) { " [My List]" } else { "" };
                println!(
                    "{} {} ({}) - {}% Match [id {}]{}",
                    marker,
                    movie.title,
                    movie.release_year().unwrap_or("TBA"),
                    movie.match_percent(),
                    movie.id,
                    listed
                );
            }
        }
    }

    Ok(())
}

fn cmd_categories(config: &Config) {
    println!("Tracked categories:\n");
    println!("  {}", CategoryFilter::ALL);
    for category in &config.categories {
        println!("  {}", category);
    }
}
