use anyhow::{Context, Result};
use clap::Parser;
use herd::cli::{Backend, Cli, Commands};
use herd::output::{format_reports, format_unicorns};
use herd::storage::{InMemoryRepository, SqliteRepository};
use herd::{scenario, seed};
use herd_core::storage::CrudRepository;
use herd_core::unicorn::Unicorn;
use herd_pool::ConnectionPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herd=debug,herd_pool=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (mut repo, pool) = open_repository(&cli)?;

    match cli.command.unwrap_or_default() {
        Commands::Demo => {
            let reports = scenario::run(&mut *repo);
            println!("{}", format_reports(&reports, cli.output));
        }
        Commands::List => {
            let unicorns = repo.get_all().context("Failed to list unicorns")?;
            println!("{}", format_unicorns(&unicorns, cli.output));
        }
    }

    if let Some(pool) = pool {
        tracing::debug!(stats = ?pool.stats(), "Closing pool");
        pool.close();
    }

    Ok(())
}

/// Build the selected backend, seeding it first when asked to.
///
/// The pool is returned alongside the SQLite backend so it can be closed on exit.
fn open_repository(
    cli: &Cli,
) -> Result<(Box<dyn CrudRepository<Unicorn>>, Option<ConnectionPool>)> {
    match cli.backend {
        Backend::Memory => {
            let repo = if cli.seed {
                InMemoryRepository::with_entities(seed::populate_memory())
            } else {
                InMemoryRepository::new()
            };
            tracing::info!(entities = repo.len(), "Using in-memory backend");
            Ok((Box::new(repo), None))
        }
        Backend::Sqlite => {
            let pool = ConnectionPool::from_env(&cli.properties).with_context(|| {
                format!(
                    "Failed to configure the connection pool (properties: {})",
                    cli.properties.display()
                )
            })?;
            let repo = SqliteRepository::new(pool.clone())
                .context("Failed to initialize the SQLite backend")?;
            if cli.seed {
                seed::populate_database(&pool).context("Failed to seed the database")?;
            }
            tracing::info!(database = %pool.config().connection_string(), "Using SQLite backend");
            Ok((Box::new(repo), Some(pool)))
        }
    }
}
