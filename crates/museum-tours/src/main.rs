//! museum-tours - Museum thematic tours from the terminal

mod cli;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use museum_tours_core::types::{
    complete_login, logout, probe_session, Credentials, FixtureCatalog, SessionState,
    SessionStore, TourSize,
};
use museum_tours_core::{ApiClient, Config, DataSource, FileSessionStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "museum-tours",
    version,
    about = "Browse the museum's thematic tours",
    long_about = "Browse themes, pick a tour size and print the itinerary, from the\n\
                  museum backend or from the built-in fixture collection.\n\
                  \n\
                  Examples:\n\
                    museum-tours themes                      # List themes\n\
                    museum-tours tour roman-empire Small     # Itinerary, in visiting order\n\
                    museum-tours --fixtures object obj-07    # Offline, from fixtures\n\
                    museum-tours login me@example.org --password secret\n\
                    museum-tours serve --port 3333           # Fixture dev server\n\
                  \n\
                  Web Frontend Workflow:\n\
                    MUSEUM_TOURS_API_URL=http://127.0.0.1:3333/api/v1 trunk build --release\n\
                    museum-tours serve --dist crates/museum-tours-web/dist\n\
                  \n\
                  Environment Variables:\n\
                    MUSEUM_TOURS_API_URL             # Backend base URL\n\
                    MUSEUM_TOURS_NO_COLOR            # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: museum_tours=info)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, env = "MUSEUM_TOURS_API_URL")]
    api_url: Option<String>,

    /// Answer from the built-in fixture collection instead of the backend
    #[arg(long, global = true)]
    fixtures: bool,

    /// Config file (default: <config dir>/museum-tours/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "MUSEUM_TOURS_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all themes
    Themes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one theme
    Theme {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a tour itinerary in visiting order
    Tour {
        theme_id: String,
        /// Small, Medium or Large
        size: TourSize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one object
    Object {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an account
    Signup {
        email: String,
        #[arg(long, env = "MUSEUM_TOURS_PASSWORD")]
        password: String,
    },
    /// Log in and store the bearer token
    Login {
        email: String,
        #[arg(long, env = "MUSEUM_TOURS_PASSWORD")]
        password: String,
    },
    /// Check the stored token against the backend
    Whoami,
    /// Forget the stored token
    Logout,
    /// Run the fixture dev server
    Serve {
        /// Port for the dev server
        #[arg(long, default_value = "3333")]
        port: u16,
        /// Compiled frontend to serve (trunk dist directory)
        #[arg(long)]
        dist: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("museum_tours=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_api_url(cli.api_url.clone())
        .context("Invalid --api-url")?;

    let no_color = cli.no_color;

    match cli.command {
        Command::Themes { json } => {
            let source = data_source(&config, cli.fixtures)?;
            run_themes(&source, json, no_color).await?;
        }
        Command::Theme { id, json } => {
            let source = data_source(&config, cli.fixtures)?;
            run_theme(&source, &id, json).await?;
        }
        Command::Tour {
            theme_id,
            size,
            json,
        } => {
            let source = data_source(&config, cli.fixtures)?;
            run_tour(&source, &theme_id, size, json, no_color).await?;
        }
        Command::Object { id, json } => {
            let source = data_source(&config, cli.fixtures)?;
            run_object(&source, &id, json).await?;
        }
        Command::Signup { email, password } => {
            let client = account_client(&config, cli.fixtures)?;
            run_signup(&client, Credentials::new(email, password)).await?;
        }
        Command::Login { email, password } => {
            let client = account_client(&config, cli.fixtures)?;
            let store = session_store(&config)?;
            run_login(&client, &store, Credentials::new(email, password)).await?;
        }
        Command::Whoami => {
            let client = account_client(&config, cli.fixtures)?;
            let store = session_store(&config)?;
            run_whoami(&client, &store).await;
        }
        Command::Logout => {
            let store = session_store(&config)?;
            logout(&store).context("Failed to clear stored token")?;
            info!(path = %store.path().display(), "Cleared stored token");
            println!("Logged out.");
        }
        Command::Serve { port, dist } => {
            let catalog = Arc::new(FixtureCatalog::builtin());
            debug!(themes = catalog.themes().len(), "Serving built-in fixtures");
            museum_tours_web::run(catalog, port, dist).await?;
        }
    }

    Ok(())
}

fn data_source(config: &Config, fixtures: bool) -> Result<DataSource> {
    let source = if fixtures {
        DataSource::fixtures()
    } else {
        DataSource::Remote(ApiClient::new(config.api_base_url.clone())?)
    };
    debug!(source = %source.describe(), "Selected data source");
    Ok(source)
}

fn account_client(config: &Config, fixtures: bool) -> Result<ApiClient> {
    if fixtures {
        bail!("Account commands need the backend; drop --fixtures");
    }
    Ok(ApiClient::new(config.api_base_url.clone())?)
}

fn session_store(config: &Config) -> Result<FileSessionStore> {
    let path = config
        .session_file()
        .context("Could not determine session file location")?;
    Ok(FileSessionStore::new(path))
}

async fn run_themes(source: &DataSource, json: bool, no_color: bool) -> Result<()> {
    let themes = source
        .themes()
        .await
        .with_context(|| format!("Failed to load themes from {}", source.describe()))?;
    println!("{}", cli::format_theme_table(&themes, json, no_color));
    Ok(())
}

async fn run_theme(source: &DataSource, id: &str, json: bool) -> Result<()> {
    let theme = source.theme(id).await?;
    println!("{}", cli::format_theme(&theme, json));
    Ok(())
}

async fn run_tour(
    source: &DataSource,
    theme_id: &str,
    size: TourSize,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let (theme, objects) = source.tour_with_theme(theme_id, size).await?;
    if objects.is_empty() {
        bail!("Tour not found: {} / {}", theme_id, size);
    }
    println!(
        "{}",
        cli::format_tour_table(&theme, size, &objects, json, no_color)
    );
    Ok(())
}

async fn run_object(source: &DataSource, id: &str, json: bool) -> Result<()> {
    let object = source.object(id).await?;
    println!("{}", cli::format_object(&object, json));
    Ok(())
}

async fn run_signup(client: &ApiClient, credentials: Credentials) -> Result<()> {
    let profile = client.signup(&credentials).await?;
    println!("Account created for {}. Log in with `museum-tours login`.", profile.email);
    Ok(())
}

async fn run_login(
    client: &ApiClient,
    store: &FileSessionStore,
    credentials: Credentials,
) -> Result<()> {
    let token = client.login(&credentials).await?;
    complete_login(store, &token).context("Failed to store token")?;
    info!(email = %credentials.email, path = %store.path().display(), "Stored bearer token");
    println!(
        "Logged in as {}. Token stored in {}",
        credentials.email,
        store.path().display()
    );
    Ok(())
}

async fn run_whoami(client: &ApiClient, store: &FileSessionStore) {
    let had_token = store.token().is_some();

    let state = probe_session(store, |token| {
        let client = client.clone();
        async move { client.whoami(&token).await }
    })
    .await;

    match state {
        SessionState::LoggedIn { email } => println!("Logged in as {}", email),
        SessionState::LoggedOut if had_token => {
            warn!("Stored token was rejected");
            println!("Not logged in (stored token was rejected and has been cleared)")
        }
        SessionState::LoggedOut => println!("Not logged in"),
    }
}
