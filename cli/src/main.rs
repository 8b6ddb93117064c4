mod render;
mod shell;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use animecards::config::{ConfigError, normalize_base_url};
use animecards::net::TransportError;
use animecards::router::{Route, RouteError, Router};
use animecards::storage::{FileStore, KeyValueStore, StorageError};
use animecards::{ApiClient, ApiError, ClientConfig, ContentApi, ContentStore};
use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use shell::Shell;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("session storage unavailable: {0}")]
    Storage(#[from] StorageError),
    #[error("http client setup failed: {0}")]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("not signed in; run `animecards login <email>`")]
    NotSignedIn,
    #[error("terminal io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "animecards", about = "Anime content cards in the terminal")]
struct Cli {
    /// Token service base URL (overrides ANIMECARDS_AUTH_BASE_URL).
    #[arg(long)]
    auth_url: Option<String>,

    /// Content service base URL (overrides ANIMECARDS_CONTENT_BASE_URL).
    #[arg(long)]
    content_url: Option<String>,

    /// Per-request timeout in seconds (overrides ANIMECARDS_REQUEST_TIMEOUT_SECS).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Session file (overrides ANIMECARDS_STORAGE_PATH).
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Log verbosity on stderr: -v for info, -vv for debug.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request a token for EMAIL and show the first card.
    Login { email: String },
    /// Resume the stored session and show a fresh card.
    Show {
        #[arg(long, default_value_t = false)]
        detail: bool,
    },
    /// Forget the stored token and email.
    Logout,
    /// Print the stored session without contacting the services.
    Status,
    /// Interactive session (default).
    Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_path)?);
    let api = ApiClient::new(&config, storage.clone())?;
    let store = ContentStore::new(api, storage);
    tracing::debug!(
        auth = %config.auth_base_url,
        content = %config.content_base_url,
        storage = %config.storage_path.display(),
        "client configured"
    );

    match cli.command.unwrap_or(Command::Shell) {
        Command::Login { email } => run_login(store, &email).await,
        Command::Show { detail } => run_show(store, detail).await,
        Command::Logout => {
            let mut store = store;
            store.logout();
            println!("Signed out.");
            Ok(())
        }
        Command::Status => {
            run_status(&store, &config);
            Ok(())
        }
        Command::Shell => Ok(Shell::new(store).run().await?),
    }
}

fn load_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.auth_url.as_deref() {
        config.auth_base_url = override_url("--auth-url", url)?;
    }
    if let Some(url) = cli.content_url.as_deref() {
        config.content_base_url = override_url("--content-url", url)?;
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }
    if let Some(path) = &cli.storage {
        config.storage_path.clone_from(path);
    }
    Ok(config)
}

fn override_url(flag: &'static str, raw: &str) -> Result<String, ConfigError> {
    let url = normalize_base_url(raw);
    if url.is_empty() {
        return Err(ConfigError::EmptyUrl { var: flag });
    }
    Ok(url)
}

async fn run_login<A: ContentApi>(mut store: ContentStore<A>, email: &str) -> Result<(), CliError> {
    let mut router = Router::new();
    if let Err(e) = store.authenticate(email).await {
        print!("{}", render::screen(router.push(Route::Login, &store), &store));
        return Err(e.into());
    }
    let route = router.push(Route::Card, &store);
    print!("{}", render::screen(route, &store));
    Ok(())
}

async fn run_show<A: ContentApi>(mut store: ContentStore<A>, detail: bool) -> Result<(), CliError> {
    store.initialize().await;

    let mut router = Router::new();
    let target = if detail { "/detail" } else { "/card" };
    let route = router.navigate(target, &store)?;
    if route == Route::Login {
        print!("{}", render::screen(route, &store));
        return Err(CliError::NotSignedIn);
    }
    if route == Route::Detail {
        store.show_detail();
    }
    print!("{}", render::screen(route, &store));
    Ok(())
}

fn run_status<A: ContentApi>(store: &ContentStore<A>, config: &ClientConfig) {
    let email = store.user_email();
    println!("email:      {}", if email.is_empty() { "-" } else { email });
    println!("token held: {}", store.api().is_authenticated());
    println!("storage:    {}", config.storage_path.display());
    println!("auth url:   {}", config.auth_base_url);
    println!("content:    {}", config.content_base_url);
}
