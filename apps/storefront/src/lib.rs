//! # Padaria Storefront
//!
//! Terminal storefront for the bakery: browse, cart, sign-in, admin.
//!
//! ## Module Organization
//! ```text
//! padaria_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState and state type exports
//! │   ├── store.rs    ◄─── Store wrapper
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── session.rs  ◄─── Signed-in user and placed orders
//! │   └── config.rs   ◄─── Configuration state (PADARIA_* env)
//! ├── commands/       ◄─── product, cart, auth, admin, contact
//! ├── navigation.rs   ◄─── Route stack
//! ├── screens.rs      ◄─── Text rendering
//! ├── shell.rs        ◄─── Line parsing and dispatch
//! └── error.rs        ◄─── ApiError for commands, StartupError for run()
//! ```
//!
//! ## Output Streams
//! Screens go to stdout. Logs go to stderr so they never interleave with a
//! screen; `RUST_LOG=padaria=debug 2>padaria.log` keeps them apart.

pub mod commands;
pub mod error;
pub mod navigation;
pub mod screens;
pub mod shell;
pub mod state;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StartupError;
use shell::{Flow, Shell};
use state::{AppState, ConfigState};

/// Runs the storefront until `fim` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, stderr writer                 │
/// │     • Default: warn,padaria=info; override with RUST_LOG                │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env() (invalid values stop here)                │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • Store seeded with the sample catalog and the admin user           │
/// │     • Empty cart, signed-out session                                    │
/// │                                                                         │
/// │  4. Shell Loop ───────────────────────────────────────────────────────► │
/// │     • Restore session, render Home                                      │
/// │     • One stdin line per command                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(
        store = %config.store_name,
        list_latency_ms = config.list_latency_ms,
        lookup_latency_ms = config.lookup_latency_ms,
        "Starting Padaria storefront"
    );

    let mut shell = Shell::new(AppState::new(config));
    let mut stdout = std::io::stdout();
    shell.start(&mut stdout).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        shell.prompt(&mut stdout)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if shell.handle_line(&line, &mut stdout).await? == Flow::Quit {
            break;
        }
    }

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=padaria=trace` - Show trace for padaria crates only
/// - Default: warnings, plus INFO for padaria crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,padaria=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
