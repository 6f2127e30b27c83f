//! HTTP server command for the todos API
//!
//! Opens the store once, then serves until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use todo_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use todo_server::http::{run_server, ServerConfig};
use todo_server::{MemoryStore, TodoRepo, TodoStore};

/// Default PostgreSQL connection string
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/gotodo?sslmode=disable";

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOS_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum connections in the database pool
    #[arg(long, env = "TODOS_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep todos in process memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TodoStore> = if args.in_memory {
        tracing::warn!("Using in-memory store - todos are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let pool = create_pool_with_options(&args.database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;
        Arc::new(TodoRepo::new(pool))
    };

    tracing::info!("Starting todos server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn defaults_match_fixed_deployment() {
        let cli = TestCli::try_parse_from(["todos"]).unwrap();
        assert_eq!(cli.serve.bind.port(), 8000);
        assert_eq!(cli.serve.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!cli.serve.in_memory);
    }

    #[test]
    fn bind_must_be_socket_address() {
        assert!(TestCli::try_parse_from(["todos", "--bind", "localhost"]).is_err());
        let cli = TestCli::try_parse_from(["todos", "--bind", "127.0.0.1:9000"]).unwrap();
        assert_eq!(cli.serve.bind.port(), 9000);
    }
}
