// src/main.rs

use az204_quiz::client;
use az204_quiz::config::Config;
use az204_quiz::routes;
use az204_quiz::service::QueryService;
use az204_quiz::state::AppState;
use az204_quiz::store::QuestionStore;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "AZ-204 practice quiz: REST API and terminal client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the quiz API server
    Serve,
    /// Play the quiz in the terminal against a running server
    Play {
        /// Base URL of the quiz API
        #[arg(long, default_value = "http://127.0.0.1:3001")]
        api_url: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Play { api_url } => {
            // The client owns the terminal, so no tracing subscriber here.
            if let Err(e) = client::run(api_url).await {
                eprintln!("Error running quiz client: {}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn serve() {
    // Load configuration from environment (reads .env if present)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Build the immutable question snapshot. A store that fails to load or
    // validate aborts startup.
    let store = match &config.database_url {
        Some(url) => {
            tracing::info!("Loading questions from database");
            QuestionStore::from_database(url)
                .await
                .expect("Failed to load questions from database")
        }
        None => {
            tracing::info!("Loading questions from {}", config.questions_file);
            QuestionStore::from_json_file(&config.questions_file)
                .expect("Failed to load questions file")
        }
    };
    tracing::info!("Loaded {} questions", store.len());

    let state = AppState {
        service: QueryService::new(store),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("AZ-204 Quiz API listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/api/health", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
