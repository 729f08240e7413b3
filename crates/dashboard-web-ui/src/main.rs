use clap::{Parser, Subcommand};
use dashboard_web_ui::{templates, DashboardConfig, PageRegistry, WebUiServer};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Serve dashboards built from tabular data", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "dashboard.yaml")]
    config: PathBuf,

    /// Log level (overrides config; RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the web server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },
    /// Render one page to an HTML file, or stdout
    Render {
        /// Page slug (hello, gdp, exports)
        slug: String,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config_found = args.config.exists();
    let mut config = if config_found {
        DashboardConfig::from_file(&args.config)?
    } else {
        DashboardConfig::default()
    };
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if !config_found {
        tracing::warn!(path = %args.config.display(), "Config file not found, using defaults");
    }

    let registry = PageRegistry::from_config(&config)?;

    match args.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Starting dashboard with config: {:?}", config);
            WebUiServer::new(config.socket_addr().await?, registry).run().await
        }
        Command::Render { slug, out } => {
            let page = registry
                .get(&slug)
                .ok_or_else(|| anyhow::anyhow!("Unknown page: {}", slug))?;
            let html = templates::page_document(&page.layout.title, &page.layout.to_html());

            match out {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    tracing::info!(path = %path.display(), "Rendered page {}", slug);
                }
                None => println!("{}", html),
            }
            Ok(())
        }
    }
}
