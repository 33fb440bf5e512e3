// Lab site binary: render a page once, serve it, or check the document
//
// Usage:
//   labsite render --config labsite.yaml --out public/index.html
//   labsite serve --config labsite.yaml
//   labsite check --data https://lab.example/info.json

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use labsite::{
    create_router, load_document, AppState, Diagnostics, Page, PageLoad, Populator, SiteConfig,
    TracingDiagnostics,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "labsite=info,tower_http=debug,warn";

#[derive(Parser, Debug)]
#[command(name = "labsite", version, about = "Populate a lab website from its site document")]
struct Cli {
    /// Path to site configuration YAML
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one page load and write the populated page
    Render {
        /// Document source (URL or path), overrides the config
        #[arg(long)]
        data: Option<String>,

        /// Page skeleton, overrides the config
        #[arg(long)]
        skeleton: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Leave the contact map region untouched
        #[arg(long)]
        no_map: bool,
    },

    /// Serve the populated page and static assets
    Serve {
        /// Bind address, overrides the config
        #[arg(long)]
        bind: Option<String>,
    },

    /// Load the document and list the sections it provides
    Check {
        /// Document source (URL or path), overrides the config
        #[arg(long)]
        data: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = SiteConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::Render {
            data,
            skeleton,
            out,
            no_map,
        } => {
            if let Some(data) = data {
                config.data = data;
            }
            if let Some(skeleton) = skeleton {
                config.skeleton = skeleton;
            }
            if no_map {
                config.map.enabled = false;
            }
            render(&config, out).await
        }
        Command::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            serve(config).await
        }
        Command::Check { data } => {
            if let Some(data) = data {
                config.data = data;
            }
            check(&config).await
        }
    }
}

async fn render(config: &SiteConfig, out: Option<PathBuf>) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&config.skeleton)
        .with_context(|| format!("reading skeleton {}", config.skeleton.display()))?;
    let page = Page::parse(&raw).context("parsing skeleton")?;

    let load = PageLoad::new(
        page,
        Populator::new(config.populator.clone()),
        Arc::new(TracingDiagnostics),
    );
    let html = load
        .run(&config.document_source(), &config.loader_options(), config.map.enabled)
        .await;

    match out {
        Some(path) => {
            std::fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

async fn serve(config: SiteConfig) -> anyhow::Result<()> {
    tracing::info!("Configuration:");
    tracing::info!("  data: {}", config.data);
    tracing::info!("  skeleton: {}", config.skeleton.display());
    tracing::info!("  static_dir: {}", config.server.static_dir.display());

    let bind = config.server.bind.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("binding {}", bind))?;
    tracing::info!("Server listening on {}", bind);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn check(config: &SiteConfig) -> anyhow::Result<()> {
    let source = config.document_source();
    let doc = match load_document(&source, &config.loader_options()).await {
        Ok(doc) => doc,
        Err(e) => {
            TracingDiagnostics.document_load_failed(&source.to_string(), &e);
            anyhow::bail!("site document {} could not be loaded", source);
        }
    };

    let present = doc.present_sections();
    tracing::info!("Loaded {} ({} sections)", source, present.len());
    for section in present {
        println!("{}", section);
    }
    Ok(())
}
