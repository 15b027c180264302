//! CLI entry point for krzy

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "krzy")]
#[command(version)]
#[command(about = "The krzy.ai blog: serve it or write it out as a static site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Check the post catalog for authoring mistakes
    Check,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "krzy=debug,tower_http=debug,info"
    } else {
        "krzy=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server { port, ip } => {
            let blog = krzy::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            krzy::server::start(&blog, &ip, port).await?;
        }

        Commands::Generate => {
            let blog = krzy::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let blog = krzy::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let blog = krzy::Blog::new(&base_dir)?;
            krzy::commands::list::run(&blog, &r#type)?;
        }

        Commands::Check => {
            let blog = krzy::Blog::new(&base_dir)?;
            krzy::commands::check::run(&blog)?;
        }

        Commands::Version => {
            println!("krzy version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
