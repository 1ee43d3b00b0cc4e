//! CLI entry point for fundsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fundsite")]
#[command(version)]
#[command(about = "Blog and content server for the fund administration site", long_about = None)]
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
    /// Serve the blog over HTTP
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Export the site as static files
    #[command(alias = "b")]
    Build,

    /// Check post content for markup problems
    Check,

    /// Create a new post in the content directory
    New {
        /// Title of the new post
        title: String,

        /// Post category
        #[arg(long, default_value = "Fund Administration")]
        category: String,

        /// Post author
        #[arg(long, default_value = "Fund Operations Team")]
        author: String,

        /// Slug to use instead of one derived from the title
        #[arg(long)]
        slug: Option<String>,
    },

    /// Remove the exported site
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "fundsite=debug,info"
    } else {
        "fundsite=info"
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
        Commands::Serve { port, ip, open } => {
            let site = fundsite::Site::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            let port = port.unwrap_or(site.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            fundsite::server::start(&site, &ip, port, open).await?;
        }

        Commands::Build => {
            let site = fundsite::Site::new(&base_dir)?;
            tracing::info!("Exporting site to {:?}", site.public_dir);
            site.build()?;
            println!("Built successfully!");
        }

        Commands::Check => {
            let site = fundsite::Site::new(&base_dir)?;
            fundsite::commands::check::run(&site)?;
        }

        Commands::New {
            title,
            category,
            author,
            slug,
        } => {
            let site = fundsite::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let options = fundsite::commands::new::NewPost {
                title: &title,
                category: &category,
                author: &author,
                slug: slug.as_deref(),
            };
            fundsite::commands::new::create_post(&site, &options)?;
        }

        Commands::Clean => {
            let site = fundsite::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = fundsite::Site::new(&base_dir)?;
            fundsite::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("fundsite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
