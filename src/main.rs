use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use demo_actions::{
    ApiServerBuilder, ConfigOverrides, ServerConfig, build_descriptor, build_manifest, consistency,
};

/// Demo Actions - stub endpoints with OpenAPI descriptor and plugin manifest
#[derive(Parser)]
#[command(name = "demo-actions", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Public origin the platform reaches this server at (e.g. https://demo.example.com)
    #[arg(long, env = "PUBLIC_DOMAIN")]
    domain: Option<String>,

    /// Directory of extra static files (logo, legal page)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Contact email published in the manifest
    #[arg(long, env = "CONTACT_EMAIL")]
    contact_email: Option<String>,

    /// Path to a TOML config file
    #[arg(long, env = "DEMO_ACTIONS_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the OpenAPI descriptor
    PrintOpenapi {
        /// Emit YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },
    /// Print the plugin manifest
    PrintManifest,
    /// Verify the descriptor and manifest agree, then exit
    Check,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info,demo_actions=info,tower_http=info",
        1 => "info,demo_actions=debug,tower_http=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ServerConfig::load(ConfigOverrides {
        port: cli.port,
        domain: cli.domain,
        static_dir: cli.static_dir,
        contact_email: cli.contact_email,
        config_file: cli.config,
    })?;
    tracing::debug!(?config, "loaded configuration");

    // Refuse to start if the manifest would point somewhere we don't serve
    consistency::check_deployment(&config.deployment, &config.contact_email)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!(
                port = config.deployment.port(),
                domain = %config.deployment.domain(),
                "starting demo actions server"
            );
            ApiServerBuilder::from_config(config).build().run().await?;
        }
        Command::PrintOpenapi { yaml } => {
            let descriptor = build_descriptor(&config.deployment);
            let out = if yaml {
                descriptor.to_yaml()?
            } else {
                descriptor.to_json()?
            };
            println!("{out}");
        }
        Command::PrintManifest => {
            let manifest = build_manifest(&config.deployment, &config.contact_email);
            println!("{}", manifest.to_json()?);
        }
        Command::Check => {
            tracing::info!(domain = %config.deployment.domain(), "descriptor and manifest are consistent");
        }
    }

    Ok(())
}
