use std::{path::PathBuf, sync::Arc};

use clap::{Args, ValueEnum};
use tracing::{info, warn};

use shelf::{
    Store, StoreOptions,
    api::{PolarClient, PolarConfig, PolarServer},
    codegen::{DEFAULT_OUTPUT_PATH, Prettier, SourceFormatter, write_products_to_file},
    config::{DEFAULT_CONFIG_PATH, StoreConfig},
};

#[derive(Debug, Args)]
pub(crate) struct PushArgs {
    /// Store configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub(super) input: PathBuf,

    /// Generated products module
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub(super) output: PathBuf,

    #[command(flatten)]
    polar: PolarArgs,

    #[command(flatten)]
    formatting: FormattingArgs,
}

#[derive(Debug, Args)]
struct PolarArgs {
    /// Polar organization access token
    #[arg(long, env = "POLAR_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Organization whose catalog is synced
    #[arg(long, env = "POLAR_ORGANIZATION_ID")]
    organization_id: String,

    /// Hosted Polar environment
    #[arg(long, env = "POLAR_SERVER", value_enum, default_value_t = Server::Production)]
    server: Server,

    /// Custom API base URL; overrides --server
    #[arg(long, env = "POLAR_API_URL")]
    api_url: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Server {
    Production,
    Sandbox,
}

#[derive(Debug, Args)]
struct FormattingArgs {
    /// Write the module without running prettier
    #[arg(long)]
    no_format: bool,

    /// Prettier executable
    #[arg(long, env = "PRETTIER_PATH", default_value = "prettier")]
    prettier: String,
}

impl PolarArgs {
    fn client(self) -> PolarClient {
        let config = match self.api_url {
            Some(base_url) => PolarConfig {
                base_url,
                access_token: self.access_token,
            },
            None => {
                let server = match self.server {
                    Server::Production => PolarServer::Production,
                    Server::Sandbox => PolarServer::Sandbox,
                };

                PolarConfig::for_server(server, self.access_token)
            }
        };

        PolarClient::new(config)
    }
}

impl FormattingArgs {
    fn formatter(&self) -> Option<Prettier> {
        (!self.no_format).then(|| Prettier::new(self.prettier.clone()))
    }
}

pub(crate) async fn run(args: PushArgs) -> Result<(), String> {
    let PushArgs {
        input,
        output,
        polar,
        formatting,
    } = args;

    info!("Loading store definition from: {}", input.display());

    let config = StoreConfig::load(&input)
        .await
        .map_err(|error| format!("failed to load store definition: {error}"))?;

    let organization_id = polar.organization_id.clone();

    let store = Store::with_catalog(
        StoreOptions {
            api: Arc::new(polar.client()),
            organization_id,
        },
        config,
    )
    .map_err(|error| format!("failed to define products: {error}"))?;

    info!("Syncing products to Polar store...");

    let outcome = store
        .push()
        .await
        .map_err(|error| format!("failed to sync products: {error}"))?;

    let products = outcome.updated_products;

    if products.is_empty() {
        warn!("No products to write");

        return Ok(());
    }

    info!(
        "Writing {} product(s) to: {}",
        products.len(),
        output.display()
    );

    let prettier = formatting.formatter();
    let formatter = prettier.as_ref().map(|prettier| prettier as &dyn SourceFormatter);

    write_products_to_file(&products, &output, formatter)
        .await
        .map_err(|error| format!("failed to write products: {error}"))?;

    info!("Successfully wrote products to {}", output.display());

    Ok(())
}
