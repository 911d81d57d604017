use crate::binder::{BindArg, BindArgs};
use crate::config::RouterConfig;
use crate::controller::ControllerRegistry;
use crate::router::Router;
use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Command-line interface for waymark
#[derive(Parser)]
#[command(name = "waymark")]
#[command(about = "Route-table compiler and URL binder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Configuration options shared by every command
#[derive(Args)]
pub struct ConfigOpts {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root all other paths resolve against
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// The routes configuration file, relative to the root
    #[arg(short, long)]
    pub routes_file: Option<PathBuf>,
}

impl ConfigOpts {
    /// Resolve the effective configuration: file, then environment, then
    /// explicit flags.
    fn resolve(&self) -> anyhow::Result<RouterConfig> {
        let mut config = match &self.config {
            Some(path) => RouterConfig::from_file(path)?,
            None => RouterConfig::default(),
        }
        .from_env();
        if let Some(root) = &self.root {
            config.root_path = root.clone();
        }
        if let Some(routes_file) = &self.routes_file {
            config.routes_file = routes_file.clone();
        }
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compile the route table and print it
    Routes {
        #[command(flatten)]
        opts: ConfigOpts,
    },
    /// Compile the route table and report the first configuration error
    Check {
        #[command(flatten)]
        opts: ConfigOpts,
    },
    /// Resolve an action identifier to a URL
    Reverse {
        #[command(flatten)]
        opts: ConfigOpts,

        /// The `controller.method` action to resolve
        action: String,

        /// Bind parameters: `key=value` pairs bind by name, bare values by
        /// position
        params: Vec<String>,
    },
}

/// Turn CLI parameter tokens into a bind argument list.
///
/// Bare tokens become positional scalars in order; `key=value` tokens
/// collect into a single object argument appended last, preserving the
/// order they were given.
fn parse_params(params: &[String]) -> BindArgs {
    let mut args: Vec<BindArg> = Vec::new();
    let mut named = Map::new();
    for param in params {
        match param.split_once('=') {
            Some((key, value)) => {
                named.insert(key.to_string(), Value::String(value.to_string()));
            }
            None => args.push(BindArg::Scalar(Value::String(param.clone()))),
        }
    }
    if !named.is_empty() {
        args.push(BindArg::Object(named));
    }
    args.into()
}

/// Execute the CLI command provided by the user.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the route table
/// fails to compile, or reverse resolution fails.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Routes { opts } => {
            let router = Router::new(opts.resolve()?, ControllerRegistry::new());
            router.dump_routes()?;
            Ok(())
        }
        Commands::Check { opts } => {
            let config = opts.resolve()?;
            let routes_file = config.routes_file.clone();
            let router = Router::new(config, ControllerRegistry::new());
            let routes = router.get_routes()?;
            println!("{}: {} routes ok", routes_file.display(), routes.len());
            Ok(())
        }
        Commands::Reverse {
            opts,
            action,
            params,
        } => {
            let router = Router::new(opts.resolve()?, ControllerRegistry::new());
            let url = router.reverse(action, parse_params(params))?;
            println!("{}", url);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_params_mixes_positional_and_named() {
        let args = parse_params(&[
            "first".to_string(),
            "id=42".to_string(),
            "page=2".to_string(),
        ]);
        assert_eq!(
            args,
            BindArgs::from(vec![
                BindArg::Scalar(json!("first")),
                BindArg::Object(match json!({ "id": "42", "page": "2" }) {
                    Value::Object(map) => map,
                    _ => unreachable!(),
                }),
            ])
        );
    }

    #[test]
    fn test_parse_params_empty() {
        assert_eq!(parse_params(&[]), BindArgs::none());
    }
}
