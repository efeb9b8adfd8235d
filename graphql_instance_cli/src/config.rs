// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{crate_version, Parser};
use colored::Colorize;
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use graphql_instance::HandlerConfiguration;
use serde::{Deserialize, Serialize};

use crate::utils::absolute_path;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables which are picked up as configuration values.
const ENV_KEYS: [&str; 4] = ["http_port", "graphql_route", "graphiql", "log_level"];

type ConfigFilePath = Option<PathBuf>;

/// Configuration of the command line application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// HTTP port serving the GraphQL endpoint.
    pub http_port: u16,

    /// Path the GraphQL endpoint is served under.
    pub graphql_route: String,

    /// Serve the GraphiQL explorer to browsers.
    pub graphiql: bool,

    /// Log verbosity or a full filter like "graphql_instance=DEBUG,hyper=INFO".
    pub log_level: String,
}

impl Configuration {
    /// Options the GraphQL handler gets assembled with.
    pub fn handler_config(&self) -> HandlerConfiguration {
        HandlerConfiguration {
            graphiql: self.graphiql,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            http_port: 2020,
            graphql_route: "/graphql".into(),
            graphiql: true,
            log_level: "info".into(),
        }
    }
}

/// Configuration derived from command line arguments.
///
/// All arguments are optional and don't get serialized to Figment when they're None. This is to
/// assure that default values do not overwrite all previous settings, especially when they haven't
/// been set.
#[derive(Parser, Serialize, Debug)]
#[command(
    name = "graphql-instance",
    about = "GraphQL endpoint with an interactive explorer",
    long_about = None,
    version
)]
pub struct Cli {
    /// Path to an optional "config.toml" file for further configuration.
    ///
    /// When not set the program will try to find a `config.toml` file in the same folder the
    /// program is executed in and otherwise in the regarding operation systems XDG config
    /// directory ("$HOME/.config/graphql-instance/config.toml" on Linux).
    #[arg(short = 'c', long, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<PathBuf>,

    /// HTTP port serving the GraphQL endpoint. Defaults to 2020.
    #[arg(short = 'p', long, value_name = "PORT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    http_port: Option<u16>,

    /// Path the GraphQL endpoint is served under. Defaults to "/graphql".
    #[arg(short = 'r', long, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    graphql_route: Option<String>,

    /// Serve the GraphiQL explorer when the endpoint is opened in a browser. Enabled by default.
    #[arg(
        short = 'g',
        long,
        value_name = "BOOL",
        default_missing_value = "true",
        num_args = 0..=1,
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    graphiql: Option<bool>,

    /// Set log verbosity. Possible log levels are: ERROR, WARN, INFO, DEBUG, TRACE. They are
    /// scoped to "graphql_instance" by default.
    ///
    /// If you want to adjust the scope for deeper inspection use a filter value, for example
    /// "=TRACE" for logging _everything_ or "graphql_instance=INFO,hyper=DEBUG" etc.
    #[arg(short = 'l', long, value_name = "LEVEL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,

    /// Print the schema definition language of the served schema and exit.
    #[arg(long)]
    #[serde(skip)]
    pub print_schema: bool,
}

/// Get configuration from 1. .toml file, 2. environment variables and 3. command line arguments
/// (in that order, meaning that later configuration sources take precedence over the earlier
/// ones).
pub fn load_config(cli: &Cli) -> Result<(ConfigFilePath, Configuration)> {
    // Determine if a config file path was provided or if we should look for it in common locations
    let config_file_path: ConfigFilePath = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }

            Some(path.clone())
        }
        None => try_determine_config_file_path(),
    };

    let config: Configuration = figment(config_file_path.as_ref(), cli).extract()?;

    if !config.graphql_route.starts_with('/') {
        bail!(
            "GraphQL route '{}' needs to start with a slash",
            config.graphql_route
        );
    }

    Ok((config_file_path, config))
}

fn figment(config_file_path: Option<&PathBuf>, cli: &Cli) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Configuration::default()));
    if let Some(path) = config_file_path {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::raw().only(&ENV_KEYS))
        .merge(Serialized::defaults(cli))
}

fn try_determine_config_file_path() -> Option<PathBuf> {
    // Find config file in current folder
    let mut current_dir = std::env::current_dir().ok()?;
    current_dir.push(CONFIG_FILE_NAME);

    // Find config file in XDG config folder
    let xdg_config_file = ProjectDirs::from("", "", "graphql-instance")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));

    std::iter::once(current_dir)
        .chain(xdg_config_file)
        .find(|path| path.exists())
}

pub fn print_config(config_file_path: ConfigFilePath, config: &Configuration) -> String {
    println!("{} v{}\n", "graphql-instance".underline(), crate_version!());

    match config_file_path {
        Some(path) => {
            println!(
                "Loading config file from {}",
                absolute_path(path).display().to_string().blue()
            );
        }
        None => {
            println!("No config file provided");
        }
    }

    println!();
    println!("{}\n", "Configuration".underline());

    let graphiql = if config.graphiql {
        "enabled"
    } else {
        "disabled"
    };

    format!(
        r"HTTP port: {}
GraphQL route: {}
GraphiQL: {}
Log level: {}

Endpoint is ready!
",
        config.http_port.to_string().blue(),
        config.graphql_route.blue(),
        graphiql.blue(),
        config.log_level.blue(),
    )
}
