// SPDX-License-Identifier: AGPL-3.0-or-later

#![allow(clippy::uninlined_format_args)]
mod config;
mod schema;
mod utils;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use graphql_instance::{graphql_handler, http_service};
use log::warn;

use crate::config::{load_config, print_config, Cli};
use crate::schema::{build_schema, NodeResolver};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments and load configuration from all sources
    let cli = Cli::parse();
    let (config_file_path, config) = load_config(&cli)?;

    setup_logging(&config.log_level);

    // Assemble the handler once, all routes share it for the lifetime of the process
    let handler = graphql_handler(build_schema(), NodeResolver::new(), config.handler_config());

    if cli.print_schema {
        println!("{}", handler.schema().sdl());
        return Ok(());
    }

    println!("{}", print_config(config_file_path, &config));

    let address = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), config.http_port);

    // Run this until [CTRL] + [C] got pressed or something went wrong
    http_service(address, handler.router(&config.graphql_route), async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Could not listen for shutdown signal: {}", err);
            std::future::pending::<()>().await;
        }
    })
    .await
}

fn setup_logging(log_level: &str) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }

    // Log levels without an explicit scope only apply to our own crates
    let filter = if log_level.contains('=') {
        log_level.to_owned()
    } else {
        format!("graphql_instance={}", log_level)
    };

    env_logger::Builder::new().parse_filters(&filter).init();
}
