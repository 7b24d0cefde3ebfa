// Copyright (C) 2025 Showdown Authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use showdown_server::server;

#[derive(Debug, Parser)]
struct Cli {
    /// The server listening address.
    #[clap(long, short, default_value = "127.0.0.1")]
    address: String,
    /// The server listening port.
    #[clap(long, short, default_value_t = 8080)]
    port: u16,
    /// Number of HTTP worker threads.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=64))]
    workers: u8,
}

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = showdown_server::Config {
        address: cli.address,
        port: cli.port,
        workers: cli.workers as usize,
    };

    server::run(config).await?;

    Ok(())
}
