//
//  topgg
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use topgg::cli::{self, Cli};
use topgg::exit_codes;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(cancel.clone());

    match cli.command.run(&cli.global, &cancel).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(cli::exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("TOPGG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupted, cancelling request");
            cancel.cancel();
        }
    });
}
