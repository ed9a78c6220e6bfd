// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Inserts the four fixed `COMPANY` rows on the server under test.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pgwire_smoke::client::SmokeClient;
use pgwire_smoke::config::Args;
use pgwire_smoke::error::Error;
use pgwire_smoke::sql;

#[tokio::main]
async fn main() {
    if let Err(e) = run(Args::parse()).await {
        eprintln!("{}: {}", e.class(), e);
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PGSMOKE_LOG_FILTER")
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = SmokeClient::connect(&args).await?;
    println!("Opened database successfully");

    // Each insert runs on its own, outside any transaction. The first
    // failure stops the run, leaving the earlier rows persisted.
    for stmt in sql::INSERTS {
        client.execute(stmt).await?;
    }
    println!("Records created successfully");
    Ok(())
}
