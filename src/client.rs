// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tokio_postgres::{Client, NoTls};

use crate::company::CompanyRow;
use crate::config::Args;
use crate::error::Result;

/// A client for the server under test with smoke-specific methods.
pub struct SmokeClient(Client);

impl SmokeClient {
    /// Connects to the configured endpoint.
    pub async fn connect(args: &Args) -> Result<SmokeClient> {
        let (client, conn) = args.pg_config().connect(NoTls).await?;

        // The connection object performs the actual communication with
        // the database, so spawn it off to run on its own. Dropping the
        // client closes the connection on every exit path.
        //
        // A driver failure here also surfaces as an error on the next
        // client call, which main reports as the one-line diagnostic;
        // logging at debug keeps stderr to that single line.
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("connection error: {}", e);
            }
        });

        Ok(SmokeClient(client))
    }

    /// Executes a single DDL or DML statement.
    pub async fn execute(&self, stmt: &str) -> Result<u64> {
        tracing::debug!("exec-> {}", stmt);
        Ok(self.0.execute(stmt, &[]).await?)
    }

    /// Runs a `SELECT` over the `COMPANY` table and decodes every row.
    pub async fn query_rows(&self, stmt: &str) -> Result<Vec<CompanyRow>> {
        tracing::debug!("query-> {}", stmt);
        let mut rows = Vec::new();
        for row in self.0.query(stmt, &[]).await? {
            rows.push(CompanyRow::from_row(&row)?);
        }
        Ok(rows)
    }
}
