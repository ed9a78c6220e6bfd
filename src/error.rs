// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub type Result<T> = std::result::Result<T, Error>;

/// The single error type shared by all three smoke binaries.
///
/// There is deliberately no finer taxonomy: a connect failure, an SQL
/// error, and a row decode failure are all handled identically by one
/// catch point in `main`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Postgres(#[from] tokio_postgres::Error),
}

impl Error {
    /// Stable label printed ahead of the message in the one-line
    /// `<class>: <message>` diagnostic the binaries emit on stderr.
    pub fn class(&self) -> &'static str {
        match self {
            Error::Postgres(_) => "tokio_postgres::Error",
        }
    }
}
