// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Smoke tests for PostgreSQL wire protocol compatibility.
//!
//! Three binaries validate that a pgwire-speaking server supports
//! enough of the protocol and SQL surface to satisfy a generic client
//! driver. They are meant to run in order against the same server:
//!
//! - `smoke-create` creates the `COMPANY` table.
//! - `smoke-insert` inserts four fixed rows.
//! - `smoke-query` selects everything back and prints each row.
//!
//! The server under test is an external collaborator; by default the
//! binaries connect to `localhost:4566`, database `dev`, user `root`.
//! See [`config::Args`] for the flags and environment variables that
//! override this.

pub mod client;
pub mod company;
pub mod config;
pub mod error;
pub mod sql;
