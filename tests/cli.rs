// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Process-level tests of the smoke binaries.
//!
//! These need no server: they point the binaries at an endpoint that
//! refuses connections and check the failure contract.

use std::net::TcpListener;
use std::process::Command;

/// Returns a localhost port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[test]
fn test_unreachable_server_prints_single_error_line() {
    let port = closed_port().to_string();
    for bin in [
        env!("CARGO_BIN_EXE_smoke-create"),
        env!("CARGO_BIN_EXE_smoke-insert"),
        env!("CARGO_BIN_EXE_smoke-query"),
    ] {
        let output = Command::new(bin)
            .args(["--host", "127.0.0.1", "--port", &port])
            .env("PGSMOKE_LOG_FILTER", "info")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1), "{} exit status", bin);
        assert!(
            output.stdout.is_empty(),
            "{} wrote to stdout: {:?}",
            bin,
            String::from_utf8_lossy(&output.stdout)
        );
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert_eq!(stderr.lines().count(), 1, "{} stderr: {:?}", bin, stderr);
        assert!(
            stderr.starts_with("tokio_postgres::Error: "),
            "{} stderr: {:?}",
            bin,
            stderr
        );
    }
}
