// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Command line arguments shared by the smoke binaries.

/// Connection settings for the server under test.
///
/// The defaults match the canonical dev deployment: a pgwire listener
/// on `localhost:4566` serving a `dev` database with a passwordless
/// `root` user.
#[derive(Debug, Clone, clap::Parser)]
pub struct Args {
    /// The host of the server under test.
    #[clap(
        long,
        env = "PGSMOKE_HOST",
        value_name = "HOST",
        default_value = "localhost"
    )]
    pub host: String,
    /// The port on which the server listens for pgwire connections.
    #[clap(
        long,
        env = "PGSMOKE_PORT",
        value_name = "PORT",
        default_value = "4566"
    )]
    pub port: u16,
    /// The database to connect to.
    #[clap(
        long,
        env = "PGSMOKE_DBNAME",
        value_name = "NAME",
        default_value = "dev"
    )]
    pub dbname: String,
    /// The user to connect as.
    #[clap(
        long,
        env = "PGSMOKE_USER",
        value_name = "USER",
        default_value = "root"
    )]
    pub user: String,
    /// The password to authenticate with, if any.
    #[clap(
        long,
        env = "PGSMOKE_PASSWORD",
        value_name = "PASSWORD",
        default_value = ""
    )]
    pub password: String,
}

impl Args {
    /// Builds the driver configuration for these arguments.
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user);
        // An empty password means trust auth; don't send one at all.
        if !self.password.is_empty() {
            config.password(&self.password);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tokio_postgres::config::Host;

    use super::Args;

    #[test]
    fn test_defaults_match_dev_deployment() {
        let args = Args::try_parse_from(["smoke"]).unwrap();
        assert_eq!(args.host, "localhost");
        assert_eq!(args.port, 4566);
        assert_eq!(args.dbname, "dev");
        assert_eq!(args.user, "root");
        assert_eq!(args.password, "");
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "smoke",
            "--host",
            "10.0.0.8",
            "--port",
            "5432",
            "--dbname",
            "smoke",
            "--user",
            "postgres",
            "--password",
            "hunter2",
        ])
        .unwrap();

        let config = args.pg_config();
        assert_eq!(config.get_hosts(), &[Host::Tcp("10.0.0.8".into())]);
        assert_eq!(config.get_ports(), &[5432]);
        assert_eq!(config.get_dbname(), Some("smoke"));
        assert_eq!(config.get_user(), Some("postgres"));
        assert_eq!(config.get_password(), Some(&b"hunter2"[..]));
    }

    #[test]
    fn test_empty_password_is_not_sent() {
        let args = Args::try_parse_from(["smoke"]).unwrap();
        assert_eq!(args.pg_config().get_password(), None);
    }
}
