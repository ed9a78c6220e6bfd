// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The row type of the `COMPANY` table.

use std::fmt;

use tokio_postgres::Row;

use crate::error::Result;

/// One row of the `COMPANY` table.
///
/// `address` and `salary` are nullable in the schema, so they decode
/// as options even though the seed data always populates them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRow {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub address: Option<String>,
    pub salary: Option<f32>,
}

impl CompanyRow {
    /// Decodes a row returned by `SELECT * FROM COMPANY`.
    pub fn from_row(row: &Row) -> Result<CompanyRow> {
        Ok(CompanyRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            address: row.try_get("address")?,
            salary: row.try_get("salary")?,
        })
    }
}

impl fmt::Display for CompanyRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "ID = {}", self.id)?;
        writeln!(f, "NAME = {}", self.name)?;
        writeln!(f, "AGE = {}", self.age)?;
        match &self.address {
            Some(address) => writeln!(f, "ADDRESS = {}", address)?,
            None => writeln!(f, "ADDRESS = null")?,
        }
        match self.salary {
            // {:?} keeps the trailing .0 on whole floats.
            Some(salary) => write!(f, "SALARY = {:?}", salary),
            None => write!(f, "SALARY = null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CompanyRow;

    #[test]
    fn test_display_prints_five_labeled_lines() {
        let row = CompanyRow {
            id: 1,
            name: "Paul".into(),
            age: 32,
            address: Some("California".into()),
            salary: Some(20000.0),
        };
        assert_eq!(
            row.to_string(),
            "ID = 1\nNAME = Paul\nAGE = 32\nADDRESS = California\nSALARY = 20000.0"
        );
    }

    #[test]
    fn test_display_renders_nulls() {
        let row = CompanyRow {
            id: 7,
            name: "Nobody".into(),
            age: 0,
            address: None,
            salary: None,
        };
        let rendered = row.to_string();
        assert!(rendered.contains("ADDRESS = null"));
        assert!(rendered.contains("SALARY = null"));
    }

    #[test]
    fn test_whole_salaries_keep_fractional_digit() {
        let row = CompanyRow {
            id: 4,
            name: "Mark".into(),
            age: 25,
            address: Some("Rich-Mond ".into()),
            salary: Some(65000.0),
        };
        assert!(row.to_string().ends_with("SALARY = 65000.0"));
    }
}
