// Copyright Materialize, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The fixed SQL the smoke binaries execute.
//!
//! The statement text is part of the harness contract and must not be
//! adjusted per server: a compatible server has to accept it as is.

pub const CREATE_TABLE: &str = "CREATE TABLE COMPANY \
     (ID INT PRIMARY KEY     NOT NULL, \
      NAME           VARCHAR    NOT NULL, \
      AGE            INT     NOT NULL, \
      ADDRESS        VARCHAR, \
      SALARY         REAL)";

/// The four inserts, in the order they must be executed. Each runs as
/// its own statement with no transaction around them, so a failure
/// partway through leaves the earlier rows in place.
///
/// The trailing space in `'Rich-Mond '` is part of the fixture.
pub const INSERTS: [&str; 4] = [
    "INSERT INTO COMPANY (ID,NAME,AGE,ADDRESS,SALARY) \
     VALUES (1, 'Paul', 32, 'California', 20000.00)",
    "INSERT INTO COMPANY (ID,NAME,AGE,ADDRESS,SALARY) \
     VALUES (2, 'Allen', 25, 'Texas', 15000.00)",
    "INSERT INTO COMPANY (ID,NAME,AGE,ADDRESS,SALARY) \
     VALUES (3, 'Teddy', 23, 'Norway', 20000.00)",
    "INSERT INTO COMPANY (ID,NAME,AGE,ADDRESS,SALARY) \
     VALUES (4, 'Mark', 25, 'Rich-Mond ', 65000.00)",
];

/// No ORDER BY: rows come back in whatever order the server chooses.
pub const SELECT_ALL: &str = "SELECT * FROM COMPANY;";
