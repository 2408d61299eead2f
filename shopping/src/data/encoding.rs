// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Fixed remapping of the categorical and boolean columns to integer codes.
//!
//! Values missing from a mapping are passed through unchanged and must then read as
//! an integer, so a file that already carries numeric codes loads as-is. Text that
//! is neither mapped nor numeric is rejected with [`CsvError::UnknownCategory`].

use super::schema::{Column, ColumnKind, Value};
use crate::error::CsvError;

const MONTHS: [(&str, i64); 12] = [
    ("Jan", 0),
    ("Feb", 1),
    ("Mar", 2),
    ("Apr", 3),
    ("May", 4),
    ("June", 5),
    ("Jul", 6),
    ("Aug", 7),
    ("Sep", 8),
    ("Oct", 9),
    ("Nov", 10),
    ("Dec", 11),
];

const VISITOR_TYPES: [(&str, i64); 3] =
    [("Returning_Visitor", 1), ("New_Visitor", 0), ("Other", 0)];

const BOOLEANS: [(&str, i64); 6] =
    [("TRUE", 1), ("True", 1), ("true", 1), ("FALSE", 0), ("False", 0), ("false", 0)];

fn lookup(table: &[(&str, i64)], raw: &str) -> Option<i64> {
    table.iter().find(|(name, _)| *name == raw).map(|&(_, code)| code)
}

fn mapped_or_passthrough(
    table: &[(&str, i64)],
    column: Column,
    raw: &str,
    row: usize,
) -> Result<Value, CsvError> {
    match lookup(table, raw) {
        Some(code) => Ok(Value::Int(code)),
        None => raw.parse::<i64>().map(Value::Int).map_err(|_| CsvError::UnknownCategory {
            column,
            value: raw.to_string(),
            row,
        }),
    }
}

/// Converts the raw text of `column` into its numeric value. `row` is 1-based and
/// only used for error reporting.
pub fn encode(column: Column, raw: &str, row: usize) -> Result<Value, CsvError> {
    let invalid = || CsvError::InvalidNumeric { column, value: raw.to_string(), row };
    match column.kind() {
        ColumnKind::Integer => raw.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
        ColumnKind::Float => raw.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
        ColumnKind::Month => mapped_or_passthrough(&MONTHS, column, raw, row),
        ColumnKind::VisitorType => mapped_or_passthrough(&VISITOR_TYPES, column, raw, row),
        ColumnKind::Boolean => mapped_or_passthrough(&BOOLEANS, column, raw, row),
    }
}

/// Encodes the `Revenue` field as a 0/1 label.
pub fn encode_label(raw: &str, row: usize) -> Result<u8, CsvError> {
    let unknown =
        || CsvError::UnknownCategory { column: Column::Revenue, value: raw.to_string(), row };
    match encode(Column::Revenue, raw, row)? {
        Value::Int(code) => u8::try_from(code).map_err(|_| unknown()),
        Value::Float(_) => Err(unknown()),
    }
}
