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

use std::fs::File;
use std::path::Path;

use log::debug;

use super::encoding::{encode, encode_label};
use super::schema::{Column, Dataset, FeatureRow, Value, N_FEATURES};
use super::DataLoader;
use crate::error::CsvError;

/// Loads the online shoppers sessions file: a header row naming the 18 columns,
/// followed by one session per record.
pub struct ShoppingLoader;

fn check_headers(headers: &csv::StringRecord) -> Result<(), CsvError> {
    if headers.is_empty() {
        return Err(CsvError::EmptyFile);
    }
    if headers.len() != Column::ALL.len() {
        return Err(CsvError::HeaderLength { actual: headers.len(), expected: Column::ALL.len() });
    }
    for (index, (column, found)) in Column::ALL.iter().zip(headers.iter()).enumerate() {
        if column.name() != found {
            return Err(CsvError::HeaderMismatch {
                index,
                expected: column.name(),
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

fn parse_record(record: &csv::StringRecord, row: usize) -> Result<(FeatureRow, u8), CsvError> {
    if record.len() != Column::ALL.len() {
        return Err(CsvError::InconsistentColumns {
            row,
            actual: record.len(),
            expected: Column::ALL.len(),
        });
    }

    let mut features = [Value::Int(0); N_FEATURES];
    for (slot, (column, raw)) in features.iter_mut().zip(Column::ALL.iter().zip(record.iter())) {
        *slot = encode(*column, raw, row)?;
    }
    let label = encode_label(&record[N_FEATURES], row)?;
    Ok((features, label))
}

fn load_sessions<P: AsRef<Path>>(path: P) -> Result<Dataset, CsvError> {
    let path = path.as_ref();
    debug!("Loading sessions from {}", path.display());
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    check_headers(rdr.headers()?)?;

    let mut dataset = Dataset::default();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let (features, label) = parse_record(&record, i + 1)?;
        dataset.evidence.push(features);
        dataset.labels.push(label);
    }

    if dataset.is_empty() {
        return Err(CsvError::EmptyFile);
    }
    debug!("Parsed {} sessions", dataset.len());
    Ok(dataset)
}

impl DataLoader for ShoppingLoader {
    type Error = CsvError;

    fn load<P: AsRef<Path>>(path: P) -> Result<Dataset, CsvError> {
        load_sessions(path)
    }
}
