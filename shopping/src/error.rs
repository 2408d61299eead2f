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

use thiserror::Error;

use crate::data::schema::Column;

#[derive(Error, Debug)]
pub enum ShoppingError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("Test size must lie strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    #[error("Splitting {n_samples} samples with test size {test_size} leaves an empty subset")]
    EmptySplit { n_samples: usize, test_size: f64 },

    #[error("Failed to shape data into array: {0}")]
    ArrayShape(#[from] ndarray::ShapeError),
}

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("Failed to open file: {0}")]
    FileOpen(#[from] std::io::Error),

    #[error("CSV file is empty")]
    EmptyFile,

    #[error("Header has {actual} columns, expected {expected}")]
    HeaderLength { actual: usize, expected: usize },

    #[error("Header mismatch at column {index}: expected '{expected}', found '{found}'")]
    HeaderMismatch { index: usize, expected: &'static str, found: String },

    #[error("Inconsistent column count: row {row} has {actual} columns, expected {expected}")]
    InconsistentColumns { row: usize, actual: usize, expected: usize },

    #[error("Invalid numeric value '{value}' for {column} at row {row}")]
    InvalidNumeric { column: Column, value: String, row: usize },

    #[error("Unknown category '{value}' for {column} at row {row}")]
    UnknownCategory { column: Column, value: String, row: usize },

    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ScalerError {
    #[error("Input data is empty")]
    EmptyInput,

    #[error("Input has no feature columns")]
    NoFeatures,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model or scaler used before fitting")]
    NotFitted,

    #[error("Invalid parameter")]
    InvalidParameter,
}

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Scaler error: {0}")]
    Scaler(#[from] ScalerError),
}

#[derive(Error, Debug, PartialEq)]
pub enum MetricsError {
    #[error("Labels and predictions differ in length: {labels} vs {predictions}")]
    LengthMismatch { labels: usize, predictions: usize },

    #[error("Label {value} at position {index} is not binary")]
    NonBinaryLabel { index: usize, value: u8 },

    #[error("{rate} is undefined: the test labels contain no {class} examples")]
    UndefinedRate { rate: &'static str, class: &'static str },
}
