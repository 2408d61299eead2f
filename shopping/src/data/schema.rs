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

use std::fmt;

use ndarray::{Array1, Array2};

use crate::error::DataError;

/// Number of feature columns in a session record.
pub const N_FEATURES: usize = 17;

/// How the raw text of a column is turned into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Month,
    VisitorType,
    Boolean,
}

/// The columns of the shopping sessions file, in file order.
///
/// The first [`N_FEATURES`] columns form the feature vector; `Revenue` is the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Administrative,
    AdministrativeDuration,
    Informational,
    InformationalDuration,
    ProductRelated,
    ProductRelatedDuration,
    BounceRates,
    ExitRates,
    PageValues,
    SpecialDay,
    Month,
    OperatingSystems,
    Browser,
    Region,
    TrafficType,
    VisitorType,
    Weekend,
    Revenue,
}

impl Column {
    pub const ALL: [Column; N_FEATURES + 1] = [
        Column::Administrative,
        Column::AdministrativeDuration,
        Column::Informational,
        Column::InformationalDuration,
        Column::ProductRelated,
        Column::ProductRelatedDuration,
        Column::BounceRates,
        Column::ExitRates,
        Column::PageValues,
        Column::SpecialDay,
        Column::Month,
        Column::OperatingSystems,
        Column::Browser,
        Column::Region,
        Column::TrafficType,
        Column::VisitorType,
        Column::Weekend,
        Column::Revenue,
    ];

    /// Header name as it appears in the file.
    pub fn name(self) -> &'static str {
        match self {
            Column::Administrative => "Administrative",
            Column::AdministrativeDuration => "Administrative_Duration",
            Column::Informational => "Informational",
            Column::InformationalDuration => "Informational_Duration",
            Column::ProductRelated => "ProductRelated",
            Column::ProductRelatedDuration => "ProductRelated_Duration",
            Column::BounceRates => "BounceRates",
            Column::ExitRates => "ExitRates",
            Column::PageValues => "PageValues",
            Column::SpecialDay => "SpecialDay",
            Column::Month => "Month",
            Column::OperatingSystems => "OperatingSystems",
            Column::Browser => "Browser",
            Column::Region => "Region",
            Column::TrafficType => "TrafficType",
            Column::VisitorType => "VisitorType",
            Column::Weekend => "Weekend",
            Column::Revenue => "Revenue",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::AdministrativeDuration
            | Column::InformationalDuration
            | Column::ProductRelatedDuration
            | Column::BounceRates
            | Column::ExitRates
            | Column::PageValues
            | Column::SpecialDay => ColumnKind::Float,
            Column::Month => ColumnKind::Month,
            Column::VisitorType => ColumnKind::VisitorType,
            Column::Weekend | Column::Revenue => ColumnKind::Boolean,
            _ => ColumnKind::Integer,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single feature value, keeping the integer/float distinction of its column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }
}

pub type FeatureRow = [Value; N_FEATURES];

/// Evidence rows and their purchase labels, index-aligned and in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub evidence: Vec<FeatureRow>,
    pub labels: Vec<u8>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Builds a subset from `indices`, keeping each row paired with its label.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            evidence: indices.iter().map(|&i| self.evidence[i]).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    /// Feature matrix of shape `(n_rows, N_FEATURES)`.
    pub fn features(&self) -> Result<Array2<f64>, DataError> {
        let flat: Vec<f64> =
            self.evidence.iter().flat_map(|row| row.iter().map(|v| v.as_f64())).collect();
        Ok(Array2::from_shape_vec((self.evidence.len(), N_FEATURES), flat)?)
    }

    pub fn targets(&self) -> Array1<u8> {
        Array1::from_vec(self.labels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(seed: i64) -> FeatureRow {
        let mut row = [Value::Int(0); N_FEATURES];
        row[0] = Value::Int(seed);
        row[1] = Value::Float(seed as f64 / 2.0);
        row
    }

    #[test]
    fn column_order_ends_with_label() {
        assert_eq!(Column::ALL[N_FEATURES], Column::Revenue);
        assert_eq!(Column::ALL[10].name(), "Month");
        assert_eq!(Column::ALL[16].name(), "Weekend");
    }

    #[test]
    fn column_kinds_follow_file_types() {
        assert_eq!(Column::Administrative.kind(), ColumnKind::Integer);
        assert_eq!(Column::ExitRates.kind(), ColumnKind::Float);
        assert_eq!(Column::SpecialDay.kind(), ColumnKind::Float);
        assert_eq!(Column::TrafficType.kind(), ColumnKind::Integer);
        assert_eq!(Column::Weekend.kind(), ColumnKind::Boolean);
    }

    #[test]
    fn select_keeps_pairing() {
        let dataset = Dataset { evidence: vec![row(0), row(1), row(2)], labels: vec![0, 1, 0] };
        let subset = dataset.select(&[2, 1]);
        assert_eq!(subset.evidence, vec![row(2), row(1)]);
        assert_eq!(subset.labels, vec![0, 1]);
    }

    #[test]
    fn features_are_row_major() {
        let dataset = Dataset { evidence: vec![row(3), row(4)], labels: vec![0, 1] };
        let features = dataset.features().unwrap();
        assert_eq!(features.shape(), &[2, N_FEATURES]);
        assert_eq!(features[[1, 0]], 4.0);
        assert_eq!(features[[1, 1]], 2.0);
        assert_eq!(features[[0, 1]], 1.5);
    }
}
