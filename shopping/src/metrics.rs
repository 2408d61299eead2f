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

//! Binary classification metrics over 0/1 labels.

use ndarray::Array1;

use crate::error::MetricsError;

/// Counts of a binary confusion matrix: rows are true labels, columns predicted
/// labels, both ordered 0 then 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    pub tn: usize,
    pub fp: usize,
    pub fn_: usize,
    pub tp: usize,
}

impl ConfusionMatrix {
    pub fn from_labels(
        y_true: &Array1<u8>,
        y_pred: &Array1<u8>,
    ) -> Result<ConfusionMatrix, MetricsError> {
        if y_true.len() != y_pred.len() {
            return Err(MetricsError::LengthMismatch {
                labels: y_true.len(),
                predictions: y_pred.len(),
            });
        }

        let mut cm = ConfusionMatrix::default();
        for (index, (&truth, &pred)) in y_true.iter().zip(y_pred.iter()).enumerate() {
            match (truth, pred) {
                (0, 0) => cm.tn += 1,
                (0, 1) => cm.fp += 1,
                (1, 0) => cm.fn_ += 1,
                (1, 1) => cm.tp += 1,
                (0 | 1, value) | (value, _) => {
                    return Err(MetricsError::NonBinaryLabel { index, value });
                }
            }
        }
        Ok(cm)
    }

    pub fn correct(&self) -> usize {
        self.tn + self.tp
    }

    pub fn incorrect(&self) -> usize {
        self.fn_ + self.fp
    }

    /// True positive rate, `tp / (tp + fn)`.
    pub fn sensitivity(&self) -> Result<f64, MetricsError> {
        let positives = self.tp + self.fn_;
        if positives == 0 {
            return Err(MetricsError::UndefinedRate { rate: "sensitivity", class: "positive" });
        }
        Ok(self.tp as f64 / positives as f64)
    }

    /// True negative rate, `tn / (tn + fp)`.
    pub fn specificity(&self) -> Result<f64, MetricsError> {
        let negatives = self.tn + self.fp;
        if negatives == 0 {
            return Err(MetricsError::UndefinedRate { rate: "specificity", class: "negative" });
        }
        Ok(self.tn as f64 / negatives as f64)
    }
}

/// Returns `(sensitivity, specificity)` of `predictions` against `labels`.
pub fn evaluate(labels: &Array1<u8>, predictions: &Array1<u8>) -> Result<(f64, f64), MetricsError> {
    let cm = ConfusionMatrix::from_labels(labels, predictions)?;
    Ok((cm.sensitivity()?, cm.specificity()?))
}
