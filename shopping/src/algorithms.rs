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

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, Axis, Zip};

use crate::error::{ModelError, ScalerError};
use crate::scalers::{Scaler, StandardScaler};

pub struct KNNBuilder {
    k: usize,
    normalize: bool,
    x_scaler: StandardScaler,
}

impl KNNBuilder {
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn scaler(mut self, scaler: StandardScaler) -> Self {
        self.x_scaler = scaler;
        self
    }

    /// Validates the training data and returns the fitted classifier.
    pub fn fit(mut self, x: &Array2<f64>, y: &Array1<u8>) -> Result<KNN, ModelError> {
        if x.ncols() == 0 {
            return Err(ModelError::Scaler(ScalerError::NoFeatures));
        }
        if x.is_empty() || y.is_empty() {
            return Err(ModelError::Scaler(ScalerError::EmptyInput));
        }
        if x.nrows() != y.len() {
            return Err(ModelError::Scaler(ScalerError::DimensionMismatch {
                expected: x.nrows(),
                actual: y.len(),
            }));
        }
        if self.k == 0 || self.k > x.nrows() {
            return Err(ModelError::Scaler(ScalerError::InvalidParameter));
        }

        let (x_train, x_scaler) = if self.normalize {
            (self.x_scaler.fit_transform(x)?, Some(self.x_scaler))
        } else {
            (x.clone(), None)
        };
        debug!(
            "Fitted KNN: k={}, samples={}, features={}, normalize={}",
            self.k,
            x_train.nrows(),
            x_train.ncols(),
            self.normalize
        );

        Ok(KNN { x_train, y_train: y.clone(), k: self.k, x_scaler })
    }
}

/// A fitted k-nearest-neighbor classifier over Euclidean distance.
///
/// Neighbors at equal distance are ordered by their training index, and a tied vote
/// goes to the smaller label.
#[derive(Debug, Clone)]
pub struct KNN {
    x_train: Array2<f64>,
    y_train: Array1<u8>,
    k: usize,
    x_scaler: Option<StandardScaler>,
}

impl KNN {
    pub fn new() -> KNNBuilder {
        KNNBuilder { k: 1, normalize: false, x_scaler: StandardScaler::new() }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<u8>, ModelError> {
        if x.is_empty() {
            return Err(ModelError::Scaler(ScalerError::EmptyInput));
        }
        if x.ncols() != self.x_train.ncols() {
            return Err(ModelError::Scaler(ScalerError::DimensionMismatch {
                expected: self.x_train.ncols(),
                actual: x.ncols(),
            }));
        }

        let x_scaled = match &self.x_scaler {
            Some(scaler) => scaler.transform(x)?,
            None => x.clone(),
        };

        let predictions = x_scaled.axis_iter(Axis(0)).map(|row| self.vote(row)).collect();
        Ok(predictions)
    }

    fn vote(&self, row: ArrayView1<f64>) -> u8 {
        // Squared distances order neighbors the same way as Euclidean ones.
        let mut neighbors: Vec<(usize, f64)> = self
            .x_train
            .axis_iter(Axis(0))
            .map(|v| {
                Zip::from(v).and(row).fold(0.0, |acc, &v_i, &row_i| {
                    let diff = v_i - row_i;
                    acc + diff * diff
                })
            })
            .enumerate()
            .collect();

        let by_distance =
            |a: &(usize, f64), b: &(usize, f64)| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0));
        neighbors.select_nth_unstable_by(self.k - 1, by_distance);

        let mut class_counts: HashMap<u8, usize> = HashMap::new();
        for &(idx, _) in &neighbors[..self.k] {
            *class_counts.entry(self.y_train[idx]).or_insert(0) += 1;
        }

        class_counts
            .into_iter()
            .max_by(|a, b| match a.1.cmp(&b.1) {
                Ordering::Equal => b.0.cmp(&a.0),
                other => other,
            })
            .map(|(label, _)| label)
            .unwrap_or(0)
    }

    pub fn accuracy(&self, predictions: &Array1<u8>, y_test: &Array1<u8>) -> f64 {
        let correct = predictions
            .iter()
            .zip(y_test.iter())
            .filter(|(&pred, &true_label)| pred == true_label)
            .count();
        correct as f64 / predictions.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, array};

    #[test]
    fn knn_single_neighbor() {
        let x = array![[0.0, 0.0], [10.0, 10.0], [0.0, 9.0]];
        let y = array![0, 1, 1];
        let knn = KNN::new().fit(&x, &y).unwrap();
        let x_test = array![[1.0, 1.0], [9.0, 9.5], [0.5, 7.0]];
        assert_eq!(knn.predict(&x_test).unwrap(), array![0u8, 1, 1]);
    }

    #[test]
    fn knn_exact_match_returns_training_label() {
        let x = array![[1.0, 2.0], [2.0, 3.0], [3.0, 3.0], [6.0, 5.0]];
        let y = array![0, 0, 1, 1];
        let knn = KNN::new().k(1).fit(&x, &y).unwrap();
        assert_eq!(knn.predict(&x).unwrap(), y);
    }

    #[test]
    fn knn_equal_distance_prefers_lower_index() {
        let x = array![[-1.0], [1.0]];
        let y = array![1, 0];
        let knn = KNN::new().fit(&x, &y).unwrap();
        assert_eq!(knn.predict(&array![[0.0]]).unwrap(), array![1u8]);
    }

    #[test]
    fn knn_majority_vote() {
        let x = array![[0.0], [1.0], [2.0], [10.0]];
        let y = array![1, 1, 0, 0];
        let knn = KNN::new().k(3).fit(&x, &y).unwrap();
        assert_eq!(knn.predict(&array![[0.5]]).unwrap(), array![1u8]);
    }

    #[test]
    fn knn_tied_vote_goes_to_smaller_label() {
        let x = array![[0.0], [1.0]];
        let y = array![1, 0];
        let knn = KNN::new().k(2).fit(&x, &y).unwrap();
        assert_eq!(knn.predict(&array![[0.2]]).unwrap(), array![0u8]);
    }

    #[test]
    fn knn_normalize_rescales_dominant_feature() {
        // Unscaled, the second column decides; standardised, the first does.
        let x = array![[0.0, 0.0], [1.0, 100.0], [0.1, 1000.0], [0.9, 1100.0]];
        let y = array![0, 1, 0, 1];
        let x_test = array![[0.95, 0.0]];

        let raw = KNN::new().fit(&x, &y).unwrap();
        assert_eq!(raw.predict(&x_test).unwrap(), array![0u8]);

        let scaled = KNN::new().normalize(true).scaler(StandardScaler::new()).fit(&x, &y).unwrap();
        assert_eq!(scaled.predict(&x_test).unwrap(), array![1u8]);
    }

    #[test]
    fn knn_accuracy() {
        let x = array![[0.0], [1.0]];
        let y = array![0, 1];
        let knn = KNN::new().fit(&x, &y).unwrap();
        let predictions = array![0, 1, 1, 1];
        let actuals = array![0, 1, 0, 0];
        assert!((knn.accuracy(&predictions, &actuals) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn knn_invalid_k() {
        let x = array![[1.0, 2.0], [2.0, 3.0]];
        let y = array![1, 0];
        let result = KNN::new().k(5).fit(&x, &y);
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::InvalidParameter))));
        let result = KNN::new().k(0).fit(&x, &y);
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::InvalidParameter))));
    }

    #[test]
    fn knn_empty_input() {
        let x: Array2<f64> = Array2::zeros((0, 2));
        let y: Array1<u8> = Array1::zeros(0);
        let result = KNN::new().fit(&x, &y);
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::EmptyInput))));
    }

    #[test]
    fn knn_no_features() {
        let x: Array2<f64> = Array2::zeros((2, 0));
        let y = array![1, 0];
        let result = KNN::new().fit(&x, &y);
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::NoFeatures))));
    }

    #[test]
    fn knn_dimension_mismatch() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1, 0, 1];
        let result = KNN::new().fit(&x, &y);
        assert!(matches!(
            result,
            Err(ModelError::Scaler(ScalerError::DimensionMismatch { expected: 2, actual: 3 }))
        ));
    }

    #[test]
    fn knn_predict_dimension_mismatch() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1, 0];
        let knn = KNN::new().k(1).fit(&x, &y).unwrap();
        let x_test = array![[1.0, 2.0, 3.0]];
        let result = knn.predict(&x_test);
        assert!(matches!(
            result,
            Err(ModelError::Scaler(ScalerError::DimensionMismatch { expected: 2, actual: 3 }))
        ));
    }

    #[test]
    fn knn_predict_empty_input() {
        let knn = KNN::new().fit(&array![[1.0]], &array![1]).unwrap();
        let result = knn.predict(&Array2::zeros((0, 1)));
        assert!(matches!(result, Err(ModelError::Scaler(ScalerError::EmptyInput))));
    }
}
