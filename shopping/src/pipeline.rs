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

use std::path::Path;

use log::{debug, info};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithms::KNN;
use crate::data::{load_data, train_test_split, Dataset, ShoppingLoader, SplitConfig};
use crate::error::{DataError, ShoppingError};
use crate::report::Report;

/// Configuration for a single train-and-evaluate run.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    test_size: f64,
    k: usize,
    normalize: bool,
    seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig { test_size: 0.4, k: 1, normalize: false, seed: None }
    }
}

impl ExperimentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Pins the random split. Without a seed every run draws a fresh one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// True and predicted labels of the held-out rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub labels: Array1<u8>,
    pub predictions: Array1<u8>,
}

/// Splits `dataset`, fits the classifier on the training side and predicts the test side.
pub fn evaluate_holdout<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Evaluation, ShoppingError> {
    let split_config = SplitConfig::new(config.test_size)?;
    let split = train_test_split(dataset, &split_config, rng)?;

    let x_train = split.train.features()?;
    let y_train = split.train.targets();
    let model = KNN::new().k(config.k).normalize(config.normalize).fit(&x_train, &y_train)?;

    let x_test = split.test.features()?;
    let predictions = model.predict(&x_test)?;
    debug!("Predicted {} held-out sessions", predictions.len());

    Ok(Evaluation { labels: split.test.targets(), predictions })
}

/// Loads `path`, trains on a random split and reports accuracy on the held-out rows.
pub fn run<P: AsRef<Path>>(path: P, config: &ExperimentConfig) -> Result<Report, ShoppingError> {
    info!("Starting shopping evaluation with config: {:?}", config);
    let dataset = load_data::<ShoppingLoader, _>(path).map_err(DataError::Csv)?;

    let mut rng = config.rng();
    let evaluation = evaluate_holdout(&dataset, config, &mut rng)?;
    let report = Report::new(&evaluation.labels, &evaluation.predictions)?;

    info!("Shopping evaluation completed successfully");
    Ok(report)
}
