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

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::schema::Dataset;
use crate::error::DataError;

/// Configuration for the train/test partition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    test_size: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig { test_size: 0.4 }
    }
}

impl SplitConfig {
    /// Fraction of rows held out for testing; must lie strictly between 0 and 1.
    pub fn new(test_size: f64) -> Result<Self, DataError> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(DataError::InvalidTestSize(test_size));
        }
        Ok(SplitConfig { test_size })
    }

    pub fn test_size(&self) -> f64 {
        self.test_size
    }
}

/// Training and test subsets of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
}

/// Shuffles `0..n_samples` and cuts it into `(train, test)` index sets.
///
/// The test side receives `ceil(test_size * n_samples)` indices.
pub fn split_indices<R: Rng + ?Sized>(
    n_samples: usize,
    config: &SplitConfig,
    rng: &mut R,
) -> Result<(Vec<usize>, Vec<usize>), DataError> {
    let n_test = (config.test_size * n_samples as f64).ceil() as usize;
    if n_test == 0 || n_test >= n_samples {
        return Err(DataError::EmptySplit { n_samples, test_size: config.test_size });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(rng);
    let test = indices.split_off(n_samples - n_test);
    debug!("Split data: train_size={}, test_size={}", indices.len(), test.len());
    Ok((indices, test))
}

/// Randomly partitions `dataset` into training and test subsets. No stratification.
pub fn train_test_split<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &SplitConfig,
    rng: &mut R,
) -> Result<Split, DataError> {
    let (train, test) = split_indices(dataset.len(), config, rng)?;
    Ok(Split { train: dataset.select(&train), test: dataset.select(&test) })
}
