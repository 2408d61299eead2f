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

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use shopping::ExperimentConfig;

/// Trains a nearest-neighbor classifier on shopping sessions and reports how well it
/// predicts purchases on a held-out sample.
#[derive(Debug, Parser)]
#[command(name = "shopping", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// CSV file of shopping sessions
    data_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    let report = shopping::run(&cli.data_file, &ExperimentConfig::new())
        .with_context(|| format!("failed to evaluate {}", cli.data_file.display()))?;
    println!("{report}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_positional_argument() {
        let cli = Cli::try_parse_from(["shopping", "shopping.csv"]).unwrap();
        assert_eq!(cli.data_file, PathBuf::from("shopping.csv"));
    }

    #[test]
    fn missing_argument_is_a_usage_error() {
        let err = Cli::try_parse_from(["shopping"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn extra_argument_is_a_usage_error() {
        let err = Cli::try_parse_from(["shopping", "a.csv", "b.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_flag_is_not_accepted() {
        assert!(Cli::try_parse_from(["shopping", "--help"]).is_err());
    }
}
