// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use dice_roll::presentation::cli::{self, Cli};

// No subscriber is installed: stdout carries only the roll output.
fn main() {
    let exit_code = cli::run(Cli::parse());
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
