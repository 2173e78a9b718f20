#![forbid(unsafe_code)]

//! Cheat sheet for Neovim.

use std::process::ExitCode;

fn main() -> ExitCode {
    tutor::run(tutor::catalogs::NVIM)
}
