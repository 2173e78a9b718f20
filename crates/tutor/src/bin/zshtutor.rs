#![forbid(unsafe_code)]

//! Cheat sheet for zsh, fzf and the usual command-line helpers.

use std::process::ExitCode;

fn main() -> ExitCode {
    tutor::run(tutor::catalogs::ZSH)
}
