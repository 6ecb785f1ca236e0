//! # hsmeta
//!
//! Fetches the HSReplay archetype list and the ranked deck popularity stats,
//! then writes the raw stats body to standard output.

use anyhow::Result;
use hsmeta::fetch::{self, Fetcher};
use hsmeta::logging;
use std::io;

fn main() -> Result<()> {
    logging::init();

    let fetcher = Fetcher::new()?;
    let stdout = io::stdout();
    fetch::run(&fetcher, &mut stdout.lock())
}
