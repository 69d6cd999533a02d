//! State command implementation

use std::io::Write;

use prng_core::{Generator, RandomEngine};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the state command
///
/// Seeds the configured generator, discards `skip` draws and prints either
/// the human-readable dump or the JSON snapshot.
pub fn run(config: &CliConfig, skip: u64, json: bool, out: &mut impl Write) -> Result<()> {
    info!(
        "Dumping {} state (seed {}, skip {})",
        config.generator, config.seed, skip
    );

    let mut rng = Generator::new(config.generator, config.seed);
    rng.discard(skip);

    if json {
        serde_json::to_writer_pretty(&mut *out, &rng.state())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", rng)?;
    }
    Ok(())
}
