//! List command implementation

use std::io::Write;

use prng_core::GeneratorKind;
use tracing::info;

use crate::Result;

/// Run the list command
pub fn run(out: &mut impl Write) -> Result<()> {
    info!("Listing {} generators", GeneratorKind::ALL.len());

    writeln!(
        out,
        "{:<8} {:>10} {:>12} {:>12}",
        "name", "min", "max", "state bytes"
    )?;
    for kind in GeneratorKind::ALL {
        let descriptor = kind.descriptor();
        writeln!(
            out,
            "{:<8} {:>10} {:>12} {:>12}",
            descriptor.name, descriptor.range_min, descriptor.range_max, descriptor.state_size
        )?;
    }
    Ok(())
}
