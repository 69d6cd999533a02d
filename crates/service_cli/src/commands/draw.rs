//! Draw command implementation
//!
//! Integers and doubles come from the selected generator of an
//! [`RngContext`]; normal variates go through the `rand_distr` bridge.

use std::io::Write;

use prng_core::{Generator, RngContext, SampleRng};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// What to print for each draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Raw integers in the generator's declared range
    Ints,
    /// Doubles in `[0, 1)`
    Doubles,
    /// Standard normal variates
    Normal,
}

impl DrawMode {
    /// Pick the mode from the `--doubles` and `--normal` flags
    pub fn from_flags(doubles: bool, normal: bool) -> Self {
        match (doubles, normal) {
            (_, true) => DrawMode::Normal,
            (true, false) => DrawMode::Doubles,
            (false, false) => DrawMode::Ints,
        }
    }
}

/// Run the draw command
pub fn run(config: &CliConfig, mode: DrawMode, out: &mut impl Write) -> Result<()> {
    info!(
        "Drawing {} values from {} (seed {})",
        config.count, config.generator, config.seed
    );

    match mode {
        DrawMode::Ints | DrawMode::Doubles => {
            let mut ctx = RngContext::with_default(config.generator);
            ctx.seed(config.seed);
            for _ in 0..config.count {
                if mode == DrawMode::Ints {
                    writeln!(out, "{}", ctx.next_int())?;
                } else {
                    writeln!(out, "{:.12}", ctx.next_double())?;
                }
            }
        }
        DrawMode::Normal => {
            let engine = Generator::new(config.generator, config.seed);
            let mut rng = SampleRng::from_engine(engine, config.seed);
            let mut buffer = vec![0.0; config.count];
            rng.fill_normal(&mut buffer);
            for z in buffer {
                writeln!(out, "{:.12}", z)?;
            }
        }
    }

    info!("Draw complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use prng_core::GeneratorKind;

    fn config(generator: GeneratorKind, seed: i64, count: usize) -> CliConfig {
        CliConfig {
            generator,
            seed,
            count,
            ..CliConfig::default()
        }
    }

    fn draw(config: &CliConfig, mode: DrawMode) -> Vec<String> {
        let mut out = Vec::new();
        run(config, mode, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(DrawMode::from_flags(false, false), DrawMode::Ints);
        assert_eq!(DrawMode::from_flags(true, false), DrawMode::Doubles);
        assert_eq!(DrawMode::from_flags(false, true), DrawMode::Normal);
    }

    #[test]
    fn test_mrg_integers() {
        let lines = draw(&config(GeneratorKind::Mrg, 1, 3), DrawMode::Ints);
        assert_eq!(lines, ["27730370", "1541506340", "924549294"]);
    }

    #[test]
    fn test_uni_doubles() {
        let lines = draw(&config(GeneratorKind::Uni, 305, 2), DrawMode::Doubles);
        let values: Vec<f64> = lines.iter().map(|l| l.parse().unwrap()).collect();
        assert_abs_diff_eq!(values[0], 0.027_832_880_64, epsilon = 1e-9);
        assert_abs_diff_eq!(values[1], 0.561_021_759_69, epsilon = 1e-9);
    }

    #[test]
    fn test_normal_draws_are_reproducible() {
        let cfg = config(GeneratorKind::Taus, 7, 50);
        let first = draw(&cfg, DrawMode::Normal);
        assert_eq!(first.len(), 50);
        assert_eq!(first, draw(&cfg, DrawMode::Normal));
    }

    #[test]
    fn test_zero_count_prints_nothing() {
        assert!(draw(&config(GeneratorKind::Ranf, 0, 0), DrawMode::Ints).is_empty());
    }
}
