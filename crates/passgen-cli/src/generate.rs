use crate::config::{Config, Mode};
use anyhow::Context;
use passgen::{
    PassphraseGenerator, PasswordGenerator, RandSource, SeededRandom, ThreadRandom, WordPool,
};
use std::io::Write;

/// Prints `config.count` secrets to `out`, one per line.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match config.seed {
        Some(seed) => generate(config, SeededRandom::new(seed), out),
        None => generate(config, ThreadRandom, out),
    }
}

fn generate<R: RandSource>(config: &Config, rng: R, out: &mut impl Write) -> anyhow::Result<()> {
    match &config.mode {
        Mode::Passphrase { options, wordlist } => {
            let custom;
            let pool = match wordlist {
                Some(path) => {
                    custom = WordPool::from_path(path)
                        .with_context(|| format!("failed to load word list {}", path.display()))?;
                    &custom
                }
                None => WordPool::try_large()?,
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(words = pool.len(), "word pool ready");

            let generator = PassphraseGenerator::new(pool, rng);
            for _ in 0..config.count {
                writeln!(out, "{}", generator.generate(options)?)?;
            }
        }
        Mode::Password(options) => {
            let generator = PasswordGenerator::new(rng);
            for _ in 0..config.count {
                writeln!(out, "{}", generator.generate(options)?)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
