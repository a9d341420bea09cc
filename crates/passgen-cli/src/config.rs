use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use passgen::{PassphraseOptions, PasswordOptions};
use std::path::PathBuf;

/// Command line configuration for the `passgen` binary.
///
/// Every flag can also be supplied through a `PASSGEN_*` environment variable
/// (or a `.env` file in the working directory). Flags win over the
/// environment.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "passgen",
    version,
    about = "Generate memorable passphrases and random passwords"
)]
pub struct CliArgs {
    /// Seed for a deterministic, non-secure random source.
    ///
    /// The same seed and arguments always print the same output. Omit it to
    /// use the operating system backed secure source.
    ///
    /// Environment variable: `PASSGEN_SEED`
    #[arg(long, global = true, env = "PASSGEN_SEED")]
    pub seed: Option<u64>,

    /// How many secrets to print, one per line.
    ///
    /// Environment variable: `PASSGEN_COUNT`
    #[arg(short = 'n', long, global = true, env = "PASSGEN_COUNT", default_value_t = 1)]
    pub count: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Words drawn from a word list, e.g. `Entrap8-Precision-Sectional`.
    Passphrase(PassphraseArgs),
    /// Random characters, e.g. `Pft6uN{S`.
    Password(PasswordArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PassphraseArgs {
    /// Number of words.
    ///
    /// Environment variable: `PASSGEN_WORDS`
    #[arg(short, long, env = "PASSGEN_WORDS", default_value_t = 3)]
    pub words: usize,

    /// Placed between words.
    ///
    /// Environment variable: `PASSGEN_SEPARATOR`
    #[arg(short, long, env = "PASSGEN_SEPARATOR", default_value_t = String::from("-"))]
    pub separator: String,

    /// Do not append a digit to one of the words.
    #[arg(long, default_value_t = false)]
    pub no_number: bool,

    /// Keep words lowercase.
    #[arg(long, default_value_t = false)]
    pub no_title_case: bool,

    /// Word list file with one word per line, instead of the bundled list.
    ///
    /// Environment variable: `PASSGEN_WORDLIST`
    #[arg(long, env = "PASSGEN_WORDLIST")]
    pub wordlist: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PasswordArgs {
    /// Total number of characters.
    ///
    /// Environment variable: `PASSGEN_LENGTH`
    #[arg(short, long, env = "PASSGEN_LENGTH", default_value_t = 8)]
    pub length: usize,

    /// Do not reserve a position for a special character.
    #[arg(long, default_value_t = false)]
    pub no_special: bool,

    /// Do not reserve a position for a digit.
    #[arg(long, default_value_t = false)]
    pub no_number: bool,
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Passphrase {
        options: PassphraseOptions,
        wordlist: Option<PathBuf>,
    },
    Password(PasswordOptions),
}

/// Validated configuration.
///
/// Word counts and password lengths are checked by the generators
/// themselves when `run` uses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub count: usize,
    pub mode: Mode,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("PASSGEN_COUNT must be greater than 0");
        }

        let mode = match args.command {
            Command::Passphrase(phrase) => Mode::Passphrase {
                options: PassphraseOptions::default()
                    .with_word_amount(phrase.words)
                    .with_separator(phrase.separator)
                    .with_number(!phrase.no_number)
                    .with_title_case(!phrase.no_title_case),
                wordlist: phrase.wordlist,
            },
            Command::Password(password) => Mode::Password(
                PasswordOptions::default()
                    .with_size(password.length)
                    .with_special(!password.no_special)
                    .with_number(!password.no_number),
            ),
        };

        Ok(Self {
            seed: args.seed,
            count: args.count,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Config> {
        let args = CliArgs::try_parse_from(core::iter::once("passgen").chain(args.iter().copied()))?;
        Config::try_from(args)
    }

    #[test]
    fn passphrase_defaults() {
        let config = parse(&["passphrase"]).unwrap();
        assert_eq!(config.count, 1);
        assert_eq!(config.seed, None);
        assert_eq!(
            config.mode,
            Mode::Passphrase {
                options: PassphraseOptions::default(),
                wordlist: None,
            }
        );
    }

    #[test]
    fn password_defaults() {
        let config = parse(&["password"]).unwrap();
        assert_eq!(config.mode, Mode::Password(PasswordOptions::default()));
    }

    #[test]
    fn passphrase_flags_map_to_options() {
        let config = parse(&[
            "passphrase",
            "--words",
            "5",
            "--separator",
            " ",
            "--no-number",
            "--no-title-case",
            "--wordlist",
            "words.txt",
        ])
        .unwrap();
        assert_eq!(
            config.mode,
            Mode::Passphrase {
                options: PassphraseOptions::default()
                    .with_word_amount(5)
                    .with_separator(" ")
                    .with_number(false)
                    .with_title_case(false),
                wordlist: Some(PathBuf::from("words.txt")),
            }
        );
    }

    #[test]
    fn password_flags_map_to_options() {
        let config = parse(&["password", "-l", "20", "--no-special"]).unwrap();
        assert_eq!(
            config.mode,
            Mode::Password(PasswordOptions::default().with_size(20).with_special(false))
        );
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let config = parse(&["password", "--seed", "7", "-n", "4"]).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.count, 4);

        let config = parse(&["--seed", "7", "--count", "4", "password"]).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.count, 4);
    }

    #[test]
    fn rejects_zero_count() {
        assert!(parse(&["--count", "0", "password"]).is_err());
    }

    #[test]
    fn generator_parameters_are_passed_through_unchecked() {
        let config = parse(&["password", "--length", "0"]).unwrap();
        assert_eq!(config.mode, Mode::Password(PasswordOptions::default().with_size(0)));

        let config = parse(&["passphrase", "--words", "0"]).unwrap();
        assert!(matches!(
            config.mode,
            Mode::Passphrase { ref options, .. } if options.word_amount == 0
        ));
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(parse(&[]).is_err());
    }
}
