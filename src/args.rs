//! Module for handling command line arguments.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{self, Arg, ArgAction, ArgMatches, Command as Parser};

use brandkit::{cover, deck};
use super::{NAME, VERSION};


/// Parse command line arguments and return `Options` object.
#[inline]
pub fn parse() -> clap::error::Result<Options> {
    parse_from_argv(env::args_os())
}

/// Parse application options from given array of arguments
/// (*all* arguments, including binary name).
#[inline]
pub fn parse_from_argv<I, T>(argv: I) -> clap::error::Result<Options>
    where I: IntoIterator<Item=T>, T: Clone + Into<OsString>
{
    let parser = create_parser();
    let matches = parser.try_get_matches_from(argv)?;
    Options::try_from(matches)
}


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,
    /// What to generate.
    pub command: Command,
}

#[allow(dead_code)]
impl Options {
    #[inline]
    pub fn verbose(&self) -> bool { self.verbosity > 0 }
    #[inline]
    pub fn quiet(&self) -> bool { self.verbosity < 0 }
}

/// Asset to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Cover {
        output_path: PathBuf,
        /// Font files to try before the built-in one.
        /// Empty means the default candidates.
        fonts: Vec<PathBuf>,
    },
    Deck {
        output_path: PathBuf,
    },
}

impl Command {
    pub fn output_path(&self) -> &PathBuf {
        match *self {
            Command::Cover{ref output_path, ..} => output_path,
            Command::Deck{ref output_path} => output_path,
        }
    }
}

impl TryFrom<ArgMatches> for Options {
    type Error = clap::Error;

    fn try_from(matches: ArgMatches) -> Result<Self, Self::Error> {
        let verbose_count = matches.get_count(OPT_VERBOSE) as isize;
        let quiet_count = matches.get_count(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let command = match matches.subcommand() {
            Some((CMD_COVER, sub)) => Command::Cover{
                output_path: output_path(sub, cover::DEFAULT_OUTPUT),
                fonts: sub.get_many::<PathBuf>(OPT_FONT)
                    .map(|fonts| fonts.cloned().collect())
                    .unwrap_or_default(),
            },
            Some((CMD_DECK, sub)) => Command::Deck{
                output_path: output_path(sub, deck::DEFAULT_OUTPUT),
            },
            _ => return Err(clap::Error::new(ErrorKind::MissingSubcommand)),
        };

        Ok(Options{verbosity, command})
    }
}

fn output_path(matches: &ArgMatches, default: &str) -> PathBuf {
    matches.get_one::<PathBuf>(OPT_OUTPUT).cloned()
        .unwrap_or_else(|| PathBuf::from(default))
}


// Parser configuration

lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const CMD_COVER: &str = "cover";
const CMD_DECK: &str = "deck";

const OPT_VERBOSE: &str = "verbose";
const OPT_QUIET: &str = "quiet";
const OPT_OUTPUT: &str = "output";
const OPT_FONT: &str = "font";


/// Create the parser for application's command line.
fn create_parser() -> Parser {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = VERSION.as_deref() {
        parser = parser.version(version);
    }
    parser
        .about(*ABOUT)
        .subcommand_required(true)
        .arg_required_else_help(true)

        // Verbosity flags.
        .arg(Arg::new(OPT_VERBOSE)
            .long("verbose").short('v')
            .action(ArgAction::Count)
            .global(true)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::new(OPT_QUIET)
            .long("quiet").short('q')
            .action(ArgAction::Count)
            .global(true)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))

        .subcommand(Parser::new(CMD_COVER)
            .about("Render the LinkedIn cover image (PNG)")
            .arg(output_arg(cover::DEFAULT_OUTPUT))
            .arg(Arg::new(OPT_FONT)
                .long("font").value_name("PATH")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Font file to try, in order (may be repeated)")))
        .subcommand(Parser::new(CMD_DECK)
            .about("Create the proposal slide deck (PPTX)")
            .arg(output_arg(deck::DEFAULT_OUTPUT)))
}

fn output_arg(default: &'static str) -> Arg {
    Arg::new(OPT_OUTPUT)
        .long("output").short('o').value_name("PATH")
        .value_parser(clap::value_parser!(PathBuf))
        .help(format!("File to write the result to [default: {}]", default))
}


#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::error::ErrorKind;
    use spectral::prelude::*;

    use brandkit::{cover, deck};
    use super::{parse_from_argv, Command};
    use crate::NAME;

    #[test]
    fn no_args() {
        assert_that!(parse_from_argv(Vec::<&str>::new())).is_err();
        assert_that!(parse_from_argv(vec![*NAME])).is_err();
    }

    #[test]
    fn cover_defaults() {
        let opts = parse_from_argv(vec![*NAME, "cover"]).unwrap();
        assert_that!(opts.verbosity).is_equal_to(0);
        assert_that!(opts.command).is_equal_to(Command::Cover{
            output_path: PathBuf::from(cover::DEFAULT_OUTPUT),
            fonts: vec![],
        });
    }

    #[test]
    fn cover_with_fonts() {
        let opts = parse_from_argv(vec![
            *NAME, "cover", "-o", "out.png", "--font", "a.ttf", "--font", "b.ttc"]).unwrap();
        assert_that!(opts.command).is_equal_to(Command::Cover{
            output_path: PathBuf::from("out.png"),
            fonts: vec![PathBuf::from("a.ttf"), PathBuf::from("b.ttc")],
        });
        assert_that!(opts.command.output_path()).is_equal_to(&PathBuf::from("out.png"));
    }

    #[test]
    fn deck_defaults() {
        let opts = parse_from_argv(vec![*NAME, "deck"]).unwrap();
        assert_that!(opts.command.output_path())
            .is_equal_to(&PathBuf::from(deck::DEFAULT_OUTPUT));
    }

    #[test]
    fn deck_takes_no_fonts() {
        assert_that!(parse_from_argv(vec![*NAME, "deck", "--font", "a.ttf"])).is_err();
    }

    #[test]
    fn verbosity() {
        let opts = parse_from_argv(vec![*NAME, "-vv", "deck"]).unwrap();
        assert_that!(opts.verbosity).is_equal_to(2);
        assert_that!(opts.verbose()).is_true();

        let opts = parse_from_argv(vec![*NAME, "deck", "-q"]).unwrap();
        assert_that!(opts.verbosity).is_equal_to(-1);
        assert_that!(opts.quiet()).is_true();
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert_that!(parse_from_argv(vec![*NAME, "-v", "-q", "cover"])).is_err();
    }

    #[test]
    fn unknown_command() {
        let err = parse_from_argv(vec![*NAME, "poster"]).unwrap_err();
        assert_that!(err.kind()).is_equal_to(ErrorKind::InvalidSubcommand);
    }
}
