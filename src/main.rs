//!
//! brandkit  -- Marketing assets on demand
//!

             extern crate brandkit;
             extern crate clap;
             extern crate exitcode;
#[macro_use] extern crate lazy_static;
             extern crate slog;
             extern crate slog_envlogger;
             extern crate slog_scope;
             extern crate slog_stdlog;
             extern crate slog_term;
#[macro_use] extern crate log;

#[cfg(test)] #[macro_use] extern crate spectral;


mod args;
mod logging;


use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::exit;

use brandkit::{cover, deck, CoverConfig};

use args::Command;


/// Git revision the binary was built from, if known.
const REVISION: &str = include_str!(concat!(env!("OUT_DIR"), "/revision"));

lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("brandkit");

    /// Application version, as filled out by Cargo,
    /// with the Git revision appended when available.
    static ref VERSION: Option<String> = option_env!("CARGO_PKG_VERSION").map(|version| {
        match REVISION.trim() {
            "" => version.to_owned(),
            rev => format!("{} (rev {})", version, rev),
        }
    });
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        // Help and version requests also end up here, but aren't failures.
        let code = if e.use_stderr() { exitcode::USAGE } else { exitcode::OK };
        if let Err(io_err) = e.print() {
            eprintln!("Failed to print usage: {}", io_err);
        }
        exit(code);
    });

    logging::init(opts.verbosity).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logging: {}", e);
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let output_path = opts.command.output_path();
    match opts.command {
        Command::Cover{ref fonts, ..} => {
            let mut config = CoverConfig::default();
            if !fonts.is_empty() {
                config.font_candidates = fonts.clone();
            }
            let output = cover::render(&config).unwrap_or_else(|e| {
                error!("Error while rendering the cover: {}", e);
                exit(exitcode::SOFTWARE);
            });
            write_output(output_path, output.bytes());
            println!("Created: {}", output_path.display());
            println!("Size: {:?}", output.dimensions());
        }
        Command::Deck{..} => {
            let bytes = deck::render().unwrap_or_else(|e| {
                error!("Error while creating the deck: {}", e);
                exit(exitcode::SOFTWARE);
            });
            write_output(output_path, &bytes);
            let name = output_path.file_name().unwrap_or(output_path.as_os_str());
            println!("PowerPoint created: {}", Path::new(name).display());
        }
    }
}


/// Write the generated asset to a file, exiting the program on failure.
fn write_output(path: &Path, bytes: &[u8]) {
    trace!("Opening output file {}...", path.display());
    let file = fs::OpenOptions::new()
        .create(true).write(true).truncate(true)
        .open(path).unwrap_or_else(|e| {
            error!("Failed to open output file {} for writing: {}", path.display(), e);
            exit(exitcode::CANTCREAT);
        });
    debug!("File {} opened successfully", path.display());

    write_all(file, bytes).unwrap_or_else(|e| {
        error!("Failed to write {} bytes to {}: {}", bytes.len(), path.display(), e);
        if let Some(cause) = e.source() {
            debug!("Caused by: {}", cause);
        }
        exit(exitcode::IOERR);
    });
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
}

fn write_all<W: Write>(output: W, bytes: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(output);
    writer.write_all(bytes)?;
    writer.flush()
}
