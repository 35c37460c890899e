// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate clap;
extern crate regex;
#[macro_use]
extern crate log;
extern crate log4rs;
#[macro_use]
extern crate error_chain;

// For testing in submodules
#[cfg(test)]
extern crate rand;

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

mod action;
mod apply;
mod context;
mod directive;
mod error;
mod mapping;

#[cfg(test)]
mod testutils;

use apply::apply_builds;
use context::{default_target_dir, ApplyContext};
use directive::mappings_from_file;
use error::*;
use mapping::*;

use std::path::PathBuf;

fn main() {
    let argument_matches = create_app().get_matches();

    if let Err(ref error) = configure_logging(argument_matches.occurrences_of("v"),
                                              argument_matches.is_present("quiet")) {
        eprintln!("Unable to configure logging: {}", error);
        ::std::process::exit(1);
    }

    // If there was an error, nicely print it and the related causes
    if let Err(ref error) = run(argument_matches) {
        error!("Error: {}", error);
        for cause in error.iter().skip(1) {
            error!("caused by: {}", cause);
        }
        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}

fn create_app<'a,'b>() -> App<'a,'b> {
    App::new("apply-build")
        .version("0.1")
        .about("Copies civilization AI build files into the game data directory")
        .arg(
            Arg::with_name("source-dir")
                .short("s")
                .long("source-dir")
                .value_name("DIRECTORY")
                .help("Sets the directory to read the source build files from")
                .takes_value(true)
                .default_value("."),
        )
        .arg(
            Arg::with_name("target-dir")
                .short("t")
                .long("target-dir")
                .value_name("DIRECTORY")
                .help("Sets the directory to copy build files into [default: <source-dir>/../data2]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("mapping-file")
                .short("m")
                .long("mapping")
                .value_name("FILE")
                .help("Reads the source -> targets mapping from a file instead of the built-in table")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .conflicts_with("quiet")
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Only prints warnings and errors"),
        )
        .arg(
            Arg::with_name("dry-run")
                .short("n")
                .long("dry-run")
                .help("Sets whether or not to actually write to the filesystem"),
        )
}

fn log_level(verbosity: u64, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn configure_logging(verbosity: u64, quiet: bool) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h({m})}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(log_level(verbosity, quiet)))
        .map_err(|errors| Error::from(format!("Invalid logging configuration: {}", errors)))?;
    log4rs::init_config(config)
        .map_err(|error| Error::from(format!("Unable to install logger: {}", error)))?;
    Ok(())
}

fn run(matches: ArgMatches) -> Result<()> {
    let mappings: Vec<BuildMapping> = match matches.value_of("mapping-file") {
        Some(file) => mappings_from_file(&PathBuf::from(file))?,
        None => default_mappings(),
    };

    // Safe to unwrap, as we have a default
    let source_dir = PathBuf::from(matches.value_of("source-dir").unwrap());
    let target_dir = match matches.value_of("target-dir") {
        Some(dir) => PathBuf::from(dir),
        None => default_target_dir(&source_dir),
    };

    let context = ApplyContext {
        source_dir,
        target_dir,
        dry_run: matches.is_present("dry-run"),
    };
    info!("sourceDir: {}", context.source_dir.to_string_lossy());
    info!("targetDir: {}", context.target_dir.to_string_lossy());
    if context.dry_run {
        info!("Dry run, no files will be written");
    }

    let summary = apply_builds(&mappings, &context);
    summary.log();

    Ok(())
}
