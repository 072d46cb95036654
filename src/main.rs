// std imports
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, stdin, stdout},
    path::Path,
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use wildglob::{
    App, Options, OutputMode, cli, config,
    error::{Error, Result},
};

const WILDGLOB_DEBUG_LOG: &str = "WILDGLOB_DEBUG_LOG";
const WILDGLOB_DEBUG_LOG_STYLE: &str = "WILDGLOB_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WILDGLOB_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(WILDGLOB_DEBUG_LOG)
                .write_style(WILDGLOB_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();

    let (configs, no_default) = opt.configs();
    let settings = config::at(configs).no_default(no_default).load()?;
    log::debug!("settings: {:?}", settings);

    let output = if opt.quiet {
        OutputMode::Quiet
    } else if opt.count {
        OutputMode::Count
    } else {
        OutputMode::Lines
    };

    let app = App::new(
        opt.pattern.as_str(),
        Options {
            case: opt.case(settings.case),
            units: opt.units.unwrap_or(settings.units),
            invert: opt.invert,
            output,
            max_stars: settings.max_stars,
        },
    )?;

    let mut output = BufWriter::new(stdout().lock());

    let selected = if !opt.subjects.is_empty() {
        log::debug!("matching {} subjects from arguments", opt.subjects.len());
        app.run(opt.subjects.iter().map(|s| s.as_encoded_bytes()), &mut output)?
    } else if !opt.inputs.is_empty() {
        let inputs = opt.inputs.iter().map(|path| open(path)).collect::<Result<Vec<_>>>()?;
        app.run_lines(inputs, &mut output)?
    } else {
        log::debug!("matching lines from stdin");
        app.run_lines([stdin().lock()], &mut output)?
    };

    Ok(selected != 0)
}

fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(stdin().lock()));
    }

    log::debug!("open {}", path.display());
    match File::open(path) {
        Ok(file) => Ok(Box::new(BufReader::new(file))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::FileNotFound {
            filename: path.to_string_lossy().into(),
        }),
        Err(err) => Err(err.into()),
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) if err.is_broken_pipe() => {}
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
