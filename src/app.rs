// std imports
use std::io::{BufRead, Write};

// third-party imports
use globmatch::{Case, Unit, glob_iter, glob_units};

// local imports
use crate::{
    error::{Error, Result},
    settings::UnitKind,
};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Print selected subjects, one per line.
    #[default]
    Lines,
    /// Print only the number of selected subjects.
    Count,
    /// Print nothing.
    Quiet,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub case: Case,
    pub units: UnitKind,
    pub invert: bool,
    pub output: OutputMode,
    pub max_stars: usize,
}

/// Selects subjects matching a single pattern.
#[derive(Debug)]
pub struct App {
    pattern: String,
    options: Options,
}

impl App {
    /// Creates the app after validating the pattern against the configured limits.
    pub fn new(pattern: impl Into<String>, options: Options) -> Result<Self> {
        let pattern = pattern.into();

        let stars = pattern.bytes().filter(|&b| b == u8::STAR).count();
        log::debug!("pattern {:?}: {} units, {} stars", pattern, pattern.len(), stars);
        if stars > options.max_stars {
            return Err(Error::TooManyWildcards {
                count: stars,
                limit: options.max_stars,
            });
        }

        Ok(Self { pattern, options })
    }

    /// Tests a subject given as raw bytes against the pattern.
    pub fn matches(&self, subject: &[u8]) -> bool {
        match self.options.units {
            UnitKind::Bytes => glob_units(self.pattern.as_bytes(), subject, self.options.case),
            UnitKind::Chars => match std::str::from_utf8(subject) {
                Ok(subject) => glob_iter(self.pattern.chars(), subject.chars(), self.options.case),
                Err(err) => {
                    log::debug!("skipping subject that is not valid utf-8: {}", err);
                    false
                }
            },
        }
    }

    fn selects(&self, subject: &[u8]) -> bool {
        self.matches(subject) != self.options.invert
    }

    /// Processes subjects given directly and returns the number of selected ones.
    pub fn run<I, S, W>(&self, subjects: I, output: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
        W: Write + ?Sized,
    {
        let mut selected = 0;
        for subject in subjects {
            selected += self.process(subject.as_ref(), output)?;
        }
        self.finish(selected, output)?;
        Ok(selected)
    }

    /// Processes lines of the inputs and returns the number of selected ones.
    ///
    /// Lines are delimited by `\n`, a trailing `\r` is not a part of the subject.
    pub fn run_lines<I, R, W>(&self, inputs: I, output: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = R>,
        R: BufRead,
        W: Write + ?Sized,
    {
        let mut selected = 0;
        let mut buf = Vec::new();
        for (i, mut input) in inputs.into_iter().enumerate() {
            let mut n = 0;
            loop {
                buf.clear();
                if input.read_until(b'\n', &mut buf)? == 0 {
                    break;
                }
                let line = trim_eol(&buf);
                n += self.process(line, output)?;
            }
            log::debug!("input #{}: {} selected", i, n);
            selected += n;
        }
        self.finish(selected, output)?;
        Ok(selected)
    }

    fn process<W: Write + ?Sized>(&self, subject: &[u8], output: &mut W) -> Result<usize> {
        if !self.selects(subject) {
            return Ok(0);
        }
        if self.options.output == OutputMode::Lines {
            output.write_all(subject)?;
            output.write_all(b"\n")?;
        }
        Ok(1)
    }

    fn finish<W: Write + ?Sized>(&self, selected: usize, output: &mut W) -> Result<()> {
        if self.options.output == OutputMode::Count {
            writeln!(output, "{}", selected)?;
        }
        output.flush()?;
        Ok(())
    }
}

fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests;
