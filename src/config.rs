// std imports
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};

// local imports
use crate::{
    error::Result,
    settings::{DEFAULT_SETTINGS, Settings},
};

// ---

pub const APP_NAME: &str = "wildglob";

/// Starts building a configuration from the embedded defaults,
/// the user configuration file and then the given files, in that order.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().into()).collect())
}

/// Path of the user configuration file without extension.
pub fn user_config_stem() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config"))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file.
    pub fn no_default(mut self, val: bool) -> Self {
        self.no_default = val;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        if !self.no_default {
            if let Some(stem) = user_config_stem() {
                log::debug!("user configuration file: {}.*", stem.display());
                builder = builder.add_source(File::from(stem).required(false));
            }
        }

        for path in self.paths {
            log::debug!("configuration file: {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
