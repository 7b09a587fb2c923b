use crate::geometry::{Layout, Map, MapError, Orientation, Point};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file, under the user's config directory.
///
/// `None` when the platform has no notion of a config directory.
pub fn path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("hexmap").join("config.toml"))
}

/// How a map and its pixel layout are set up.
///
/// Any key may be omitted from a configuration file; missing keys take their
/// default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Orientation of the hexagons.
    pub orientation: Orientation,

    /// Number of rings of tiles around the origin hex.
    pub radius: u32,

    /// Center-to-corner size of each hex, per axis.
    pub hex_size: Point,

    /// Pixel position of the center of the origin hex.
    pub origin: Point,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            orientation: Orientation::Pointy,
            radius: 5,
            hex_size: Point::new(24.0, 24.0),
            origin: Point::new(320.0, 240.0),
        }
    }
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self, Error> {
        toml::from_str(data).map_err(Into::into)
    }

    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&path().ok_or(Error::NoConfigDir)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = self.to_toml()?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(&path().ok_or(Error::NoConfigDir)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml(&data)
    }

    /// Load from the default location, falling back to defaults if there is no file there.
    ///
    /// A file which exists but cannot be read or parsed is still an error.
    pub fn load_or_default() -> Result<Self, Error> {
        match Self::load() {
            Err(Error::CouldNotLoad(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("no configuration file found; using defaults");
                Ok(Self::default())
            }
            Err(Error::NoConfigDir) => {
                log::warn!("no configuration directory; using defaults");
                Ok(Self::default())
            }
            result => result,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.orientation, self.hex_size, self.origin)
    }

    /// Build a fresh map as configured.
    pub fn build_map(&self) -> Result<Map, MapError> {
        Map::new(self.origin, self.hex_size, self.radius)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no configuration directory is available")]
    NoConfigDir,
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
