//! View configuration
//!
//! Endianness, float read precision and bit-string order for a [`BinView`].
//! Values are layered with figment:
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed `BINVIEW_` (e.g. `BINVIEW_ENDIAN=BE`)
//! 2. `binview.json`, `binview.yaml`, `binview.toml` in the working directory
//! 3. Built-in defaults
//!
//! [`BinView`]: crate::view::BinView

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bytes::{BitOrder, Endian, FLOAT32_DEFAULT_PRECISION, FLOAT64_DEFAULT_PRECISION};
use crate::error::{BinViewError, Result};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "BINVIEW_";

/// Base name of the optional configuration files
pub const CONFIG_FILE_STEM: &str = "binview";

/// Settings a view threads into every codec call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Byte order of multi-byte values
    pub endian: Endian,
    /// Decimal places kept by 32-bit float reads
    pub float32_precision: usize,
    /// Decimal places kept by 64-bit float reads
    pub float64_precision: usize,
    /// Character order of bit-string rendering
    pub bit_order: BitOrder,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            endian: Endian::LittleEndian,
            float32_precision: FLOAT32_DEFAULT_PRECISION,
            float64_precision: FLOAT64_DEFAULT_PRECISION,
            bit_order: BitOrder::Reversed,
        }
    }
}

impl ViewConfig {
    /// Layered configuration sources, lowest priority first
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ViewConfig::default()))
            .merge(Toml::file(format!("{}.toml", CONFIG_FILE_STEM)))
            .merge(Yaml::file(format!("{}.yaml", CONFIG_FILE_STEM)))
            .merge(Json::file(format!("{}.json", CONFIG_FILE_STEM)))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load from defaults, working-directory files and environment
    pub fn load() -> Result<Self> {
        let config: ViewConfig = Self::figment().extract()?;
        debug!("Loaded view config: {:?}", config);
        Ok(config)
    }

    /// Load from a single file, choosing the format by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| BinViewError::config("Config file must have an extension"))?;

        let base = Figment::from(Serialized::defaults(ViewConfig::default()));
        let figment = match extension {
            "toml" => base.merge(Toml::file(path)),
            "yaml" | "yml" => base.merge(Yaml::file(path)),
            "json" => base.merge(Json::file(path)),
            _ => {
                return Err(BinViewError::config(format!(
                    "Unsupported config file format: {}",
                    extension
                )))
            },
        };

        let config: ViewConfig = figment.extract()?;
        debug!("Loaded view config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    pub fn with_float32_precision(mut self, precision: usize) -> Self {
        self.float32_precision = precision;
        self
    }

    pub fn with_float64_precision(mut self, precision: usize) -> Self {
        self.float64_precision = precision;
        self
    }

    pub fn with_bit_order(mut self, order: BitOrder) -> Self {
        self.bit_order = order;
        self
    }
}
