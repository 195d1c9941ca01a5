// ============================================================================
// Monetary Configuration
// Key/value configuration source for default numeric context resolution
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Key holding an explicit default precision (non-negative integer)
pub const PRECISION_KEY: &str = "money.defaults.precision";

/// Key holding the rounding mode used with an explicit precision
pub const ROUNDING_MODE_KEY: &str = "money.defaults.roundingMode";

/// Key holding a canonical width name (DECIMAL32, DECIMAL64, DECIMAL128, UNLIMITED)
pub const MATH_CONTEXT_KEY: &str = "money.defaults.mathContext";

/// Environment variable naming a properties file to load
pub const CONFIG_FILE_ENV: &str = "MONEY_CONFIG";

/// Environment overrides, applied on top of the properties file
const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("MONEY_DEFAULTS_PRECISION", PRECISION_KEY),
    ("MONEY_DEFAULTS_ROUNDINGMODE", ROUNDING_MODE_KEY),
    ("MONEY_DEFAULTS_MATHCONTEXT", MATH_CONTEXT_KEY),
];

/// Fully qualified key names accepted in place of the short ones, so
/// existing `javamoney.properties` files keep resolving.
const KEY_ALIASES: [(&str, &str); 3] = [
    (PRECISION_KEY, "org.javamoney.moneta.Money.defaults.precision"),
    (ROUNDING_MODE_KEY, "org.javamoney.moneta.Money.defaults.roundingMode"),
    (MATH_CONTEXT_KEY, "org.javamoney.moneta.Money.defaults.mathContext"),
];

/// The fully qualified alias of a short key, if it has one.
pub fn key_alias(key: &str) -> Option<&'static str> {
    KEY_ALIASES
        .iter()
        .find(|(short, _)| *short == key)
        .map(|(_, alias)| *alias)
}

/// A read-only mapping from configuration keys to string values.
pub trait ConfigSource {
    /// Look up a key. Absent keys yield `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a key, falling back to its fully qualified alias.
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key)
            .or_else(|| key_alias(key).and_then(|alias| self.get(alias)))
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Errors raised while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The properties file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A line is neither a comment nor a `key=value` pair
    Parse { line: usize, content: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config file {}: {}", path.display(), source)
            },
            ConfigError::Parse { line, content } => {
                write!(f, "malformed config line {line}: {content:?}")
            },
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { .. } => None,
        }
    }
}

/// Process configuration for the money defaults.
///
/// Loaded from an optional properties file (`key=value` lines, `#` or `!`
/// comments) named by `MONEY_CONFIG`, then overridden by the
/// `MONEY_DEFAULTS_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonetaryConfig {
    entries: HashMap<String, String>,
}

impl MonetaryConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set a key
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Parse properties text.
    ///
    /// # Errors
    /// Returns `Parse` for a non-blank, non-comment line without `=` or `:`.
    pub fn from_properties(text: &str) -> Result<Self, ConfigError> {
        let mut entries = HashMap::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(pos) = line.find(['=', ':']) else {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    content: raw.to_string(),
                });
            };
            let key = line[..pos].trim();
            if key.is_empty() {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    content: raw.to_string(),
                });
            }
            entries.insert(key.to_string(), line[pos + 1..].trim().to_string());
        }
        Ok(Self { entries })
    }

    /// Read and parse a properties file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Parse` if it is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_properties(&text)
    }

    /// Load the process configuration: properties file first, environment on top.
    ///
    /// # Errors
    /// Propagates file errors when `MONEY_CONFIG` names an unreadable or malformed file.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_FILE_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::new(),
        };
        for (var, key) in ENV_OVERRIDES {
            if let Ok(value) = std::env::var(var) {
                config.entries.insert(key.to_string(), value);
            }
        }
        Ok(config)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigSource for MonetaryConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
