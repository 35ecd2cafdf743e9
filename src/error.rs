//! Construction-time errors.
//!
//! Lookups never fail: a phrase that matches nothing simply has no prefix.
//! Everything that can go wrong happens while turning configuration into an
//! engine, and is reported here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or building a
/// [`PrefixFinder`](crate::PrefixFinder).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `{name}` token names no known category.
    #[error("unknown placeholder '{{{name}}}' in template \"{template}\"")]
    UnknownPlaceholder { template: String, name: String },

    /// A token contains braces but is not a single `{name}` placeholder.
    #[error("malformed placeholder '{token}' in template \"{template}\"")]
    MalformedPlaceholder { template: String, token: String },

    /// The configuration file is not valid TOML for [`FinderConfig`](crate::FinderConfig).
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for engine construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
