mod builder;
mod classifier;
mod config;
mod detector;
mod engines;
mod environment;
mod error;
mod helpers;
mod os;
mod patterns;
mod probe;
mod rules;
mod types;
mod version;

pub use config::{DetectorConfig, LatestReleases};
pub use detector::Detector;
pub use environment::{Environment, SyntheticEnvironment};
pub use error::{Error, Result};
pub use probe::probe;
pub use types::*;
pub use version::{bound, format_version, UNKNOWN_OS_VERSION, UNKNOWN_VERSION};
