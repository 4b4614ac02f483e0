#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    Regex(#[from] fancy_regex::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
    /// An environment getter failed while being probed.
    #[error("probe of `{path}` failed: {reason}")]
    Probe { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
