//! Configuration resolution from CLI args

use crate::cli::{Args, Selector};
use crate::error::CliError;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Resolved runtime configuration
pub struct Config {
    /// Which day(s) to run
    pub selector: Selector,
    /// Year to run
    pub year: u16,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Answer knowledge file path
    pub knowledge_file: PathBuf,
    /// Session cookie from AOC_SESSION, zeroized on drop.
    /// Absence is non-fatal; it only disables remote input fetching.
    pub session: Option<Zeroizing<String>>,
}

impl Config {
    /// Build config from CLI args, resolving paths and the session env var
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let selector = Selector::parse(args.selector.as_deref()).map_err(CliError::Usage)?;
        let session = std::env::var("AOC_SESSION").ok().map(Zeroizing::new);

        Ok(Config {
            selector,
            year: args.year,
            cache_dir: expand_tilde(&args.cache_dir),
            knowledge_file: args.knowledge_file,
            session,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion_only_touches_leading_tilde() {
        let plain = PathBuf::from("/tmp/aoc");
        assert_eq!(expand_tilde(&plain), plain);

        let embedded = PathBuf::from("/tmp/~aoc");
        assert_eq!(expand_tilde(&embedded), embedded);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/x")), home.join("x"));
        }
    }
}
