//! Input provider: local cache with on-demand remote fetch
//!
//! Absent input is a first-class outcome, not an error: the provider prints
//! a one-line diagnostic and returns `None`, and the runner skips the day.

use aoc_http_client::AocClient;
use std::fs;
use std::io;
use std::path::PathBuf;
use zeroize::Zeroizing;

use crate::output;

/// Source of per-day input lines. The runner only depends on this trait, so
/// tests can substitute a canned source.
pub trait InputSource {
    /// The day's input as non-blank lines, or `None` when unavailable.
    fn fetch(&self, year: u16, day: u8) -> Option<Vec<String>>;
}

/// File-based cache for puzzle inputs: one plain-text file per (year, day),
/// cached indefinitely. Stale input must be deleted manually.
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Cache file path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Cached raw input, or None on a cache miss
    pub fn get(&self, year: u16, day: u8) -> io::Result<Option<String>> {
        let path = self.cache_path(year, day);
        if path.exists() {
            fs::read_to_string(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Store raw input, creating the cache directory if needed
    pub fn put(&self, year: u16, day: u8, input: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.cache_path(year, day), input)
    }
}

/// Split a raw input body into non-blank lines.
pub fn non_blank_lines(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Cache-first provider that falls back to fetching from adventofcode.com
/// with the `AOC_SESSION` cookie. A missing credential or a failed fetch is
/// reported as a diagnostic and produces `None`.
pub struct InputProvider {
    cache: InputCache,
    session: Option<Zeroizing<String>>,
    client: Option<AocClient>,
}

impl InputProvider {
    pub fn new(cache: InputCache, session: Option<Zeroizing<String>>) -> Self {
        // Only worth building a client when a credential exists
        let client = match &session {
            Some(_) => match AocClient::new() {
                Ok(client) => Some(client),
                Err(e) => {
                    output::warn(format!("Could not initialize HTTP client: {e}"));
                    None
                }
            },
            None => None,
        };
        Self {
            cache,
            session,
            client,
        }
    }
}

impl InputSource for InputProvider {
    fn fetch(&self, year: u16, day: u8) -> Option<Vec<String>> {
        match self.cache.get(year, day) {
            Ok(Some(body)) => return Some(non_blank_lines(&body)),
            Ok(None) => {}
            Err(e) => {
                output::warn(format!("Failed to read cached input for day {day}: {e}"));
                return None;
            }
        }

        let Some(session) = &self.session else {
            output::warn(format!(
                "No cached input for day {day} and AOC_SESSION is not set"
            ));
            return None;
        };
        let client = self.client.as_ref()?;

        match client.get_input(year, day, session) {
            Ok(body) => {
                if let Err(e) = self.cache.put(year, day, &body) {
                    output::warn(format!("Failed to cache input for day {day}: {e}"));
                }
                Some(non_blank_lines(&body))
            }
            Err(e) => {
                output::warn(format!("Failed to fetch input for {year} day {day}: {e}"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cache_path_format() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());

        let path = cache.cache_path(2023, 1);
        assert!(path.to_string_lossy().ends_with("2023_day01.txt"));
        let path = cache.cache_path(2023, 25);
        assert!(path.to_string_lossy().ends_with("2023_day25.txt"));
    }

    #[test]
    fn cache_roundtrip() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().join("inputs"));

        assert!(cache.get(2023, 1).unwrap().is_none());

        cache.put(2023, 1, "a\nb\n").unwrap();
        assert_eq!(cache.get(2023, 1).unwrap(), Some("a\nb\n".to_string()));
    }

    #[test]
    fn blank_lines_are_filtered() {
        assert_eq!(non_blank_lines("a\n\n  \nb\n"), vec!["a", "b"]);
        assert!(non_blank_lines("\n \n").is_empty());
    }

    #[test]
    fn cache_hit_without_session() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());
        cache.put(2023, 7, "x\ny\n\n").unwrap();

        let provider = InputProvider::new(InputCache::new(temp.path().to_path_buf()), None);
        assert_eq!(provider.fetch(2023, 7), Some(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn miss_without_session_is_absent() {
        let temp = TempDir::new().unwrap();
        let provider = InputProvider::new(InputCache::new(temp.path().to_path_buf()), None);
        assert_eq!(provider.fetch(2023, 7), None);
    }
}
