//! AOC HTTP Client Library
//!
//! A small blocking client for downloading personalized puzzle input from the
//! Advent of Code website, authenticated with the site's session cookie.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Session cookie handled as sensitive data and zeroized after use
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//! let input = client.get_input(2023, 1, session)?;
//! println!("{} bytes of input", input.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
