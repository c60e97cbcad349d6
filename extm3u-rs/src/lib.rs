//! # extm3u-rs
//! A library for parsing and generating extended m3u playlists,
//! including the `#EXTVLCOPT` options used by VLC
//!
//! # Example
//! ```rust
//! use extm3u_rs::{format::M3uEntry, parse, render};
//!
//! // 1. Parse
//! let playlist = parse(
//!     "#EXTM3U
//! #EXTINF:-1,Radio
//! #EXTVLCOPT:network-caching=1000
//! http://example.com/radio.mp3",
//! );
//! assert_eq!(playlist.entries[0].time, Some(-1));
//! assert_eq!(playlist.entries[0].options[0].1, "1000");
//!
//! // 2. Generate
//! let mut playlist = playlist;
//! playlist.push(M3uEntry::new("local.flac").with_time(180).with_title("Local"));
//! println!("{}", render(&playlist));
//! ```

mod builder;
pub mod format;
mod parser;
pub use builder::render;
pub use parser::*;
