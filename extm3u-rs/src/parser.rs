use std::{
    convert::Infallible,
    error::Error,
    fmt::Display,
    io::{self, Read},
    iter, mem,
    str::FromStr,
};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::format::{M3uEntry, M3uPlaylist, directives};

/// Parses a whole playlist from a reader
pub struct Parser<T: Read> {
    reader: T,
    playlist: M3uPlaylist,
}

impl<T: Read> Parser<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            playlist: M3uPlaylist::default(),
        }
    }

    /// Reads the reader to its end, the text must be UTF-8
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let mut buffer = String::new();
        self.reader.read_to_string(&mut buffer)?;
        self.playlist = parse(&buffer);

        Ok(())
    }

    pub fn get_result(&mut self) -> M3uPlaylist {
        mem::take(&mut self.playlist)
    }
}

#[derive(Debug)]
pub enum ParseError {
    IoError(io::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self::IoError(e) = self;
        write!(f, "Failed to read playlist: {}", e)
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let Self::IoError(e) = self;
        Some(e)
    }
}

impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

lazy_static! {
    /// Leading integer of a duration, `6.000` is `6` and `12abc` is `12`
    static ref DURATION_REGEX: Regex =
        Regex::new(r"^\s*([+-]?[0-9]+)").expect("Regular expression error");
}

fn parse_duration(input: &str) -> i64 {
    DURATION_REGEX
        .captures(input)
        .and_then(|x| x.get(1))
        .and_then(|x| x.as_str().parse().ok())
        .unwrap_or(0)
}

/// Trims whitespace and U+FEFF byte order marks
fn trim_line(line: &str) -> &str {
    line.trim_matches(|x: char| x.is_whitespace() || x == '\u{feff}')
}

/// Value of a directive line: whatever follows the marker and its delimiter
fn directive_value<'a>(line: &'a str, directive: &str) -> &'a str {
    let mut rest = line[directive.len()..].chars();
    rest.next();
    rest.as_str()
}

fn parse_media_info(entry: &mut M3uEntry, value: &str) {
    // only the first comma splits, the title keeps the rest
    let (duration, title) = value.split_once(',').unwrap_or((value, ""));
    entry.time = Some(parse_duration(duration));
    entry.title = Some(title.into());
}

fn parse_option(entry: &mut M3uEntry, value: &str) {
    match value.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => {
            entry.options.push((key.into(), value.into()));
        }
        _ => debug!("Dropping malformed option: {}", value),
    }
}

fn parse_tagged<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<M3uEntry> {
    let mut entries = Vec::new();
    let mut entry = M3uEntry::default();

    for line in lines.map(trim_line) {
        if line.starts_with(directives::EXTINF) {
            parse_media_info(&mut entry, directive_value(line, directives::EXTINF));
        } else if line.starts_with(directives::EXTVLCOPT) {
            parse_option(&mut entry, directive_value(line, directives::EXTVLCOPT));
        } else if !line.is_empty() {
            trace!("Media: {}", line);
            entry.url = line.into();
            entries.push(mem::take(&mut entry));
        }
    }

    if entry != M3uEntry::default() {
        debug!("Discarding trailing metadata without a media line");
    }

    entries
}

/// Parse a playlist from text. Never fails, unrecognized lines degrade instead:
/// text without the `#EXTM3U` header is read as one url per line.
pub fn parse(text: &str) -> M3uPlaylist {
    if text.is_empty() {
        return M3uPlaylist::default();
    }

    let text = text.replace("\r\n", "\n");
    let mut lines = text.split('\n');
    let Some(first) = lines.next() else {
        return M3uPlaylist::default();
    };

    if trim_line(first) != directives::EXTM3U {
        debug!("No {} header, reading raw urls", directives::EXTM3U);
        return iter::once(first)
            .chain(lines)
            .map(|x| M3uEntry::new(trim_line(x)))
            .collect();
    }

    M3uPlaylist::new(parse_tagged(lines))
}

impl FromStr for M3uPlaylist {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for M3uPlaylist {
    fn from(value: &str) -> Self {
        parse(value)
    }
}
