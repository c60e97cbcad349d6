use smol_str::SmolStr;

/// A single item of a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct M3uEntry {
    /// Location of the media, a path or an url
    pub url: SmolStr,
    /// Display title. `Some("")` and `None` are rendered differently
    pub title: Option<SmolStr>,
    /// Duration in seconds, `-1` usually means unknown or live
    pub time: Option<i64>,
    /// `#EXTVLCOPT` key/value pairs in their original order
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Vec<(SmolStr, SmolStr)>,
}

impl M3uEntry {
    pub fn new(url: impl Into<SmolStr>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<SmolStr>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_time(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_option(mut self, key: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }
}
