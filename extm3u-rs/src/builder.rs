use std::fmt::Display;

use crate::format::{M3uEntry, M3uPlaylist, directives};

/// Render a playlist into its textual form, the same as `playlist.to_string()`
pub fn render(playlist: &M3uPlaylist) -> String {
    playlist.to_string()
}

impl Display for M3uPlaylist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        writeln!(f, "{}", directives::EXTM3U)?;

        // entries, no trailing newline after the last one
        for (index, it) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for M3uEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // #EXTINF:time[,title]
        match (self.time, self.title.as_deref()) {
            (Some(time), None | Some("")) => writeln!(f, "{}:{}", directives::EXTINF, time)?,
            (Some(time), Some(title)) => {
                writeln!(f, "{}:{},{}", directives::EXTINF, time, title)?
            }
            (None, Some("")) => writeln!(f, "{}:0", directives::EXTINF)?,
            (None, Some(title)) => writeln!(f, "{}:0,{}", directives::EXTINF, title)?,
            (None, None) => {}
        }

        // #EXTVLCOPT:key=value
        for (key, value) in self.options.iter() {
            writeln!(f, "{}:{}={}", directives::EXTVLCOPT, key, value)?;
        }

        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        format::{M3uEntry, M3uPlaylist},
        render,
    };

    #[test]
    fn test_render_info_line() {
        let entry = M3uEntry::new("a.mp3");
        assert_eq!(entry.to_string(), "a.mp3");

        let entry = M3uEntry::new("a.mp3").with_time(419).with_title("Rotten Apple");
        assert_eq!(entry.to_string(), "#EXTINF:419,Rotten Apple\na.mp3");

        let entry = M3uEntry::new("a.mp3").with_time(419).with_title("");
        assert_eq!(entry.to_string(), "#EXTINF:419\na.mp3");

        let entry = M3uEntry::new("a.mp3").with_title("Rotten Apple");
        assert_eq!(entry.to_string(), "#EXTINF:0,Rotten Apple\na.mp3");

        let entry = M3uEntry::new("a.mp3").with_title("");
        assert_eq!(entry.to_string(), "#EXTINF:0\na.mp3");

        let entry = M3uEntry::new("a.mp3").with_time(-1);
        assert_eq!(entry.to_string(), "#EXTINF:-1\na.mp3");
    }

    #[test]
    fn test_render_options() {
        let entry = M3uEntry::new("b.webm")
            .with_option("sub-file", "./b.en")
            .with_option("subsdec-encoding", "UTF-8");
        assert_eq!(
            entry.to_string(),
            "#EXTVLCOPT:sub-file=./b.en\n#EXTVLCOPT:subsdec-encoding=UTF-8\nb.webm"
        );

        let entry = M3uEntry::new("b.webm")
            .with_time(12)
            .with_title("B")
            .with_option("sub-file", "./b.en")
            .with_option("sub-file", "./b.en");
        assert_eq!(
            entry.to_string(),
            "#EXTINF:12,B\n#EXTVLCOPT:sub-file=./b.en\n#EXTVLCOPT:sub-file=./b.en\nb.webm"
        );
    }

    #[test]
    fn test_render_playlist() {
        assert_eq!(render(&M3uPlaylist::default()), "#EXTM3U\n");

        let playlist = M3uPlaylist::new(vec![
            M3uEntry::new("a.mp3").with_time(1).with_title("A"),
            M3uEntry::new("http://example.com/b.mp3"),
        ]);
        assert_eq!(
            render(&playlist),
            "#EXTM3U\n#EXTINF:1,A\na.mp3\nhttp://example.com/b.mp3"
        );
        assert_eq!(render(&playlist), playlist.to_string());
    }
}
