//! Rendering of the status text from a player's metadata

#[cfg(test)]
mod tests;

use crate::player::TrackMetadata;

/// Substituted for any missing text field
pub const UNKNOWN: &str = "Unknown";
/// Substituted for a missing position or length
pub const UNKNOWN_TIME: &str = "-:--";

/// Everything queried from the selected player. [`None`] fields were absent or failed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackInfo<'a> {
    pub player: Option<&'a str>,
    pub state: &'a str,
    pub position: Option<i64>,
    pub metadata: Option<&'a TrackMetadata>,
}

#[derive(Clone, Debug)]
pub struct TextFormatter {
    /// Used when artist information is available
    pub track: String,
    /// Used for streams, videos and files without tags
    pub stream: String,
}
impl TextFormatter {
    #[must_use]
    pub fn render(&self, info: &TrackInfo<'_>) -> String {
        let metadata = info.metadata.filter(|m| !m.is_empty());
        let title = or_unknown(metadata.and_then(|m| m.title.as_deref()));

        let (template, title) = if is_stream(metadata) {
            (&self.stream, strip_extension(title))
        } else {
            (&self.track, title)
        };
        let length = metadata
            .and_then(|m| m.length)
            .map_or_else(|| UNKNOWN_TIME.to_owned(), format_time);
        let time = info
            .position
            .map_or_else(|| UNKNOWN_TIME.to_owned(), format_time);

        substitute(
            template,
            &[
                ("player", info.player.unwrap_or(UNKNOWN)),
                ("state", info.state),
                ("album", or_unknown(metadata.and_then(|m| m.album.as_deref()))),
                ("artist", or_unknown(metadata.and_then(|m| m.artist.as_deref()))),
                ("length", length.as_str()),
                ("time", time.as_str()),
                ("title", title),
            ],
        )
    }
}

fn or_unknown(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or(UNKNOWN)
}

/// Whether the media lacks reliable track metadata.
///
/// Anything without an artist, or not played from a local file, is shown like a stream.
#[must_use]
pub fn is_stream(metadata: Option<&TrackMetadata>) -> bool {
    let Some(metadata) = metadata.filter(|m| !m.is_empty()) else {
        return true;
    };
    metadata.artist.is_none()
        || !metadata
            .url
            .as_deref()
            .is_some_and(|u| u.starts_with("file://"))
}

/// Drop a trailing `.xxx` suffix, e.g. the extension of a bare media file name.
#[must_use]
pub fn strip_extension(title: &str) -> &str {
    let mut tail = title.char_indices().rev().map(|(i, _)| i);
    match tail.nth(3) {
        Some(dot) if title[dot..].starts_with('.') => &title[..dot],
        _ => title,
    }
}

/// Format microseconds as `h:mm:ss`, dropping a zero hour and a leading zero minute.
///
/// ```text
/// 45s     -> 0:45
/// 3m45s   -> 3:45
/// 10m     -> 10:00
/// 1h2m3s  -> 1:02:03
/// ```
#[must_use]
pub fn format_time(micros: i64) -> String {
    let seconds = micros.max(0) / 1_000_000;
    let time = format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        seconds / 60 % 60,
        seconds % 60
    );
    match time.strip_prefix("0:") {
        Some(rest) => rest.strip_prefix('0').unwrap_or(rest).to_owned(),
        None => time,
    }
}

/// Replace `{key}` with its value in one pass. `{{` and `}}` are literal braces; unknown
/// keys are kept verbatim.
fn substitute(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(i) = rest.find(['{', '}']) {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];
        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if let Some((key, after)) = tail.strip_prefix('{').and_then(|t| t.split_once('}')) {
            match fields.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(key);
                    out.push('}');
                }
            }
            rest = after;
        } else {
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
