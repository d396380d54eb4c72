use super::*;

const SECOND: i64 = 1_000_000;

fn formatter() -> TextFormatter {
    TextFormatter {
        track: "{state} {artist} - {title}".to_owned(),
        stream: "{state} {title}".to_owned(),
    }
}

fn local_track() -> TrackMetadata {
    TrackMetadata {
        title: Some("Song".to_owned()),
        album: Some("Album".to_owned()),
        artist: Some("Artist".to_owned()),
        url: Some("file:///music/song.flac".to_owned()),
        length: Some(225 * SECOND),
    }
}

#[test]
fn time() {
    assert_eq!(format_time(0), "0:00");
    assert_eq!(format_time(45 * SECOND), "0:45");
    assert_eq!(format_time(45 * SECOND + 999_999), "0:45");
    assert_eq!(format_time(225 * SECOND), "3:45");
    assert_eq!(format_time(600 * SECOND), "10:00");
    assert_eq!(format_time(3599 * SECOND), "59:59");
    assert_eq!(format_time(3600 * SECOND), "1:00:00");
    assert_eq!(format_time(3723 * SECOND), "1:02:03");
    assert_eq!(format_time(36000 * SECOND), "10:00:00");
    assert_eq!(format_time(-5), "0:00");
}

#[test]
fn extension() {
    assert_eq!(strip_extension("video.mkv"), "video");
    assert_eq!(strip_extension("archive.tar.bz2"), "archive.tar");
    assert_eq!(strip_extension("Radio 1.FM"), "Radio 1.FM");
    assert_eq!(strip_extension("My.Song.flac"), "My.Song.flac");
    assert_eq!(strip_extension("v.1.2"), "v");
    assert_eq!(strip_extension("a. bc"), "a");
    assert_eq!(strip_extension(".mp3"), "");
    assert_eq!(strip_extension("mp3"), "mp3");
    assert_eq!(strip_extension("clip.ögg"), "clip");
    assert_eq!(strip_extension(UNKNOWN), UNKNOWN);
}

#[test]
fn stream_detection() {
    assert!(is_stream(None));
    assert!(is_stream(Some(&TrackMetadata::default())));
    assert!(!is_stream(Some(&local_track())));

    let mut no_artist = local_track();
    no_artist.artist = None;
    assert!(is_stream(Some(&no_artist)));

    let mut remote = local_track();
    remote.url = Some("https://radio.example/stream".to_owned());
    assert!(is_stream(Some(&remote)));

    let mut no_url = local_track();
    no_url.url = None;
    assert!(is_stream(Some(&no_url)));
}

#[test]
fn every_placeholder() {
    let formatter = TextFormatter {
        track: "{player}|{state}|{album}|{artist}|{length}|{time}|{title}".to_owned(),
        stream: String::new(),
    };
    let metadata = local_track();
    let text = formatter.render(&TrackInfo {
        player: Some("Music Player Daemon"),
        state: "▶",
        position: Some(45 * SECOND),
        metadata: Some(&metadata),
    });
    assert_eq!(text, "Music Player Daemon|▶|Album|Artist|3:45|0:45|Song");
    assert!(!text.contains(['{', '}']));
}

#[test]
fn stream_without_artist() {
    let mut metadata = local_track();
    metadata.artist = None;
    metadata.title = Some("movie.mkv".to_owned());
    let text = formatter().render(&TrackInfo {
        state: "▮▮",
        metadata: Some(&metadata),
        ..TrackInfo::default()
    });
    assert_eq!(text, "▮▮ movie");
}

#[test]
fn track_keeps_extension_like_title() {
    let mut metadata = local_track();
    metadata.title = Some("Intro.mp3".to_owned());
    let text = formatter().render(&TrackInfo {
        state: "▶",
        metadata: Some(&metadata),
        ..TrackInfo::default()
    });
    assert_eq!(text, "▶ Artist - Intro.mp3");
}

#[test]
fn placeholders_for_missing_values() {
    let formatter = TextFormatter {
        track: String::new(),
        stream: "{player} {title} [{time} / {length}] {album} {artist}".to_owned(),
    };
    let text = formatter.render(&TrackInfo::default());
    assert_eq!(text, "Unknown Unknown [-:-- / -:--] Unknown Unknown");

    let metadata = TrackMetadata {
        title: Some(String::new()),
        ..TrackMetadata::default()
    };
    let text = formatter.render(&TrackInfo {
        metadata: Some(&metadata),
        position: Some(0),
        ..TrackInfo::default()
    });
    assert_eq!(text, "Unknown Unknown [0:00 / -:--] Unknown Unknown");
}

#[test]
fn braces() {
    assert_eq!(
        substitute("{{{title}}} {nope} {title", &[("title", "T")]),
        "{T} {nope} {title"
    );
    assert_eq!(substitute("a } b", &[]), "a } b");
    // substituted values are not expanded again
    assert_eq!(
        substitute("{title} {artist}", &[("title", "{artist}"), ("artist", "A")]),
        "{artist} A"
    );
}
