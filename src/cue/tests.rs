use super::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

const ALBUM: &str = r#"
REM GENRE "Trance"
REM DATE 2004
PERFORMER "Armin van Buuren"
TITLE "Boundaries Of Imagination"
FILE "D1 - Boundaries Of Imagination.mp3" MP3
  TRACK 01 AUDIO
    TITLE "Intro"
    PERFORMER "Armin"
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    REM tv_episode "S01E02"
    INDEX 01 04:30:40

  TRACK 03 AUDIO
    TITLE Closing
    REM DATE "2005"
    INDEX 01 09:05:74
"#;

fn parse(text: &str, total: Option<u64>) -> Sheet {
    Sheet::from_reader(Cursor::new(text), total).unwrap()
}

fn title(sheet: &Sheet, id: &str) -> Option<String> {
    sheet
        .track(id)
        .and_then(|t| t.metadata().get_string(MetaKey::Title))
        .map(str::to_string)
}

#[test]
fn parses_sheet_metadata_media_and_tracks() {
    let sheet = parse(ALBUM, Some(600_000));

    assert_eq!(sheet.metadata().get_string(MetaKey::Genre), Some("Trance"));
    assert_eq!(sheet.metadata().get_string(MetaKey::Year), Some("2004"));
    assert_eq!(sheet.metadata().get_string(MetaKey::Artist), Some("Armin van Buuren"));
    assert_eq!(sheet.media(), Some("D1 - Boundaries Of Imagination.mp3"));

    let bounds: Vec<(&str, u64, Option<u64>)> = sheet
        .tracks()
        .iter()
        .map(|t| (t.id(), t.start(), t.end()))
        .collect();
    assert_eq!(
        bounds,
        vec![
            ("01", 0, Some(270_533)),
            ("02", 270_533, Some(545_987)),
            ("03", 545_987, Some(600_000)),
        ]
    );
    assert_eq!(sheet.tracks()[0].duration(), 270_533);
}

#[test]
fn tracks_inherit_sheet_metadata_and_rewrite_the_title() {
    let sheet = parse(ALBUM, None);

    assert_eq!(title(&sheet, "01").as_deref(), Some("Intro"));
    assert_eq!(
        title(&sheet, "02").as_deref(),
        Some("Boundaries Of Imagination (02)")
    );
    assert_eq!(title(&sheet, "03").as_deref(), Some("Closing"));

    let first = sheet.track("01").unwrap().metadata();
    assert_eq!(first.get_string(MetaKey::Artist), Some("Armin"));
    assert_eq!(first.get_string(MetaKey::Genre), Some("Trance"));

    let second = sheet.track("02").unwrap().metadata();
    assert_eq!(second.get_string(MetaKey::Artist), Some("Armin van Buuren"));
    assert_eq!(second.get_string(MetaKey::TvEpisode), Some("S01E02"));
    assert_eq!(second.get_string(MetaKey::Track), Some("02"));

    let third = sheet.track("03").unwrap().metadata();
    assert_eq!(third.get_string(MetaKey::Year), Some("2005"));
}

#[test]
fn last_track_end_is_unknown_without_total_length() {
    let sheet = parse(ALBUM, None);
    assert_eq!(sheet.tracks()[2].end(), None);
    assert_eq!(sheet.tracks()[2].duration(), 0);

    let zero = parse(ALBUM, Some(0));
    assert_eq!(zero.tracks()[2].end(), None);
}

#[test]
fn quoted_and_bare_sheet_titles_are_equal() {
    let quoted = parse("TITLE \"Hello\"\n", None);
    let bare = parse("TITLE Hello\n", None);
    assert_eq!(quoted.metadata().get_string(MetaKey::Title), Some("Hello"));
    assert_eq!(bare.metadata().get_string(MetaKey::Title), Some("Hello"));
}

#[test]
fn lines_before_file_and_before_first_track_are_scoped() {
    let text = "\
TRACK 01 AUDIO
REM tv_episode ignored
FILE 'set.mp3' MP3
TITLE \"not a sheet title\"
  TRACK 01 AUDIO
    INDEX 01 00:00:00
";
    let sheet = parse(text, None);
    assert_eq!(sheet.media(), Some("set.mp3"));
    assert_eq!(sheet.metadata().get_string(MetaKey::Title), None);
    assert_eq!(sheet.tracks().len(), 1);
    assert_eq!(title(&sheet, "01"), None);
}

#[test]
fn sheet_without_file_directive_has_no_tracks() {
    let sheet = parse("TITLE x\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n", Some(5_000));
    assert!(sheet.tracks().is_empty());
    assert_eq!(sheet.media(), None);
}

#[test]
fn non_audio_track_closes_the_open_track() {
    let text = "\
FILE \"a.mp3\" MP3
  TRACK 01 AUDIO
    INDEX 01 00:00:00
  TRACK 02 MODE1/2352
    INDEX 01 01:00:00
  TRACK 03 AUDIO
    INDEX 01 02:00:00
";
    let sheet = parse(text, None);
    let starts: Vec<(&str, u64)> = sheet.tracks().iter().map(|t| (t.id(), t.start())).collect();
    assert_eq!(starts, vec![("01", 0), ("02", 120_000)]);
    assert_eq!(sheet.tracks()[0].end(), Some(120_000));
}

#[test]
fn repeated_index_lines_keep_the_last_start() {
    let text = "\
FILE \"a.mp3\" MP3
  TRACK 01 AUDIO
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    INDEX 01 01:00:00
    INDEX 01 01:30:00
";
    let sheet = parse(text, None);
    assert_eq!(sheet.tracks()[1].start(), 90_000);
    assert_eq!(sheet.tracks()[0].end(), Some(90_000));
}

#[test]
fn out_of_order_tracks_are_rejected() {
    let text = "\
FILE \"a.mp3\" MP3
  TRACK 01 AUDIO
    INDEX 01 02:00:00
  TRACK 02 AUDIO
    INDEX 01 01:59:74
";
    let err = Sheet::from_reader(Cursor::new(text), None).unwrap_err();
    assert!(matches!(
        err,
        CueError::OutOfOrder {
            start_ms: 119_987,
            previous_ms: 120_000,
            ..
        }
    ));
}

#[test]
fn unreadable_stream_is_an_io_error() {
    let err = Sheet::from_reader(Cursor::new(vec![b'F', 0xff, b'\n']), None).unwrap_err();
    assert!(matches!(err, CueError::Io(_)));
}

#[test]
fn serialize_then_parse_keeps_ids_and_whole_second_starts() {
    let original = parse(ALBUM, None);
    let mut text = Vec::new();
    original.write_to(&mut text, original.media().unwrap()).unwrap();
    let again = Sheet::from_reader(Cursor::new(text), None).unwrap();

    assert_eq!(again.tracks().len(), original.tracks().len());
    for (a, b) in original.tracks().iter().zip(again.tracks()) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.start() / 1_000 * 1_000, b.start());
    }
    // Frames are not written back, so sub-second starts are lost.
    assert_eq!(original.tracks()[1].start(), 270_533);
    assert_eq!(again.tracks()[1].start(), 270_000);
    assert_eq!(title(&again, "02"), title(&original, "02"));
    assert_eq!(again.media(), original.media());
}

const SAME_SECOND: &str = "\
TITLE \"Set\"
FILE \"set.mp3\" MP3
  TRACK 01 AUDIO
    INDEX 01 00:00:00
  TRACK 02 AUDIO
    INDEX 01 00:10:10
  TRACK 03 AUDIO
    INDEX 01 00:10:50
";

fn bounds(sheet: &Sheet) -> Vec<(&str, u64, Option<u64>)> {
    sheet
        .tracks()
        .iter()
        .map(|t| (t.id(), t.start(), t.end()))
        .collect()
}

#[test]
fn serialize_then_parse_keeps_tracks_starting_in_the_same_second() {
    let original = parse(SAME_SECOND, Some(60_000));
    let starts: Vec<u64> = original.tracks().iter().map(Track::start).collect();
    assert_eq!(starts, vec![0, 10_133, 10_667]);

    let mut text = Vec::new();
    original.write_to(&mut text, "set.mp3").unwrap();
    let again = Sheet::from_reader(Cursor::new(text), Some(60_000)).unwrap();

    assert_eq!(
        bounds(&again),
        vec![
            ("01", 0, Some(10_000)),
            ("02", 10_000, Some(10_000)),
            ("03", 10_000, Some(60_000)),
        ]
    );
    assert_eq!(again.tracks()[1].duration(), 0);
}

#[test]
fn splits_inside_one_second_read_back_after_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("set.cue");

    let mut sheet = Sheet::new(Some(60_000));
    assert!(sheet.insert_track(1_000).is_some());
    assert!(sheet.insert_track(1_500).is_some());
    sheet.save(&path, "set.mp3").unwrap();

    let again = Sheet::open(&path, Some(60_000)).unwrap();
    assert_eq!(
        bounds(&again),
        vec![
            ("01", 0, Some(1_000)),
            ("02", 1_000, Some(1_000)),
            ("03", 1_000, Some(60_000)),
        ]
    );
}

#[test]
fn update_keeps_sheet_with_same_second_starts_readable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("set.cue");
    fs::write(&path, SAME_SECOND).unwrap();

    let mut values = fields(&[("track", "03"), ("title", "Late")]);
    assert!(Sheet::update(&path, &mut values).unwrap());

    let sheet = Sheet::open(&path, None).unwrap();
    assert_eq!(sheet.tracks().len(), 3);
    assert_eq!(title(&sheet, "03").as_deref(), Some("Late"));

    let mut values = fields(&[("track", "02"), ("title", "Early")]);
    assert!(Sheet::update(&path, &mut values).unwrap());
    let sheet = Sheet::open(&path, None).unwrap();
    assert_eq!(title(&sheet, "02").as_deref(), Some("Early"));
    assert_eq!(title(&sheet, "03").as_deref(), Some("Late"));
}

#[test]
fn serialize_then_parse_keeps_starts_past_99_minutes() {
    let mut sheet = Sheet::new(Some(9_000_000));
    sheet.set_media("long.mp3");
    sheet.insert_track(7_260_000);
    assert!(sheet.to_string().contains("INDEX 01 121:00:00"));

    let again = Sheet::from_reader(Cursor::new(sheet.to_string()), Some(9_000_000)).unwrap();
    assert_eq!(
        bounds(&again),
        vec![("01", 0, Some(7_260_000)), ("02", 7_260_000, Some(9_000_000))]
    );
}

#[test]
fn oversized_timecode_is_a_format_error() {
    let text = "FILE \"a.mp3\" MP3\n  TRACK 01 AUDIO\n    INDEX 01 99999999999999999999999:00:00\n";
    let err = Sheet::from_reader(Cursor::new(text), None).unwrap_err();
    assert!(matches!(err, CueError::Format { line: 3, .. }));
}

#[test]
fn display_renders_media_only_when_known() {
    let mut sheet = Sheet::new(Some(30_000));
    sheet.metadata_mut().put(MetaKey::Title, "This is my song...");
    assert_eq!(sheet.to_string(), "TITLE \"This is my song...\"\n");

    sheet.set_media("dummy");
    sheet.insert_track(10_000);
    assert_eq!(
        sheet.to_string(),
        "TITLE \"This is my song...\"\nFILE \"dummy\" MP3\n  TRACK 01 AUDIO\n    INDEX 01 00:00:00\n  TRACK 02 AUDIO\n    INDEX 01 00:10:00\n"
    );
}

#[test]
fn insert_track_splits_an_empty_sheet() {
    let mut sheet = Sheet::new(Some(30_000));
    let inserted = sheet.insert_track(10_000).unwrap();
    assert_eq!((inserted.id(), inserted.start(), inserted.end()), ("02", 10_000, Some(30_000)));

    let inserted = sheet.insert_track(20_000).unwrap();
    assert_eq!(inserted.id(), "03");

    let bounds: Vec<(&str, u64, Option<u64>)> = sheet
        .tracks()
        .iter()
        .map(|t| (t.id(), t.start(), t.end()))
        .collect();
    assert_eq!(
        bounds,
        vec![
            ("01", 0, Some(10_000)),
            ("02", 10_000, Some(20_000)),
            ("03", 20_000, Some(30_000)),
        ]
    );

    assert!(sheet.insert_track(20_000).is_none());
    assert!(sheet.insert_track(0).is_none());
    assert!(sheet.insert_track(-1).is_none());
    assert_eq!(sheet.tracks().len(), 3);
}

#[test]
fn insert_track_into_parsed_sheet_keeps_metadata_in_place() {
    let mut sheet = parse(ALBUM, Some(600_000));
    let inserted = sheet.insert_track(100_000).unwrap();
    assert_eq!(inserted.id(), "02");
    assert_eq!(inserted.end(), Some(270_533));

    assert_eq!(sheet.tracks()[0].end(), Some(100_000));
    assert_eq!(title(&sheet, "01").as_deref(), Some("Intro"));
    assert_eq!(title(&sheet, "02"), None);
    assert_eq!(
        title(&sheet, "03").as_deref(),
        Some("Boundaries Of Imagination (02)")
    );
    assert_eq!(title(&sheet, "04").as_deref(), Some("Closing"));
}

fn write_two_track_sheet(path: &Path) {
    fs::write(
        path,
        "PERFORMER \"Band\"\nTITLE \"Album\"\nFILE \"album.mp3\" MP3\n  TRACK 01 AUDIO\n    TITLE \"One\"\n    INDEX 01 00:00:00\n  TRACK 02 AUDIO\n    TITLE \"Two\"\n    INDEX 01 03:00:00\n",
    )
    .unwrap();
}

fn fields(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn update_rewrites_only_the_selected_track() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("album.cue");
    write_two_track_sheet(&path);

    let mut values = fields(&[("track", "02"), ("title", "New"), ("album", "ignored")]);
    assert!(Sheet::update(&path, &mut values).unwrap());
    assert_eq!(values, fields(&[("track", "02"), ("album", "ignored")]));

    let sheet = Sheet::open(&path, None).unwrap();
    assert_eq!(sheet.media(), Some("album.mp3"));
    assert_eq!(title(&sheet, "01").as_deref(), Some("One"));
    assert_eq!(title(&sheet, "02").as_deref(), Some("New"));
    assert_eq!(sheet.tracks()[1].start(), 180_000);

    let written = fs::read_to_string(&path).unwrap();
    let mut again = fields(&[("track", "02"), ("title", "New")]);
    assert!(!Sheet::update(&path, &mut again).unwrap());
    assert_eq!(again, fields(&[("track", "02"), ("title", "New")]));
    assert_eq!(fs::read_to_string(&path).unwrap(), written);
}

#[test]
fn update_refuses_unusable_inputs_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("album.cue");
    write_two_track_sheet(&path);
    let before = fs::read_to_string(&path).unwrap();

    let mut empty = FieldMap::new();
    assert!(!Sheet::update(&path, &mut empty).unwrap());

    let mut no_track = fields(&[("title", "New")]);
    assert!(!Sheet::update(&path, &mut no_track).unwrap());

    let mut values = fields(&[("track", "01"), ("title", "New")]);
    assert!(!Sheet::update(&dir.path().join("missing.cue"), &mut values).unwrap());

    let other = dir.path().join("album.txt");
    fs::copy(&path, &other).unwrap();
    assert!(!Sheet::update(&other, &mut values).unwrap());

    let rejecting = |_: &Path| false;
    assert!(!Sheet::update_with(&path, &mut values, &rejecting).unwrap());

    assert_eq!(values.len(), 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn update_of_unknown_track_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("album.cue");
    write_two_track_sheet(&path);
    let before = fs::read_to_string(&path).unwrap();

    let mut values = fields(&[("track", "07"), ("title", "New")]);
    let err = Sheet::update(&path, &mut values).unwrap_err();
    assert!(matches!(err, CueError::TrackNotFound(ref id) if id == "07"));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn update_accepts_custom_extensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("album.CUESHEET");
    write_two_track_sheet(&path);

    let mut values = fields(&[("track", "01"), ("tv_episode", "S01E01")]);
    let cue = CueFileType::new(["cuesheet"]);
    assert!(Sheet::update_with(&path, &mut values, &cue).unwrap());

    let sheet = Sheet::open(&path, None).unwrap();
    let first = sheet.track("01").unwrap().metadata();
    assert_eq!(first.get_string(MetaKey::TvEpisode), Some("S01E01"));
}

#[test]
fn save_writes_the_given_media_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new.cue");

    let mut sheet = Sheet::new(Some(60_000));
    sheet.metadata_mut().put(MetaKey::Artist, "Me");
    sheet.insert_track(30_000);
    sheet.save(&path, "take 1.mp3").unwrap();

    let back = Sheet::open(&path, Some(60_000)).unwrap();
    assert_eq!(back.media(), Some("take 1.mp3"));
    assert_eq!(back.tracks().len(), 2);
    assert_eq!(back.tracks()[1].end(), Some(60_000));
    assert_eq!(back.metadata().get_string(MetaKey::Artist), Some("Me"));
}
