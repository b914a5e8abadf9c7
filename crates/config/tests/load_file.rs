use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use vaporcore_config::{ConfigStore, LineError, SteamSettings};

/// Collects the messages of WARN events emitted while it is installed.
#[derive(Clone, Default)]
struct Warnings(Arc<Mutex<Vec<String>>>);

impl Warnings {
    fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Warnings {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }
    }
}

/// Runs `f` with a subscriber that records warnings, returning both.
fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let warnings = Warnings::default();
    let subscriber = tracing_subscriber::registry().with(warnings.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, warnings.messages())
}

fn write(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn steam_section_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "vaporcore.ini",
        b"[Steam]\napp_id = 480\nsteam_id = 76561198012345678\nusername = \"Test User\"\n",
    );

    let store = ConfigStore::open(&path);
    assert!(store.is_loaded());
    assert_eq!(store.get_u32("Steam", "app_id", 0), 480);
    assert_eq!(store.get_u64("Steam", "STEAM_ID", 0), 76561198012345678);
    assert_eq!(store.get_string("steam", "username", ""), "Test User");

    let settings = store.settings();
    assert_eq!(settings.app_id, 480);
    assert_eq!(settings.steam_id.account_id(), 52079950);
    assert_eq!(settings.username, "Test User");
    assert_eq!(settings.language, "english");
}

#[test]
fn key_before_any_section_is_skipped() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "orphan.ini",
        b"stray = 1\n[Steam]\napp_id = 70\n",
    );

    let mut store = ConfigStore::new();
    let (ok, warnings) = capture_warnings(|| store.load(&path));
    assert!(ok);
    assert!(store.is_loaded());
    for section in store.sections() {
        assert!(store.section_keys(&section).iter().all(|k| k != "stray"));
    }
    assert_eq!(
        store.diagnostics()[0].error,
        LineError::NoSection { key: "stray".into() }
    );
    assert_eq!(store.diagnostics()[0].line, 1);
    assert!(warnings.iter().any(|w| w.contains("stray")));
}

#[test]
fn missing_file_uses_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nope.ini");

    let mut store = ConfigStore::new();
    let (ok, warnings) = capture_warnings(|| store.load(&path));
    assert!(!ok);
    assert!(!store.is_loaded());
    assert!(!store.has_section("Steam"));
    assert_eq!(store.settings().language, "english");
    assert_eq!(store.settings(), &SteamSettings::default());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("using defaults"));
}

#[test]
fn int_list_warns_on_bad_element() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(tmp.path(), "x.ini", b"[X]\nnums = 1, 2, notanumber, 4\n");
    let store = ConfigStore::open(&path);

    let (nums, warnings) = capture_warnings(|| store.get_int_list("X", "nums"));
    assert_eq!(nums, vec![1, 2, 4]);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("notanumber"));
}

#[test]
fn numeric_getter_warns_and_falls_back() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(tmp.path(), "n.ini", b"[Steam]\napp_id = four-eighty\n");

    let mut store = ConfigStore::new();
    let (_, warnings) = capture_warnings(|| store.load(&path));
    assert_eq!(store.settings().app_id, 0);
    assert!(warnings.iter().any(|w| w.contains("four-eighty")));
}

#[test]
fn loading_twice_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "same.ini",
        b"[Steam]\nlanguage = french\n[Extra]\nk = v\nbroken line\n",
    );

    let mut store = ConfigStore::new();
    assert!(store.load(&path));
    let first = (
        store.sections(),
        store.section_keys("extra"),
        store.settings().clone(),
        store.diagnostics().to_vec(),
    );
    assert!(store.load(&path));
    let second = (
        store.sections(),
        store.section_keys("extra"),
        store.settings().clone(),
        store.diagnostics().to_vec(),
    );
    assert_eq!(first, second);
    assert_eq!(store.settings().language, "french");
}

#[test]
fn reload_never_exposes_previous_file() {
    let tmp = tempfile::tempdir().unwrap();
    let a = write(tmp.path(), "a.ini", b"[OnlyA]\nkey = 1\n[Steam]\nusername = Alice\n");
    let b = write(tmp.path(), "b.ini", b"[OnlyB]\nkey = 2\n");

    let mut store = ConfigStore::open(&a);
    assert!(store.has_key("OnlyA", "key"));
    assert_eq!(store.settings().username, "Alice");

    assert!(store.load(&b));
    assert!(!store.has_section("OnlyA"));
    assert!(!store.has_key("OnlyA", "key"));
    assert_eq!(store.settings().username, "VaporCore User");
    assert_eq!(store.get_int("OnlyB", "key", 0), 2);
}

#[test]
fn failed_reload_does_not_keep_old_table() {
    let tmp = tempfile::tempdir().unwrap();
    let a = write(tmp.path(), "a.ini", b"[Steam]\napp_id = 10\n");

    let mut store = ConfigStore::open(&a);
    assert_eq!(store.settings().app_id, 10);

    assert!(!store.load(tmp.path().join("gone.ini")));
    assert!(store.sections().is_empty());
    assert_eq!(store.settings().app_id, 0);
}

#[test]
fn crlf_and_invalid_utf8_are_tolerated() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write(
        tmp.path(),
        "dos.ini",
        b"[Steam]\r\nusername = Caf\xe9\r\nlanguage = spanish\r\n",
    );

    let store = ConfigStore::open(&path);
    assert!(store.is_loaded());
    assert_eq!(store.settings().language, "spanish");
    assert_eq!(store.settings().username, "Caf\u{FFFD}");
}

#[test]
fn section_keys_lookup_is_case_sensitive() {
    // The other accessors lowercase their section argument; this one does not.
    let tmp = tempfile::tempdir().unwrap();
    let path = write(tmp.path(), "k.ini", b"[Network]\nPort = 27015\nHost = local\n");
    let store = ConfigStore::open(&path);

    assert!(store.has_section("Network"));
    assert_eq!(store.section_keys("network"), vec!["host", "port"]);
    assert!(store.section_keys("Network").is_empty());
}
