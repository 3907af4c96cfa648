//! Tests for the filesystem-backed maintenance operations.

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use wfkit_core::{ActionError, MagicActions, MagicConfig, Maintenance, Opener, ResolvedPaths};
use wfkit_runtime::LocalMaintenance;

/// Opener that records targets instead of launching anything.
#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl Opener for RecordingOpener {
    fn open(&self, target: &str) -> Result<(), ActionError> {
        self.opened.lock().unwrap().push(target.to_string());
        Ok(())
    }
}

struct Fixture {
    _root: TempDir,
    paths: ResolvedPaths,
    opener: Arc<RecordingOpener>,
    maintenance: LocalMaintenance,
}

fn fixture() -> Fixture {
    let root = tempfile::tempdir().unwrap();
    let config = MagicConfig::default().with_dirs(
        root.path().join("data").to_string_lossy(),
        root.path().join("cache").to_string_lossy(),
    );
    let paths = ResolvedPaths::resolve(&config).unwrap();
    let opener = Arc::new(RecordingOpener::default());
    let maintenance = LocalMaintenance::new(paths.clone(), opener.clone());

    Fixture {
        _root: root,
        paths,
        opener,
        maintenance,
    }
}

fn populate(dir: &Path) {
    fs::create_dir_all(dir.join("nested/deeper")).unwrap();
    fs::write(dir.join("top.json"), b"{}").unwrap();
    fs::write(dir.join("nested/deeper/file.txt"), b"x").unwrap();
}

fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn open_data_creates_directory_and_opens_it() {
    let fx = fixture();
    assert!(!fx.paths.data_dir.exists());

    fx.maintenance.open_data().unwrap();

    assert!(fx.paths.data_dir.is_dir());
    assert_eq!(
        *fx.opener.opened.lock().unwrap(),
        vec![fx.paths.data_dir.to_string_lossy().to_string()]
    );
}

#[test]
fn open_log_touches_log_file_first() {
    let fx = fixture();

    fx.maintenance.open_log().unwrap();

    assert!(fx.paths.log_path.is_file());
    assert_eq!(
        *fx.opener.opened.lock().unwrap(),
        vec![fx.paths.log_path.to_string_lossy().to_string()]
    );
}

#[test]
fn clear_cache_empties_directory_but_keeps_it() {
    let fx = fixture();
    populate(&fx.paths.cache_dir);
    populate(&fx.paths.data_dir);

    fx.maintenance.clear_cache().unwrap();

    assert!(fx.paths.cache_dir.is_dir());
    assert_eq!(entry_count(&fx.paths.cache_dir), 0);
    assert_eq!(entry_count(&fx.paths.data_dir), 2);
}

#[test]
fn clearing_missing_directory_is_ok() {
    let fx = fixture();
    fx.maintenance.clear_data().unwrap();
    assert!(!fx.paths.data_dir.exists());
}

#[test]
fn reset_clears_both_directories() {
    let fx = fixture();
    populate(&fx.paths.cache_dir);
    populate(&fx.paths.data_dir);

    fx.maintenance.reset().unwrap();

    assert_eq!(entry_count(&fx.paths.cache_dir), 0);
    assert_eq!(entry_count(&fx.paths.data_dir), 0);
}

#[test]
fn default_registry_runs_against_local_directories() {
    let fx = fixture();
    populate(&fx.paths.data_dir);
    let registry = MagicActions::with_defaults(Arc::new(fx.maintenance.clone()));

    registry.get("deldata").unwrap().run().unwrap();

    assert_eq!(entry_count(&fx.paths.data_dir), 0);
    assert!(fx.opener.opened.lock().unwrap().is_empty());
}
