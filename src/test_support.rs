use crate::cli::GlobalArgs;
use crate::config::Config;
use crate::context::RunContext;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Write `content` to `db.json` inside `dir` and return its path.
pub(crate) fn write_snapshot(dir: &Path, content: &str) -> PathBuf {
    write_snapshot_named(dir, "db.json", content)
}

pub(crate) fn write_snapshot_named(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Run context for `snapshot` with a fixed reference time and default config.
pub(crate) fn test_context(snapshot: &Path, now: i64) -> RunContext {
    let global = GlobalArgs {
        snapshot: Some(snapshot.to_path_buf()),
        config: PathBuf::from("lockgc.yaml"),
        now: Some(now),
        json: false,
        log_format: None,
        log_level: None,
    };
    RunContext::with_now(&global, Config::default(), now)
}
