use crate::config::Config;
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

/// Current directory with symlinks resolved (macOS temp dirs live under /private).
pub(crate) fn canonical_cwd() -> PathBuf {
    std::env::current_dir().unwrap().canonicalize().unwrap()
}

/// Create `<root>/<name>/data.json` plus a logo and one post image.
pub(crate) fn create_site_folder(root: &Path, name: &str) -> PathBuf {
    let folder = root.join(name);
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(
        folder.join("data.json"),
        r#"{"name": "Barbar Ribs & Lahmajoon", "city": "Yerevan"}"#,
    )
    .unwrap();
    std::fs::write(folder.join("logo.png"), b"\x89PNG").unwrap();
    std::fs::write(folder.join("image1.jpg"), b"\xff\xd8\xff").unwrap();
    folder
}

/// Config whose agent is a shell script run with `sh -c`.
///
/// Extra arguments (the model flag and model) arrive as `$0` and `$1`.
pub(crate) fn shell_agent_config(script: &str) -> Config {
    Config {
        agent_command: shell_words::join(["sh", "-c", script]),
        ..Config::default()
    }
}
