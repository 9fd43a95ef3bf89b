use std::path::Path;
use std::sync::Mutex;
use tempfile::tempdir;

// The working directory is process-wide; tests that change it take turns.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Runs `test_fn` with the working directory switched into a fresh temp dir,
/// restoring the original directory afterwards even if the test panics.
pub fn run_test_in_temp_dir<F>(test_fn: F)
where
    F: FnOnce(&Path) + std::panic::UnwindSafe,
{
    let _guard = CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _ = env_logger::builder().is_test(true).try_init();

    let temp_dir = tempdir().unwrap();
    let original_dir = std::env::current_dir().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();

    std::env::set_current_dir(&root).unwrap();

    let result = std::panic::catch_unwind(|| test_fn(&root));

    std::env::set_current_dir(original_dir).unwrap();

    if let Err(e) = result {
        std::panic::resume_unwind(e);
    }
}
