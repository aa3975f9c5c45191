use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily set or removed.
///
/// Process env vars are global state, so this serializes callers through a
/// lock (cargo runs tests in parallel) and restores the previous values when
/// `f` returns or panics.
///
/// Each entry in `changes` is a `(key, value)` pair: `Some(v)` sets the
/// variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");

    let mut restore = EnvRestore { saved: Vec::new() };
    for (key, value) in changes {
        if !restore.saved.iter().any(|(k, _)| k == key) {
            restore.saved.push((key.to_string(), std::env::var(key).ok()));
        }
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    f()
}

struct EnvRestore {
    saved: Vec<(String, Option<String>)>,
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}
