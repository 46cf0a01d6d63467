use selfmap_core::config::CONFIG_FILE;
use std::path::{Path, PathBuf};

/// Resolve the selfmap content root.
///
/// Priority:
/// 1. `--root` flag / `SELFMAP_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `selfmap.yaml`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Walk upward looking for selfmap.yaml
    let mut dir = cwd.clone();
    loop {
        if dir.join(CONFIG_FILE).is_file() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    // Walk upward looking for .git/
    let mut dir = cwd.clone();
    loop {
        if dir.join(".git").is_dir() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn explicit_root_skips_marker_walk() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "version: 1\n").unwrap();
        let subdir = dir.path().join("content/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        // Overriding cwd isn't possible in tests without unsafe tricks,
        // so only the explicit path branch is exercised here.
        let result = resolve_root(Some(&subdir));
        assert_eq!(result, subdir);
    }
}
