use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::DirectoryConfig;

#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub logs_dir: PathBuf,
}

pub fn ensure_directories(cfg: &DirectoryConfig) -> Result<ResolvedPaths> {
    Ok(ResolvedPaths {
        logs_dir: ensure_dir(&cfg.logs_dir)?,
    })
}

fn ensure_dir(path: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(path);
    if !dir.exists() {
        fs::create_dir_all(&dir).with_context(|| format!("failed to create directory {}", path))?;
    }
    Ok(dir.canonicalize().unwrap_or(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_log_dir() {
        let root = tempfile::tempdir().expect("temp dir");
        let logs = root.path().join("nested/logs");
        let cfg = DirectoryConfig {
            logs_dir: logs.to_string_lossy().into_owned(),
        };

        let paths = ensure_directories(&cfg).expect("ensure dirs");
        assert!(paths.logs_dir.is_dir());
    }
}
