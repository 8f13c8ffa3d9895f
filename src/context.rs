// File: ./src/context.rs
/*! Where settings and logs live.

Callers pass an `AppContext` explicitly; nothing here reads a global.
`StandardContext` resolves the platform directories for pal (or a root given
on the command line). `TestContext` points at a throwaway temp directory.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub trait AppContext: Send + Sync + std::fmt::Debug {
    /// Holds `config.toml`.
    fn get_config_dir(&self) -> Result<PathBuf>;
    /// Holds `pal.log`.
    fn get_cache_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    fn get_log_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_cache_dir()?.join("pal.log"))
    }
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory: {:?}", path))?;
    Ok(path)
}

#[derive(Clone, Debug)]
pub struct StandardContext {
    root: Option<PathBuf>,
}

impl StandardContext {
    /// With `Some(root)`, uses `root/config` and `root/cache` instead of the
    /// platform directories.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn resolve(&self, sub: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
        let dir = match &self.root {
            Some(root) => root.join(sub),
            None => ProjectDirs::from("", "", "pal")
                .map(|dirs| platform(&dirs).to_path_buf())
                .ok_or_else(|| anyhow::anyhow!("No home directory"))?,
        };
        ensure_dir(dir)
    }
}

impl AppContext for StandardContext {
    fn get_config_dir(&self) -> Result<PathBuf> {
        self.resolve("config", ProjectDirs::config_dir)
    }

    fn get_cache_dir(&self) -> Result<PathBuf> {
        self.resolve("cache", ProjectDirs::cache_dir)
    }
}

/// A unique `pal_test_<uuid>` directory under the system temp dir, removed
/// on drop.
#[derive(Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("pal_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_config_dir(&self) -> Result<PathBuf> {
        ensure_dir(self.root.join("config"))
    }

    fn get_cache_dir(&self) -> Result<PathBuf> {
        ensure_dir(self.root.join("cache"))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
