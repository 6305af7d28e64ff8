use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::arch::fs::{NativeLibFs, OsNativeLibFs};
use crate::arch::permissions;
use crate::config::ResolverConfig;
use crate::error::ResolveError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedBinary {
    pub path: PathBuf,
    pub len: u64,
    /// True when read/execute bits were missing and a repair was attempted.
    pub permissions_repaired: bool,
}

/// Locates the bundled frpc client inside the native library directory.
#[derive(Clone)]
pub struct PathResolver {
    config: ResolverConfig,
    fs: Arc<dyn NativeLibFs>,
}

impl PathResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_fs(config, Arc::new(OsNativeLibFs))
    }

    pub fn with_fs(config: ResolverConfig, fs: Arc<dyn NativeLibFs>) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn resolve(&self) -> Result<ResolvedBinary, ResolveError> {
        let dir = &self.config.native_library_dir;
        debug!(dir = %dir.display(), "Native lib dir");

        // Listing is diagnostics only; a directory we can't enumerate may still hold the binary.
        let listing = match self.fs.list_dir(dir) {
            Ok(entries) => {
                for entry in &entries {
                    debug!(name = %entry.name, bytes = entry.len, "Native lib dir entry");
                }
                Some(entries.into_iter().map(|e| e.name).collect::<Vec<_>>())
            }
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Could not list native lib dir");
                None
            }
        };

        let path = self.config.binary_path();
        let info = self
            .fs
            .file_info(&path)
            .map_err(|e| ResolveError::io(format!("stat {}", path.display()), e))?;

        let Some(info) = info else {
            let err = ResolveError::BinaryMissing { path, listing };
            debug!("{err}");
            return Err(err);
        };

        let mut permissions_repaired = false;
        if !permissions::is_readable_executable(&info.permissions) {
            permissions_repaired = true;
            let repaired = permissions::with_readable_executable(&info.permissions);
            if let Err(e) = self.fs.set_permissions(&path, repaired) {
                warn!(path = %path.display(), error = %e, "Could not make FRPC readable/executable");
            }
        }

        debug!("Found FRPC at {} ({} bytes)", path.display(), info.len);
        Ok(ResolvedBinary {
            path,
            len: info.len,
            permissions_repaired,
        })
    }

    pub fn resolve_path(&self) -> Result<PathBuf, ResolveError> {
        self.resolve().map(|r| r.path)
    }
}
