use std::fs::{self, Permissions};
use std::io;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub len: u64,
}

#[derive(Clone, Debug)]
pub struct FileInfo {
    pub len: u64,
    pub permissions: Permissions,
}

/// Filesystem operations the resolver needs from the host.
///
/// Callers should depend on this trait rather than on `std::fs` directly so the
/// resolver can be driven against hosts that refuse listing or chmod.
pub trait NativeLibFs: Send + Sync {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// `Ok(None)` when nothing exists at `path`.
    fn file_info(&self, path: &Path) -> io::Result<Option<FileInfo>>;

    fn set_permissions(&self, path: &Path, perms: Permissions) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsNativeLibFs;

impl NativeLibFs for OsNativeLibFs {
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // A size we can't read is still worth a name in the listing.
            let len = entry.metadata().map(|m| m.len()).unwrap_or(0);
            out.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().to_string(),
                len,
            });
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    fn file_info(&self, path: &Path) -> io::Result<Option<FileInfo>> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Some(FileInfo {
                len: meta.len(),
                permissions: meta.permissions(),
            })),
            // A parent that is a regular file means the binary can't be there either.
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn set_permissions(&self, path: &Path, perms: Permissions) -> io::Result<()> {
        fs::set_permissions(path, perms)
    }
}
