use std::io;
use std::path::{Path, PathBuf};

use crate::config::{non_blank_env, NATIVE_LIB_DIR_ENV};

/// Directory the host unpacked our native binaries into.
///
/// `FRPC_NATIVE_LIB_DIR` wins when set. On Android this is the directory our own
/// shared library was loaded from; elsewhere it is the directory of the running
/// executable, which is where bundled sidecars are placed.
pub fn native_library_dir() -> io::Result<PathBuf> {
    if let Some(dir) = non_blank_env(NATIVE_LIB_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    #[cfg(target_os = "android")]
    {
        let maps = std::fs::read_to_string("/proc/self/maps")?;
        let lib = own_library_file_name();
        dir_of_mapped_library(&maps, &lib).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{lib} is not mapped into this process"),
            )
        })
    }

    #[cfg(not(target_os = "android"))]
    {
        executable_dir()
    }
}

#[cfg(target_os = "android")]
fn own_library_file_name() -> String {
    format!("lib{}.so", env!("CARGO_CRATE_NAME"))
}

#[cfg(not(target_os = "android"))]
fn executable_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable {} has no parent directory", exe.display()),
        )
    })
}

/// Find the directory holding `lib_file_name` in a `/proc/<pid>/maps` dump.
///
/// The pathname is the sixth whitespace-separated column and may itself contain
/// spaces, so everything after the inode column is taken as the path.
pub fn dir_of_mapped_library(maps: &str, lib_file_name: &str) -> Option<PathBuf> {
    maps.lines()
        .filter_map(|line| line.splitn(6, char::is_whitespace).nth(5))
        .map(str::trim)
        .filter(|p| p.starts_with('/'))
        .map(Path::new)
        .find(|p| p.file_name().is_some_and(|n| n == lib_file_name))
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}
