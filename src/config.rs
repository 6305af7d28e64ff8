use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::arch::paths;

/// Method channel the UI layer talks to.
pub const CHANNEL: &str = "frpc_path";

/// The only method the channel answers.
pub const GET_FRPC_PATH_METHOD: &str = "getFrpcPath";

/// File name the frpc client is packaged under inside the native library dir.
pub const DEFAULT_BINARY_NAME: &str = "libfrpc.so";

pub const NATIVE_LIB_DIR_ENV: &str = "FRPC_NATIVE_LIB_DIR";
pub const BINARY_NAME_ENV: &str = "FRPC_BINARY_NAME";

fn default_binary_name() -> String {
    DEFAULT_BINARY_NAME.to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    pub native_library_dir: PathBuf,
    #[serde(default = "default_binary_name")]
    pub binary_name: String,
}

impl ResolverConfig {
    pub fn new(native_library_dir: impl Into<PathBuf>) -> Self {
        Self {
            native_library_dir: native_library_dir.into(),
            binary_name: default_binary_name(),
        }
    }

    pub fn with_binary_name(mut self, binary_name: impl Into<String>) -> Self {
        self.binary_name = binary_name.into();
        self
    }

    /// Build the config from what the host process can tell us.
    ///
    /// The directory comes from [`paths::native_library_dir`]; `FRPC_BINARY_NAME`
    /// overrides the packaged file name when set.
    pub fn from_host() -> std::io::Result<Self> {
        let dir = paths::native_library_dir()?;
        let mut config = Self::new(dir);
        if let Some(name) = non_blank_env(BINARY_NAME_ENV) {
            config.binary_name = name;
        }
        Ok(config)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn binary_path(&self) -> PathBuf {
        self.native_library_dir.join(&self.binary_name)
    }
}

pub(crate) fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
