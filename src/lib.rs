// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
pub mod arch;
pub mod channel;
pub mod config;
pub mod error;
pub mod resolver;
pub mod trace_util;

pub use crate::channel::{BridgeHandler, MethodCall, MethodResponse, Operation};
pub use crate::config::ResolverConfig;
pub use crate::error::ResolveError;
pub use crate::resolver::{PathResolver, ResolvedBinary};

use serde::Serialize;

/// Error payload handed to the UI: `{ code, message }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BridgeError {
    pub code: String,
    pub message: String,
}

impl From<ResolveError> for BridgeError {
    fn from(e: ResolveError) -> Self {
        Self {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

#[cfg(feature = "app")]
mod app {
    use std::sync::Arc;

    use tauri::{Manager, State};
    use tracing::{error, info};

    use crate::{trace_util, BridgeError, BridgeHandler, MethodResponse, PathResolver, ResolverConfig};

    pub struct AppState {
        handler: BridgeHandler,
    }

    #[tauri::command]
    fn get_frpc_path(state: State<'_, Arc<AppState>>) -> Result<String, BridgeError> {
        let path = state.handler.resolver().resolve_path().map_err(BridgeError::from)?;
        Ok(path.to_string_lossy().to_string())
    }

    /// Raw channel access, so the UI can tell "unsupported" apart from "failed".
    #[tauri::command]
    fn frpc_channel_invoke(state: State<'_, Arc<AppState>>, method: String) -> MethodResponse {
        state.handler.handle_method(&method)
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        trace_util::configure_tracing();
        tauri::Builder::default()
            .setup(|app| {
                let config = ResolverConfig::from_host().map_err(|e| {
                    error!(error = %e, "Could not determine native library dir");
                    e.to_string()
                })?;
                info!(
                    dir = %config.native_library_dir.display(),
                    binary = %config.binary_name,
                    "frpc bridge ready"
                );
                let state = Arc::new(AppState {
                    handler: BridgeHandler::new(PathResolver::new(config)),
                });
                app.manage(state);
                Ok(())
            })
            .invoke_handler(tauri::generate_handler![get_frpc_path, frpc_channel_invoke])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}

#[cfg(feature = "app")]
pub use app::run;
