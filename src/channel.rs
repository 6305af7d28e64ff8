//! The method-channel boundary between the UI layer and the resolver.
//!
//! Requests arrive keyed by method name; this is the only place that string
//! dispatch survives. Everything behind it is typed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CHANNEL, GET_FRPC_PATH_METHOD};
use crate::resolver::PathResolver;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    GetFrpcPath,
}

impl Operation {
    pub fn method_name(self) -> &'static str {
        match self {
            Operation::GetFrpcPath => GET_FRPC_PATH_METHOD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl std::fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown method: {}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GET_FRPC_PATH_METHOD => Ok(Operation::GetFrpcPath),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }
}

/// What goes back over the channel.
///
/// `NotImplemented` is not a failure: it tells the caller the method is unknown
/// here, as opposed to known but failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResponse {
    Success { path: String },
    Error { code: String, message: String },
    NotImplemented,
}

pub struct BridgeHandler {
    resolver: PathResolver,
}

impl BridgeHandler {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn channel(&self) -> &'static str {
        CHANNEL
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        match call.method.parse::<Operation>() {
            Ok(op) => self.dispatch(op),
            Err(e) => {
                debug!(channel = CHANNEL, "{e}");
                MethodResponse::NotImplemented
            }
        }
    }

    pub fn handle_method(&self, method: &str) -> MethodResponse {
        self.handle(&MethodCall::new(method))
    }

    pub fn dispatch(&self, op: Operation) -> MethodResponse {
        match op {
            Operation::GetFrpcPath => match self.resolver.resolve_path() {
                Ok(path) => MethodResponse::Success {
                    path: path.to_string_lossy().to_string(),
                },
                Err(e) => MethodResponse::Error {
                    code: e.code().to_string(),
                    message: e.to_string(),
                },
            },
        }
    }
}
