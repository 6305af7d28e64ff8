//! Platform seams the resolver sits on.
//!
//! This module is "plumbing only": the filesystem interface, permission bits and
//! host directory discovery. No bridge semantics live here.

pub mod fs;
pub mod paths;
pub mod permissions;
