use std::fs::Permissions;

/// Owner read + owner execute.
#[cfg(unix)]
const OWNER_READ_EXEC: u32 = 0o500;

/// Whether the owner can both read and execute a file with these permissions.
#[cfg(unix)]
pub fn is_readable_executable(perms: &Permissions) -> bool {
    use std::os::unix::fs::PermissionsExt;
    perms.mode() & OWNER_READ_EXEC == OWNER_READ_EXEC
}

/// Windows has no execute bit; anything we can stat we can launch.
#[cfg(not(unix))]
pub fn is_readable_executable(_perms: &Permissions) -> bool {
    true
}

/// Same permissions with owner read and execute switched on. Other bits are kept.
#[cfg(unix)]
pub fn with_readable_executable(perms: &Permissions) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    Permissions::from_mode(perms.mode() | OWNER_READ_EXEC)
}

#[cfg(not(unix))]
pub fn with_readable_executable(perms: &Permissions) -> Permissions {
    perms.clone()
}
