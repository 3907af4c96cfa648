//! Version metadata baked in at build time.
//!
//! The build script always sets `VERGEN_GIT_SHA`, falling back to `unknown`
//! outside a git checkout, so these constants are available in every build.

/// Crate version from Cargo.
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash, or `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// True if [`GIT_SHA_SHORT`] is a real 7-character hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

/// `--version` text when a commit hash is known, e.g. `0.3.0 (a1b2c3d)`.
pub const LONG_VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// `--version` text: [`LONG_VERSION_WITH_SHA`] or plain [`SEMVER`].
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    LONG_VERSION_WITH_SHA
} else {
    SEMVER
};

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}
