use std::{
    env,
    path::{Path, PathBuf},
};

use vergen_gix::{Emitter, GixBuilder};

const SHA_OVERRIDE_VAR: &str = "WFKIT_BUILD_SHA_SHORT";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={SHA_OVERRIDE_VAR}");

    // Packagers building from a tarball can pin the hash
    if let Some(sha) = env::var(SHA_OVERRIDE_VAR)
        .ok()
        .and_then(|raw| normalize_sha_short(&raw))
    {
        emit_sha(&sha);
        return;
    }

    // Git probing is best-effort; the build must never fail on it
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let Some(repo_root) = find_repo_root(Path::new(&manifest_dir)) else {
        emit_sha("unknown");
        return;
    };

    let git = match GixBuilder::default()
        .repo_path(Some(repo_root))
        .sha(true)
        .build()
    {
        Ok(git) => git,
        Err(err) => {
            println!("cargo:warning=wfkit-build-info: git probing unavailable: {err}");
            emit_sha("unknown");
            return;
        }
    };

    if let Err(err) = Emitter::default()
        .add_instructions(&git)
        .and_then(|emitter| emitter.emit())
    {
        println!("cargo:warning=wfkit-build-info: could not emit git metadata: {err}");
        emit_sha("unknown");
    }
}

fn emit_sha(sha: &str) {
    println!("cargo:rustc-env=VERGEN_GIT_SHA={sha}");
}

fn normalize_sha_short(raw: &str) -> Option<String> {
    let candidate: String = raw.trim().chars().take(7).collect();
    (candidate.len() == 7 && candidate.chars().all(|c| c.is_ascii_hexdigit()))
        .then_some(candidate)
}

fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
