use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory every crate of the workspace writes its test and demo artifacts to.
const OUTPUT_DIR: &str = "test_output";

/// Returns the workspace root directory (parent of this crate's directory).
fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(PathBuf::from)
        .unwrap_or(manifest_dir)
}

/// Creates the output directory once per process.
pub fn ensure_test_output_dir() -> PathBuf {
    static DIR: OnceLock<PathBuf> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = workspace_root().join(OUTPUT_DIR);
        std::fs::create_dir_all(&dir).expect("Failed to create test_output directory");
        dir
    })
    .clone()
}

/// Returns the path of an output file, e.g. `test_output_path("edges.bmp")`.
pub fn test_output_path(name: &str) -> PathBuf {
    ensure_test_output_dir().join(name)
}
