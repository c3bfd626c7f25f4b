/// Fail early with a readable message when the built-in catalog is missing,
/// instead of an opaque `include_dir!()` error, and rebuild when it changes.
use std::path::PathBuf;

const CATALOG_FILES: &[&str] = &["blocks.json", "templates.json"];

fn main() {
    let catalog: PathBuf = [env!("CARGO_MANIFEST_DIR"), "assets", "catalog"]
        .iter()
        .collect();

    for name in CATALOG_FILES {
        let path = catalog.join(name);
        assert!(
            path.is_file(),
            "built-in catalog file missing: {}",
            path.display()
        );
    }

    println!("cargo::rerun-if-changed=assets/catalog");
}
