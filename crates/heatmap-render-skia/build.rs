// File: crates/heatmap-render-skia/build.rs
// Summary: Link the Windows system libraries Skia's font manager and ICU need.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW / RegQueryInfoKeyW from the font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
