// File: crates/bar-chart-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need for the rasterizer.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager lookups)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
