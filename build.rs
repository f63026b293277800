fn main() {
    // Stamp the build time; the footer shows it as the site's last build
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Content edits are a redeploy, so restamp when the dataset changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
