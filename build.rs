use std::fs;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo: toml::Value = cargo_toml.parse().expect("Failed to parse Cargo.toml");

    let package = cargo.get("package");
    let name = package
        .and_then(|pkg| pkg.get("name"))
        .and_then(|v| v.as_str())
        .unwrap_or("stripe-resources");
    let version = package
        .and_then(|pkg| pkg.get("version"))
        .and_then(|v| v.as_str())
        .unwrap_or("0.0.0");

    println!("cargo:rustc-env=STRIPE_RESOURCES_USER_AGENT={}/{}", name, version);
}
