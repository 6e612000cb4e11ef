fn main() {
    println!("cargo:rerun-if-changed=src/ffi.rs");

    #[cfg(feature = "c-header")]
    generate_header();
}

/// Writes `include/keccak_sha3.h` for C callers of the static library.
#[cfg(feature = "c-header")]
fn generate_header() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();

    let config = cbindgen::Config {
        language: cbindgen::Language::C,
        include_guard: Some("KECCAK_SHA3_H".to_string()),
        ..Default::default()
    };

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(format!("{crate_dir}/include/keccak_sha3.h"));
        }
        Err(e) => println!("cargo:warning=cbindgen failed: {e}"),
    }
}
