fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/number_format.proto");
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile(&["proto/number_format.proto"], &["proto"])?;
    Ok(())
}
