//! Regenerates `src/pb/geocodec.rs` from `proto/geocodec.proto` when the
//! `regenerate-proto` feature is enabled. The generated module is checked
//! into the repository, so ordinary builds never invoke `prost-build` at
//! all -- this mirrors the `geozero` crate's `with-mvt` build script,
//! which compiles `vector_tile.proto` once and commits the result.

#[cfg(feature = "regenerate-proto")]
fn compile_protos() -> Result<(), Box<dyn std::error::Error>> {
    use std::{
        env,
        fs::OpenOptions,
        io::{Read, Write},
        path::Path,
    };

    // Override the build location so the output lands next to the proto
    // source, where it gets checked in rather than left in OUT_DIR.
    env::set_var("OUT_DIR", "src/pb");

    if !Path::new("src/pb/geocodec.rs").exists() {
        prost_build::compile_protos(&["proto/geocodec.proto"], &["proto/"])?;

        let mut buffer = String::new();
        OpenOptions::new()
            .read(true)
            .open("src/pb/geocodec.rs")?
            .read_to_string(&mut buffer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open("src/pb/geocodec.rs")?;
        file.write_all(
            b"// This file was automatically generated through build.rs, and should not be edited by hand.\n\n",
        )?;
        file.write_all(buffer.as_bytes())?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "regenerate-proto")]
    compile_protos()?;

    Ok(())
}
