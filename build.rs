//! Build script for spotrack.
//!
//! Copies the `.env.example` template from the crate root into the user's local
//! data directory (`<data_local_dir>/spotrack/.env.example`), next to the `.env`
//! file that [`config::load_env`] falls back to when the working directory has none.
//!
//! A missing template only produces a cargo warning; failing to create the target
//! directory or to write the copy fails the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotrack");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
