//! This build script copies the `memory.x` file from the crate root into a directory where
//! the linker can always find it at build time, and records the build time as the initial
//! clock reference of the firmware.

use std::{env, fs::File, io::Write, path::PathBuf};

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());

    // Put memory layout in the output directory and ensure it's on the linker search path.
    // Only the firmware target links against it.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        File::create(out.join("memory.x"))
            .unwrap()
            .write_all(include_bytes!("memory.x"))
            .unwrap();
        println!("cargo:rustc-link-search={}", out.display());
    }

    // create rs file with current UTC time
    File::create(out.join("utc.rs"))
        .unwrap()
        .write_fmt(format_args!(
            "const UTC_EPOCH: i64 = {:?};",
            chrono::Utc::now().timestamp()
        ))
        .unwrap();
}
