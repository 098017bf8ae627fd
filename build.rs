use std::{env, fs, path::Path};

use uvc_ctrl_gen::{generate, GeneratorConfig, Mode};

fn main() {
    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is empty");
    let out_dir = Path::new(&out_dir);

    println!("cargo:rerun-if-changed=build.rs");

    let config = GeneratorConfig::default();
    for (mode, file) in [(Mode::Declarations, "ctrl_decl.rs"), (Mode::Definitions, "ctrl_def.rs")] {
        let source = generate(mode, &config).unwrap_or_else(|err| panic!("control schema error: {err}"));

        fs::write(out_dir.join(file), source).unwrap_or_else(|err| panic!("failed to write {file}: {err}"));
    }
}
