use std::env::var;
use std::path::Path;

fn configure_build<P: AsRef<Path>>(sdk_root: P, config: &mut cc::Build) {
    let sdk_root = sdk_root.as_ref();

    #[cfg(not(debug_assertions))]
    {
        config.define("NDEBUG", None);
    }

    #[cfg(target_env = "gnu")]
    {
        config.flag("-pipe");
        config.flag("-fno-strict-aliasing");
        config.flag("-Wno-unused");
        config.flag("-Wno-switch");
        config.flag_if_supported("-Wno-unused-result");
        config.flag_if_supported("-Wno-array-bounds");
    }
    #[cfg(target_env = "msvc")]
    {
        config.define("_CRT_SECURE_NO_DEPRECATE", None);
        config.define("_CRT_SECURE_NO_WARNINGS", None);
        config.define("_CRT_NONSTDC_NO_DEPRECATE", None);
    }

    #[cfg(target_os = "windows")]
    {
        config.define("WIN32", None);
        config.define("_WINDOWS", None);
    }

    config
        .include(sdk_root.join("interface"))
        .include(sdk_root.join("src"));
}

fn collect_sources<P: AsRef<Path>>(src_dir: P) -> Vec<std::path::PathBuf> {
    let src_dir = src_dir.as_ref();
    let mut sources: Vec<_> = std::fs::read_dir(src_dir)
        .unwrap_or_else(|err| panic!("cannot read {}: {}", src_dir.display(), err))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "c"))
        .collect();
    sources.sort();
    sources
}

fn main() {
    println!("cargo:rerun-if-env-changed=SILK_SDK_DIR");

    if var("CARGO_FEATURE_SDK").is_err() {
        return;
    }

    let sdk_root_string = var("SILK_SDK_DIR")
        .or_else(|_| var("SILK_SDK"))
        .expect("feature `sdk` needs SILK_SDK_DIR pointing at the SKP SILK SDK");

    let sdk_root = Path::new(&sdk_root_string);
    println!("cargo:rerun-if-changed={}", sdk_root.join("src").display());

    let mut config = cc::Build::new();
    configure_build(&sdk_root, &mut config);

    let sources = collect_sources(sdk_root.join("src"));
    if sources.is_empty() {
        panic!("no C sources under {}", sdk_root.join("src").display());
    }
    config.files(&sources);

    config.compile("silk");
}
