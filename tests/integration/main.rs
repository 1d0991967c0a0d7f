//! Integration tests for vkbundle
//!
//! Everything runs against temp directories with prewarmed caches; no test
//! touches the network (the base URL is pinned to an unroutable address).

use std::io::Write;
use std::path::Path;

use vkbundle::archive::{archive_root_dir, LAYER_FILE_NAME};
use vkbundle::cache::archive_file_name;

/// Base URL that fails fast if anything ever tries the network
const OFFLINE_URL: &str = "http://127.0.0.1:1";

/// Prewarm a cache directory with a release-shaped ZIP archive
fn prewarm_cache(cache_dir: &Path, version: &str, entries: &[(&str, &[u8])]) {
    std::fs::create_dir_all(cache_dir).unwrap();
    let file = std::fs::File::create(cache_dir.join(archive_file_name(version))).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (abi, contents) in entries {
        let name = format!("{}/{abi}/{LAYER_FILE_NAME}", archive_root_dir(version));
        writer.start_file(name, options).unwrap();
        writer.write_all(contents).unwrap();
    }
    writer.finish().unwrap();
}

fn placed_path(project_dir: &Path, abi: &str) -> std::path::PathBuf {
    project_dir
        .join("src/main/jniLibs")
        .join(abi)
        .join(LAYER_FILE_NAME)
}

mod cli_tests {
    use super::*;
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use sha2::{Digest, Sha256};
    use tempfile::TempDir;

    fn vkbundle() -> Command {
        let mut cmd = cargo_bin_cmd!("vkbundle");
        cmd.env_remove("VKBUNDLE_CACHE_DIR");
        cmd.env_remove("VKBUNDLE_BASE_URL");
        cmd.env_remove("VKBUNDLE_CONFIG");
        cmd
    }

    #[test]
    fn help_displays() {
        vkbundle()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Vulkan validation layer bundler"));
    }

    #[test]
    fn version_displays() {
        vkbundle()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vkbundle"));
    }

    #[test]
    fn install_without_abis_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");
        let project_dir = tmp.path().join("project");
        std::fs::create_dir_all(&project_dir).unwrap();

        vkbundle()
            .args(["install", "--project"])
            .arg(&project_dir)
            .arg("--cache-dir")
            .arg(&cache_dir)
            .args(["--base-url", OFFLINE_URL])
            .assert()
            .success();

        assert!(!cache_dir.exists(), "no-op must not create the cache");
        assert!(!project_dir.join("src").exists());
    }

    #[test]
    fn install_places_layers_from_prewarmed_cache() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");
        let project_dir = tmp.path().join("project");
        std::fs::create_dir_all(&project_dir).unwrap();
        prewarm_cache(
            &cache_dir,
            "1.3.268.0",
            &[("arm64-v8a", b"arm64 layer bytes"), ("x86_64", b"x86_64 layer bytes")],
        );

        vkbundle()
            .args(["install", "--abi", "arm64-v8a", "--abi", "x86_64", "--project"])
            .arg(&project_dir)
            .arg("--cache-dir")
            .arg(&cache_dir)
            .args(["--base-url", OFFLINE_URL])
            .assert()
            .success();

        let arm = std::fs::read(placed_path(&project_dir, "arm64-v8a")).unwrap();
        let x86 = std::fs::read(placed_path(&project_dir, "x86_64")).unwrap();
        assert_eq!(Sha256::digest(&arm), Sha256::digest(b"arm64 layer bytes"));
        assert_eq!(Sha256::digest(&x86), Sha256::digest(b"x86_64 layer bytes"));
    }

    #[test]
    fn remove_deletes_placed_layers_without_cache() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");
        let project_dir = tmp.path().join("project");

        let target = placed_path(&project_dir, "arm64-v8a");
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, b"stale layer").unwrap();

        vkbundle()
            .args(["remove", "--abi", "arm64-v8a", "--project"])
            .arg(&project_dir)
            .arg("--cache-dir")
            .arg(&cache_dir)
            .args(["--base-url", OFFLINE_URL])
            .assert()
            .success();

        assert!(!target.exists());
        assert!(!cache_dir.exists(), "remove must never obtain the archive");
    }

    #[test]
    fn missing_entry_fails_with_entry_name() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");
        let project_dir = tmp.path().join("project");
        std::fs::create_dir_all(&project_dir).unwrap();
        prewarm_cache(&cache_dir, "1.3.268.0", &[("arm64-v8a", b"layer")]);

        vkbundle()
            .args(["install", "--abi", "mips64", "--project"])
            .arg(&project_dir)
            .arg("--cache-dir")
            .arg(&cache_dir)
            .args(["--base-url", OFFLINE_URL])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No such archive entry"))
            .stderr(predicate::str::contains("mips64"));

        assert!(!placed_path(&project_dir, "mips64").exists());
    }

    #[test]
    fn corrupt_cached_archive_fails_with_hint() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");
        let project_dir = tmp.path().join("project");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::create_dir_all(&cache_dir).unwrap();
        std::fs::write(
            cache_dir.join(archive_file_name("1.3.268.0")),
            b"not a zip archive",
        )
        .unwrap();

        vkbundle()
            .args(["install", "--abi", "arm64-v8a", "--project"])
            .arg(&project_dir)
            .arg("--cache-dir")
            .arg(&cache_dir)
            .args(["--base-url", OFFLINE_URL])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot open archive"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn invalid_abi_rejected_at_parse_time() {
        vkbundle()
            .args(["install", "--abi", "arm64/v8a"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid ABI identifier"));
    }

    #[test]
    fn config_file_version_is_used() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");
        let project_dir = tmp.path().join("project");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(
            project_dir.join("vkbundle.toml"),
            "[layer]\nversion = \"2.0.0.0\"\n",
        )
        .unwrap();
        // Only the config's version is prewarmed; using the default version
        // would fail on the unroutable URL
        prewarm_cache(&cache_dir, "2.0.0.0", &[("x86", b"configured layer")]);

        vkbundle()
            .args(["install", "--abi", "x86", "--project"])
            .arg(&project_dir)
            .arg("--cache-dir")
            .arg(&cache_dir)
            .args(["--base-url", OFFLINE_URL])
            .assert()
            .success();

        assert_eq!(
            std::fs::read(placed_path(&project_dir, "x86")).unwrap(),
            b"configured layer"
        );
    }

    #[test]
    fn cache_path_prints_directory() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");

        vkbundle()
            .args(["cache", "path", "--cache-dir"])
            .arg(&cache_dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("cache"));
    }

    #[test]
    fn cache_list_empty() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");

        vkbundle()
            .args(["cache", "list", "--cache-dir"])
            .arg(&cache_dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached archives"));
    }

    #[test]
    fn cache_list_shows_archives() {
        let tmp = TempDir::new().unwrap();
        let cache_dir = tmp.path().join("cache");
        prewarm_cache(&cache_dir, "1.3.268.0", &[("arm64-v8a", b"layer")]);

        vkbundle()
            .args(["cache", "list", "--cache-dir"])
            .arg(&cache_dir)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "android-binaries-vulkan-sdk-1.3.268.0-android.zip",
            ))
            .stdout(predicate::str::contains("Total: 1 archive(s)"));
    }
}
