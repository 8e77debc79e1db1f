#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use image::{Rgb, RgbImage};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MESSAGE: &str = "hello wave";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub image: PathBuf,
    pub work: PathBuf,
    pub binary: PathBuf,
    pub lossy_binary: PathBuf,
    pub converter: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let image = tmp.path().join("cover.png");
        RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 90]))
            .save(&image)
            .expect("write cover image");

        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("create bin dir");
        let binary = write_script(&bin.join("wavescribe"), &fake_wavescribe(false));
        let lossy_binary = write_script(&bin.join("wavescribe-lossy"), &fake_wavescribe(true));
        let converter = write_script(
            &bin.join("convert-image"),
            "#!/bin/sh\ncp \"$1\" \"$2\"\n",
        );

        Self {
            work: tmp.path().join("work"),
            _tmp: tmp,
            home,
            image,
            binary,
            lossy_binary,
            converter,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("wavescribe-test");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.home);
        cmd
    }

    /// A command already pointed at the fake binary, the cover image and the work dir.
    pub fn sweep(&self, binary: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.arg(&self.image)
            .arg(MESSAGE)
            .arg("--binary")
            .arg(binary)
            .arg("--work-dir")
            .arg(&self.work);
        cmd
    }

    pub fn run_json(&self, mut cmd: Command) -> Value {
        let out = cmd
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Mimics the WaveScribe CLI: four args encode (copy input to output),
/// two args decode (print the message padded to 32 columns, or ERROR for
/// round-tripped JPEGs when lossy).
fn fake_wavescribe(lossy: bool) -> String {
    let decoded = if lossy {
        "case \"$2\" in *test_jpg_*) msg=ERROR ;; *) msg=\"hello wave\" ;; esac\n"
    } else {
        "msg=\"hello wave\"\n"
    };
    format!(
        "#!/bin/sh\n\
         if [ \"$#\" -eq 4 ]; then cp \"$2\" \"$3\"; exit $?; fi\n\
         if [ \"$#\" -eq 2 ]; then\n\
         {decoded}\
         printf 'Message obtained from image %s : %-32s\\n' \"$2\" \"$msg\"\n\
         exit 0\n\
         fi\n\
         echo '    usage: WaveMark strength input.png [output.png \"string\"]'\n\
         exit 1\n"
    )
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    fs::write(path, body).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path.to_path_buf()
}

#[cfg(not(unix))]
fn write_script(path: &Path, body: &str) -> PathBuf {
    fs::write(path, body).expect("write script");
    path.to_path_buf()
}
