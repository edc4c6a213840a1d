//! End-to-end runs of the `tinct` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{Rgb, RgbImage};
use serde_json::Value;

fn tinct(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tinct"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_wallpaper(path: &Path) {
    RgbImage::from_fn(160, 90, |x, y| {
        if x < 80 {
            Rgb([25, 40, 70])
        } else if y < 45 {
            Rgb([150, 90, 60])
        } else {
            Rgb([60, 110, 80])
        }
    })
    .save(path)
    .unwrap();
}

#[test]
fn image_run_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    write_wallpaper(&dir.path().join("dusk.png"));

    let output = tinct(dir.path(), &["dusk.png", "out", "--colors", "6"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.starts_with("Analyzing: dusk.png"));
    assert!(text.contains("Exported:"));
    assert!(text.contains("Blur opacity: dark="));

    let out = dir.path().join("out");
    for name in [
        "palette-dark.json",
        "palette-light.json",
        "palette_preview-dark.html",
        "palette_preview-light.html",
        "readability_report-dark.txt",
        "readability_report-light.txt",
        "dusk.json",
        "dusk-blur.json",
    ] {
        assert!(out.join(name).is_file(), "{name} missing");
    }

    let family: Value =
        serde_json::from_str(&fs::read_to_string(out.join("dusk-blur.json")).unwrap()).unwrap();
    assert_eq!(family["themes"][0]["name"], "dusk Dark Blur");
    assert_eq!(family["themes"][1]["appearance"], "light");
}

#[test]
fn hex_colors_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("tinct.yaml"),
        "theme: light\nname: seeded\nopacity: 0.8\noutputs:\n  html: false\n",
    )
    .unwrap();

    let output = tinct(dir.path(), &["--from-hex", "#7098c1,#234223,#1a1a1a"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Blur opacity: light=0.80"));

    let palette: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("palette-light.json")).unwrap())
            .unwrap();
    assert_eq!(palette["_blur_opacity"]["hex"], "cc");
    assert!(!dir.path().join("palette-dark.json").exists());
    assert!(!dir.path().join("palette_preview-light.html").exists());
    assert!(!dir.path().join("seeded.json").exists());
}

#[test]
fn missing_image_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let output = tinct(dir.path(), &["nowhere.png"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to analyze nowhere.png"), "{stderr}");
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("custom.yaml"), "palette_size: 3\n").unwrap();
    let output = tinct(
        dir.path(),
        &["--from-hex", "#7098c1", "--config", "custom.yaml"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid config custom.yaml"));
}
