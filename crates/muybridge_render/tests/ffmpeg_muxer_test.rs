#![cfg(unix)]

use muybridge_error::{MuybridgeError, MuybridgeErrorKind, MuxErrorKind};
use muybridge_interface::Muxer;
use muybridge_render::FfmpegMuxer;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

static SCRIPT_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Stand-in for ffmpeg: copies the manifest to the output path so the test can
/// inspect what would have been concatenated.
const MUX_OK: &str = r#"#!/bin/sh
manifest=""
prev=""
out=""
for arg in "$@"; do
  if [ "$prev" = "-i" ]; then manifest="$arg"; fi
  prev="$arg"
  out="$arg"
done
cp "$manifest" "$out"
"#;

const MUX_FAIL: &str = r#"#!/bin/sh
echo "concat: Invalid data found when processing input" >&2
exit 1
"#;

fn muxer(dir: &Path, body: &str) -> FfmpegMuxer {
    let path = dir.join("fake_ffmpeg.sh");
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    FfmpegMuxer::builder().program(path).build().unwrap()
}

fn media(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    let media = dir.join("media");
    std::fs::create_dir_all(&media).unwrap();
    names
        .iter()
        .map(|name| {
            let path = media.join(name);
            std::fs::write(&path, "video").unwrap();
            path
        })
        .collect()
}

fn mux_kind(err: &MuybridgeError) -> MuxErrorKind {
    match err.kind() {
        MuybridgeErrorKind::Mux(e) => e.kind.clone(),
        other => panic!("expected mux error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_manifest_lists_inputs_in_order_and_is_removed() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = TempDir::new().unwrap();
    let muxer = muxer(dir.path(), MUX_OK);
    let inputs = media(dir.path(), &["Slopes.mp4", "Rules.mp4", "Limits.mp4"]);
    let output = dir.path().join("final.mp4");

    let written = muxer.combine(&inputs, &output).await.unwrap();
    assert_eq!(written, output);

    let manifest = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = manifest.lines().collect();
    assert_eq!(lines.len(), 3);
    for (line, input) in lines.iter().zip(&inputs) {
        let absolute = std::fs::canonicalize(input).unwrap();
        assert_eq!(*line, format!("file '{}'", absolute.display()));
    }
    assert!(!FfmpegMuxer::manifest_path(&output).exists());
}

#[tokio::test]
async fn test_output_parent_is_created() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = TempDir::new().unwrap();
    let muxer = muxer(dir.path(), MUX_OK);
    let inputs = media(dir.path(), &["A.mp4"]);
    let output = dir.path().join("nested/deeper/final.mp4");

    muxer.combine(&inputs, &output).await.unwrap();
    assert!(output.exists());
}

#[tokio::test]
async fn test_empty_input_list_is_rejected() {
    let dir = TempDir::new().unwrap();
    let muxer = FfmpegMuxer::default();

    let err = muxer
        .combine(&[], &dir.path().join("final.mp4"))
        .await
        .unwrap_err();
    assert_eq!(mux_kind(&err), MuxErrorKind::NoInputs);
}

#[tokio::test]
async fn test_first_missing_input_is_named() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = TempDir::new().unwrap();
    let muxer = muxer(dir.path(), MUX_OK);
    let mut inputs = media(dir.path(), &["A.mp4"]);
    let missing = dir.path().join("media/B.mp4");
    inputs.push(missing.clone());
    inputs.push(dir.path().join("media/C.mp4"));
    let output = dir.path().join("final.mp4");

    let err = muxer.combine(&inputs, &output).await.unwrap_err();
    assert_eq!(
        mux_kind(&err),
        MuxErrorKind::MissingArtifact(missing.display().to_string())
    );
    assert!(!output.exists());
}

#[tokio::test]
async fn test_failed_mux_carries_stderr_and_removes_manifest() {
    let _guard = SCRIPT_LOCK.lock().await;
    let dir = TempDir::new().unwrap();
    let muxer = muxer(dir.path(), MUX_FAIL);
    let inputs = media(dir.path(), &["A.mp4", "B.mp4"]);
    let output = dir.path().join("final.mp4");

    let err = muxer.combine(&inputs, &output).await.unwrap_err();
    match mux_kind(&err) {
        MuxErrorKind::Execution { diagnostics, .. } => {
            assert!(diagnostics.contains("Invalid data found"));
        }
        other => panic!("expected execution error, got {:?}", other),
    }
    assert!(!FfmpegMuxer::manifest_path(&output).exists());
    assert!(inputs.iter().all(|input| input.exists()));
}
