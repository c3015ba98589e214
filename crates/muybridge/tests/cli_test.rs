//! Tests for command-line parsing and run assembly.

use clap::Parser;
use muybridge::{Cli, MuybridgeConfig};
use std::path::PathBuf;
use std::time::Duration;

fn settings() -> MuybridgeConfig {
    MuybridgeConfig::from_toml_str("[output]\ndir = \"videos\"\nmax_retries = 4", |_| None).unwrap()
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["muybridge", "--concept", "derivatives"]).unwrap();

    assert_eq!(cli.concept, "derivatives");
    assert_eq!(cli.output, PathBuf::from("output.mp4"));
    assert_eq!(cli.chapters, 3);
    assert!(cli.retries.is_none());
    assert!(cli.timeout.is_none());
    assert!(!cli.json);
    assert!(!cli.verbose);
}

#[test]
fn test_short_flags() {
    let cli = Cli::try_parse_from([
        "muybridge",
        "-c",
        "entropy",
        "-o",
        "entropy.mp4",
        "-n",
        "2",
        "-r",
        "1",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.concept, "entropy");
    assert_eq!(cli.output, PathBuf::from("entropy.mp4"));
    assert_eq!(cli.chapters, 2);
    assert_eq!(cli.retries, Some(1));
    assert!(cli.verbose);
}

#[test]
fn test_concept_is_required() {
    assert!(Cli::try_parse_from(["muybridge"]).is_err());
}

#[test]
fn test_chapter_count_bounds() {
    assert!(Cli::try_parse_from(["muybridge", "--concept", "x", "-n", "0"]).is_err());
    assert!(Cli::try_parse_from(["muybridge", "--concept", "x", "-n", "4"]).is_err());
    assert!(Cli::try_parse_from(["muybridge", "--concept", "x", "-n", "1"]).is_ok());
}

#[test]
fn test_zero_timeout_rejected() {
    assert!(Cli::try_parse_from(["muybridge", "--concept", "x", "--timeout", "0"]).is_err());
}

#[test]
fn test_run_config_falls_back_to_settings() {
    let cli = Cli::try_parse_from(["muybridge", "--concept", "derivatives"]).unwrap();
    let run = cli.run_config(&settings()).unwrap();

    assert_eq!(run.concept(), "derivatives");
    assert_eq!(*run.chapter_count(), 3);
    assert_eq!(*run.max_retries(), 4);
    assert_eq!(*run.render_timeout(), Duration::from_secs(60));
    assert_eq!(run.output_path(), PathBuf::from("videos/output.mp4"));
}

#[test]
fn test_flags_override_settings() {
    let cli = Cli::try_parse_from([
        "muybridge",
        "--concept",
        "derivatives",
        "--output",
        "/tmp/final.mp4",
        "--retries",
        "0",
        "--timeout",
        "5",
        "--chapters",
        "1",
    ])
    .unwrap();
    let run = cli.run_config(&settings()).unwrap();

    assert_eq!(*run.max_retries(), 0);
    assert_eq!(*run.chapter_count(), 1);
    assert_eq!(*run.render_timeout(), Duration::from_secs(5));
    assert_eq!(run.output_path(), PathBuf::from("/tmp/final.mp4"));
}

#[test]
fn test_blank_concept_rejected() {
    let cli = Cli::try_parse_from(["muybridge", "--concept", "   "]).unwrap();
    assert!(cli.run_config(&settings()).is_err());
}
