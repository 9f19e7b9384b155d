use super::super::CliCommand;
use super::parse;
use clap::Parser;

#[test]
fn cli_parse_check_without_expected() {
    match parse(&["fixity", "check", "/data/master.tif"]) {
        CliCommand::Check {
            path,
            expected,
            algorithm,
        } => {
            assert_eq!(path, "/data/master.tif");
            assert!(expected.is_none());
            assert!(algorithm.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_with_expected_and_algorithm() {
    match parse(&[
        "fixity",
        "check",
        "x.bin",
        "--expected",
        "ABCDEF",
        "--algorithm",
        "sha256",
    ]) {
        CliCommand::Check {
            path,
            expected,
            algorithm,
        } => {
            assert_eq!(path, "x.bin");
            assert_eq!(expected.as_deref(), Some("ABCDEF"));
            assert_eq!(algorithm.as_deref(), Some("sha256"));
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_hash() {
    match parse(&["fixity", "hash", "/path/to/file.bin"]) {
        CliCommand::Hash { path, algorithm } => {
            assert_eq!(path, "/path/to/file.bin");
            assert!(algorithm.is_none());
        }
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_agent() {
    match parse(&["fixity", "agent"]) {
        CliCommand::Agent => {}
        _ => panic!("expected Agent"),
    }
}

#[test]
fn cli_rejects_missing_path() {
    assert!(super::super::Cli::try_parse_from(["fixity", "check"]).is_err());
}
