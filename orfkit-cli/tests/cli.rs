use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn orfkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_orfkit"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run orfkit")
}

fn fasta(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const RECORDS: &str = "\
>seq1 full ORF
ATGAAATAG
>seq2 flanked, wrapped
CCCATG
AAATAGCCC
>seq3 no start codon
AATT
";

#[test]
fn translate_records_in_file_order() {
    let file = fasta(RECORDS);
    let output = orfkit(&["translate", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "MK_\nMK_\n\n");
}

#[test]
fn orf_and_revcomp() {
    let file = fasta(RECORDS);
    let path = file.path().to_str().unwrap();

    let orfs = orfkit(&["orf", path]);
    assert!(orfs.status.success());
    assert_eq!(
        String::from_utf8(orfs.stdout).unwrap(),
        "ATGAAATAG\nATGAAATAG\n\n"
    );

    let rc = orfkit(&["revcomp", path]);
    assert!(rc.status.success());
    assert_eq!(
        String::from_utf8(rc.stdout).unwrap(),
        "CTATTTCAT\nGGGCTATTTCATGGG\nAATT\n"
    );
}

#[test]
fn analyze_json_output() {
    let file = fasta(RECORDS);
    let output = orfkit(&["analyze", "--format", "json", file.path().to_str().unwrap()]);
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1]["length"], 15);
    assert_eq!(rows[1]["start"], 3);
    assert_eq!(rows[2]["orf"], "");
}

#[test]
fn empty_file_prints_nothing() {
    let file = fasta("");
    let output = orfkit(&["translate", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file_fails() {
    let output = orfkit(&["analyze", "/nonexistent/input.fa"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: failed to load /nonexistent/input.fa"), "{}", stderr);
}
