use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;
use whitelist_tools::merkle::MerkleTree;

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf-8 stderr")
}

#[test]
fn whitelist_abusers_default_paths() {
    let dir = tempdir().expect("temporary directory");
    fs::write(
        dir.path().join("mint_whitelist.csv"),
        "\
Txhash,From,To,Value_IN(ETH),Method
0x01,0xA,0xC,1.5,Mint Whitelist
0x02,0xA,0xC,9,Other
0x03,0xB,0xC,2.0,Mint Whitelist
",
    )
    .expect("input written");

    let output = Command::new(env!("CARGO_BIN_EXE_whitelist-abusers"))
        .current_dir(dir.path())
        .output()
        .expect("binary runs");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let result = fs::read_to_string(dir.path().join("result.csv")).expect("result written");
    assert_eq!(result, "From Address,Total Value\n0xB,2.0\n0xA,1.5\n");
}

#[test]
fn whitelist_abusers_custom_method_and_paths() {
    let dir = tempdir().expect("temporary directory");
    let input = dir.path().join("export.csv");
    let output_path = dir.path().join("public.csv");
    fs::write(
        &input,
        "\
Method,From,Value_IN(ETH)
Mint Public,0xA,0.1
Mint Public,0xB,0.3
Mint Whitelist,0xA,5
Mint Public,0xA,0.1
",
    )
    .expect("input written");

    let output = Command::new(env!("CARGO_BIN_EXE_whitelist-abusers"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output_path)
        .args(["--method", "Mint Public"])
        .output()
        .expect("binary runs");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(output_path).expect("result written"),
        "From Address,Total Value\n0xB,0.3\n0xA,0.2\n"
    );
}

#[test]
fn whitelist_abusers_missing_input_fails() {
    let dir = tempdir().expect("temporary directory");
    let output = Command::new(env!("CARGO_BIN_EXE_whitelist-abusers"))
        .current_dir(dir.path())
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("mint_whitelist.csv"));
    assert!(!dir.path().join("result.csv").exists());
}

#[test]
fn whitelist_abusers_missing_column_fails() {
    let dir = tempdir().expect("temporary directory");
    fs::write(
        dir.path().join("mint_whitelist.csv"),
        "Method,Value_IN(ETH)\nMint Whitelist,1\n",
    )
    .expect("input written");
    let output = Command::new(env!("CARGO_BIN_EXE_whitelist-abusers"))
        .current_dir(dir.path())
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Missing column `From`"));
}

#[test]
fn whitelist_abusers_overflow_fails_cleanly() {
    let dir = tempdir().expect("temporary directory");
    fs::write(
        dir.path().join("mint_whitelist.csv"),
        "\
Method,From,Value_IN(ETH)
Mint Whitelist,0xA,79228162514264337593543950335
Mint Whitelist,0xA,1
",
    )
    .expect("input written");
    let output = Command::new(env!("CARGO_BIN_EXE_whitelist-abusers"))
        .current_dir(dir.path())
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Total value for 0xA overflows"));
}

#[test]
fn toc_generator_without_argument_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_toc-generator"))
        .output()
        .expect("binary runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Usage: "));
}

#[test]
fn toc_generator_prints_table() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("findings.md");
    fs::write(
        &path,
        "# Report\n\n## [S1] Setup Guide\ntext\n## [S2] Setup Guide\n",
    )
    .expect("markdown written");

    let output = Command::new(env!("CARGO_BIN_EXE_toc-generator"))
        .arg(&path)
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
| ID | Title |
| :--- | :--- |
| S1 | [Setup Guide](#s1-setup-guide) |
| S2 | [Setup Guide](#s2-setup-guide-1) |
"
    );
}

#[test]
fn toc_generator_ignores_extra_arguments() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("findings.md");
    fs::write(&path, "## [A1] Setup\n").expect("markdown written");

    let output = Command::new(env!("CARGO_BIN_EXE_toc-generator"))
        .arg(&path)
        .args(["extra.md", "--verbose"])
        .output()
        .expect("binary runs");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "| ID | Title |\n| :--- | :--- |\n| A1 | [Setup](#a1-setup) |\n"
    );
}

#[test]
fn toc_generator_missing_file_reports_and_succeeds() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("absent.md");
    let output = Command::new(env!("CARGO_BIN_EXE_toc-generator"))
        .arg(&path)
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("Error: File not found - {}\n", path.display())
    );
}

#[test]
fn toc_generator_other_read_error_reports_and_succeeds() {
    let dir = tempdir().expect("temporary directory");
    let output = Command::new(env!("CARGO_BIN_EXE_toc-generator"))
        .arg(dir.path())
        .output()
        .expect("binary runs");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Error: "));
    assert!(!out.contains("File not found"));
}

#[test]
fn merkle_whitelist_prints_root_and_proof() {
    let addresses = [
        "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf",
        "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF",
    ];
    let output = Command::new(env!("CARGO_BIN_EXE_merkle-whitelist"))
        .args(addresses)
        .args(["--proof-for", addresses[1]])
        .output()
        .expect("binary runs");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let tree = MerkleTree::new(addresses);
    let expected = format!(
        "Root hash: {}\nProof: {:?}\n",
        tree.root_hex(),
        tree.hex_proof(addresses[1]).expect("address whitelisted")
    );
    assert_eq!(stdout(&output), expected);
}

#[test]
fn merkle_whitelist_unknown_proof_address_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_merkle-whitelist"))
        .args(["0xaaaa", "0xbbbb", "--proof-for", "0xcccc"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("0xcccc is not in the whitelist"));
}
