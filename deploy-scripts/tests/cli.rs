//! Tests of the `deploy-scripts` binary's exit codes and output

use std::{fs, path::Path};

use assert_cmd::Command;
use eyre::Result;

/// The first default account of a local development node
const DEV_PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// An RPC URL nothing listens on
const UNREACHABLE_RPC_URL: &str = "http://127.0.0.1:1";

/// Write a Hardhat artifact for each licensing contract under `dir`
fn write_artifacts(dir: &Path) -> Result<()> {
    for name in ["Treasury", "LicenseToken", "UsageFeeCollector"] {
        let contract_dir = dir.join("contracts").join(format!("{name}.sol"));
        fs::create_dir_all(&contract_dir)?;
        fs::write(
            contract_dir.join(format!("{name}.json")),
            format!(r#"{{ "contractName": "{name}", "abi": [], "bytecode": "0x6080604052" }}"#),
        )?;
    }

    Ok(())
}

fn deploy_scripts() -> Result<Command> {
    let mut cmd = Command::cargo_bin("deploy-scripts")?;
    cmd.env_remove("PKEY")
        .env_remove("RPC_URL")
        .env_remove("NETWORK")
        .env_remove("REVENUE_RECIPIENT")
        .env_remove("ARTIFACTS_DIR");
    Ok(cmd)
}

#[test]
fn test_plan_succeeds() -> Result<()> {
    let assert = deploy_scripts()?.arg("plan").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    assert!(stdout.contains("1. Treasury(revenue recipient)"));
    assert!(stdout.contains("2. LicenseToken(address of Treasury)"));
    assert!(stdout.contains("3. UsageFeeCollector(address of Treasury)"));

    Ok(())
}

#[test]
fn test_unreachable_network_exits_with_failure() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;

    let assert = deploy_scripts()?
        .args(["deploy", "--pkey", DEV_PKEY, "--rpc-url", UNREACHABLE_RPC_URL])
        .arg("--artifacts-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1);

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(!stdout.contains("Deployment Summary"));
    assert!(!stdout.contains("Deploying Treasury"));

    Ok(())
}

#[test]
fn test_missing_private_key_exits_with_failure() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;

    let assert = deploy_scripts()?
        .args(["deploy", "--rpc-url", UNREACHABLE_RPC_URL])
        .arg("--artifacts-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert!(stderr.contains("--pkey"));

    Ok(())
}

#[test]
fn test_malformed_argument_exits_with_failure() -> Result<()> {
    deploy_scripts()?
        .args(["deploy", "--pkey", DEV_PKEY, "--confirmations", "five"])
        .assert()
        .failure()
        .code(1);

    Ok(())
}

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let assert = deploy_scripts()?.arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    assert!(stdout.contains("deploy"));

    Ok(())
}

#[test]
fn test_missing_artifacts_exits_with_failure() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let assert = deploy_scripts()?
        .args(["deploy", "--pkey", DEV_PKEY, "--rpc-url", UNREACHABLE_RPC_URL])
        .arg("--artifacts-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone())?;
    assert!(stderr.contains("ReadArtifact"));

    Ok(())
}
