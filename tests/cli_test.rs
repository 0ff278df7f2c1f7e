use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*;
use std::process::Command; // Run programs
use tempfile;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// deterministic test data with mixed runs and noise
fn strip_data(len: usize) -> Vec<u8> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut ans = Vec::with_capacity(len);
    for i in 0..len {
        if i % 1000 < 600 {
            ans.push((i / 300) as u8);
        } else {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ans.push((state >> 33) as u8);
        }
    }
    ans
}

fn round_trip_test(len: usize) -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let raw_path = temp_dir.path().join("strip.raw");
    let lzw_path = temp_dir.path().join("strip.lzw");
    let out_path = temp_dir.path().join("strip.out");
    let raw = strip_data(len);
    std::fs::write(&raw_path,&raw)?;

    let mut cmd = Command::cargo_bin("striplzw")?;
    cmd.arg("compress")
        .arg("-i").arg(&raw_path)
        .arg("-o").arg(&lzw_path)
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("striplzw")?;
    cmd.arg("expand")
        .arg("-i").arg(&lzw_path)
        .arg("-o").arg(&out_path)
        .arg("-s").arg(len.to_string())
        .assert()
        .success();

    match (std::fs::read(&raw_path),std::fs::read(&out_path)) {
        (Ok(v1),Ok(v2)) => {
            assert_eq!(v1,v2);
        },
        _ => panic!("unable to compare output with reference")
    }
    Ok(())
}

#[test]
fn strip_round_trip() -> STDRESULT {
    round_trip_test(20000)
}

#[test]
fn empty_strip_round_trip() -> STDRESULT {
    round_trip_test(0)
}

#[test]
fn oversized_bound_is_trimmed() -> STDRESULT {
    // asking for more than the strip holds must give back exactly the strip
    let temp_dir = tempfile::tempdir()?;
    let raw_path = temp_dir.path().join("strip.raw");
    let lzw_path = temp_dir.path().join("strip.lzw");
    let out_path = temp_dir.path().join("strip.out");
    let raw = strip_data(5000);
    std::fs::write(&raw_path,&raw)?;

    let mut cmd = Command::cargo_bin("striplzw")?;
    cmd.arg("compress")
        .arg("-i").arg(&raw_path)
        .arg("-o").arg(&lzw_path)
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("striplzw")?;
    cmd.arg("expand")
        .arg("-i").arg(&lzw_path)
        .arg("-o").arg(&out_path)
        .arg("-s").arg("9000")
        .assert()
        .success();

    assert_eq!(std::fs::read(&out_path)?,raw);
    Ok(())
}

#[test]
fn old_style_file_is_rejected() -> STDRESULT {
    let temp_dir = tempfile::tempdir()?;
    let lzw_path = temp_dir.path().join("old.lzw");
    let out_path = temp_dir.path().join("old.out");
    // old-style signature: leading zero byte with the next low bit set
    std::fs::write(&lzw_path,[0x00,0x01,0x02,0x03])?;

    let mut cmd = Command::cargo_bin("striplzw")?;
    cmd.arg("expand")
        .arg("-i").arg(&lzw_path)
        .arg("-o").arg(&out_path)
        .arg("-s").arg("100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("old-style"));
    Ok(())
}
