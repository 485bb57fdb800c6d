//! Driver exit-code and end-to-end behavior
//!
//! Exit code contract: 0 success, 1 usage/I/O failure, 2 when the
//! threshold core rejects the inputs.

use assert_cmd::Command;
use predicates::prelude::*;
use rats_io::GrayImage;

fn rats() -> Command {
    Command::cargo_bin("rats").expect("rats binary")
}

/// Write a small 8-bit PGM with a bright square on a dark background.
fn write_two_level_pgm(path: &std::path::Path) {
    let (w, h) = (16usize, 16usize);
    let mut data = vec![20u8; w * h];
    for y in 4..12 {
        for x in 4..12 {
            data[y * w + x] = 200;
        }
    }
    let mut bytes = format!("P5\n{w} {h}\n255\n").into_bytes();
    bytes.extend_from_slice(&data);
    std::fs::write(path, bytes).unwrap();
}

/// Write a perfectly flat PGM; its morphological gradient is all zero.
fn write_flat_pgm(path: &std::path::Path) {
    let (w, h) = (8usize, 8usize);
    let mut bytes = format!("P5\n{w} {h}\n255\n").into_bytes();
    bytes.extend_from_slice(&vec![77u8; w * h]);
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn cli_wrong_argument_count_exits_one() {
    rats()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    rats()
        .arg("only-one-arg.pgm")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn cli_missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    rats()
        .arg(dir.path().join("nonexistent.pgm"))
        .arg(dir.path().join("out.pgm"))
        .assert()
        .code(1);
}

#[test]
fn cli_degenerate_gradient_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.pgm");
    let output = dir.path().join("out.pgm");
    write_flat_pgm(&input);

    rats()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("degenerate"));
    assert!(!output.exists(), "no partial output on failure");
}

#[test]
fn cli_end_to_end_produces_binary_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("square.pgm");
    let output = dir.path().join("out.pgm");
    write_two_level_pgm(&input);

    rats().arg(&input).arg(&output).assert().success();

    match rats_io::read_image(&output).unwrap() {
        GrayImage::U8(img) => {
            assert_eq!(img.region().extent(), [16, 16]);
            assert!(img.as_slice().iter().all(|&p| p == 0 || p == 255));
            // The bright square interior is inside, the background outside
            assert_eq!(img.get([8, 8]), Some(255));
            assert_eq!(img.get([0, 0]), Some(0));
        }
        GrayImage::U16(_) => panic!("expected 8-bit output"),
    }
}

#[test]
fn cli_custom_inside_outside_values() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("square.pgm");
    let output = dir.path().join("out.pgm");
    write_two_level_pgm(&input);

    rats()
        .arg(&input)
        .arg(&output)
        .args(["--inside", "1", "--outside", "9"])
        .assert()
        .success();

    match rats_io::read_image(&output).unwrap() {
        GrayImage::U8(img) => {
            assert!(img.as_slice().iter().all(|&p| p == 1 || p == 9));
        }
        GrayImage::U16(_) => panic!("expected 8-bit output"),
    }
}

#[test]
fn cli_negative_pow_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("square.pgm");
    let output = dir.path().join("out.pgm");
    write_two_level_pgm(&input);

    rats()
        .arg(&input)
        .arg(&output)
        .arg("--pow=-1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exponent"));
    assert!(!output.exists(), "no partial output on failure");
}

#[test]
fn cli_pow_zero_still_succeeds_on_flat_image() {
    // Under pow = 0 every weight is 1, so even a flat image thresholds
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.pgm");
    let output = dir.path().join("out.pgm");
    write_flat_pgm(&input);

    rats()
        .arg(&input)
        .arg(&output)
        .args(["--pow", "0"])
        .assert()
        .success();

    match rats_io::read_image(&output).unwrap() {
        // Every pixel ties with the threshold, so everything is outside
        GrayImage::U8(img) => assert!(img.as_slice().iter().all(|&p| p == 0)),
        GrayImage::U16(_) => panic!("expected 8-bit output"),
    }
}
