use std::{env, fs, path::PathBuf, process::Command};

fn run_bin(args: &[&str]) -> String {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_galton"));

    let output = Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command");

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );

    stdout_str.to_string()
}

#[test]
fn coupons_sweep_emits_table_and_chart() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("coupons_sweep");
    fs::remove_dir_all(&test_dir).ok();

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    let stdout = run_bin(&["--out-dir", test_dir_str, "coupons"]);

    assert!(stdout.contains("Average Coupons Needed"));
    assert!(stdout.contains("Time taken for 100 trials with 10000 coupons"));
    assert!(test_dir.join("coupon_collector.png").is_file());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn branching_sweep_is_reproducible_for_a_fixed_seed() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("branching_sweep");
    fs::remove_dir_all(&test_dir).ok();

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    run_bin(&["--out-dir", test_dir_str, "branching", "--seed", "42"]);

    let chart = test_dir.join("branching_process.png");
    assert!(chart.is_file());
    let first = fs::read(&chart).expect("failed to read chart");

    run_bin(&["--out-dir", test_dir_str, "branching", "--seed", "42"]);
    let second = fs::read(&chart).expect("failed to read chart");

    assert_eq!(first, second, "same seed must reproduce the chart exactly");

    fs::remove_dir_all(&test_dir).ok();
}
