use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "20"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 1);
    assert_eq!(v["games"], 20);
    assert_eq!(v["human_wins"], 0);
    assert_eq!(v["computer_lost"], false);
    let total = v["computer_wins"].as_u64().unwrap() + v["draws"].as_u64().unwrap();
    assert_eq!(total, 20);
}

#[test]
fn sim_binary_rejects_missing_args() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("Usage: sim <seed> <games>"), "{}", stderr);
}
