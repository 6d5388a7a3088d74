use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("drills").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn pub_refuses_minor() {
    cmd()
        .args(["pub", "15"])
        .assert()
        .failure()
        .stderr(contains("Consuming Alcohol is not permitted under 18 years old"));
}

#[test]
fn pub_admits_adult() {
    cmd().args(["pub", "18"]).assert().success().stdout(contains("Welcome in!"));
}

#[test]
fn login_statuses() {
    cmd().args(["login", "john", "supersecret"]).assert().success().stdout(contains("200"));
    cmd().args(["login", "john", "wrongpassword"]).assert().success().stdout(contains("401"));
    cmd().args(["login", "wronguser", "supersecret"]).assert().success().stdout(contains("401"));
}

#[test]
fn fight_prints_survivor() {
    cmd()
        .args(["fight", "--size", "10", "--seed", "42"])
        .assert()
        .success()
        .stdout(contains("has a power of"));
}

#[test]
fn fight_with_no_mutants() {
    cmd()
        .args(["fight", "--size", "0"])
        .assert()
        .success()
        .stdout(contains("Nobody showed up"));
}

#[test]
fn write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    cmd()
        .arg("write")
        .arg(&path)
        .arg("Hello World")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello World");
}

#[test]
fn vote_messages() {
    cmd()
        .args(["vote", "John", "15"])
        .assert()
        .success()
        .stdout("You are under 18\n");
    cmd()
        .args(["vote", "Jane", "18"])
        .assert()
        .success()
        .stdout("You can vote, you are an adult\n");
}

#[test]
fn config_file_sets_army_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("drills.toml");
    std::fs::write(&config, "army_size = 3\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["fight", "--seed", "1"])
        .assert()
        .success()
        .stdout(contains("has a power of"));
}

#[test]
fn config_cannot_lower_legal_age() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("drills.toml");
    std::fs::write(&config, "legal_age = 16\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["pub", "17"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
    cmd()
        .args(["pub", "17"])
        .assert()
        .failure()
        .stderr(contains("not permitted under 18"));
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("drills.toml");
    std::fs::write(&config, "army_size = 0\n").unwrap();

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["login", "john", "supersecret"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
}
