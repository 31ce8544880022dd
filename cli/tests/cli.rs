use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn default_run_plays_both_formats_and_exits_cleanly() {
    Command::cargo_bin("arena-cli")
        .expect("binary built")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== ROUND-ROBIN TOURNAMENT ==="))
        .stdout(predicate::str::contains("Orc: 3 wins"))
        .stdout(predicate::str::contains("=== KING OF THE HILL ==="))
        .stdout(predicate::str::contains("Final champion: Orc"))
        .stdout(predicate::str::contains("Orc [16/100 HP]"));
}

#[test]
fn duel_emits_json_lines() {
    Command::cargo_bin("arena-cli")
        .expect("binary built")
        .args(["--json", "duel", "orc", "dwarf"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"kind":"battle_end","winner":"orc","rounds":9}"#,
        ));
}

#[test]
fn unknown_race_fails() {
    Command::cargo_bin("arena-cli")
        .expect("binary built")
        .args(["duel", "orc", "goblin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown race"));
}

#[test]
fn tight_round_cap_draws() {
    Command::cargo_bin("arena-cli")
        .expect("binary built")
        .args(["--round-cap", "2", "duel", "orc", "dwarf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draw after 2 rounds"));
}

#[test]
fn matchup_table_lists_every_ordered_pair() {
    Command::cargo_bin("matchups")
        .expect("binary built")
        .assert()
        .success()
        .stdout(predicate::str::contains("draws:     0"));
}

fn write_roster(name: &str, yaml: &str) -> std::path::PathBuf {
    let file = format!("arena-cli-{}-{}.yaml", name, std::process::id());
    let path = std::env::temp_dir().join(file);
    std::fs::write(&path, yaml).expect("roster written");
    path
}

#[test]
fn matchups_use_the_roster_round_cap() {
    let path = write_roster(
        "capped",
        r#"
arena:
  round_cap: 1
weapons:
  axe: { name: Axe, damage: 14 }
fighters:
  - race: orc
    weapon: axe
  - race: dwarf
"#,
    );

    Command::cargo_bin("matchups")
        .expect("binary built")
        .arg("--roster")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("round cap: 1"))
        .stdout(predicate::str::contains("draws:     2"));

    Command::cargo_bin("matchups")
        .expect("binary built")
        .arg("--roster")
        .arg(&path)
        .args(["--round-cap", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("draws:     0"));
}

#[test]
fn roster_dump_is_pretty_unless_compact() {
    Command::cargo_bin("arena-cli")
        .expect("binary built")
        .arg("roster")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"weapons\": {"));

    let output = Command::cargo_bin("arena-cli")
        .expect("binary built")
        .args(["roster", "--compact"])
        .output()
        .expect("ran");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert_eq!(stdout.trim_end().lines().count(), 1);
    assert!(stdout.starts_with(r#"{"arena":{"round_cap":20}"#));
}
