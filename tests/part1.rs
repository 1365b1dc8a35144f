use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();

    cmd.assert()
        .success()
        .stdout(str::contains("77777777777777774747"))
        .stdout(str::contains("position 31008"));
}
