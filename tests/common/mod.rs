use assert_cmd::Command;

pub fn goodday_cmd() -> Command {
    let mut cmd = Command::cargo_bin("goodday").unwrap();
    cmd.env_remove("GOODDAY_ROOT");
    cmd
}
