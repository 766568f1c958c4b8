// Integration testing drives the compiled binary as a subprocess; the Go
// toolchain is replaced with a shell shim on PATH so the suite never needs a
// real `go` install.

use std::path::{Path, PathBuf};

#[test]
fn missing_project_flag_fails_before_touching_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("goforge").unwrap();

    cmd.current_dir(tmp.path());

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("project path must not be empty"));

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[cfg(unix)]
fn write_go_shim(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.join("shim-bin");
    std::fs::create_dir_all(&bin).unwrap();

    let shim = bin.join("go");
    std::fs::write(&shim, script).unwrap();
    std::fs::set_permissions(&shim, std::fs::Permissions::from_mode(0o755)).unwrap();

    bin
}

#[cfg(unix)]
#[test]
fn scaffolds_a_project_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    // records its arguments in its working directory, then succeeds
    let bin = write_go_shim(
        tmp.path(),
        "#!/bin/sh\necho \"$@\" > go-args.txt\nexit 0\n",
    );
    let project = tmp.path().join("build").join("sample");

    let mut cmd = assert_cmd::Command::cargo_bin("goforge").unwrap();
    cmd.env("PATH", &bin);
    cmd.arg("--project").arg(&project);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("has been initialized"))
        .stdout(predicates::str::contains("sample"));

    assert!(project.join("cmd").is_dir());
    assert!(project.join("pkg").is_dir());

    let gitignore = std::fs::read_to_string(project.join(".gitignore")).unwrap();
    assert!(gitignore.contains("vendor/"));

    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("sample"));

    // the shim ran inside the project directory with the module name
    let args = std::fs::read_to_string(project.join("go-args.txt")).unwrap();
    assert_eq!(args.trim(), "mod init sample");
}

#[cfg(unix)]
#[test]
fn failing_initializer_fails_the_run_but_keeps_the_files() {
    let tmp = tempfile::tempdir().unwrap();
    let bin = write_go_shim(tmp.path(), "#!/bin/sh\nexit 7\n");
    let project = tmp.path().join("demo-app");

    let mut cmd = assert_cmd::Command::cargo_bin("goforge").unwrap();
    cmd.env("PATH", &bin);
    cmd.arg("-p").arg(&project);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("exited with"));

    assert!(project.join(".gitignore").is_file());
    assert!(project.join("Makefile").is_file());
}
