use std::process::Command;

fn rhino(args: &[&str]) -> (Option<i32>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_rhino"))
        .args(args)
        .output()
        .unwrap();
    (output.status.code(), String::from_utf8(output.stdout).unwrap())
}

#[test]
fn test_no_options() {
    assert_eq!(rhino(&[]), (Some(255), String::from("no options\n")));
}

#[test]
fn test_version_is_labelled() {
    let (code, out) = rhino(&["-v"]);
    assert_eq!(code, Some(0));
    assert_eq!(out, format!("version is {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_about_surrounds_help_with_blank_lines() {
    let (code, out) = rhino(&["--about"]);
    assert_eq!(code, Some(0));
    assert!(out.starts_with('\n'), "Help should be preceded by a blank line.");
    assert!(out.ends_with("\n\n"), "Help should be followed by a blank line.");
    assert!(out.contains("--version"));
}
