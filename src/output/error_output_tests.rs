use std::path::PathBuf;

use super::*;

fn render(output: &ErrorOutput, error: &ProseGuardError) -> String {
    let mut buf = Vec::new();
    output.write_error(&mut buf, error);
    String::from_utf8(buf).unwrap()
}

#[test]
fn plain_error_carries_type_detail_and_help() {
    let error = ProseGuardError::FileRead {
        path: PathBuf::from("conf.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };

    let text = render(&ErrorOutput::with_colors(false), &error);

    assert_eq!(
        text,
        "✖ FileRead: Failed to read file: conf.toml\n  \
         × no such file\n  \
         help: Check that the file path exists\n"
    );
}

#[test]
fn detail_line_is_omitted_without_source() {
    let error = ProseGuardError::UnknownRule("ms-typo".to_string());

    let text = render(&ErrorOutput::with_colors(false), &error);

    assert!(text.starts_with("✖ Config: Unknown rule: ms-typo\n"));
    assert!(!text.contains('×'));
    assert!(text.contains("help: Run `prose-guard rules`"));
}

#[test]
fn colored_error_uses_ansi() {
    let error = ProseGuardError::Config("bad".to_string());

    let text = render(&ErrorOutput::with_colors(true), &error);

    assert!(text.contains(ansi::RED));
    assert!(text.contains(ansi::RESET));
}

#[test]
fn never_mode_disables_stderr_colors() {
    assert!(!stderr_supports_color(ColorMode::Never));
    assert!(stderr_supports_color(ColorMode::Always));
    assert!(!render(&ErrorOutput::stderr(ColorMode::Never), &ProseGuardError::Config("x".into()))
        .contains('\x1b'));
}
