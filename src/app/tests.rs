use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

fn options() -> Options {
    Options {
        case: Case::Insensitive,
        units: UnitKind::Bytes,
        invert: false,
        output: OutputMode::Lines,
        max_stars: 8,
    }
}

fn run_lines(app: &App, input: &str) -> (usize, String) {
    let mut output = Vec::new();
    let n = app.run_lines([input.as_bytes()], &mut output).unwrap();
    (n, String::from_utf8(output).unwrap())
}

#[rstest]
#[case("*.exe", "aloha.EXE", true)]
#[case("a?c", "a.c", false)]
#[case("a*b*c", "axxxbxxc", true)]
#[case("", "", true)]
#[case("", "x", false)]
fn test_matches(#[case] pattern: &str, #[case] subject: &str, #[case] expected: bool) {
    let app = App::new(pattern, options()).unwrap();
    assert_eq!(app.matches(subject.as_bytes()), expected);
}

#[test]
fn test_case_sensitive() {
    let app = App::new(
        "*.exe",
        Options {
            case: Case::Sensitive,
            ..options()
        },
    )
    .unwrap();
    assert!(!app.matches(b"aloha.EXE"));
    assert!(app.matches(b"aloha.exe"));
}

#[rstest]
#[case(UnitKind::Bytes, "??", "ü", true)]
#[case(UnitKind::Bytes, "?", "ü", false)]
#[case(UnitKind::Chars, "?", "ü", true)]
#[case(UnitKind::Chars, "??", "ü", false)]
fn test_units(#[case] units: UnitKind, #[case] pattern: &str, #[case] subject: &str, #[case] expected: bool) {
    let app = App::new(pattern, Options { units, ..options() }).unwrap();
    assert_eq!(app.matches(subject.as_bytes()), expected);
}

#[test]
fn test_chars_invalid_utf8() {
    let app = App::new(
        "*",
        Options {
            units: UnitKind::Chars,
            ..options()
        },
    )
    .unwrap();
    assert!(!app.matches(b"\xff"));

    let app = App::new("*", options()).unwrap();
    assert!(app.matches(b"\xff"));
}

#[test]
fn test_too_many_wildcards() {
    let result = App::new("*a*b*c*d*e*f*g*h*", options());
    assert_matches!(result, Err(Error::TooManyWildcards { count: 9, limit: 8 }));

    assert!(App::new("*a*b*c*d*e*f*g*", options()).is_ok());
}

#[test]
fn test_debug() {
    let app = App::new("*.rs", options()).unwrap();
    assert!(format!("{:?}", app).contains(r#"pattern: "*.rs""#));
}

#[test]
fn test_run_subjects() {
    let app = App::new("*.rs", options()).unwrap();
    let mut output = Vec::new();
    let n = app.run(["main.rs", "Cargo.toml", "LIB.RS"], &mut output).unwrap();
    assert_eq!(n, 2);
    assert_eq!(output, b"main.rs\nLIB.RS\n");
}

#[test]
fn test_run_lines() {
    let app = App::new("*.log", options()).unwrap();
    let (n, output) = run_lines(&app, "app.log\r\nreadme.md\nerror.LOG\nlast.log");
    assert_eq!(n, 3);
    assert_eq!(output, "app.log\nerror.LOG\nlast.log\n");
}

#[test]
fn test_run_lines_multiple_inputs() {
    let app = App::new("a*", options()).unwrap();
    let mut output = Vec::new();
    let n = app.run_lines([&b"abc\nxyz\n"[..], &b"\nax\n"[..]], &mut output).unwrap();
    assert_eq!(n, 2);
    assert_eq!(output, b"abc\nax\n");
}

#[test]
fn test_invert() {
    let app = App::new(
        "*.log",
        Options {
            invert: true,
            ..options()
        },
    )
    .unwrap();
    let (n, output) = run_lines(&app, "app.log\nreadme.md\n\n");
    assert_eq!(n, 2);
    assert_eq!(output, "readme.md\n\n");
}

#[test]
fn test_count() {
    let app = App::new(
        "?*",
        Options {
            output: OutputMode::Count,
            ..options()
        },
    )
    .unwrap();
    let (n, output) = run_lines(&app, "a\n\nbc\n.x\n");
    assert_eq!(n, 2);
    assert_eq!(output, "2\n");
}

#[test]
fn test_quiet() {
    let app = App::new(
        "*",
        Options {
            output: OutputMode::Quiet,
            ..options()
        },
    )
    .unwrap();
    let (n, output) = run_lines(&app, "a\nb\n");
    assert_eq!(n, 2);
    assert_eq!(output, "");
}

#[rstest]
#[case(b"abc\n", b"abc")]
#[case(b"abc\r\n", b"abc")]
#[case(b"abc", b"abc")]
#[case(b"\r\n", b"")]
#[case(b"a\rb", b"a\rb")]
fn test_trim_eol(#[case] line: &[u8], #[case] expected: &[u8]) {
    assert_eq!(trim_eol(line), expected);
}
