use flatcat::output::{Emitter, display_relative};
use flatcat::{ExtensionFilter, FlatcatError, Launcher, RuleSet, read_lines};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn rules(lines: &[&str]) -> RuleSet {
    RuleSet::from_lines(Path::new("/project"), lines).unwrap()
}

#[test]
fn test_glob_patterns() {
    let set = rules(&["*.log", "docs/**/*.tmp"]);
    assert!(set.matches(Path::new("debug.log"), false));
    assert!(set.matches(Path::new("nested/deep/debug.log"), false));
    assert!(set.matches(Path::new("docs/a/b/scratch.tmp"), false));
    assert!(!set.matches(Path::new("scratch.tmp"), false));
    assert!(!set.matches(Path::new("main.rs"), false));
}

#[test]
fn test_directory_only_pattern() {
    let set = rules(&["build/"]);
    assert!(set.matches(Path::new("build"), true));
    assert!(!set.matches(Path::new("build"), false));
}

#[test]
fn test_anchored_pattern() {
    let set = rules(&["/target"]);
    assert!(set.matches(Path::new("target"), true));
    assert!(!set.matches(Path::new("crates/target"), true));
}

#[test]
fn test_later_negation_wins() {
    let set = rules(&["*.txt", "!keep.txt"]);
    assert!(set.matches(Path::new("notes.txt"), false));
    assert!(!set.matches(Path::new("keep.txt"), false));

    let reversed = rules(&["!keep.txt", "*.txt"]);
    assert!(reversed.matches(Path::new("keep.txt"), false));
}

#[test]
fn test_comments_and_blank_lines() {
    let set = rules(&["# *.rs", "", "   ", "*.log"]);
    assert!(!set.matches(Path::new("main.rs"), false));
    assert!(set.matches(Path::new("x.log"), false));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_malformed_pattern_is_skipped() {
    let set = RuleSet::from_lines(Path::new("/project"), &["a{b", "*.log"]).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.matches(Path::new("x.log"), false));
    assert!(!set.matches(Path::new("a{b"), false));
}

#[test]
fn test_subdirectory_named_like_root() {
    let set = RuleSet::from_lines(Path::new("proj"), &["/lib.rs"]).unwrap();
    assert!(set.matches(Path::new("lib.rs"), false));
    assert!(!set.matches(Path::new("proj/lib.rs"), false));
}

#[test]
fn test_empty_rule_set() {
    let set = RuleSet::empty(Path::new("."));
    assert!(set.is_empty());
    assert!(!set.matches(Path::new("anything"), false));
}

#[test]
fn test_read_lines_missing_file() {
    let dir = tempdir().unwrap();
    let lines = read_lines(&dir.path().join("nope.txt")).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn test_read_lines_strips_line_endings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ignore.txt");
    fs::write(&path, "a.txt\r\nb/\n\n!c.txt").unwrap();
    let lines = read_lines(&path).unwrap();
    assert_eq!(lines, vec!["a.txt", "b/", "", "!c.txt"]);
}

#[test]
fn test_read_lines_other_errors_propagate() {
    let dir = tempdir().unwrap();
    let err = read_lines(dir.path()).unwrap_err();
    assert!(matches!(err, FlatcatError::IgnoreFile { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_compile_orders_exclusions_after_gitignore() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.txt\n").unwrap();
    let exclusions = dir.path().join("extra.ignore");
    fs::write(&exclusions, "!keep.txt\n").unwrap();
    let set = RuleSet::compile(dir.path(), &exclusions).unwrap();
    assert!(set.matches(Path::new("drop.txt"), false));
    assert!(!set.matches(Path::new("keep.txt"), false));
}

#[test]
fn test_compile_without_sources() {
    let dir = tempdir().unwrap();
    let set = RuleSet::compile(dir.path(), &dir.path().join("missing.txt")).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_extension_filter_parsing() {
    let filter = ExtensionFilter::from_csv("MD, .Go,,  ");
    assert_eq!(filter.len(), 2);
    assert!(filter.contains("md"));
    assert!(filter.contains("GO"));
    assert!(filter.allows(Path::new("README.md")));
    assert!(filter.allows(Path::new("cmd/main.GO")));
    assert!(!filter.allows(Path::new("notes.TXT")));
    assert!(!filter.allows(Path::new("Makefile")));
}

#[test]
fn test_empty_extension_filter_allows_all() {
    let filter = ExtensionFilter::from_csv("");
    assert!(filter.is_empty());
    assert!(filter.allows(Path::new("Makefile")));
    assert!(filter.allows(Path::new("a.bin")));
}

#[test]
fn test_extension_of_dotfile() {
    let filter = ExtensionFilter::from_csv("env");
    assert!(filter.allows(Path::new(".env")));
    assert!(filter.allows(Path::new("config/prod.ENV")));
    assert!(!filter.allows(Path::new("env")));
}

#[test]
fn test_record_format() {
    let mut emitter = Emitter::new(Vec::new());
    emitter.write_record("a.txt", b"hi").unwrap();
    emitter.write_record("dir/b.txt", b"line\r\n").unwrap();
    assert_eq!(emitter.records(), 2);
    let (buf, count) = emitter.finish().unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        buf,
        b"a.txt\n```\nhi\n```\ndir/b.txt\n```\nline\r\n\n```\n".to_vec()
    );
}

#[test]
fn test_display_relative_uses_forward_slashes() {
    let path = Path::new("a").join("b").join("c.rs");
    assert_eq!(display_relative(&path), "a/b/c.rs");
}

#[test]
fn test_launcher_selection() {
    assert_eq!(Launcher::for_os("windows"), Launcher::Windows);
    assert_eq!(Launcher::for_os("macos"), Launcher::Darwin);
    assert_eq!(Launcher::for_os("linux"), Launcher::Default);
    assert_eq!(Launcher::for_os("freebsd"), Launcher::Default);
}

#[test]
fn test_launcher_commands() {
    let path = Path::new("out.txt");
    let cmd = Launcher::Windows.command(path);
    assert_eq!(cmd.get_program(), "cmd");
    let args: Vec<_> = cmd.get_args().collect();
    assert_eq!(args, ["/c", "start", "", "out.txt"]);

    let cmd = Launcher::Darwin.command(path);
    assert_eq!(cmd.get_program(), "open");

    let cmd = Launcher::Default.command(path);
    assert_eq!(cmd.get_program(), "xdg-open");
    assert_eq!(cmd.get_args().collect::<Vec<_>>(), ["out.txt"]);
}
