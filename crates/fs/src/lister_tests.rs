use super::*;

use std::fs::{create_dir, write};

fn file_named<'a>(entries: &'a [ListedEntry], name: &str) -> &'a FileEntry {
    entries
        .iter()
        .find_map(|e| match e {
            ListedEntry::File(f) if f.name == name => Some(f),
            _ => None,
        })
        .unwrap_or_else(|| panic!("file {name} not listed"))
}

#[test]
fn extension_of_handles_cases() {
    let cases: &[(&str, &str)] = &[
        ("main.py", ".py"),
        ("REPORT.TXT", ".txt"),
        ("archive.tar.gz", ".gz"),
        ("Makefile", NO_EXTENSION),
        (".bashrc", NO_EXTENSION),
        ("..hidden", NO_EXTENSION),
        ("...", NO_EXTENSION),
        (".config.toml", ".toml"),
        ("trailing.", "."),
    ];

    for (name, expected) in cases {
        let got = extension_of(name);
        assert_eq!(
            got, *expected,
            "extension_of({:?}) should be {:?}, got {:?}",
            name, expected, got
        );
    }
}

#[test]
fn list_dir_classifies_files_and_dirs() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    // root/
    //   a.txt
    //   Notes.MD
    //   sub/
    //     nested.txt
    write(root.join("a.txt"), b"hello world").expect("write a.txt");
    write(root.join("Notes.MD"), b"#").expect("write Notes.MD");
    create_dir(root.join("sub")).expect("create sub");
    write(root.join("sub").join("nested.txt"), b"x").expect("write nested.txt");

    let entries = list_dir(root).expect("list_dir");

    let mut names: Vec<_> = entries.iter().map(|e| e.name()).collect();
    names.sort();
    assert_eq!(names, vec!["Notes.MD", "a.txt", "sub"]);

    let a = file_named(&entries, "a.txt");
    assert_eq!(a.size, 11);
    assert_eq!(a.extension, ".txt");

    let notes = file_named(&entries, "Notes.MD");
    assert_eq!(notes.size, 1);
    assert_eq!(notes.extension, ".md");

    let dirs: Vec<_> = entries.iter().filter(|e| e.is_dir()).collect();
    assert_eq!(dirs, vec![&ListedEntry::Dir("sub".to_owned())]);
}

#[test]
fn list_dir_empty_directory_yields_nothing() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    let entries = list_dir(tmp.path()).expect("list_dir");
    assert!(entries.is_empty());
}

#[test]
fn list_dir_rejects_missing_path() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let missing = tmp.path().join("nope");

    let err = list_dir(&missing).expect_err("missing dir must fail");
    assert!(matches!(err, ListError::NotADirectory(ref p) if *p == missing));
    assert_eq!(
        err.to_string(),
        format!("'{}' is not a valid directory.", missing.display())
    );
}

#[test]
fn list_dir_rejects_regular_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let file = tmp.path().join("plain.txt");
    write(&file, b"data").expect("write file");

    let err = list_dir(&file).expect_err("a file is not a directory");
    assert!(matches!(err, ListError::NotADirectory(_)));
}

#[cfg(unix)]
#[test]
fn list_dir_does_not_follow_symlinks() {
    use std::os::unix::fs::symlink;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("real.txt"), b"12345").expect("write real.txt");
    create_dir(root.join("realdir")).expect("create realdir");
    symlink(root.join("real.txt"), root.join("link.txt")).expect("file symlink");
    symlink(root.join("realdir"), root.join("linkdir")).expect("dir symlink");

    let entries = list_dir(root).expect("list_dir");

    let mut names: Vec<_> = entries.iter().map(|e| e.name()).collect();
    names.sort();
    assert_eq!(names, vec!["real.txt", "realdir"]);
}
