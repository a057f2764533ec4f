use codedump::prioritizer::{prioritize, PriorityScore};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| Path::new("/proj").join(name)).collect()
}

fn relative(ordered: Vec<PathBuf>) -> Vec<String> {
    ordered
        .iter()
        .map(|p| {
            p.strip_prefix("/proj")
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn same_time(_: &Path) -> io::Result<SystemTime> {
    Ok(UNIX_EPOCH + Duration::from_secs(1_000))
}

#[test]
fn test_entry_points_and_shallow_files_first() {
    let files = paths(&["src/utils/helper.ts", "README.md", "index.ts", "src/index.ts"]);
    let ordered = prioritize(&files, Path::new("/proj"), &same_time, true);
    assert_eq!(
        relative(ordered),
        vec!["src/index.ts", "index.ts", "README.md", "src/utils/helper.ts"]
    );
}

#[test]
fn test_entry_point_beats_newer_files() {
    let files = paths(&["README.md", "src/feature.ts", "src/index.ts"]);
    let stats = |path: &Path| -> io::Result<SystemTime> {
        let secs = if path.ends_with("src/index.ts") { 1 } else { 9_000 };
        Ok(UNIX_EPOCH + Duration::from_secs(secs))
    };

    let ordered = prioritize(&files, Path::new("/proj"), &stats, true);
    assert_eq!(relative(ordered), vec!["src/index.ts", "src/feature.ts", "README.md"]);
}

#[test]
fn test_project_config_gets_entry_bonus() {
    let files = paths(&["lib/deep/a.ts", "lib/b.ts", "package.json"]);
    let ordered = prioritize(&files, Path::new("/proj"), &same_time, false);
    assert_eq!(relative(ordered), vec!["package.json", "lib/b.ts", "lib/deep/a.ts"]);
}

#[test]
fn test_recent_files_win_ties_when_preferred() {
    let files = paths(&["a.ts", "b.ts"]);
    let stats = |path: &Path| -> io::Result<SystemTime> {
        let secs = if path.ends_with("b.ts") { 2_000 } else { 1_000 };
        Ok(UNIX_EPOCH + Duration::from_secs(secs))
    };

    let recent = prioritize(&files, Path::new("/proj"), &stats, true);
    assert_eq!(relative(recent), vec!["b.ts", "a.ts"]);

    let lexical = prioritize(&files, Path::new("/proj"), &stats, false);
    assert_eq!(relative(lexical), vec!["a.ts", "b.ts"]);
}

#[test]
fn test_unreadable_mtime_sorts_as_oldest() {
    let files = paths(&["a.ts", "c.ts", "b.ts"]);
    let stats = |path: &Path| -> io::Result<SystemTime> {
        if path.ends_with("a.ts") {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        } else {
            Ok(UNIX_EPOCH + Duration::from_secs(5))
        }
    };

    let ordered = prioritize(&files, Path::new("/proj"), &stats, true);
    assert_eq!(relative(ordered), vec!["b.ts", "c.ts", "a.ts"]);
}

#[test]
fn test_path_tiebreak_is_case_sensitive() {
    let files = paths(&["a.ts", "B.ts"]);
    let ordered = prioritize(&files, Path::new("/proj"), &same_time, false);
    assert_eq!(relative(ordered), vec!["B.ts", "a.ts"]);
}

#[test]
fn test_score_components() {
    let score = PriorityScore::compute(Path::new("/proj/src/lib/x.rs"), Path::new("/proj"), &same_time);
    assert_eq!(score.depth, 3);
    assert_eq!(score.score, 5);
    assert_eq!(score.relative_path, "src/lib/x.rs");

    let main = PriorityScore::compute(Path::new("/proj/src/main.rs"), Path::new("/proj"), &same_time);
    assert_eq!(main.score, 115);

    let top = PriorityScore::compute(Path::new("/proj/src"), Path::new("/proj"), &same_time);
    assert_eq!(top.depth, 1);
    assert_eq!(top.score, 10);
}

#[test]
fn test_prioritize_is_deterministic() {
    let files = paths(&["z.ts", "m/app.ts", "a/b/c/d.ts", "main.go", "Cargo.toml"]);
    let first = prioritize(&files, Path::new("/proj"), &same_time, true);
    let mut reversed = files.clone();
    reversed.reverse();
    let second = prioritize(&reversed, Path::new("/proj"), &same_time, true);
    assert_eq!(first, second);
}
