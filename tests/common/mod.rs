#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use succinct_tree_coding::{OrderedTree, TreeCoding};

/// Set to rewrite coding snapshots from the current encoder output
const BLESS_VAR: &str = "SUCCINCT_BLESS";

fn coding_snapshot(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "snapshots", name]
        .iter()
        .collect()
}

/// Compare the rendered `coding` against `tests/snapshots/<name>`
///
/// One `leaf -> code` line per entry; the first differing entry is reported.
pub fn assert_coding_snapshot(name: &str, coding: &TreeCoding<i64>) {
    let rendered = coding.render().expect("render coding");
    let path = coding_snapshot(name);

    if std::env::var_os(BLESS_VAR).is_some() {
        fs::write(&path, &rendered).expect("write coding snapshot");
        return;
    }

    let stored = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("missing coding snapshot {}: {err}", path.display()));

    let mut stored_lines = stored.lines().map(str::trim_end);
    let mut rendered_lines = rendered.lines();
    for entry in 1.. {
        match (stored_lines.next(), rendered_lines.next()) {
            (None, None) => return,
            (want, got) if want == got => continue,
            (want, got) => panic!(
                "{name}: entry {entry} differs\n  stored:   {}\n  rendered: {}\n\
                 rerun with {BLESS_VAR}=1 to accept the rendered coding",
                want.unwrap_or("<end>"),
                got.unwrap_or("<end>"),
            ),
        }
    }
}

/// Example tree from Jurdziński and Lazić: 8 leaves, height 2
pub fn jurdzinski_lazic_tree() -> OrderedTree<i64> {
    OrderedTree::from_paths(vec![
        vec![0, 0],
        vec![1, 0],
        vec![1, 1],
        vec![2, 0],
        vec![2, 1],
        vec![2, 2],
        vec![2, 3],
        vec![2, 4],
    ])
}

/// Same shape, but direction 1 ends one level early
pub fn mixed_depth_tree() -> OrderedTree<i64> {
    OrderedTree::from_paths(vec![
        vec![0, 0],
        vec![0, 1],
        vec![1],
        vec![2, 0],
        vec![2, 1],
        vec![2, 2],
        vec![2, 3],
        vec![2, 4],
    ])
}

/// Complete tree with `fanout^height` leaves
pub fn complete_tree(fanout: i64, height: usize) -> OrderedTree<i64> {
    let mut paths: Vec<Vec<i64>> = vec![Vec::new()];
    for _ in 0..height {
        paths = paths
            .into_iter()
            .flat_map(|prefix| {
                (0..fanout).map(move |d| {
                    let mut path = prefix.clone();
                    path.push(d);
                    path
                })
            })
            .collect();
    }
    OrderedTree::from_paths(paths)
}
