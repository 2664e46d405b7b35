//! Box-drawing rendering of a directory subtree.

use std::collections::BTreeMap;

use crate::filesystem::FsEntry;

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Render the lines below a directory, one per descendant.
///
/// Only non-empty directories are descended into.
pub(super) fn render_tree(children: &BTreeMap<String, FsEntry>) -> Vec<String> {
    let mut lines = Vec::new();
    render_level(children, "", &mut lines);
    lines
}

fn render_level(children: &BTreeMap<String, FsEntry>, prefix: &str, lines: &mut Vec<String>) {
    let count = children.len();
    for (i, (name, entry)) in children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{} {}", prefix, connector, name));

        if let FsEntry::Directory(grandchildren) = entry
            && !grandchildren.is_empty()
        {
            let indent = if is_last { SPACE_INDENT } else { PIPE_INDENT };
            render_level(grandchildren, &format!("{}{}", prefix, indent), lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(entries: Vec<(&str, FsEntry)>) -> FsEntry {
        FsEntry::Directory(
            entries
                .into_iter()
                .map(|(name, entry)| (name.to_string(), entry))
                .collect(),
        )
    }

    #[test]
    fn test_render_nested() {
        let root = dir(vec![
            (
                "a",
                dir(vec![("x.txt", FsEntry::text("")), ("y", FsEntry::empty_dir())]),
            ),
            ("b", dir(vec![("z.txt", FsEntry::text(""))])),
            ("c.txt", FsEntry::text("")),
        ]);

        let lines = render_tree(root.children().unwrap());

        assert_eq!(
            lines,
            vec![
                "├── a",
                "│   ├── x.txt",
                "│   └── y",
                "├── b",
                "│   └── z.txt",
                "└── c.txt",
            ]
        );
    }

    #[test]
    fn test_last_branch_uses_space_indent() {
        let root = dir(vec![("only", dir(vec![("inner", dir(vec![("leaf", FsEntry::text(""))]))]))]);

        let lines = render_tree(root.children().unwrap());

        assert_eq!(
            lines,
            vec!["└── only", "    └── inner", "        └── leaf"]
        );
    }

    #[test]
    fn test_empty_directory_renders_nothing() {
        let root = FsEntry::empty_dir();
        assert!(render_tree(root.children().unwrap()).is_empty());
    }
}
