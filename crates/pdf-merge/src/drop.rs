//! Splitting platform path lists delivered by drag-and-drop or the clipboard.

use std::path::{Path, PathBuf};

/// How a list of paths is encoded in a single string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathListStyle {
    /// Items separated by whitespace, no quoting
    Whitespace,
    /// Tcl list syntax: `{a path with spaces} plain "quoted item" esc\ aped`
    TclList,
}

impl PathListStyle {
    /// The encoding used by the current platform
    pub fn native() -> Self {
        if cfg!(target_os = "windows") {
            PathListStyle::Whitespace
        } else {
            PathListStyle::TclList
        }
    }
}

pub fn parse_path_list(text: &str, style: PathListStyle) -> Vec<PathBuf> {
    match style {
        PathListStyle::Whitespace => text.split_whitespace().map(PathBuf::from).collect(),
        PathListStyle::TclList => split_tcl_list(text).into_iter().map(PathBuf::from).collect(),
    }
}

/// Whether `path` has a `.pdf` extension, ignoring case
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Keep only PDF paths, preserving order
pub fn filter_pdfs(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    paths.into_iter().filter(|p| is_pdf(p)).collect()
}

fn split_tcl_list(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut chars = text.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let Some(first) = chars.next() else {
            break;
        };

        let mut item = String::new();
        match first {
            '{' => {
                let mut depth = 1;
                for c in chars.by_ref() {
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                break;
                            }
                        }
                        _ => {}
                    }
                    item.push(c);
                }
            }
            '"' => {
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' => item.extend(chars.next()),
                        _ => item.push(c),
                    }
                }
            }
            _ => {
                let mut next = Some(first);
                while let Some(c) = next {
                    if c.is_whitespace() {
                        break;
                    }
                    if c == '\\' {
                        item.extend(chars.next());
                    } else {
                        item.push(c);
                    }
                    next = chars.next();
                }
            }
        }

        if !item.is_empty() {
            items.push(item);
        }
    }

    items
}
