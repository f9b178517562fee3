//! Whole-document concatenation.
//!
//! Sources are appended one at a time into an accumulator that owns a single
//! flat page tree. Each source is renumbered past the accumulator's highest
//! object id, its catalog and intermediate page-tree nodes are dropped, and
//! its pages are re-parented under the accumulator's root `Pages` node.

use crate::error::*;
use crate::io::{load_pdf, save_pdf};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::{Path, PathBuf};

/// File name offered for the output when nothing else has been chosen
pub const DEFAULT_OUTPUT_NAME: &str = "merged.pdf";

/// Extension appended to output paths chosen without one
pub const DEFAULT_EXTENSION: &str = "pdf";

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

const MAX_TREE_DEPTH: usize = 64;

/// What a successful merge produced
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub file_count: usize,
    pub total_pages: usize,
}

impl MergeSummary {
    pub fn output_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.display().to_string())
    }

    /// Multi-line summary suitable for a success dialog
    pub fn message(&self) -> String {
        format!(
            "PDF files merged successfully!\n\nTotal files: {}\nTotal pages: {}\nOutput file: {}",
            self.file_count,
            self.total_pages,
            self.output_name()
        )
    }
}

/// Output document under construction
pub struct MergedDocument {
    document: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl MergedDocument {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");

        let pages_id = document.new_object_id();
        document.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(Vec::new())),
                ("Count", Object::Integer(0)),
            ])),
        );

        let catalog_id = document.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            kids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append every page of `source`, in order. Returns the number of pages added.
    pub fn append(&mut self, mut source: Document) -> Result<usize> {
        source.renumber_objects_with(self.document.max_id + 1);

        let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();
        let inherited = page_ids
            .iter()
            .map(|&page_id| inherited_attributes(&source, page_id))
            .collect::<Result<Vec<_>>>()?;

        for node_id in page_tree_nodes(&source)? {
            source.objects.remove(&node_id);
        }

        self.document.max_id = self.document.max_id.max(source.max_id);
        self.document.objects.extend(source.objects);

        for (&page_id, attributes) in page_ids.iter().zip(inherited) {
            let page = self.document.get_dictionary_mut(page_id)?;
            for (key, value) in attributes {
                page.set(key, value);
            }
            page.set("Parent", Object::Reference(self.pages_id));
        }

        self.kids.extend_from_slice(&page_ids);
        self.sync_page_tree()?;

        Ok(page_ids.len())
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    fn sync_page_tree(&mut self) -> Result<()> {
        let pages = self.document.get_dictionary_mut(self.pages_id)?;
        pages.set(
            "Kids",
            Object::Array(self.kids.iter().map(|&id| Object::Reference(id)).collect()),
        );
        pages.set("Count", Object::Integer(self.kids.len() as i64));
        Ok(())
    }
}

impl Default for MergedDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenate `inputs` in order and write the result to `output`.
///
/// `on_progress` is called with `(files_done, files_total)` after each source
/// has been appended. Any failure aborts the whole merge; the destination is
/// only touched once every source has been appended.
pub async fn merge_files<F>(
    inputs: &[PathBuf],
    output: &Path,
    mut on_progress: F,
) -> Result<MergeSummary>
where
    F: FnMut(usize, usize),
{
    if inputs.is_empty() {
        return Err(MergeError::NoInputFiles);
    }
    if output.as_os_str().is_empty() {
        return Err(MergeError::NoOutputPath);
    }

    let mut merged = MergedDocument::new();
    let mut total_pages = 0;

    for (index, path) in inputs.iter().enumerate() {
        let source = load_pdf(path).await.map_err(|e| MergeError::Unreadable {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let (accumulator, pages) = tokio::task::spawn_blocking(move || {
            let pages = merged.append(source)?;
            Ok::<_, MergeError>((merged, pages))
        })
        .await??;

        merged = accumulator;
        total_pages += pages;
        on_progress(index + 1, inputs.len());
    }

    save_pdf(merged.into_document(), output).await?;

    Ok(MergeSummary {
        output: output.to_owned(),
        file_count: inputs.len(),
        total_pages,
    })
}

/// Interpret the text of an output-path field. Blank input means no path;
/// a path without an extension gets `.pdf`.
pub fn output_path_from(text: &str) -> Option<PathBuf> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(trimmed);
    if path.extension().is_none() {
        path.set_extension(DEFAULT_EXTENSION);
    }
    Some(path)
}

/// Attributes the page lacks but one of its ancestors defines, nearest first
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Result<Vec<(Vec<u8>, Object)>> {
    let page = doc.get_dictionary(page_id)?;
    let mut missing: Vec<&[u8]> = INHERITABLE
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();

    let mut found = Vec::new();
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        if missing.is_empty() {
            break;
        }
        depth += 1;
        if depth > MAX_TREE_DEPTH {
            return Err(MergeError::Structure(format!(
                "page tree deeper than {MAX_TREE_DEPTH} levels"
            )));
        }

        let node = doc.get_dictionary(node_id)?;
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    Ok(found)
}

/// The catalog plus every intermediate `Pages` node of `doc`
fn page_tree_nodes(doc: &Document) -> Result<Vec<ObjectId>> {
    let catalog_id = doc.trailer.get(b"Root").and_then(Object::as_reference)?;
    let root = doc
        .get_dictionary(catalog_id)?
        .get(b"Pages")
        .and_then(Object::as_reference)?;

    let mut nodes = vec![catalog_id];
    let mut pending = vec![root];

    while let Some(id) = pending.pop() {
        if nodes.contains(&id) {
            continue;
        }
        let Ok(node) = doc.get_dictionary(id) else {
            continue;
        };
        let Ok(kids) = node.get(b"Kids").and_then(Object::as_array) else {
            continue;
        };
        nodes.push(id);
        pending.extend(kids.iter().filter_map(|kid| kid.as_reference().ok()));
    }

    Ok(nodes)
}
