mod common;

use common::*;
use lopdf::Document;
use pdf_merge::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[tokio::test]
async fn test_merge_concatenates_in_list_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_test_pdf("A", 2));
    let b = write_pdf(dir.path(), "b.pdf", create_test_pdf("B", 3));
    let output = dir.path().join("merged.pdf");

    let summary = merge_files(&[a, b], &output, |_, _| {}).await.unwrap();

    assert_eq!(summary.total_pages, 5);
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.output, output);

    let merged = Document::load(&output).unwrap();
    assert_eq!(merged.get_pages().len(), 5);
    assert_eq!(page_labels(&merged), ["A1", "A2", "B1", "B2", "B3"]);
}

#[tokio::test]
async fn test_reordered_inputs_reorder_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_test_pdf("A", 2));
    let b = write_pdf(dir.path(), "b.pdf", create_test_pdf("B", 3));
    let output = dir.path().join("merged.pdf");

    merge_files(&[b, a], &output, |_, _| {}).await.unwrap();

    let merged = Document::load(&output).unwrap();
    assert_eq!(page_labels(&merged), ["B1", "B2", "B3", "A1", "A2"]);
}

#[tokio::test]
async fn test_same_source_twice_keeps_both_copies() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_test_pdf("A", 2));
    let output = dir.path().join("merged.pdf");

    let summary = merge_files(&[a.clone(), a], &output, |_, _| {})
        .await
        .unwrap();

    assert_eq!(summary.total_pages, 4);
    let merged = Document::load(&output).unwrap();
    assert_eq!(page_labels(&merged), ["A1", "A2", "A1", "A2"]);
}

#[tokio::test]
async fn test_empty_input_list_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge_files(&[], &output, |_, _| {}).await;

    assert!(matches!(result, Err(MergeError::NoInputFiles)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_blank_output_path_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_test_pdf("A", 1));

    let result = merge_files(&[a], &PathBuf::new(), |_, _| {}).await;

    assert!(matches!(result, Err(MergeError::NoOutputPath)));
}

#[tokio::test]
async fn test_failed_merge_leaves_destination_untouched() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_test_pdf("A", 2));
    let bad = write_garbage(dir.path(), "bad.pdf");
    let output = dir.path().join("merged.pdf");
    std::fs::write(&output, b"previous result").unwrap();

    let result = merge_files(&[a, bad.clone()], &output, |_, _| {}).await;

    match result {
        Err(MergeError::Unreadable { path, .. }) => assert_eq!(path, bad),
        other => panic!("expected Unreadable, got {other:?}"),
    }
    assert_eq!(std::fs::read(&output).unwrap(), b"previous result");
    assert!(!partial_path(&output).exists());
}

#[tokio::test]
async fn test_missing_source_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_test_pdf("A", 2));
    let output = dir.path().join("merged.pdf");

    let result = merge_files(&[a, dir.path().join("gone.pdf")], &output, |_, _| {}).await;

    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_progress_reported_per_file() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_test_pdf("A", 1));
    let b = write_pdf(dir.path(), "b.pdf", create_test_pdf("B", 1));
    let c = write_pdf(dir.path(), "c.pdf", create_test_pdf("C", 1));
    let output = dir.path().join("merged.pdf");

    let mut seen = Vec::new();
    merge_files(&[a, b, c], &output, |done, total| seen.push((done, total)))
        .await
        .unwrap();

    assert_eq!(seen, [(1, 3), (2, 3), (3, 3)]);
}

#[tokio::test]
async fn test_inherited_page_attributes_survive_merge() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", create_inheriting_pdf("A", 2));
    let b = write_pdf(dir.path(), "b.pdf", create_test_pdf("B", 1));
    let output = dir.path().join("merged.pdf");

    merge_files(&[a, b], &output, |_, _| {}).await.unwrap();

    let merged = Document::load(&output).unwrap();
    for page_id in merged.get_pages().into_values() {
        let page = merged.get_dictionary(page_id).unwrap();
        assert!(page.has(b"MediaBox"), "page {page_id:?} lost its MediaBox");
        assert!(page.has(b"Resources"), "page {page_id:?} lost its Resources");
    }
    assert_eq!(page_labels(&merged), ["A1", "A2", "B1"]);
}

#[test]
fn test_accumulator_counts_appended_pages() {
    let mut merged = MergedDocument::new();
    assert_eq!(merged.append(create_test_pdf("A", 2)).unwrap(), 2);
    assert_eq!(merged.append(create_test_pdf("B", 3)).unwrap(), 3);
    assert_eq!(merged.page_count(), 5);

    let doc = merged.into_document();
    assert_eq!(doc.get_pages().len(), 5);
    assert_eq!(page_labels(&doc), ["A1", "A2", "B1", "B2", "B3"]);
}
