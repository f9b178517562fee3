use pdf_merge::*;
use std::path::{Path, PathBuf};

fn ok(path: &str, pages: usize) -> Inspection {
    Inspection {
        path: PathBuf::from(path),
        outcome: Ok(pages),
    }
}

fn failed(path: &str) -> Inspection {
    Inspection {
        path: PathBuf::from(path),
        outcome: Err("not a PDF".to_string()),
    }
}

fn staged(names: &[&str]) -> FileList<u32> {
    let mut list = FileList::new();
    list.add(names.iter().map(|name| ok(name, 1)));
    list
}

fn names(list: &FileList<u32>) -> Vec<String> {
    list.paths()
        .iter()
        .map(|p| p.display().to_string())
        .collect()
}

#[test]
fn test_add_appends_in_given_order() {
    let list = staged(&["a.pdf", "b.pdf", "c.pdf"]);
    assert_eq!(names(&list), ["a.pdf", "b.pdf", "c.pdf"]);
}

#[test]
fn test_adding_duplicate_is_noop() {
    let mut list = staged(&["a.pdf", "b.pdf"]);

    let report = list.add([ok("a.pdf", 1)]);

    assert_eq!(list.len(), 2);
    assert!(report.added.is_empty());
    assert_eq!(report.duplicates, [PathBuf::from("a.pdf")]);
    assert_eq!(names(&list), ["a.pdf", "b.pdf"]);
}

#[test]
fn test_duplicate_within_one_batch_is_staged_once() {
    let mut list: FileList<u32> = FileList::new();

    let report = list.add([ok("a.pdf", 1), ok("a.pdf", 1)]);

    assert_eq!(list.len(), 1);
    assert_eq!(report.added.len(), 1);
    assert_eq!(report.duplicates.len(), 1);
}

#[test]
fn test_invalid_path_reported_and_skipped() {
    let mut list: FileList<u32> = FileList::new();

    let report = list.add([ok("a.pdf", 2), failed("bad.pdf"), ok("b.pdf", 3), ok("c.pdf", 1)]);

    assert_eq!(list.len(), 3);
    assert_eq!(report.added.len(), 3);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].0, PathBuf::from("bad.pdf"));
    assert_eq!(names(&list), ["a.pdf", "b.pdf", "c.pdf"]);
}

#[test]
fn test_move_up_at_first_index_is_noop() {
    let mut list = staged(&["a.pdf", "b.pdf", "c.pdf"]);
    assert!(!list.move_entry(0, Direction::Up));
    assert_eq!(names(&list), ["a.pdf", "b.pdf", "c.pdf"]);
}

#[test]
fn test_move_down_at_last_index_is_noop() {
    let mut list = staged(&["a.pdf", "b.pdf", "c.pdf"]);
    assert!(!list.move_entry(2, Direction::Down));
    assert!(!list.move_entry(7, Direction::Up));
    assert_eq!(names(&list), ["a.pdf", "b.pdf", "c.pdf"]);
}

#[test]
fn test_move_swaps_exactly_two_neighbours() {
    let mut list = staged(&["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);

    assert!(list.move_entry(1, Direction::Down));
    assert_eq!(names(&list), ["a.pdf", "c.pdf", "b.pdf", "d.pdf"]);

    assert!(list.move_entry(3, Direction::Up));
    assert_eq!(names(&list), ["a.pdf", "c.pdf", "d.pdf", "b.pdf"]);
}

#[test]
fn test_selection_follows_moved_entry() {
    let mut list = staged(&["a.pdf", "b.pdf", "c.pdf"]);
    list.select(Some(0));

    list.move_entry(0, Direction::Down);
    assert_eq!(list.selected(), Some(1));
    assert_eq!(list.selected_path(), Some(Path::new("a.pdf")));

    list.move_entry(1, Direction::Down);
    assert_eq!(list.selected(), Some(2));
    assert_eq!(list.selected_path(), Some(Path::new("a.pdf")));
}

#[test]
fn test_remove_evicts_thumbnail() {
    let mut list = staged(&["a.pdf", "b.pdf"]);
    assert!(list.store_thumbnail(PathBuf::from("a.pdf"), 7));
    assert!(list.store_thumbnail(PathBuf::from("b.pdf"), 8));

    let removed = list.remove(0).unwrap();

    assert_eq!(removed.path(), Path::new("a.pdf"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.thumbnail(Path::new("a.pdf")), None);
    assert_eq!(list.thumbnail(Path::new("b.pdf")), Some(&8));
    assert_eq!(list.thumbnails().len(), 1);
}

#[test]
fn test_remove_out_of_range_changes_nothing() {
    let mut list = staged(&["a.pdf", "b.pdf"]);
    list.store_thumbnail(PathBuf::from("a.pdf"), 1);
    list.select(Some(1));

    assert!(list.remove(2).is_none());

    assert_eq!(names(&list), ["a.pdf", "b.pdf"]);
    assert_eq!(list.thumbnails().len(), 1);
    assert_eq!(list.selected(), Some(1));
}

#[test]
fn test_remove_last_selected_clamps_selection() {
    let mut list = staged(&["a.pdf", "b.pdf"]);
    list.select(Some(1));

    list.remove(1);
    assert_eq!(list.selected(), Some(0));

    list.remove(0);
    assert_eq!(list.selected(), None);
    assert!(list.is_empty());
}

#[test]
fn test_thumbnail_for_removed_path_is_dropped() {
    let mut list = staged(&["a.pdf"]);
    list.remove(0);

    assert!(!list.store_thumbnail(PathBuf::from("a.pdf"), 1));
    assert!(list.thumbnails().is_empty());
}

#[test]
fn test_reset_clears_everything() {
    let mut list = staged(&["a.pdf", "b.pdf"]);
    list.store_thumbnail(PathBuf::from("a.pdf"), 1);
    list.select(Some(0));

    list.reset();

    assert!(list.is_empty());
    assert!(list.thumbnails().is_empty());
    assert_eq!(list.selected(), None);
}

#[test]
fn test_select_out_of_range_clears_selection() {
    let mut list = staged(&["a.pdf"]);
    list.select(Some(3));
    assert_eq!(list.selected(), None);
}

#[test]
fn test_rows_are_one_based_with_base_names() {
    let mut list: FileList<u32> = FileList::new();
    list.add([ok("/docs/first.pdf", 2), ok("/docs/sub/second.pdf", 3)]);

    let rows = rebuild_rows(&list);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].name, "first.pdf");
    assert_eq!(rows[0].pages, PageCount::Pages(2));
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].name, "second.pdf");
}

#[test]
fn test_recount_marks_unreadable_files() {
    let mut list = staged(&["a.pdf", "b.pdf"]);
    list.mark_counts_pending();
    assert!(rebuild_rows(&list).iter().all(|r| r.pages == PageCount::Pending));

    list.apply_page_counts([
        (PathBuf::from("a.pdf"), Some(4)),
        (PathBuf::from("b.pdf"), None),
        (PathBuf::from("gone.pdf"), Some(9)),
    ]);

    let rows = rebuild_rows(&list);
    assert_eq!(rows[0].pages.to_string(), "4");
    assert_eq!(rows[1].pages.to_string(), "Error");
    assert_eq!(rows.len(), 2);
}
