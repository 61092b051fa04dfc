use super::*;
use crate::error::PipelineError;
use crate::record::{ChunkFile, MergedBook};
use std::fs;

fn make_books(n: usize) -> Vec<MergedBook> {
    (0..n)
        .map(|i| MergedBook {
            book_id: format!("{}", 1000 + i),
            title: format!("Title {}", i),
            url: format!("https://www.goodreads.com/book/show/{}", 1000 + i),
            image_url: String::new(),
            similar_books: vec![format!("{}", 2000 + i)],
        })
        .collect()
}

fn read_chunk(path: &std::path::Path) -> ChunkFile {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_chunk_file_name_padding() {
    assert_eq!(chunk_file_name("graph", 1), "graph-001.json");
    assert_eq!(chunk_file_name("graph", 42), "graph-042.json");
    assert_eq!(chunk_file_name("graph", 999), "graph-999.json");
    assert_eq!(chunk_file_name("graph", 1000), "graph-1000.json");
}

#[test]
fn test_chunk_count_is_ceiling() {
    for (n, capacity, expected) in [(0, 5, 0), (1, 5, 1), (5, 5, 1), (6, 5, 2), (11, 5, 3)] {
        let chunks = chunk_books(make_books(n), capacity);
        assert_eq!(chunks.len(), expected, "n={} capacity={}", n, capacity);
    }
}

#[test]
fn test_concatenated_chunks_reproduce_input() {
    let books = make_books(23);
    let chunks = chunk_books(books.clone(), 5);

    let rejoined: Vec<MergedBook> = chunks.iter().flat_map(|c| c.books.clone()).collect();
    assert_eq!(rejoined, books);

    let indices: Vec<usize> = chunks.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    assert!(chunks[..4].iter().all(|c| c.len() == 5));
    assert_eq!(chunks[4].len(), 3);
}

#[test]
fn test_writer_creates_directory_and_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("data");
    let writer = ChunkWriter::new(&out, "graph");

    let chunks = chunk_books(make_books(7), 3);
    let mut reported = Vec::new();
    let written = writer
        .write_all(&chunks, |w| reported.push((w.index, w.book_count)))
        .unwrap();

    assert_eq!(reported, vec![(1, 3), (2, 3), (3, 1)]);
    assert_eq!(written.len(), 3);
    assert!(out.join("graph-001.json").exists());
    assert!(out.join("graph-002.json").exists());
    assert!(out.join("graph-003.json").exists());
    assert!(!out.join("graph-004.json").exists());

    let last = read_chunk(&written[2].path);
    assert_eq!(last.books.len(), 1);
    assert_eq!(last.books[0].title, "Title 6");
}

#[test]
fn test_written_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ChunkWriter::new(dir.path(), "graph");
    let chunks = chunk_books(make_books(1), 10);

    let written = writer.write_all(&chunks, |_| {}).unwrap();
    let text = fs::read_to_string(&written[0].path).unwrap();

    assert!(text.starts_with("{\n  \"books\": [\n    {\n      \"book_id\": \"1000\","));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["books"].is_array());
}

#[test]
fn test_existing_directory_reused() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "untouched").unwrap();
    fs::write(dir.path().join("graph-001.json"), "stale").unwrap();

    let writer = ChunkWriter::new(dir.path(), "graph");
    writer
        .write_all(&chunk_books(make_books(2), 10), |_| {})
        .unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("keep.txt")).unwrap(),
        "untouched"
    );
    assert_eq!(read_chunk(&dir.path().join("graph-001.json")).books.len(), 2);
}

#[test]
fn test_no_chunks_still_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty");
    let writer = ChunkWriter::new(&out, "graph");

    let written = writer.write_all(&[], |_| {}).unwrap();
    assert!(written.is_empty());
    assert!(out.is_dir());
}

#[test]
fn test_output_dir_blocked_by_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();

    let writer = ChunkWriter::new(&blocker, "graph");
    let result = writer.write_all(&chunk_books(make_books(1), 1), |_| {});
    assert!(matches!(result, Err(PipelineError::OutputDir { .. })));
}
