//! Document-level tests for the public API

use kiriwake_api::{
    chunk_file, ApiError, CancelToken, Category, Config, Document, DocumentChunker, Input,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_input_uses_file_name_as_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.md");
    std::fs::write(&path, "# Guide\n- step one\n- step two\n").unwrap();

    let output = chunk_file(&path).unwrap();
    assert_eq!(output.chunks.len(), 3);
    assert!(output.chunks.iter().all(|c| c.metadata.source == "guide.md"));
    assert_eq!(output.chunks[0].category, Category::Heading);
    assert_eq!(output.metadata.extraction["encoding"], "UTF-8");
}

#[test]
fn test_bom_only_file_is_extraction_empty() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\xEF\xBB\xBF").unwrap();

    let err = chunk_file(file.path()).unwrap_err();
    assert!(matches!(err, ApiError::ExtractionEmpty { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = chunk_file("/no/such/dir/file.txt").unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[test]
fn test_legacy_encoding_is_decoded() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Na\xEFve caf\xE9 prose.").unwrap();

    let output = chunk_file(file.path()).unwrap();
    assert_eq!(output.chunks[0].content, "Naïve café prose.");
    assert_eq!(output.metadata.extraction["encoding"], "windows-1252");
}

#[test]
fn test_strict_utf8_rejects_legacy_bytes() {
    let config = Config::builder().strict_utf8().build().unwrap();
    let chunker = DocumentChunker::with_config(config).unwrap();
    let err = chunker
        .process(Document::new("x", Input::from_bytes(b"caf\xE9".to_vec())))
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode { position: 3 }));
}

#[test]
fn test_step_budget_exhaustion_is_retryable() {
    let config = Config::builder().max_steps(Some(1)).build().unwrap();
    let chunker = DocumentChunker::with_config(config).unwrap();
    let err = chunker
        .process_text("big", "One. Two. Three.\n\nFour.")
        .unwrap_err();
    assert!(matches!(err, ApiError::ResourceExhausted { steps: 1, .. }));
    assert!(err.is_retryable());
}

#[test]
fn test_cancelled_token_aborts() {
    let chunker = DocumentChunker::new().unwrap();
    let token = CancelToken::new();
    token.cancel();
    let err = chunker
        .process_with_token(Document::from_text("c", "Some text."), token)
        .unwrap_err();
    assert!(matches!(err, ApiError::ResourceExhausted { steps: 0, .. }));
}

#[test]
fn test_reader_input() {
    let chunker = DocumentChunker::new().unwrap();
    let reader = std::io::Cursor::new(b"Read from a stream.".to_vec());
    let output = chunker
        .process(Document::new("stdin", Input::from_reader(reader)))
        .unwrap();
    assert_eq!(output.chunks.len(), 1);
    assert_eq!(output.chunks[0].metadata.source, "stdin");
}

#[test]
fn test_json_output_shape() {
    let chunker = DocumentChunker::new().unwrap();
    let output = chunker.process_text("s.txt", "# T\n").unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

    let first = &json[0];
    assert_eq!(first["page_content"], "# T\n");
    assert_eq!(first["metadata"]["index"], 0);
    assert_eq!(first["metadata"]["offset"], 0);
    assert_eq!(first["metadata"]["length"], 4);
    assert_eq!(first["metadata"]["strip"], 3);
    assert_eq!(first["metadata"]["source"], "s.txt");
    assert!(first.get("category").is_none());
}

#[test]
fn test_chunker_is_shareable_across_threads() {
    let chunker = std::sync::Arc::new(DocumentChunker::new().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let chunker = chunker.clone();
            std::thread::spawn(move || {
                chunker
                    .process_text(&format!("doc{i}"), "Alpha. Beta.")
                    .unwrap()
                    .chunks
                    .len()
            })
        })
        .collect();
    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(counts.windows(2).all(|w| w[0] == w[1]));
}
