use sha2::{Digest, Sha256};
use tg_id_guide::builder::{build_document, BuildError, DocumentBuilder};
use tg_id_guide::content;
use tg_id_guide::fonts::{self, FontSearch};

fn render_guide() -> Option<Vec<u8>> {
    if !fonts::fonts_available(&FontSearch::default()) {
        return None;
    }

    let bytes = DocumentBuilder::new()
        .with_blocks(content::guide_blocks())
        .render()
        .expect("render guide pdf")
        .bytes;

    Some(bytes)
}

// Volatile PDF metadata overwritten before hashing: trailer/info entries
// delimited by a terminator byte, and XMP elements delimited by their tags.
const VOLATILE_ENTRIES: &[(&[u8], u8)] = &[
    (b"/CreationDate(", b')'),
    (b"/ModDate(", b')'),
    (b"/ID[", b']'),
    (b"/Producer(", b')'),
];

const VOLATILE_XMP_TAGS: &[&str] = &[
    "xmp:CreateDate",
    "xmp:ModifyDate",
    "xmp:MetadataDate",
    "xmpMM:DocumentID",
    "xmpMM:InstanceID",
    "xmpMM:VersionID",
];

fn find(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

fn zero_out(data: &mut [u8], keep_structure: bool) {
    for byte in data {
        let structural = matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t');
        if !(keep_structure && structural) {
            *byte = b'0';
        }
    }
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    let mut normalized = bytes.to_vec();

    for &(tag, terminator) in VOLATILE_ENTRIES {
        let mut offset = 0;
        while let Some(start) = find(&normalized, offset, tag) {
            let value_start = start + tag.len();
            let value_end = normalized[value_start..]
                .iter()
                .position(|&byte| byte == terminator)
                .map_or(normalized.len(), |pos| value_start + pos);
            zero_out(&mut normalized[value_start..value_end], terminator != b')');
            offset = value_end;
        }
    }

    for tag in VOLATILE_XMP_TAGS {
        let open = format!("<{tag}>").into_bytes();
        let close = format!("</{tag}>").into_bytes();
        let mut offset = 0;
        while let Some(start) = find(&normalized, offset, &open) {
            let value_start = start + open.len();
            let Some(value_end) = find(&normalized, value_start, &close) else {
                break;
            };
            zero_out(&mut normalized[value_start..value_end], true);
            offset = value_end + close.len();
        }
    }

    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn renders_a_pdf_document() {
    let Some(bytes) = render_guide() else {
        eprintln!("Skipping renders_a_pdf_document: no font candidates found on this machine.");
        return;
    };
    assert!(
        bytes.starts_with(b"%PDF"),
        "rendered output should carry the PDF magic header"
    );
    assert!(bytes.len() > 1024, "rendered PDF is implausibly small");
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_guide() else {
        eprintln!("Skipping rendering_is_deterministic: no font candidates found on this machine.");
        return;
    };
    let Some(bytes_b) = render_guide() else {
        eprintln!("Skipping rendering_is_deterministic: no font candidates found on this machine.");
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");

    let hash_a = normalized_hash(&bytes_a);
    let hash_b = normalized_hash(&bytes_b);

    assert_eq!(
        hash_a, hash_b,
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn document_has_pages_and_embedded_fonts() {
    let Some(bytes) = render_guide() else {
        eprintln!(
            "Skipping document_has_pages_and_embedded_fonts: no font candidates found on this machine."
        );
        return;
    };

    let document = lopdf::Document::load_mem(&bytes).expect("parse rendered PDF");
    assert!(
        !document.get_pages().is_empty(),
        "rendered document should have at least one page"
    );
    assert!(
        contains(&bytes, b"/FontFile2"),
        "resolved fonts should be embedded as TrueType font programs"
    );
}

#[test]
fn build_document_writes_the_output_file() {
    if !fonts::fonts_available(&FontSearch::default()) {
        eprintln!(
            "Skipping build_document_writes_the_output_file: no font candidates found on this machine."
        );
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(content::DEFAULT_OUTPUT_FILE);
    build_document(&path).expect("build document");

    let bytes = std::fs::read(&path).expect("read rendered file");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn build_document_fails_for_an_unwritable_path() {
    if !fonts::fonts_available(&FontSearch::default()) {
        eprintln!(
            "Skipping build_document_fails_for_an_unwritable_path: no font candidates found on this machine."
        );
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing-subdir").join("out.pdf");
    match build_document(&path) {
        Err(BuildError::Io(_)) => {}
        Err(other) => panic!("expected an I/O error, got {other}"),
        Ok(()) => panic!("build succeeded into a missing directory"),
    }
    assert!(!path.exists());
}

#[test]
fn missing_fonts_error_instead_of_panicking() {
    let result = DocumentBuilder::new()
        .with_font_search(FontSearch::custom(Vec::new(), Vec::new()))
        .with_blocks(content::guide_blocks())
        .render();
    match result {
        Err(BuildError::FontLoad(_)) => {}
        Err(other) => panic!("expected a font error, got {other}"),
        Ok(_) => panic!("render succeeded without any font candidates"),
    }
}
