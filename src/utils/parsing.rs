/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_CONTENT_TYPE;
use std::path::Path;

/// Returns the last component of a path, or the path itself when it has none
pub fn get_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Name to store a server-supplied file under, reduced to its last component.
///
/// Falls back to `fallback`, then to `attachment`, when `name` has no usable
/// final component (empty, `..`, a root).
pub fn safe_filename(name: &str, fallback: &str) -> String {
    [name, fallback]
        .into_iter()
        .find_map(|candidate| Path::new(candidate).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "attachment".to_string())
}

/// Guesses a MIME type from the leading bytes of a file, then from its extension.
///
/// Falls back to `text/plain`.
pub fn guess_content_type(path: &Path, content: &[u8]) -> &'static str {
    sniff_magic(content)
        .or_else(|| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .and_then(content_type_for_extension)
        })
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

fn sniff_magic(content: &[u8]) -> Option<&'static str> {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"PK\x03\x04", "application/zip"),
        (b"\x1f\x8b", "application/gzip"),
        (b"ID3", "audio/mpeg"),
        (b"OggS", "audio/ogg"),
    ];

    SIGNATURES
        .iter()
        .find(|(magic, _)| content.starts_with(magic))
        .map(|(_, mime)| *mime)
}

fn content_type_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "zip" => "application/zip",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "odt" => "application/vnd.oasis.opendocument.text",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        "html" | "htm" => "text/html",
        "csv" => "text/csv",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mime)
}
