// ABOUTME: Maps short media type tokens (mp3, m4a, ...) to enclosure MIME types.
// ABOUTME: Unknown or empty tokens fall back to application/octet-stream.

/// MIME type used when the token is not recognized.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Resolves an audio/video type token to the MIME type written on `<enclosure>`.
///
/// Matching is exact; `"MP3"` is not `"mp3"`.
pub fn enclosure_mime_type(token: &str) -> &'static str {
    match token {
        "m4a" => "audio/x-m4a",
        "m4v" => "video/x-m4v",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "mov" => "video/quicktime",
        "pdf" => "application/pdf",
        "epub" => "document/x-epub",
        _ => FALLBACK_MIME_TYPE,
    }
}
