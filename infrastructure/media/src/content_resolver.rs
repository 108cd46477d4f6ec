use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use business::domain::product::errors::ContentError;
use business::domain::product::services::{ContentResolver, ResolvedContent};

const DATA_URI_PATTERN: &str = r"^data:(?P<mime>[^;,]*)(?P<params>(?:;[^;,]*)*),(?P<payload>[\s\S]*)$";
const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];
const UNKNOWN_MIME: &str = "application/octet-stream";

/// Opens `file://` and `data:` image handles.
///
/// File handles carry no declared type, so their MIME is sniffed from the
/// leading bytes. Data URIs declare theirs.
pub struct UriContentResolver;

impl UriContentResolver {
    async fn open_file(url: &Url) -> Result<ResolvedContent, ContentError> {
        let path = url
            .to_file_path()
            .map_err(|_| ContentError::UnsupportedHandle)?;

        let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ContentError::NotFound,
            _ => ContentError::Unreadable,
        })?;

        Ok(ResolvedContent {
            mime_type: Some(sniff_mime(&bytes).to_string()),
            bytes,
        })
    }

    fn open_data_uri(handle: &str) -> Result<ResolvedContent, ContentError> {
        let captures = regex::Regex::new(DATA_URI_PATTERN)
            .ok()
            .and_then(|re| re.captures(handle))
            .ok_or(ContentError::Unreadable)?;

        let mime = captures.name("mime").map(|m| m.as_str()).unwrap_or("");
        let is_base64 = captures
            .name("params")
            .map(|p| p.as_str().split(';').any(|param| param == "base64"))
            .unwrap_or(false);
        let payload = captures.name("payload").map(|p| p.as_str()).unwrap_or("");

        if !is_base64 {
            return Err(ContentError::Unreadable);
        }

        let clean: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD
            .decode(clean)
            .map_err(|_| ContentError::Unreadable)?;

        Ok(ResolvedContent {
            mime_type: Some(mime)
                .filter(|m| !m.is_empty())
                .map(|m| m.to_string()),
            bytes,
        })
    }
}

/// Guesses an image MIME type from magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(PNG_SIGNATURE) {
        "image/png"
    } else if bytes.starts_with(JPEG_SIGNATURE) {
        "image/jpeg"
    } else {
        UNKNOWN_MIME
    }
}

#[async_trait]
impl ContentResolver for UriContentResolver {
    async fn open(&self, handle: &str) -> Result<ResolvedContent, ContentError> {
        if handle.starts_with("data:") {
            return Self::open_data_uri(handle);
        }

        match Url::parse(handle) {
            Ok(url) if url.scheme() == "file" => Self::open_file(&url).await,
            _ => Err(ContentError::UnsupportedHandle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("media-resolver-{}", name))
    }

    #[tokio::test]
    async fn should_decode_base64_data_uri_with_declared_mime() {
        let handle = format!("data:image/png;base64,{}", STANDARD.encode(b"png-bytes"));

        let content = UriContentResolver.open(&handle).await.unwrap();

        assert_eq!(content.mime_type.as_deref(), Some("image/png"));
        assert_eq!(content.bytes, b"png-bytes");
    }

    #[tokio::test]
    async fn should_ignore_whitespace_in_data_uri_payload() {
        let encoded = STANDARD.encode(b"jpeg-bytes");
        let (head, tail) = encoded.split_at(4);
        let handle = format!("data:image/jpeg;base64,{}\n {}", head, tail);

        let content = UriContentResolver.open(&handle).await.unwrap();

        assert_eq!(content.bytes, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn should_report_missing_mime_for_bare_data_uri() {
        let handle = format!("data:;base64,{}", STANDARD.encode(b"x"));

        let content = UriContentResolver.open(&handle).await.unwrap();

        assert_eq!(content.mime_type, None);
    }

    #[tokio::test]
    async fn should_reject_non_base64_data_uri() {
        let result = UriContentResolver.open("data:text/plain,hello").await;

        assert_eq!(result, Err(ContentError::Unreadable));
    }

    #[tokio::test]
    async fn should_reject_corrupt_base64_payload() {
        let result = UriContentResolver.open("data:image/png;base64,@@@").await;

        assert_eq!(result, Err(ContentError::Unreadable));
    }

    #[tokio::test]
    async fn should_read_file_uri_and_sniff_png() {
        let path = temp_file("sniff.png");
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(b"rest");
        tokio::fs::write(&path, &bytes).await.unwrap();
        let handle = Url::from_file_path(&path).unwrap().to_string();

        let content = UriContentResolver.open(&handle).await.unwrap();

        assert_eq!(content.mime_type.as_deref(), Some("image/png"));
        assert_eq!(content.bytes, bytes);
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn should_report_unknown_mime_for_unrecognized_file() {
        let path = temp_file("notes.txt");
        tokio::fs::write(&path, b"plain text").await.unwrap();
        let handle = Url::from_file_path(&path).unwrap().to_string();

        let content = UriContentResolver.open(&handle).await.unwrap();

        assert_eq!(content.mime_type.as_deref(), Some(UNKNOWN_MIME));
        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn should_report_missing_file() {
        let handle = Url::from_file_path(temp_file("does-not-exist.png"))
            .unwrap()
            .to_string();

        let result = UriContentResolver.open(&handle).await;

        assert_eq!(result, Err(ContentError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_unknown_schemes() {
        assert_eq!(
            UriContentResolver.open("content://media/1").await,
            Err(ContentError::UnsupportedHandle)
        );
        assert_eq!(
            UriContentResolver.open("not a uri").await,
            Err(ContentError::UnsupportedHandle)
        );
    }

    #[test]
    fn should_sniff_jpeg_signature() {
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_mime(&[]), UNKNOWN_MIME);
    }
}
