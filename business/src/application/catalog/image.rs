use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::product::services::{ContentResolver, ImageAttachment};
use crate::domain::product::value_objects::ImageMime;

/// Turns a product's image reference into a file that can be attached to a request.
///
/// A reference pointing at an existing file is attached as-is. Anything else is
/// treated as an opaque content handle: its bytes are copied into `scratch_dir`
/// under a name whose extension follows the declared MIME type. Every failure
/// drops the attachment instead of failing the submission.
pub struct ImageAttachmentResolver {
    pub content_resolver: Arc<dyn ContentResolver>,
    pub scratch_dir: PathBuf,
    pub logger: Arc<dyn Logger>,
}

impl ImageAttachmentResolver {
    pub async fn resolve(&self, reference: &str) -> Option<ImageAttachment> {
        let path = Path::new(reference);
        if is_existing_file(path).await {
            let file_name = path.file_name()?.to_string_lossy().into_owned();
            self.logger
                .debug(&format!("Attaching image file directly: {}", reference));
            return Some(ImageAttachment {
                file_name,
                path: path.to_path_buf(),
                mime: None,
            });
        }

        let content = match self.content_resolver.open(reference).await {
            Ok(content) => content,
            Err(e) => {
                self.logger.recovered("Error creating image part", &e);
                return None;
            }
        };

        let mime = match content
            .mime_type
            .as_deref()
            .map(|m| m.parse::<ImageMime>())
        {
            Some(Ok(mime)) => mime,
            _ => {
                self.logger.warn(&format!(
                    "Unsupported MIME type: {}",
                    content.mime_type.as_deref().unwrap_or("unknown")
                ));
                return None;
            }
        };

        let file_name = format!("temp-{}{}", Uuid::new_v4().simple(), mime.extension());
        let path = self.scratch_dir.join(&file_name);

        if let Err(e) = tokio::fs::create_dir_all(&self.scratch_dir).await {
            self.logger.recovered("Cannot create image scratch directory", &e);
            return None;
        }
        if let Err(e) = tokio::fs::write(&path, &content.bytes).await {
            self.logger.recovered("Cannot write image to scratch file", &e);
            return None;
        }

        Some(ImageAttachment {
            file_name,
            path,
            mime: Some(mime),
        })
    }

    /// Removes an attachment's scratch copy. Files outside the scratch directory are left alone.
    pub async fn release(&self, attachment: &ImageAttachment) {
        if !attachment.path.starts_with(&self.scratch_dir) {
            return;
        }
        if let Err(e) = tokio::fs::remove_file(&attachment.path).await {
            self.logger.recovered("Cannot remove scratch image", &e);
        }
    }
}

async fn is_existing_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::errors::ContentError;
    use crate::domain::product::services::ResolvedContent;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Content {}

        #[async_trait]
        impl ContentResolver for Content {
            async fn open(&self, handle: &str) -> Result<ResolvedContent, ContentError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("catalog-scratch-{}", Uuid::new_v4().simple()))
    }

    fn resolver(content: MockContent, scratch_dir: PathBuf) -> ImageAttachmentResolver {
        ImageAttachmentResolver {
            content_resolver: Arc::new(content),
            scratch_dir,
            logger: mock_logger(),
        }
    }

    fn content_with(mime: Option<&str>) -> MockContent {
        let mime = mime.map(|m| m.to_string());
        let mut content = MockContent::new();
        content.expect_open().times(1).returning(move |_| {
            Ok(ResolvedContent {
                mime_type: mime.clone(),
                bytes: vec![0x89, b'P', b'N', b'G'],
            })
        });
        content
    }

    #[tokio::test]
    async fn should_attach_existing_file_without_opening_handle() {
        let dir = scratch_dir();
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let file = dir.join("pen.jpg");
        tokio::fs::write(&file, b"jpeg").await.unwrap();

        let resolver = resolver(MockContent::new(), scratch_dir());
        let attachment = resolver.resolve(file.to_str().unwrap()).await.unwrap();

        assert_eq!(attachment.file_name, "pen.jpg");
        assert_eq!(attachment.path, file);
        assert_eq!(attachment.mime, None);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn should_materialize_png_handle_with_png_extension() {
        let dir = scratch_dir();
        let resolver = resolver(content_with(Some("image/png")), dir.clone());

        let attachment = resolver
            .resolve("content://media/external/images/42")
            .await
            .unwrap();

        assert!(attachment.file_name.ends_with(".png"));
        assert_eq!(attachment.mime, Some(ImageMime::Png));
        assert!(attachment.path.starts_with(&dir));
        let written = tokio::fs::read(&attachment.path).await.unwrap();
        assert_eq!(written, vec![0x89, b'P', b'N', b'G']);

        resolver.release(&attachment).await;
        assert!(!attachment.path.exists());
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn should_materialize_jpeg_handle_with_jpg_extension() {
        let dir = scratch_dir();
        let resolver = resolver(content_with(Some("image/jpeg")), dir.clone());

        let attachment = resolver.resolve("content://photos/7").await.unwrap();

        assert!(attachment.file_name.ends_with(".jpg"));
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn should_omit_attachment_when_mime_is_unsupported() {
        let dir = scratch_dir();
        let resolver = resolver(content_with(Some("image/gif")), dir.clone());

        assert_eq!(resolver.resolve("content://photos/8").await, None);
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn should_omit_attachment_when_mime_is_missing() {
        let resolver = resolver(content_with(None), scratch_dir());

        assert_eq!(resolver.resolve("content://photos/9").await, None);
    }

    #[tokio::test]
    async fn should_omit_attachment_when_handle_cannot_be_opened() {
        let mut content = MockContent::new();
        content
            .expect_open()
            .returning(|_| Err(ContentError::NotFound));
        let resolver = resolver(content, scratch_dir());

        assert_eq!(resolver.resolve("content://gone").await, None);
    }

    #[tokio::test]
    async fn should_not_release_files_outside_scratch_dir() {
        let dir = scratch_dir();
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let file = dir.join("keep.png");
        tokio::fs::write(&file, b"png").await.unwrap();

        let resolver = resolver(MockContent::new(), scratch_dir());
        resolver
            .release(&ImageAttachment {
                file_name: "keep.png".to_string(),
                path: file.clone(),
                mime: None,
            })
            .await;

        assert!(file.exists());
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
