/// Image formats the remote catalog accepts as attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    /// File extension used when an image is materialized to disk.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageMime::Jpeg => ".jpg",
            ImageMime::Png => ".png",
        }
    }
}

impl std::fmt::Display for ImageMime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageMime::Jpeg => write!(f, "image/jpeg"),
            ImageMime::Png => write!(f, "image/png"),
        }
    }
}

impl std::str::FromStr for ImageMime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parameters such as "; charset=binary" are ignored.
        let essence = s.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" => Ok(ImageMime::Jpeg),
            "image/png" => Ok(ImageMime::Png),
            _ => Err(format!("Unsupported image MIME type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_supported_mime_types_to_extensions() {
        assert_eq!("image/jpeg".parse::<ImageMime>().map(|m| m.extension()), Ok(".jpg"));
        assert_eq!("image/png".parse::<ImageMime>().map(|m| m.extension()), Ok(".png"));
    }

    #[test]
    fn should_ignore_case_and_parameters() {
        assert_eq!("IMAGE/PNG; q=1".parse::<ImageMime>(), Ok(ImageMime::Png));
    }

    #[test]
    fn should_reject_unsupported_mime_types() {
        assert!("image/gif".parse::<ImageMime>().is_err());
        assert!("application/octet-stream".parse::<ImageMime>().is_err());
        assert!("".parse::<ImageMime>().is_err());
    }
}
