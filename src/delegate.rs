//! Image loading into display surfaces.
//!
//! The custom gallery does not know how to decode or show images itself; it
//! asks a [`LoadDelegate`] to put a file into an [`ImageSurface`]. The
//! default [`DataUrlLoader`] turns the file into a base64 `data:` URL, which
//! is what webview-backed surfaces consume.

use base64::Engine;
use std::path::Path;

/// Something an image can be shown in
pub trait ImageSurface {
    /// Replace the displayed image with `source` (a URL or `data:` URL)
    fn set_source(&mut self, source: &str);

    /// Show nothing
    fn clear(&mut self);
}

/// Renders the image at `path` into `surface`
pub trait LoadDelegate: Send + Sync {
    fn load(&self, surface: &mut dyn ImageSurface, path: &Path);
}

impl<F> LoadDelegate for F
where
    F: Fn(&mut dyn ImageSurface, &Path) + Send + Sync,
{
    fn load(&self, surface: &mut dyn ImageSurface, path: &Path) {
        self(surface, path)
    }
}

/// Default delegate: reads the file and hands the surface a `data:` URL
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlLoader;

impl LoadDelegate for DataUrlLoader {
    fn load(&self, surface: &mut dyn ImageSurface, path: &Path) {
        match image_path_to_data_url(path) {
            Ok(url) => surface.set_source(&url),
            Err(e) => {
                log::warn!("Could not load image {:?}: {}", path, e);
                surface.clear();
            }
        }
    }
}

fn guess_mime_from_ext(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}

/// Reads the image at `path` and returns it as a base64 data URL
pub fn image_path_to_data_url(path: &Path) -> std::io::Result<String> {
    let mime = guess_mime_from_ext(path);
    let data = std::fs::read(path)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(data);
    Ok(format!("data:{};base64,{}", mime, b64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Default)]
    struct TestSurface {
        source: Option<String>,
        cleared: bool,
    }

    impl ImageSurface for TestSurface {
        fn set_source(&mut self, source: &str) {
            self.source = Some(source.to_string());
        }

        fn clear(&mut self) {
            self.source = None;
            self.cleared = true;
        }
    }

    #[test]
    fn test_mime_guessing() {
        assert_eq!(guess_mime_from_ext(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(guess_mime_from_ext(Path::new("a.png")), "image/png");
        assert_eq!(guess_mime_from_ext(Path::new("a.webp")), "image/webp");
        assert_eq!(guess_mime_from_ext(Path::new("a.heif")), "image/heic");
        assert_eq!(guess_mime_from_ext(Path::new("noext")), "image/jpeg");
    }

    #[test]
    fn test_data_url_loader_sets_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, b"abc").unwrap();

        let mut surface = TestSurface::default();
        DataUrlLoader.load(&mut surface, &path);

        assert_eq!(surface.source.as_deref(), Some("data:image/png;base64,YWJj"));
        assert!(!surface.cleared);
    }

    #[test]
    fn test_data_url_loader_clears_on_missing_file() {
        let mut surface = TestSurface {
            source: Some("old".to_string()),
            cleared: false,
        };
        DataUrlLoader.load(&mut surface, Path::new("/definitely/not/here.jpg"));

        assert!(surface.source.is_none());
        assert!(surface.cleared);
    }

    #[test]
    fn test_closure_as_delegate() {
        let delegate = |surface: &mut dyn ImageSurface, path: &Path| {
            surface.set_source(&format!("file://{}", path.display()));
        };
        let mut surface = TestSurface::default();
        delegate.load(&mut surface, &PathBuf::from("/tmp/x.jpg"));
        assert_eq!(surface.source.as_deref(), Some("file:///tmp/x.jpg"));
    }
}
