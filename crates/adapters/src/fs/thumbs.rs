use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use communicator_application::{ApplicationError, ThumbnailArtifact, ThumbnailGenerator};
use image::{io::Reader as ImageReader, DynamicImage, ImageBuffer, ImageFormat, Rgba};

#[derive(Debug, Default)]
pub struct FsThumbnailGenerator;

impl ThumbnailGenerator for FsThumbnailGenerator {
    fn ensure_thumbnail(
        &self,
        source_path: &Path,
        cache_root: &Path,
        size: u32,
    ) -> Result<ThumbnailArtifact, ApplicationError> {
        let thumb_path = thumbnail_path(cache_root, source_path, size);

        let (width, height) = if thumb_path.exists() {
            let existing = decode(&thumb_path)?;
            (existing.width(), existing.height())
        } else if is_decodable(source_path) {
            write_scaled(source_path, &thumb_path, size)?
        } else {
            write_placeholder(&thumb_path, size)?
        };

        Ok(ThumbnailArtifact {
            file_path: thumb_path,
            width,
            height,
        })
    }
}

pub fn thumbnail_path(cache_root: &Path, source_path: &Path, size: u32) -> PathBuf {
    let flattened: String = source_path
        .to_string_lossy()
        .chars()
        .map(|ch| if ch.is_alphanumeric() || ch == '-' { ch } else { '_' })
        .collect();
    // Flattening is lossy (`a/b.png` and `a_b.png` look alike), the hash keeps
    // the key unique per source path.
    let mut hasher = DefaultHasher::new();
    source_path.hash(&mut hasher);
    cache_root
        .join("thumbs")
        .join(size.to_string())
        .join(format!("{flattened}-{:016x}.png", hasher.finish()))
}

fn is_decodable(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref(),
        Some("png" | "jpg" | "jpeg")
    )
}

fn decode(path: &Path) -> Result<DynamicImage, ApplicationError> {
    ImageReader::open(path)
        .map_err(|error| ApplicationError::io(path, error))?
        .with_guessed_format()
        .map_err(|error| ApplicationError::io(path, error))?
        .decode()
        .map_err(|error| ApplicationError::Decode(error.to_string()))
}

fn ensure_parent(path: &Path) -> Result<(), ApplicationError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| ApplicationError::io(parent, error))?;
    }
    Ok(())
}

fn write_scaled(
    source_path: &Path,
    thumb_path: &Path,
    size: u32,
) -> Result<(u32, u32), ApplicationError> {
    let thumb = decode(source_path)?.thumbnail(size, size);
    ensure_parent(thumb_path)?;
    thumb
        .save_with_format(thumb_path, ImageFormat::Png)
        .map_err(|error| ApplicationError::Encode(error.to_string()))?;
    Ok((thumb.width(), thumb.height()))
}

fn write_placeholder(thumb_path: &Path, size: u32) -> Result<(u32, u32), ApplicationError> {
    ensure_parent(thumb_path)?;
    let placeholder = ImageBuffer::from_fn(size, size, |_x, _y| Rgba([230_u8, 230, 230, 255]));
    placeholder
        .save_with_format(thumb_path, ImageFormat::Png)
        .map_err(|error| ApplicationError::Encode(error.to_string()))?;
    Ok((size, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn scales_png_to_fit_preserving_aspect() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("x.png");
        let img = ImageBuffer::from_fn(500, 300, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(&src).expect("save");

        let out = FsThumbnailGenerator
            .ensure_thumbnail(&src, &dir.path().join("cache"), 256)
            .expect("thumbnail");

        assert_eq!(out.width, 256);
        assert_eq!(out.height, 154);
        assert!(out.file_path.exists());
        assert!(out.file_path.starts_with(dir.path().join("cache/thumbs/256")));
    }

    #[test]
    fn existing_thumbnail_is_reused() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("x.png");
        ImageBuffer::from_fn(100, 100, |_x, _y| Rgb([1_u8, 2_u8, 3_u8]))
            .save(&src)
            .expect("save");
        let cache = dir.path().join("cache");

        let first = FsThumbnailGenerator
            .ensure_thumbnail(&src, &cache, 32)
            .expect("first");
        fs::remove_file(&src).expect("remove source");
        let second = FsThumbnailGenerator
            .ensure_thumbnail(&src, &cache, 32)
            .expect("second");

        assert_eq!(first, second);
    }

    #[test]
    fn unsupported_format_gets_placeholder() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("star.svg");
        fs::write(&src, "<svg/>").expect("write");

        let out = FsThumbnailGenerator
            .ensure_thumbnail(&src, &dir.path().join("cache"), 64)
            .expect("placeholder");

        assert_eq!((out.width, out.height), (64, 64));
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = FsThumbnailGenerator.ensure_thumbnail(
            &dir.path().join("gone.png"),
            &dir.path().join("cache"),
            64,
        );
        assert!(matches!(result, Err(ApplicationError::Io { .. })));
    }

    #[test]
    fn thumbnail_path_flattens_source_path() {
        let path = thumbnail_path(Path::new("cache"), Path::new("./pictograms/food/apple.png"), 128);

        assert_eq!(path.parent(), Some(Path::new("cache/thumbs/128")));
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("utf-8 file name");
        assert!(file_name.starts_with("__pictograms_food_apple_png-"));
        assert!(file_name.ends_with(".png"));
        assert_eq!(
            path,
            thumbnail_path(Path::new("cache"), Path::new("./pictograms/food/apple.png"), 128)
        );
    }

    #[test]
    fn lookalike_sources_get_separate_thumbnails() {
        let dir = TempDir::new().expect("tempdir");
        fs::create_dir_all(dir.path().join("a")).expect("dir");
        let nested = dir.path().join("a/b.png");
        let flat = dir.path().join("a_b.png");
        ImageBuffer::from_fn(100, 50, |_x, _y| Rgb([1_u8, 2_u8, 3_u8]))
            .save(&nested)
            .expect("save nested");
        ImageBuffer::from_fn(40, 100, |_x, _y| Rgb([4_u8, 5_u8, 6_u8]))
            .save(&flat)
            .expect("save flat");
        let cache = dir.path().join("cache");

        let first = FsThumbnailGenerator
            .ensure_thumbnail(&nested, &cache, 32)
            .expect("nested thumbnail");
        let second = FsThumbnailGenerator
            .ensure_thumbnail(&flat, &cache, 32)
            .expect("flat thumbnail");

        assert_ne!(first.file_path, second.file_path);
        assert_eq!((first.width, first.height), (32, 16));
        assert_eq!((second.width, second.height), (13, 32));
    }
}
