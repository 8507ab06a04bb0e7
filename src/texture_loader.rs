use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::slide::Slide;

/// What the renderer draws in a card's image area. Load failures are
/// normalized into a generated placeholder carrying the slide title, never
/// surfaced as errors.
pub enum Artwork {
    Texture(Texture2D),
    Placeholder { label: String },
}

impl Artwork {
    pub fn placeholder_for(slide: &Slide) -> Self {
        Artwork::Placeholder { label: slide.title.to_string() }
    }

    pub fn placeholder_label(&self) -> Option<&str> {
        match self {
            Artwork::Placeholder { label } => Some(label),
            Artwork::Texture(_) => None,
        }
    }
}

/// Stable hue for a placeholder panel, derived from its label so each slide
/// keeps the same stand-in color across runs.
pub fn placeholder_hue(label: &str) -> f32 {
    let hash = label.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    (hash % 360) as f32
}

pub fn load_artwork(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets_dir: &Path,
    slide: &Slide,
) -> Artwork {
    let path = assets_dir.join(slide.image);
    match load_texture_with_exif_rotation(rl, thread, &path) {
        Ok(texture) => Artwork::Texture(texture),
        Err(e) => {
            warn!(image = %path.display(), error = %e, "using generated placeholder");
            Artwork::placeholder_for(slide)
        }
    }
}

/// Load an image file, bake its EXIF orientation into the pixels, and upload
/// it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("reading {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF orientation is only reliable in JPEG containers.
    let mut orientation = 1;
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if let Some(&value) = values.first() {
                            orientation = value;
                        }
                    }
                }
            }
            Err(e) => {
                debug!(image = %image_path.display(), error = %e, "no usable EXIF data");
            }
        }
    }

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("decoding {}: {}", image_path.display(), e))?;

    // 1 = normal, 3 = 180, 6 = 90 CW, 8 = 90 CCW. Mirrored variants are rare
    // enough in camera output to ignore.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("uploading {}: {}", image_path.display(), e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::builtin_deck;

    #[test]
    fn placeholder_carries_the_slide_title() {
        let deck = builtin_deck();
        let artwork = Artwork::placeholder_for(&deck[0]);
        assert_eq!(artwork.placeholder_label(), Some(deck[0].title));
    }

    #[test]
    fn placeholder_hue_is_stable_and_in_range() {
        let a = placeholder_hue("Transit Pulse");
        let b = placeholder_hue("Transit Pulse");
        assert_eq!(a, b);
        assert!((0.0..360.0).contains(&a));
        assert_ne!(placeholder_hue("Transit Pulse"), placeholder_hue("Ledger Lens"));
    }
}
