// crates/reactor-media/src/still.rs
//
// Still-image decode for face previews and image targets.
// Faces are cheap to decode on demand, so nothing here is cached.

use std::path::Path;

use reactor_core::{DecodeError, PreviewImage};

use crate::decode::preview_size;

pub fn load_still(path: &Path) -> Result<PreviewImage, DecodeError> {
    let img = image::open(path)
        .map_err(|e| DecodeError::Image { path: path.to_path_buf(), msg: e.to_string() })?;

    let (w, h) = preview_size(img.width(), img.height());
    let img = if (w, h) != (img.width(), img.height()) {
        img.resize(w, h, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    PreviewImage::from_rgba(w, h, rgba.into_raw())
        .ok_or_else(|| DecodeError::Image { path: path.to_path_buf(), msg: "empty image".into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    fn write_rgb_png(path: &Path, w: u32, h: u32, rgb: &[u8]) {
        let file = std::fs::File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), w, h);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(rgb).unwrap();
    }

    #[test]
    fn rgb_png_becomes_opaque_rgba() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");
        write_rgb_png(&path, 2, 1, &[255, 0, 0, 0, 0, 255]);

        let img = load_still(&path).unwrap();
        assert_eq!((img.width, img.height), (2, 1));
        assert_eq!(img.data, vec![255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn oversized_still_is_scaled_down() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        let (w, h) = (2048_u32, 16_u32);
        write_rgb_png(&path, w, h, &vec![128; (w * h * 3) as usize]);

        let img = load_still(&path).unwrap();
        assert_eq!(img.width, 1024);
        assert_eq!(img.data.len(), (img.width * img.height * 4) as usize);
    }

    #[test]
    fn garbage_is_an_image_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not a jpeg").unwrap();
        assert!(matches!(load_still(&path), Err(DecodeError::Image { .. })));
    }
}
