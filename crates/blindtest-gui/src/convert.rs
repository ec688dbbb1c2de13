use blindtest_core::geometry::{Rect, Vec2};
use image::DynamicImage;

/// Longest texture side uploaded to the GPU. Larger photos are downscaled;
/// clamping still uses the file's natural size, so only sharpness changes.
const MAX_TEXTURE_SIDE: u32 = 4096;

/// Convert a decoded image to an egui ColorImage, downscaling if needed.
pub fn to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let rgba = if image.width().max(image.height()) > MAX_TEXTURE_SIDE {
        image.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE).to_rgba8()
    } else {
        image.to_rgba8()
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

pub fn to_rect(rect: egui::Rect) -> Rect {
    Rect::new(
        rect.left() as f64,
        rect.top() as f64,
        rect.width() as f64,
        rect.height() as f64,
    )
}

pub fn to_point(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x as f64, pos.y as f64)
}
