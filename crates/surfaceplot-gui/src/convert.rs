use surfaceplot_core::field::InterpolatedField;
use surfaceplot_core::view::ColorLevels;

/// Color of samples where the field is undefined.
pub const UNDEFINED_COLOR: egui::Color32 = egui::Color32::from_gray(40);

/// Gradient stops, low to high.
const COLORMAP: [[u8; 3]; 6] = [
    [48, 18, 59],
    [65, 105, 225],
    [26, 188, 156],
    [164, 222, 44],
    [251, 185, 56],
    [190, 30, 45],
];

/// Colormap lookup for `t` in [0, 1].
pub fn colormap(t: f64) -> egui::Color32 {
    if t.is_nan() {
        return UNDEFINED_COLOR;
    }
    let scaled = t.clamp(0.0, 1.0) * (COLORMAP.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(COLORMAP.len() - 2);
    let f = scaled - i as f64;
    let (a, b) = (COLORMAP[i], COLORMAP[i + 1]);
    let lerp = |k: usize| (a[k] as f64 + (b[k] as f64 - a[k] as f64) * f).round() as u8;
    egui::Color32::from_rgb(lerp(0), lerp(1), lerp(2))
}

/// Convert a field to an egui ColorImage. Grid row 0 (lowest y) becomes the
/// bottom image row.
pub fn field_to_color_image(field: &InterpolatedField, levels: ColorLevels) -> egui::ColorImage {
    let (h, w) = field.shape();
    let mut pixels = Vec::with_capacity(h * w);

    for row in (0..h).rev() {
        for col in 0..w {
            pixels.push(colormap(levels.normalize(field.data[[row, col]])));
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
