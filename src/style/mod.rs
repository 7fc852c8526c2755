mod color;

pub use color::{color_for, crop_color, fertility_color, Category, Rgb, FALLBACK};
