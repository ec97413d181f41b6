//! Image acquisition components

mod image_picker;

pub use image_picker::ImagePicker;
