pub mod colour;
pub mod geometric_unit;
pub mod pixel;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod viewport;
