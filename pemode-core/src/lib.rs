pub mod decoder;
pub mod error;
pub mod header;
pub mod image;
pub mod mode;
pub mod source;
pub mod view;

pub use decoder::*;
pub use error::*;
pub use image::*;
pub use mode::*;
pub use source::*;
