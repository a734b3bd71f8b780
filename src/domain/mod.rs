pub mod c_header;
pub mod input_source;
pub mod reference_image;
pub mod reference_image_list;

// --- public re-exports ---
pub use c_header::{CHeader, CIdentifier};
pub use input_source::directory_path::DirectoryPath;
pub use reference_image::{ImageDimensions, PixelDataError, ReferenceImage};
pub use reference_image_list::ReferenceImageList;
