pub mod directory_path;
pub mod path_error;
pub mod reference_file_name;
