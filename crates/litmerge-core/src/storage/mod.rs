pub mod backup;
pub mod envelope;
pub mod json_files;
