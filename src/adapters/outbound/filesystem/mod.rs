/// Filesystem adapters for file I/O operations
mod dataset_reader;
mod file_writer;

pub use dataset_reader::FileSystemDatasetReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
