/// Document adapters implementing the RenderTarget port
mod in_memory_document;

pub use in_memory_document::{InMemoryDocument, DEFAULT_MOUNT_ID};
