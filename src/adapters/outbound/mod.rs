/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod charts;
pub mod console;
pub mod document;
pub mod embedded;
pub mod exporters;
pub mod filesystem;
