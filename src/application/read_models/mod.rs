//! Read models handed to ports
//!
//! The render tree is what RenderTarget adapters store; the report snapshot
//! is what ReportExporter adapters serialize.

mod notice;
mod render_tree;
mod report_snapshot;
mod value_format;

pub use notice::{Notice, NoticeKind};
pub use render_tree::{escape_html, Element, Node};
pub use report_snapshot::{ReportMetadata, ReportSnapshot};
pub use value_format::ValueFormat;
