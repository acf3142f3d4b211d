use crate::application::read_models::Node;
use crate::shared::error::DashboardError;

/// Result of a render target operation; the only failure is a missing element
pub type TargetResult<T> = std::result::Result<T, DashboardError>;

/// RenderTarget port: an id-addressable document the view renders into
///
/// Every mutating call addresses an element by id and fails with
/// [`DashboardError::RenderTargetMissing`] when no such element exists.
pub trait RenderTarget {
    fn contains(&self, id: &str) -> bool;

    /// Replaces all children of the element `id`
    fn replace_children(&mut self, id: &str, children: Vec<Node>) -> TargetResult<()>;

    /// Appends `node` as the last child of the element `parent_id`
    fn append_child(&mut self, parent_id: &str, node: Node) -> TargetResult<()>;

    /// Removes the element `id` and its subtree
    fn remove(&mut self, id: &str) -> TargetResult<()>;

    /// Adds or removes a class on the element `id`
    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> TargetResult<()>;

    fn has_class(&self, id: &str, class: &str) -> bool;

    fn text_content(&self, id: &str) -> Option<String>;

    /// Serializes the whole document as HTML markup
    fn to_html(&self) -> String;
}

pub(crate) fn missing(id: &str) -> DashboardError {
    DashboardError::RenderTargetMissing {
        region: id.to_string(),
    }
}
