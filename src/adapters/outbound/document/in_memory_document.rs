use crate::application::read_models::{Element, Node};
use crate::ports::outbound::render_target::missing;
use crate::ports::outbound::{RenderTarget, TargetResult};

/// Default id of the element the dashboard is mounted into
pub const DEFAULT_MOUNT_ID: &str = "dashboard";

/// InMemoryDocument adapter holding the page as an element tree
///
/// The document starts as an HTML page with an empty mount element. It
/// counts every successful mutation so callers can observe how much a
/// render pass touched.
pub struct InMemoryDocument {
    root: Element,
    mutations: usize,
}

impl InMemoryDocument {
    pub fn new(title: &str) -> Self {
        Self::with_mount(title, DEFAULT_MOUNT_ID)
    }

    pub fn with_mount(title: &str, mount_id: &str) -> Self {
        let root = Element::new("html")
            .attr("lang", "en")
            .child(
                Element::new("head")
                    .child(Element::new("meta").attr("charset", "utf-8"))
                    .child(Element::new("title").text(title)),
            )
            .child(Element::new("body").child(Element::new("div").with_id(mount_id)));
        Self { root, mutations: 0 }
    }

    /// A document without any mount element
    pub fn empty() -> Self {
        Self {
            root: Element::new("html").child(Element::new("body")),
            mutations: 0,
        }
    }

    /// Number of successful mutations since creation
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    fn element_mut(&mut self, id: &str) -> TargetResult<&mut Element> {
        self.root.find_mut(id).ok_or_else(|| missing(id))
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new("NAC Vendor Comparison")
    }
}

impl RenderTarget for InMemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.root.find(id).is_some()
    }

    fn replace_children(&mut self, id: &str, children: Vec<Node>) -> TargetResult<()> {
        self.element_mut(id)?.set_children(children);
        self.mutations += 1;
        Ok(())
    }

    fn append_child(&mut self, parent_id: &str, node: Node) -> TargetResult<()> {
        self.element_mut(parent_id)?.push_child(node);
        self.mutations += 1;
        Ok(())
    }

    fn remove(&mut self, id: &str) -> TargetResult<()> {
        self.root.remove_descendant(id).ok_or_else(|| missing(id))?;
        self.mutations += 1;
        Ok(())
    }

    fn set_class(&mut self, id: &str, class: &str, enabled: bool) -> TargetResult<()> {
        let element = self.element_mut(id)?;
        if enabled {
            element.add_class(class);
        } else {
            element.remove_class(class);
        }
        self.mutations += 1;
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.root.find(id).is_some_and(|e| e.has_class(class))
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.root.find(id).map(Element::text_content)
    }

    fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.root.write_html(&mut out);
        out.push('\n');
        out
    }
}
