use crate::application::read_models::{Element, Node};
use serde::Serialize;

/// Category of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NoticeKind {
    /// Adding a vendor would exceed the selection limit
    SelectionLimit,
    /// A numeric input was out of range and clamped
    Clamped,
    /// An input was rejected and the state left unchanged
    Rejected,
    UnknownVendor,
    UnknownIndustry,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::SelectionLimit => "notice-selection-limit",
            NoticeKind::Clamped => "notice-clamped",
            NoticeKind::Rejected => "notice-rejected",
            NoticeKind::UnknownVendor => "notice-unknown-vendor",
            NoticeKind::UnknownIndustry => "notice-unknown-industry",
        }
    }
}

/// A message shown in the notice bar after a rejected or adjusted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn to_node(&self) -> Node {
        Element::new("p")
            .class("notice")
            .class(self.kind.css_class())
            .text(&self.message)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_node() {
        let notice = Notice::new(NoticeKind::Clamped, "Device count clamped to 100000");
        let html = notice.to_node().as_element().unwrap().to_html();
        assert_eq!(
            html,
            r#"<p class="notice notice-clamped">Device count clamped to 100000</p>"#
        );
    }
}
