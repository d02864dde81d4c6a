//! The host document and its `#app` mount point.

use party_core::dom::to_html;
use party_core::render::TITLE;
use party_core::{Mount, Node};

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:auto}\
main{display:grid;grid-template-columns:1fr 2fr;gap:2rem}\
.parties li.selected{font-weight:bold}\
form{display:grid;gap:.25rem;margin-top:1rem}";

/// Holds whatever the planner last rendered.
#[derive(Debug, Default)]
pub struct HtmlMount {
    children: Vec<Node>,
    renders: u64,
}

impl Mount for HtmlMount {
    fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
        self.renders += 1;
    }
}

impl HtmlMount {
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn inner_html(&self) -> String {
        to_html(&self.children)
    }

    /// The whole page with the mount point filled in.
    pub fn document(&self) -> String {
        format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{TITLE}</title>\
             <style>{STYLE}</style></head><body><div id=\"app\">{}</div></body></html>",
            self.inner_html()
        )
    }
}
