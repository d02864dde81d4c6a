//! Full-tree renderer.
//!
//! Produces the complete contents of the mount point from state. Nothing is
//! diffed or reused between calls; equal state gives equal trees.

use crate::dom::{Element, Node};
use crate::state::AppState;
use crate::view;

pub const TITLE: &str = "Party Planner";

/// Children of the mount point: title, party list, selected party.
pub fn render(state: &AppState) -> Vec<Node> {
    vec![
        Element::new("h1").text(TITLE).into(),
        Element::new("main")
            .child(
                Element::new("section")
                    .child(Element::new("h2").text("Upcoming Parties"))
                    .child(view::party_list(state)),
            )
            .child(
                Element::new("section")
                    .id("selected")
                    .child(Element::new("h2").text("Party Details"))
                    .child(view::selected_party(state))
                    .child(view::party_form(state)),
            )
            .into(),
    ]
}
