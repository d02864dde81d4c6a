//! Views: projections of `AppState` into document fragments.
//!
//! Each view reads state and returns a fresh `Node`. Interactive nodes carry
//! a listener for hosts that dispatch in-process, plus a plain link or form
//! target so a browser without scripts reaches the same intent.

use crate::dom::{find_in, Element, Intent, ListenerKind, Node};
use crate::state::AppState;
use crate::types::{Party, PartyDraft};

pub const SELECT_PROMPT: &str = "Please select a party to learn more.";
pub const SAVE_ACTION: &str = "/save";
pub const DELETE_ACTION: &str = "/delete";

/// Party name that selects the party when clicked.
pub fn party_list_item(state: &AppState, party: &Party) -> Node {
    let mut li = Element::new("li");
    if state.is_selected(party.id) {
        li = li.class("selected");
    }
    li.child(
        Element::new("a")
            .attr("href", format!("?party={}#selected", party.id))
            .text(party.name.as_str()),
    )
    .on(ListenerKind::Click, Intent::SelectParty(party.id))
    .into()
}

pub fn party_list(state: &AppState) -> Node {
    Element::new("ul")
        .class("parties")
        .children(state.parties.iter().map(|party| party_list_item(state, party)))
        .into()
}

/// Edit form for the selected party; empty fields when nothing is selected.
pub fn party_form(state: &AppState) -> Node {
    let selected = state.selected_party.as_ref();
    let name = selected.map(|p| p.name.as_str()).unwrap_or_default();
    let description = selected.map(|p| p.description.as_str()).unwrap_or_default();
    let date = selected.map(Party::calendar_date).unwrap_or_default();
    let location = selected.map(|p| p.location.as_str()).unwrap_or_default();

    Element::new("form")
        .attr("method", "post")
        .attr("action", SAVE_ACTION)
        .child(Element::new("h3").text("Edit Party Details"))
        .child(label("name", "Party Name:"))
        .child(Element::new("input").attr("type", "text").id("name").attr("name", "name").attr("value", name))
        .child(label("description", "Description:"))
        .child(
            Element::new("textarea")
                .id("description")
                .attr("name", "description")
                .text(description),
        )
        .child(label("date", "Date:"))
        .child(Element::new("input").attr("type", "date").id("date").attr("name", "date").attr("value", date))
        .child(label("location", "Location:"))
        .child(
            Element::new("input")
                .attr("type", "text")
                .id("location")
                .attr("name", "location")
                .attr("value", location),
        )
        .child(Element::new("button").attr("type", "submit").text("Save Changes"))
        .on(ListenerKind::Submit, Intent::SaveParty)
        .into()
}

fn label(target: &str, text: &str) -> Element {
    Element::new("label").attr("for", target).text(text)
}

/// Read the current values of a rendered party form.
pub fn read_party_form(form: &Element) -> PartyDraft {
    let value_of = |id: &str| {
        find_in(&form.children, &|e| e.get_attr("id") == Some(id))
            .and_then(|e| e.get_attr("value"))
            .unwrap_or_default()
            .to_string()
    };
    let description = find_in(&form.children, &|e| e.get_attr("id") == Some("description"))
        .map(|e| Node::Element(e.clone()).text_content())
        .unwrap_or_default();

    PartyDraft {
        name: value_of("name"),
        description,
        date: value_of("date"),
        location: value_of("location"),
    }
}

/// Details of the selected party, or a prompt when there is none.
pub fn selected_party(state: &AppState) -> Node {
    let Some(party) = &state.selected_party else {
        return Element::new("p").text(SELECT_PROMPT).into();
    };

    Element::new("section")
        .child(Element::new("h3").text(format!("{} #{}", party.name, party.id)))
        .child(
            Element::new("time")
                .attr("datetime", party.date.as_str())
                .text(party.calendar_date()),
        )
        .child(Element::new("address").text(party.location.as_str()))
        .child(Element::new("p").text(party.description.as_str()))
        .child(guest_list(state, party))
        .child(
            Element::new("form")
                .attr("method", "post")
                .attr("action", DELETE_ACTION)
                .child(Element::new("button").attr("type", "submit").text("Delete Party"))
                .on(ListenerKind::Submit, Intent::DeleteParty),
        )
        .into()
}

/// Guests with an RSVP for `party`.
pub fn guest_list(state: &AppState, party: &Party) -> Node {
    Element::new("ul")
        .class("guests")
        .children(
            state
                .guests_at_party(party.id)
                .into_iter()
                .map(|guest| Node::from(Element::new("li").text(guest.name.as_str()))),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Guest, Rsvp};

    fn bash() -> Party {
        Party {
            id: 1,
            name: "Bash".to_string(),
            description: "Birthday".to_string(),
            date: "2023-10-01T00:00:00Z".to_string(),
            location: "Home".to_string(),
        }
    }

    fn gala() -> Party {
        Party {
            id: 2,
            name: "Gala".to_string(),
            description: String::new(),
            date: "2023-11-05T19:00:00Z".to_string(),
            location: "Hall".to_string(),
        }
    }

    fn state() -> AppState {
        AppState {
            parties: vec![bash(), gala()],
            selected_party: None,
            rsvps: vec![Rsvp {
                id: None,
                guest_id: 5,
                event_id: 1,
            }],
            guests: vec![
                Guest {
                    id: 5,
                    name: "Ada".to_string(),
                    email: None,
                    phone: None,
                },
                Guest {
                    id: 6,
                    name: "Bo".to_string(),
                    email: None,
                    phone: None,
                },
            ],
        }
    }

    fn selected_items(list: &Node) -> usize {
        let mut found = Vec::new();
        list.find_all(&|e| e.tag == "li" && e.has_class("selected"), &mut found);
        found.len()
    }

    #[test]
    fn party_list_keeps_collection_order() {
        let list = party_list(&state());
        let element = list.as_element().unwrap();
        assert!(element.has_class("parties"));
        let names: Vec<_> = element.children.iter().map(Node::text_content).collect();
        assert_eq!(names, ["Bash", "Gala"]);
    }

    #[test]
    fn no_selection_marks_nothing() {
        assert_eq!(selected_items(&party_list(&state())), 0);
    }

    #[test]
    fn selection_marks_exactly_one_item() {
        let mut state = state();
        state.selected_party = Some(gala());
        let list = party_list(&state);
        assert_eq!(selected_items(&list), 1);
        let selected = list.find(&|e| e.has_class("selected")).unwrap();
        assert_eq!(Node::Element(selected.clone()).text_content(), "Gala");
    }

    #[test]
    fn list_item_click_selects_party() {
        let item = party_list_item(&state(), &gala());
        let element = item.as_element().unwrap();
        assert_eq!(element.listeners[0].kind, ListenerKind::Click);
        assert_eq!(element.listeners[0].intent, Intent::SelectParty(2));
        let link = item.find(&|e| e.tag == "a").unwrap();
        assert_eq!(link.get_attr("href"), Some("?party=2#selected"));
    }

    #[test]
    fn panel_prompts_without_selection() {
        let panel = selected_party(&state());
        assert_eq!(panel.as_element().unwrap().tag, "p");
        assert_eq!(panel.text_content(), SELECT_PROMPT);
    }

    #[test]
    fn panel_shows_selected_details_and_guests() {
        let mut state = state();
        state.selected_party = Some(bash());
        let panel = selected_party(&state);

        let heading = panel.find(&|e| e.tag == "h3").unwrap();
        assert_eq!(Node::Element(heading.clone()).text_content(), "Bash #1");
        let time = panel.find(&|e| e.tag == "time").unwrap();
        assert_eq!(time.get_attr("datetime"), Some("2023-10-01T00:00:00Z"));
        assert_eq!(Node::Element(time.clone()).text_content(), "2023-10-01");

        let guests = panel.find(&|e| e.has_class("guests")).unwrap();
        let names: Vec<_> = guests.children.iter().map(Node::text_content).collect();
        assert_eq!(names, ["Ada"]);

        let delete = panel.find(&|e| e.get_attr("action") == Some(DELETE_ACTION)).unwrap();
        assert_eq!(delete.listeners[0].intent, Intent::DeleteParty);
    }

    #[test]
    fn form_is_prefilled_from_selection() {
        let mut state = state();
        state.selected_party = Some(bash());
        let form = party_form(&state);
        let element = form.as_element().unwrap();
        assert_eq!(element.listeners[0].intent, Intent::SaveParty);
        assert!(element.listeners[0].prevent_default);

        let draft = read_party_form(element);
        assert_eq!(
            draft,
            PartyDraft {
                name: "Bash".to_string(),
                description: "Birthday".to_string(),
                date: "2023-10-01".to_string(),
                location: "Home".to_string(),
            }
        );
    }

    #[test]
    fn form_is_empty_without_selection() {
        let form = party_form(&state());
        let draft = read_party_form(form.as_element().unwrap());
        assert_eq!(draft, PartyDraft::default());
    }
}
