use super::*;

/// Minimal page model: every activated link counts as one navigation.
#[derive(Default)]
struct Page {
    navigations: Vec<&'static str>,
}

impl Page {
    /// Native click on an anchor: navigate, then let the event bubble to the card.
    fn click_anchor(&mut self, card: &ProjectCard<&'static str>, href: &'static str) {
        self.navigations.push(href);
        if let Some(link) = card.on_click(EventOrigin::Anchor) {
            self.click_anchor(card, *link);
        }
    }

    fn click_card_body(&mut self, card: &ProjectCard<&'static str>) {
        if let Some(link) = card.on_click(EventOrigin::Card) {
            self.click_anchor(card, *link);
        }
    }
}

fn card() -> ProjectCard<&'static str> {
    ProjectCard::new(["https://github.com/me/folio", "https://folio.example"]).unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn card_without_links_is_inert() {
    assert!(ProjectCard::<&str>::new([]).is_none());
}

#[test]
fn first_link_is_primary() {
    assert_eq!(*card().primary(), "https://github.com/me/folio");
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn body_click_navigates_like_first_anchor() {
    let card = card();
    let mut via_body = Page::default();
    via_body.click_card_body(&card);

    let mut via_anchor = Page::default();
    via_anchor.click_anchor(&card, "https://github.com/me/folio");

    assert_eq!(via_body.navigations, via_anchor.navigations);
    assert_eq!(via_body.navigations, vec!["https://github.com/me/folio"]);
}

#[test]
fn anchor_click_does_not_double_trigger() {
    let card = card();
    let mut page = Page::default();
    page.click_anchor(&card, "https://folio.example");
    assert_eq!(page.navigations, vec!["https://folio.example"]);
}

#[test]
fn origin_from_tag() {
    assert_eq!(EventOrigin::from_anchor_tag(Some("A")), EventOrigin::Anchor);
    assert_eq!(EventOrigin::from_anchor_tag(Some("a")), EventOrigin::Anchor);
    assert_eq!(EventOrigin::from_anchor_tag(Some("DIV")), EventOrigin::Card);
    assert_eq!(EventOrigin::from_anchor_tag(None), EventOrigin::Card);
}

// =============================================================
// Keys
// =============================================================

#[test]
fn enter_and_space_activate_and_prevent_default() {
    let card = card();
    for key in ["Enter", " "] {
        let outcome = card.on_key(key, EventOrigin::Card);
        assert_eq!(outcome.activate, Some(&"https://github.com/me/folio"));
        assert!(outcome.prevent_default);
    }
}

#[test]
fn other_keys_are_ignored() {
    let card = card();
    for key in ["Tab", "Escape", "a", "Spacebar", "ArrowDown"] {
        let outcome = card.on_key(key, EventOrigin::Card);
        assert_eq!(outcome.activate, None);
        assert!(!outcome.prevent_default);
    }
}

#[test]
fn keys_on_a_focused_link_are_left_to_the_link() {
    let card = card();
    let outcome = card.on_key("Enter", EventOrigin::Anchor);
    assert_eq!(outcome.activate, None);
    assert!(!outcome.prevent_default);
}

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Space"));
}
