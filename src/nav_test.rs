#![allow(clippy::float_cmp)]

use super::*;

fn tracker() -> ActiveLinkTracker {
    ActiveLinkTracker::new(["#home", "#about", "#projects", "#contact"])
}

fn hit(id: &str) -> IntersectionEntry<&str> {
    IntersectionEntry::new(id, true)
}

fn miss(id: &str) -> IntersectionEntry<&str> {
    IntersectionEntry::new(id, false)
}

// =============================================================
// fragment_id
// =============================================================

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
}

#[test]
fn fragment_id_rejects_non_fragments() {
    assert_eq!(fragment_id("https://example.com/#about"), None);
    assert_eq!(fragment_id("resume.pdf"), None);
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
}

// =============================================================
// Scroll target
// =============================================================

#[test]
fn scroll_top_subtracts_navbar_and_adds_gap() {
    // Target 300px below the viewport top, page already scrolled 1000px.
    assert_eq!(fragment_scroll_top(300.0, 1000.0, 64.0, 8.0), 1244.0);
}

#[test]
fn scroll_top_without_navbar() {
    assert_eq!(fragment_scroll_top(120.0, 0.0, 0.0, 8.0), 128.0);
}

#[test]
fn reduced_motion_maps_to_instant() {
    assert_eq!(ScrollMotion::for_reduced_motion(true), ScrollMotion::Instant);
    assert_eq!(ScrollMotion::for_reduced_motion(false), ScrollMotion::Smooth);
}

// =============================================================
// ActiveLinkTracker
// =============================================================

#[test]
fn nothing_active_initially() {
    let tracker = tracker();
    assert_eq!(tracker.active_id(), None);
    assert_eq!(tracker.link_states(), vec![false; 4]);
}

#[test]
fn intersecting_entry_activates_its_link() {
    let mut tracker = tracker();
    assert!(tracker.apply_entries([hit("about")]));
    assert_eq!(tracker.active_id(), Some("about"));
    assert_eq!(tracker.link_states(), vec![false, true, false, false]);
}

#[test]
fn non_intersecting_entries_leave_state_alone() {
    let mut tracker = tracker();
    tracker.apply_entries([hit("projects")]);
    assert!(!tracker.apply_entries([miss("projects"), miss("about")]));
    assert_eq!(tracker.active_id(), Some("projects"));
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let mut tracker = tracker();
    tracker.apply_entries([hit("home"), hit("contact"), miss("about")]);
    assert_eq!(tracker.active_id(), Some("contact"));
    assert_eq!(tracker.link_states(), vec![false, false, false, true]);
}

#[test]
fn empty_id_is_ignored() {
    let mut tracker = tracker();
    assert!(!tracker.apply_entries([hit("")]));
    assert_eq!(tracker.active_id(), None);
}

#[test]
fn section_without_link_clears_every_link() {
    let mut tracker = tracker();
    tracker.apply_entries([hit("about")]);
    tracker.apply_entries([hit("footer")]);
    assert_eq!(tracker.link_states(), vec![false; 4]);
}

#[test]
fn external_links_never_become_active() {
    let mut tracker = ActiveLinkTracker::new(["#about", "https://github.com/me"]);
    tracker.apply_entries([hit("about")]);
    assert_eq!(tracker.link_states(), vec![true, false]);
    assert!(!tracker.is_active(7));
}

#[test]
fn duplicate_hrefs_mark_only_the_first_link() {
    let mut tracker = ActiveLinkTracker::new(["#home", "#about", "#home"]);
    tracker.apply_entries([hit("home")]);
    assert_eq!(tracker.active_index(), Some(0));
    assert_eq!(tracker.link_states(), vec![true, false, false]);
    assert!(!tracker.is_active(2));
}

#[test]
fn active_index_is_none_without_matching_link() {
    let mut tracker = tracker();
    tracker.apply_entries([hit("footer")]);
    assert_eq!(tracker.active_id(), Some("footer"));
    assert_eq!(tracker.active_index(), None);
}

#[test]
fn at_most_one_link_active_for_any_sequence() {
    let ids = ["home", "about", "projects", "contact", "footer"];
    let mut tracker = ActiveLinkTracker::new(["#home", "#about", "#projects", "#about", "#contact"]);
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        let mut batch = Vec::new();
        for _ in 0..(seed % 4) {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let id = ids[(seed >> 16) as usize % ids.len()];
            batch.push(IntersectionEntry::new(id, seed & 1 == 0));
        }
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        tracker.apply_entries(batch);
        let active = tracker.link_states().into_iter().filter(|active| *active).count();
        assert!(active <= 1, "{active} links active");
    }
}
