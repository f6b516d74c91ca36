// Section visibility and pointer tracking.

use backdrop_core::{
    cursor_transform, BackdropError, CursorVariant, PointerTracker, SectionTracker,
    SharedPointer, SharedSections,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

fn sections() -> SectionTracker {
    SectionTracker::with_default_threshold(["hero", "about", "projects", "contact"]).unwrap()
}

#[test]
fn first_section_is_active_before_any_observation() {
    let t = sections();
    assert_eq!(t.active(), "hero");
    assert_eq!(t.threshold(), 0.3);
    assert_eq!(
        t.ids().collect::<Vec<_>>(),
        vec!["hero", "about", "projects", "contact"]
    );
}

#[test]
fn crossing_the_threshold_activates_a_section() {
    let mut t = SectionTracker::with_default_threshold(["a", "b", "c"]).unwrap();
    let changed = t.observe([("a", 0.1), ("b", 0.5), ("c", 0.1)]);
    assert_eq!(changed, Some("b"));
    assert_eq!(t.active(), "b");

    let changed = t.observe([("a", 0.4)]);
    assert_eq!(changed, Some("a"));
    assert_eq!(t.active(), "a");
}

#[test]
fn last_crossing_in_a_batch_wins_over_larger_ratio() {
    let mut t = sections();
    t.observe([("about", 0.9), ("projects", 0.31)]);
    assert_eq!(t.active(), "projects");
}

#[test]
fn exact_threshold_counts_as_visible() {
    let mut t = sections();
    assert_eq!(t.observe([("contact", 0.3)]), Some("contact"));
    assert_eq!(t.is_visible("contact"), Some(true));
}

#[test]
fn active_persists_when_everything_drops_below_threshold() {
    let mut t = sections();
    t.observe([("about", 0.6)]);
    assert_eq!(t.observe([("about", 0.05), ("hero", 0.0)]), None);
    assert_eq!(t.active(), "about");
    assert_eq!(t.is_visible("about"), Some(false));
    assert_eq!(t.ratio("about"), Some(0.05));
}

#[test]
fn re_observing_the_active_section_reports_no_change() {
    let mut t = sections();
    t.observe([("about", 0.6)]);
    assert_eq!(t.observe([("about", 0.8)]), None);
}

#[test]
fn unknown_sections_are_ignored() {
    let mut t = sections();
    assert_eq!(t.observe([("footer", 1.0)]), None);
    assert_eq!(t.active(), "hero");
    assert_eq!(t.is_visible("footer"), None);
}

#[test]
fn listeners_hear_only_changes() {
    let t = SharedSections::new(sections());
    let heard = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = heard.clone();
    let sub = t.subscribe(move |id| sink.borrow_mut().push(id.clone()));

    assert_eq!(t.observe([("about", 0.5)]).as_deref(), Some("about"));
    assert_eq!(t.observe([("about", 0.7)]), None);
    t.observe([("projects", 0.2)]);
    t.observe([("projects", 0.35)]);
    assert_eq!(*heard.borrow(), vec!["about".to_string(), "projects".to_string()]);

    assert!(t.unsubscribe(sub));
    assert!(!t.unsubscribe(sub));
    t.observe([("contact", 1.0)]);
    assert_eq!(heard.borrow().len(), 2);
    assert_eq!(t.active(), "contact");
}

#[test]
fn listener_can_read_tracker_while_notified() {
    let t = SharedSections::new(sections());
    let reader = t.clone();
    let seen = Rc::new(RefCell::new(Vec::<(String, String, Option<bool>)>::new()));
    let sink = seen.clone();
    t.subscribe(move |id| {
        let state = reader.state();
        sink.borrow_mut()
            .push((id.clone(), state.active().to_owned(), state.is_visible(id)));
    });

    t.observe([("about", 0.9), ("projects", 0.4)]);
    t.observe([("hero", 0.6)]);
    assert_eq!(
        *seen.borrow(),
        vec![
            ("projects".to_string(), "projects".to_string(), Some(true)),
            ("hero".to_string(), "hero".to_string(), Some(true)),
        ]
    );
}

#[test]
fn listener_reading_active_through_the_handle_sees_the_new_id() {
    let t = SharedSections::new(sections());
    let reader = t.clone();
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    t.subscribe(move |_| *sink.borrow_mut() = Some(reader.active()));

    t.observe([("contact", 0.5)]);
    assert_eq!(seen.borrow().as_deref(), Some("contact"));
}

#[test]
fn registry_validation() {
    assert_eq!(
        SectionTracker::new(Vec::<String>::new(), 0.3).err(),
        Some(BackdropError::EmptyRegistry)
    );
    assert_eq!(
        SectionTracker::new(["a", "a"], 0.3).err(),
        Some(BackdropError::DuplicateSection("a".into()))
    );
    assert!(matches!(
        SectionTracker::new(["a"], 0.0).err(),
        Some(BackdropError::InvalidThreshold(_))
    ));
    assert!(matches!(
        SectionTracker::new(["a"], 1.5).err(),
        Some(BackdropError::InvalidThreshold(_))
    ));
    assert!(SectionTracker::new(["a"], f32::NAN).is_err());
    assert!(SectionTracker::new(["a"], 1.0).is_ok());
}

#[test]
fn pointer_records_every_move() {
    let mut p = PointerTracker::new();
    assert_eq!(p.position(), Vec2::ZERO);
    assert_eq!(p.on_move(12.0, 34.5), Vec2::new(12.0, 34.5));
    assert_eq!(p.on_move(-3.0, 0.0), Vec2::new(-3.0, 0.0));
    assert_eq!(p.position(), Vec2::new(-3.0, 0.0));
}

#[test]
fn cursor_transform_formats_css_translate() {
    assert_eq!(cursor_transform(Vec2::new(10.0, 20.5)), "translate(10px, 20.5px)");
}

#[test]
fn hover_toggles_variant_independently_of_position() {
    let mut p = PointerTracker::new();
    assert_eq!(p.variant(), CursorVariant::Default);
    assert!(p.on_hover_enter());
    assert!(!p.on_hover_enter());
    p.on_move(5.0, 5.0);
    assert_eq!(p.variant(), CursorVariant::Hover);
    assert!(p.on_hover_leave());
    assert_eq!(p.variant().as_str(), "default");
}

#[test]
fn shared_pointer_notifies_variant_changes_only() {
    let p = SharedPointer::new(PointerTracker::new());
    let reader = p.clone();
    let heard = Rc::new(RefCell::new(Vec::new()));
    let sink = heard.clone();
    p.subscribe(move |v| sink.borrow_mut().push((*v, reader.state().variant())));

    assert!(p.set_variant(CursorVariant::Hover));
    assert!(!p.set_variant(CursorVariant::Hover));
    assert_eq!(p.on_move(7.0, 8.0), Vec2::new(7.0, 8.0));
    assert!(p.set_variant(CursorVariant::Default));
    assert_eq!(p.state().position(), Vec2::new(7.0, 8.0));
    assert_eq!(
        *heard.borrow(),
        vec![
            (CursorVariant::Hover, CursorVariant::Hover),
            (CursorVariant::Default, CursorVariant::Default),
        ]
    );
}
