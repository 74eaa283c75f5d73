// File: crates/burnup-core/tests/overlay_pool.rs
// Purpose: Overlay pool tracks handles in order and clearing removes them from the surface.

use burnup_core::overlay::path_data;
use burnup_core::{Element, NodeId, OverlayGraphic, OverlayPool, Point, Segment, Surface, SvgDocument, Theme};

fn doc() -> SvgDocument {
    SvgDocument::parse(r#"<svg xmlns="http://www.w3.org/2000/svg"><g id="layer"/></svg>"#).expect("parse")
}

fn layer(doc: &SvgDocument) -> NodeId {
    let svg = doc.children(doc.root())[0];
    doc.children(svg)[0]
}

#[test]
fn clear_then_track_keeps_call_order() {
    let mut doc = doc();
    let g = layer(&doc);
    let mut pool = OverlayPool::new();
    pool.clear_all(&mut doc);
    assert!(pool.is_empty());

    let ids: Vec<NodeId> = (0..4)
        .map(|i| doc.append_child(g, Element::new("circle").attr("r", i)))
        .collect();
    for &id in &ids {
        pool.track(id);
    }
    assert_eq!(pool.len(), 4);
    assert_eq!(pool.handles(), &ids[..]);
}

#[test]
fn clear_all_removes_from_surface_and_is_idempotent() {
    let mut doc = doc();
    let g = layer(&doc);
    let before = doc.element_count();
    let mut pool = OverlayPool::new();
    for _ in 0..3 {
        let id = doc.append_child(g, Element::new("path"));
        pool.track(id);
    }
    assert_eq!(doc.element_count(), before + 3);

    pool.clear_all(&mut doc);
    assert!(pool.is_empty());
    assert_eq!(doc.element_count(), before);
    assert!(doc.children(g).is_empty());

    pool.clear_all(&mut doc);
    assert!(pool.is_empty());
    assert_eq!(doc.element_count(), before);
}

#[test]
fn forget_leaves_surface_alone() {
    let mut doc = doc();
    let g = layer(&doc);
    let mut pool = OverlayPool::new();
    pool.track(doc.append_child(g, Element::new("path")));
    pool.forget();
    assert!(pool.is_empty());
    assert_eq!(doc.children(g).len(), 1);
}

#[test]
fn graphics_render_to_styled_elements() {
    let theme = Theme::gray();
    let seg = Segment::from_coords(0.0, 100.0, 1920.0, 100.0);
    let line = OverlayGraphic::Line(seg).to_element(&theme);
    assert_eq!(line.name, "path");
    assert_eq!(line.get("d"), Some("M 0 100 L 1920 100"));
    assert_eq!(line.get("d").map(str::to_string), Some(path_data(&seg)));
    assert_eq!(line.get("stroke"), Some("gray"));
    assert_eq!(line.get("stroke-width"), Some("1"));
    assert_eq!(line.get("fill"), Some("none"));

    let marker = OverlayGraphic::Marker { center: Point::new(100.0, 42.5), radius: 5.0 }.to_element(&theme);
    assert_eq!(marker.name, "circle");
    assert_eq!(marker.get("cx"), Some("100"));
    assert_eq!(marker.get("cy"), Some("42.5"));
    assert_eq!(marker.get("r"), Some("5"));
    assert_eq!(marker.get("fill"), Some("red"));
}

#[test]
fn cleared_slots_are_reused() {
    let mut doc = doc();
    let g = layer(&doc);
    let mut pool = OverlayPool::new();
    let group = doc.append_child(g, Element::new("g"));
    doc.append_child(group, Element::new("path"));
    pool.track(group);
    let slots = doc.node_slots();

    for _ in 0..100 {
        pool.clear_all(&mut doc);
        let group = doc.append_child(g, Element::new("g"));
        doc.append_child(group, Element::new("path"));
        pool.track(group);
    }
    assert_eq!(doc.node_slots(), slots);
    assert_eq!(doc.element_count(), 4);
}
