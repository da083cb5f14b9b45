use super::*;
use crate::observe::OneShotWatch;

#[test]
fn deferred_source_wins() {
    assert_eq!(resolve_source(Some("photo.jpg"), "placeholder.svg"), "photo.jpg");
}

#[test]
fn empty_or_missing_deferred_keeps_current() {
    assert_eq!(resolve_source(Some(""), "placeholder.svg"), "placeholder.svg");
    assert_eq!(resolve_source(None, "placeholder.svg"), "placeholder.svg");
}

#[test]
fn image_load_marks_loaded() {
    let load = ImageLoad::for_image(Some("photo.jpg"), "");
    assert_eq!(load.src, "photo.jpg");
    assert_eq!(load.class, "loaded");
}

#[test]
fn visible_image_loads_exactly_once() {
    let mut watch = OneShotWatch::new();
    watch.watch("img-1");

    let mut loads = Vec::new();
    for _ in 0..3 {
        if watch.fire(&"img-1") {
            loads.push(ImageLoad::for_image(Some("photo.jpg"), "placeholder.svg"));
        }
    }
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].src, "photo.jpg");
    assert_eq!(watch.pending(), 0);
}
