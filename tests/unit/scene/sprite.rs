use super::*;

fn frame(name: &str) -> SpriteFrame {
    SpriteFrame {
        name: name.to_string(),
        texture: "atlas.png".to_string(),
        rect: Rect::new(0.0, 0.0, 32.0, 32.0),
        rotated: false,
    }
}

#[test]
fn insert_replaces_existing_name() {
    let mut cache = SpriteFrameCache::new();
    assert!(cache.insert(frame("hero.png")).unwrap().is_none());

    let mut moved = frame("hero.png");
    moved.rect = Rect::new(32.0, 0.0, 64.0, 32.0);
    let old = cache.insert(moved.clone()).unwrap().unwrap();

    assert_eq!(old.rect, Rect::new(0.0, 0.0, 32.0, 32.0));
    assert_eq!(cache.get("hero.png"), Some(&moved));
    assert_eq!(cache.len(), 1);
}

#[test]
fn empty_names_are_rejected() {
    let mut cache = SpriteFrameCache::new();
    let err = cache.insert(frame("")).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    assert!(cache.is_empty());
}

#[test]
fn source_lookup_misses_after_remove() {
    let mut cache = SpriteFrameCache::new();
    cache.insert(frame("a")).unwrap();
    assert!(cache.contains("a"));
    assert!(cache.sprite_frame("a").is_some());

    cache.remove("a");
    assert!(cache.sprite_frame("a").is_none());
}
