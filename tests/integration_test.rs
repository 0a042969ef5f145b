use minigallery::{
    load_markup, Activation, Easing, FixedAdvance, GalleryHost, GalleryMarkup, GalleryOptions, ItemMarkup,
    LinkMarkup, MiniGallery, PanelMarkup,
};
use anyhow::Result;
use std::env;
use std::fs;

fn panels(counts: &[usize]) -> Vec<PanelMarkup> {
    counts
        .iter()
        .enumerate()
        .map(|(p, &n)| PanelMarkup {
            items: (0..n)
                .map(|i| ItemMarkup { label: format!("{}-{}", p, i), color: None })
                .collect(),
        })
        .collect()
}

fn three_panel_gallery() -> MiniGallery {
    let markup = GalleryMarkup::with_linked_panels(["A", "B", "C"], panels(&[2, 3, 1]));
    MiniGallery::new(&markup, GalleryOptions::default(), &FixedAdvance(8.0))
}

fn lefts(gallery: &MiniGallery, panel: usize) -> Vec<f32> {
    gallery.panels()[panel].items().iter().map(|i| i.left()).collect()
}

#[test]
fn test_initial_layout() {
    let gallery = three_panel_gallery();

    assert_eq!(gallery.viewport_height(), 150.0);
    assert_eq!(gallery.active_panel(), Some(0));
    assert_eq!(gallery.active_link(), Some(0));
    assert_eq!(lefts(&gallery, 0), vec![0.0, 160.0]);
    assert_eq!(lefts(&gallery, 1), vec![3000.0; 3]);
    assert_eq!(lefts(&gallery, 2), vec![3000.0]);
    assert!(gallery.panels()[0].is_visible());
    assert!(!gallery.panels()[1].is_visible());
    assert_eq!(gallery.panels()[1].width(), 480.0);

    assert_eq!(gallery.carets().len(), 1);
    assert_eq!(gallery.carets()[0].link(), 0);
    assert_eq!(gallery.carets()[0].class(), "mini-gallery-caret");
}

#[test]
fn test_forward_transition_end_to_end() {
    let mut gallery = three_panel_gallery();

    let plan = match gallery.activate(1) {
        Activation::Started(plan) => plan,
        other => panic!("expected a transition, got {:?}", other),
    };
    assert!(plan.forward);
    assert_eq!(plan.offset_side, -3000.0);
    assert_eq!(plan.outgoing_delays, vec![0.0, 50.0]);
    assert_eq!(plan.reveal_delay, 300.0);

    // Outgoing items are gone before the reveal, panel still visible
    gallery.advance_to(299.0);
    assert_eq!(lefts(&gallery, 0), vec![-3000.0, -3000.0]);
    assert!(gallery.panels()[0].is_visible());
    assert_eq!(gallery.active_panel(), None);

    // Reveal swaps the panels and parks incoming items on the offset side
    gallery.advance_to(300.0);
    assert!(!gallery.panels()[0].is_visible());
    assert!(gallery.panels()[1].is_visible());
    assert_eq!(gallery.active_panel(), Some(1));
    assert_eq!(lefts(&gallery, 1), vec![-3000.0; 3]);

    // Last incoming item starts at 400 and lasts 800
    gallery.advance_to(1200.0);
    assert_eq!(lefts(&gallery, 1), vec![0.0, 160.0, 320.0]);
    assert!(!gallery.is_animating());

    assert_eq!(gallery.active_link(), Some(1));
    assert_eq!(gallery.carets().len(), 1);
    assert_eq!(gallery.carets()[0].link(), 1);
    assert_eq!(gallery.carets()[0].opacity(), 1.0);
}

#[test]
fn test_backward_transition_staggers_from_the_end() {
    let mut gallery = three_panel_gallery();
    gallery.activate(1);
    gallery.advance(5000.0);

    let plan = match gallery.activate(0) {
        Activation::Started(plan) => plan,
        other => panic!("expected a transition, got {:?}", other),
    };
    assert!(!plan.forward);
    assert_eq!(plan.offset_side, 3000.0);
    assert_eq!(plan.outgoing_delays, vec![150.0, 100.0, 50.0]);
    assert_eq!(plan.reveal_delay, 350.0);

    gallery.advance(5000.0);
    assert_eq!(gallery.active_panel(), Some(0));
    assert_eq!(lefts(&gallery, 0), vec![0.0, 160.0]);
    assert_eq!(lefts(&gallery, 1), vec![3000.0; 3]);
}

#[test]
fn test_clicking_active_link_does_nothing() {
    let mut gallery = three_panel_gallery();
    gallery.advance(1000.0);

    assert_eq!(gallery.activate(0), Activation::AlreadyActive);
    assert_eq!(gallery.activate(9), Activation::UnknownLink);
    assert_eq!(gallery.pending_timers(), 0);
    assert!(!gallery.is_animating());
}

#[test]
fn test_dangling_href_reveals_nothing() {
    let markup = GalleryMarkup {
        links: vec![
            LinkMarkup { label: "Home".to_string(), href: "handle0".to_string(), width: Some(40.0) },
            LinkMarkup { label: "Lost".to_string(), href: "nowhere".to_string(), width: Some(40.0) },
        ],
        panels: panels(&[1]),
    };
    let mut gallery = MiniGallery::new(&markup, GalleryOptions::default(), &FixedAdvance(8.0));

    match gallery.activate(1) {
        Activation::Started(plan) => {
            assert_eq!(plan.to_panel, None);
            assert_eq!(plan.offset_side, 3000.0);
        }
        other => panic!("expected a transition, got {:?}", other),
    }
    gallery.advance(5000.0);

    assert_eq!(gallery.active_panel(), None);
    assert!(gallery.panels().iter().all(|p| !p.is_visible()));
    assert_eq!(gallery.active_link(), Some(1));
}

#[test]
fn test_markup_file_round_trip() -> Result<()> {
    let path = env::temp_dir().join("mini_gallery_integration.json");
    fs::write(
        &path,
        r##"{
            "links": [
                {"label": "Sea", "href": "handle0", "width": 30},
                {"label": "Sky", "href": "handle1"}
            ],
            "panels": [
                {"items": [{"label": "wave", "color": "#3498db"}]},
                {"items": [{"label": "cloud"}, {"label": "sun"}]}
            ]
        }"##,
    )?;

    let markup = load_markup(&path)?;
    let _ = fs::remove_file(&path);

    let gallery = MiniGallery::new(&markup, GalleryOptions::default(), &FixedAdvance(10.0));
    assert_eq!(gallery.links()[0].width(), 30.0);
    assert_eq!(gallery.links()[1].width(), 30.0);
    assert_eq!(gallery.carets()[0].left(), 5.0);
    assert_eq!(gallery.panel_by_id("handle1"), Some(1));
    assert_eq!(gallery.panels()[0].items()[0].color(), Some("#3498db"));
    Ok(())
}

#[test]
fn test_missing_markup_file_is_an_error() {
    let path = env::temp_dir().join("mini_gallery_does_not_exist.json");
    assert!(load_markup(&path).is_err());
}

#[test]
fn test_partial_options_merge_over_defaults() -> Result<()> {
    let options = GalleryOptions::from_json_str(r#"{"delay": 80, "easeOut": "easeOutBounce"}"#)?;
    assert_eq!(options.delay, 80.0);
    assert_eq!(options.ease_out, Easing::EaseOutBounce);
    assert_eq!(options.ease_in, Easing::EaseInQuint);
    assert_eq!(options.width, 150.0);

    assert!(GalleryOptions::from_json_str(r#"{"easeIn": "wobble"}"#).is_err());
    Ok(())
}

#[test]
fn test_custom_options_drive_layout_and_timing() {
    let options = GalleryOptions {
        width: 100.0,
        padding: 10.0,
        delay: 20.0,
        animate_duration_in: 100.0,
        ..GalleryOptions::default()
    };
    let markup = GalleryMarkup::with_linked_panels(["A", "B"], panels(&[3, 2]));
    let mut gallery = MiniGallery::new(&markup, options, &FixedAdvance(8.0));
    assert_eq!(lefts(&gallery, 0), vec![0.0, 120.0, 240.0]);

    match gallery.activate(1) {
        Activation::Started(plan) => {
            assert_eq!(plan.outgoing_delays, vec![0.0, 20.0, 40.0]);
            assert_eq!(plan.reveal_delay, 160.0);
        }
        other => panic!("expected a transition, got {:?}", other),
    }
}

#[test]
fn test_host_attaches_each_container_once() {
    let markup = GalleryMarkup::with_linked_panels(["A", "B"], panels(&[1, 1]));
    let mut host = GalleryHost::new();

    host.attach("gallery", &markup, GalleryOptions::default(), &FixedAdvance(8.0));
    let again = host.attach(
        "gallery",
        &GalleryMarkup::with_linked_panels(["X"], panels(&[4])),
        GalleryOptions::default(),
        &FixedAdvance(8.0),
    );

    assert_eq!(again.panels().len(), 2);
    assert_eq!(again.carets().len(), 1);
    assert_eq!(host.len(), 1);
}
