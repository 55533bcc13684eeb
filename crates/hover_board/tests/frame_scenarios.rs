//! Multi-frame scenarios driven through the renderer host

use approx::assert_relative_eq;
use hover_board::config::SliderMeshConfig;
use hover_board::foundation::logging;
use hover_board::prelude::*;
use hover_board::renderers::{icon_pair_for, ActiveRenderer, JUMP_INACTIVE};

fn slider_key(host: &RendererHost, key: ItemKey) -> NodeKey {
    match host.controller(key).unwrap().active_renderer() {
        ActiveRenderer::Slider(node) => node,
        other => panic!("expected slider renderer, got {other:?}"),
    }
}

/// Local y on the default slider (10 high, 2-high handle) for a normalized value
fn slider_y(value: f32) -> f32 {
    -4.0 + 8.0 * value
}

fn hover(host: &mut RendererHost, key: ItemKey, y: f32) {
    *host.highlight_mut(key).unwrap() =
        HighlightState::with_highlight(Highlight::new(Vec3::new(0.0, y, 0.0), 0.0, 1.0), true);
}

#[test]
fn checkbox_switching_to_slider_swaps_renderers() {
    logging::init();
    let mut host = RendererHost::new(RendererConfig::default());
    let key = host.add_item(ItemData::checkbox("Mode", true)).unwrap();

    host.tick();
    let button = host.button_for(key).unwrap();
    assert_eq!(button.canvas.icons, IconPair::new(IconType::CheckOuter, IconType::CheckInner));
    let ActiveRenderer::Button(button_node) = host.controller(key).unwrap().active_renderer() else {
        panic!("expected button renderer");
    };

    host.item_mut(key).unwrap().kind = ItemKind::Slider(SliderItem::new(0.0, 100.0).with_value(0.4));
    host.tick();

    assert!(!host.scene().contains(button_node));
    assert!(host.button_for(key).is_none());
    let slider_node = slider_key(&host, key);

    // Subsequent frames keep the same slider and only push slider settings.
    host.item_mut(key).unwrap().as_slider_mut().unwrap().set_value(0.6);
    host.tick();
    assert_eq!(slider_key(&host, key), slider_node);
    let slider = host.slider_for(key).unwrap();
    assert_relative_eq!(slider.handle_value, 0.6);
    assert_eq!(slider.handle_button.canvas.label_text, "Mode: 60");
}

#[test]
fn mode_exclusivity_over_many_frames() {
    let mut host = RendererHost::new(RendererConfig::default());
    let key = host.add_item(ItemData::plain("Cycle")).unwrap();

    let shapes = [
        ItemKind::Slider(SliderItem::default()),
        ItemKind::Radio { value: false },
        ItemKind::Slider(SliderItem::default()),
        ItemKind::Slider(SliderItem::default()),
        ItemKind::Parent,
        ItemKind::Sticky,
        ItemKind::Slider(SliderItem::default()),
    ];

    for kind in shapes {
        let is_slider = matches!(kind, ItemKind::Slider(_));
        host.item_mut(key).unwrap().kind = kind;
        assert!(host.tick().is_empty());

        let node = host.controller(key).unwrap().node();
        let renderers = host.scene().node(node).unwrap().children().len();
        assert_eq!(renderers, 1);
        assert_eq!(host.slider_for(key).is_some(), is_slider);
        assert_eq!(host.button_for(key).is_some(), !is_slider);
    }
}

#[test]
fn icon_table_is_total() {
    let cases = [
        (ItemKind::Checkbox { value: true }, IconType::CheckOuter, IconType::CheckInner),
        (ItemKind::Checkbox { value: false }, IconType::CheckOuter, IconType::None),
        (ItemKind::Radio { value: true }, IconType::RadioOuter, IconType::RadioInner),
        (ItemKind::Radio { value: false }, IconType::RadioOuter, IconType::None),
        (ItemKind::Parent, IconType::Parent, IconType::None),
        (ItemKind::Sticky, IconType::Sticky, IconType::None),
        (ItemKind::Plain, IconType::None, IconType::None),
    ];

    for (kind, outer, inner) in cases {
        assert_eq!(icon_pair_for(&kind), IconPair::new(outer, inner), "{kind:?}");
    }
}

#[test]
fn zero_value_from_range() {
    let mut host = RendererHost::new(RendererConfig::default());
    let centered = host.add_item(ItemData::slider("Pan", SliderItem::new(-50.0, 50.0))).unwrap();
    let positive = host.add_item(ItemData::slider("Gain", SliderItem::new(0.0, 100.0))).unwrap();
    let negative = host.add_item(ItemData::slider("Cut", SliderItem::new(-100.0, -10.0))).unwrap();

    host.tick();

    assert_relative_eq!(host.slider_for(centered).unwrap().zero_value, 0.5);
    assert_relative_eq!(host.slider_for(positive).unwrap().zero_value, 0.0);
    assert_relative_eq!(host.slider_for(negative).unwrap().zero_value, 1.0);
}

#[test]
fn jump_preview_is_inactive_without_highlight() {
    let mut host = RendererHost::new(RendererConfig::default());
    let data = SliderItem::new(0.0, 1.0).with_allow_jump(true);
    let key = host.add_item(ItemData::slider("Jump", data)).unwrap();

    hover(&mut host, key, slider_y(0.25));
    host.tick();
    assert_relative_eq!(host.slider_for(key).unwrap().jump_value, 0.25);
    assert!(host.slider_for(key).unwrap().jump_button.visible);

    for _ in 0..3 {
        host.highlight_mut(key).unwrap().clear();
        host.tick();

        let slider = host.slider_for(key).unwrap();
        assert_eq!(slider.jump_value, JUMP_INACTIVE);
        assert!(!slider.jump_button.visible);
        assert!(host.item(key).unwrap().as_slider().unwrap().hover_value().is_none());
    }
}

#[test]
fn sticky_drag_eases_toward_snap() {
    logging::init();
    let mut config = RendererConfig::default();
    let mut eased = Vec::new();

    for power in [2.0, 3.0, 5.0] {
        config.controller.hover_ease_power = power;
        let mut host = RendererHost::new(config.clone());

        let mut data = SliderItem::new(0.0, 100.0).with_snaps(5);
        data.is_sticky_selected = true;
        let key = host.add_item(ItemData::slider("Drag", data)).unwrap();

        hover(&mut host, key, slider_y(0.73));
        host.tick();

        let data = host.item(key).unwrap().as_slider().unwrap();
        assert_relative_eq!(data.value(), 0.73, epsilon = 1e-5);
        assert_relative_eq!(data.snapped_hover_value().unwrap(), 0.75);

        let slider = host.slider_for(key).unwrap();
        assert!(slider.jump_value > 0.73 && slider.jump_value < 0.75, "{}", slider.jump_value);
        assert_relative_eq!(slider.handle_value, slider.jump_value);
        eased.push(slider.jump_value);
    }

    assert!(eased[0] < eased[1] && eased[1] < eased[2], "{eased:?}");
}

#[test]
fn hover_without_sticky_leaves_value_alone() {
    let mut host = RendererHost::new(RendererConfig::default());
    let key = host.add_item(ItemData::slider("Hover", SliderItem::new(0.0, 10.0).with_value(0.2))).unwrap();

    hover(&mut host, key, slider_y(0.9));
    host.tick();

    let data = host.item(key).unwrap().as_slider().unwrap();
    assert_relative_eq!(data.value(), 0.2);
    assert_relative_eq!(data.hover_value().unwrap(), 0.9, epsilon = 1e-5);
    assert_relative_eq!(host.slider_for(key).unwrap().handle_value, 0.2);
}

#[test]
fn quad_uv_edges() {
    let mut mesh = MeshSliderRectangle::new(&SliderMeshConfig::default());
    mesh.size_x = 20.0;
    mesh.size_y = 10.0;
    mesh.uv_start_y = 0.2;
    mesh.uv_end_y = 0.8;
    assert!(mesh.update_after_renderer());

    let render = mesh.render_mesh().unwrap();
    assert_eq!(render.vertices.len(), 4);
    for (i, vertex) in render.vertices.iter().enumerate() {
        let expected = if i == 1 || i == 2 { 0.2 } else { 0.8 };
        assert_relative_eq!(vertex.uv[1], expected);
        assert_relative_eq!(vertex.position[0].abs(), 10.0);
        assert_relative_eq!(vertex.position[1].abs(), 5.0);
    }
}

#[test]
fn mesh_commits_are_idempotent_until_reallocated() {
    let mut mesh = MeshSliderRectangle::new(&SliderMeshConfig::default());
    mesh.update_after_renderer();
    mesh.update_mesh();
    mesh.update_color();
    mesh.update_after_renderer();

    let render = mesh.render_mesh().unwrap();
    assert_eq!((render.geometry_revision, render.color_revision), (1, 1));

    // Color-only change leaves geometry alone.
    mesh.is_fill = true;
    mesh.update_after_renderer();
    let render = mesh.render_mesh().unwrap();
    assert_eq!((render.geometry_revision, render.color_revision), (1, 2));

    // A fresh buffer commits again even though nothing changed.
    assert!(mesh.create_mesh_builder_if_needed(true));
    let render = mesh.render_mesh().unwrap();
    assert_eq!((render.geometry_revision, render.color_revision), (1, 1));
    assert_eq!(render.vertices.len(), 4);
}

#[test]
fn slider_track_follows_handle() {
    let mut host = RendererHost::new(RendererConfig::default());
    let key = host.add_item(ItemData::slider("Track", SliderItem::default().with_value(0.0))).unwrap();
    host.tick();

    let revisions = |host: &RendererHost| -> Vec<u64> {
        host.slider_for(key)
            .unwrap()
            .track_segments()
            .iter()
            .map(|s| s.mesh.render_mesh().unwrap().geometry_revision)
            .collect()
    };

    let before = revisions(&host);
    host.tick();
    assert_eq!(revisions(&host), before);

    host.item_mut(key).unwrap().as_slider_mut().unwrap().set_value(0.5);
    host.tick();
    let segments = host.slider_for(key).unwrap().track_segments();
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().any(|s| s.mesh.is_fill));
}

#[test]
fn sticky_drag_is_continuous_across_snap_midpoint() {
    let mut handles = Vec::new();

    // Five snaps: the midpoint between 0.25 and 0.5 sits at 0.375.
    for value in [0.374, 0.376] {
        let mut host = RendererHost::new(RendererConfig::default());
        let mut data = SliderItem::new(0.0, 100.0).with_snaps(5);
        data.is_sticky_selected = true;
        let key = host.add_item(ItemData::slider("Drag", data)).unwrap();

        hover(&mut host, key, slider_y(value));
        host.tick();
        handles.push(host.slider_for(key).unwrap().handle_value);
    }

    assert!(handles[0] < 0.375 && handles[1] > 0.375, "{handles:?}");
    assert_relative_eq!(handles[0], handles[1], epsilon = 0.01);
}
