// File: crates/bar-chart-core/tests/pipeline.rs
// Purpose: End-to-end scene generation: bars, ticks, titles, legend, warnings and repaint idempotence.

use bar_chart_core::{
    recompute, AxisSide, ChartConfig, ChartMount, DataIntegrityWarning, MountSurface, OverflowPolicy,
    Primitive, Record, Size, TextAnchor,
};

fn sample() -> Vec<Record> {
    vec![
        Record::new("Lion", "Carnivore", 80.0),
        Record::new("Zebra", "Herbivore", 65.0),
        Record::new("Human", "Omnivore", 45.0),
    ]
}

#[test]
fn small_containers_take_the_floor() {
    let scene = recompute(&sample(), Size::new(320.0, 200.0), &ChartConfig::default());
    assert_eq!(scene.drawable, Size::new(600.0, 400.0));
    assert_eq!(scene.surface_size, Size::new(650.0, 500.0));

    let scene = recompute(&sample(), Size::new(900.0, 550.0), &ChartConfig::default());
    assert_eq!(scene.drawable, Size::new(900.0, 550.0));
    assert_eq!(scene.surface_size, Size::new(950.0, 650.0));
}

#[test]
fn bars_follow_record_order_and_scales() {
    let scene = recompute(&sample(), Size::new(600.0, 400.0), &ChartConfig::default());
    let bars: Vec<_> = scene.bars().collect();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars.iter().map(|b| b.record).collect::<Vec<_>>(), [0, 1, 2]);

    let lion = bars[0];
    assert_eq!(lion.x, 20.0);
    assert_eq!(lion.width, 160.0);
    assert!((lion.y - (400.0 - 80.0 / 120.0 * 400.0)).abs() < 1e-3);
    assert!((lion.height - (400.0 - lion.y)).abs() < 1e-3);
    assert_eq!(lion.fill, ChartConfig::default().palette.carnivore);
    assert_eq!(bars[2].fill, ChartConfig::default().palette.omnivore);
    assert!(scene.warnings.is_empty());
}

#[test]
fn primitives_are_ordered_bar_axis_label_legend() {
    let scene = recompute(&sample(), Size::new(600.0, 400.0), &ChartConfig::default());
    let rank = |p: &Primitive| match p {
        Primitive::Bar(_) => 0,
        Primitive::AxisTick(_) => 1,
        Primitive::AxisLabel(_) => 2,
        Primitive::LegendEntry(_) => 3,
    };
    let ranks: Vec<_> = scene.primitives.iter().map(rank).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{ranks:?}");
}

#[test]
fn category_ticks_are_rotated_and_end_anchored() {
    let scene = recompute(&sample(), Size::new(600.0, 400.0), &ChartConfig::default());
    let ticks: Vec<_> = scene.ticks(AxisSide::Bottom).collect();
    assert_eq!(ticks.len(), 3);
    assert_eq!(ticks[1].label, "Zebra");
    assert_eq!(ticks[1].position, 300.0);
    assert!(ticks.iter().all(|t| t.rotation_degrees == -45.0 && t.anchor == TextAnchor::End));
}

#[test]
fn value_ticks_use_fixed_domain() {
    let scene = recompute(&[Record::new("Snail", "Herbivore", 0.05)], Size::new(600.0, 400.0), &ChartConfig::default());
    let ticks: Vec<_> = scene.ticks(AxisSide::Left).collect();
    assert_eq!(ticks.len(), 13);
    assert_eq!(ticks[0].label, "0");
    assert_eq!(ticks[0].position, 400.0);
    assert_eq!(ticks[12].label, "120");
    assert_eq!(ticks[12].position, 0.0);
}

#[test]
fn titles_and_static_legend() {
    let scene = recompute(&sample(), Size::new(800.0, 500.0), &ChartConfig::default());
    let labels: Vec<_> = scene.axis_labels().collect();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "Animal Names");
    assert_eq!((labels[0].anchor_point.x, labels[0].anchor_point.y), (400.0, 590.0));
    assert_eq!(labels[1].text, "Average Speed (km/h)");
    assert_eq!(labels[1].rotation_degrees, -90.0);
    assert_eq!((labels[1].anchor_point.x, labels[1].anchor_point.y), (-30.0, 250.0));

    let legend: Vec<_> = scene.legend().collect();
    assert_eq!(legend.iter().map(|e| e.label.as_str()).collect::<Vec<_>>(), ["Carnivore", "Herbivore", "Omnivore"]);
    assert_eq!(legend.iter().map(|e| e.position.y).collect::<Vec<_>>(), [10.0, 40.0, 70.0]);
    assert!(legend.iter().all(|e| e.position.x == 640.0 && e.label_position.x == 650.0));
    assert_eq!(legend[2].label_position.y, 75.0);
}

#[test]
fn legend_does_not_depend_on_groups_present() {
    let only_unknown = [Record::new("Gecko", "Insectivore", 10.0)];
    let scene = recompute(&only_unknown, Size::new(600.0, 400.0), &ChartConfig::default());
    assert_eq!(scene.legend().count(), 3);
    assert_eq!(scene.bars().next().map(|b| b.fill), Some(ChartConfig::default().palette.fallback));
}

#[test]
fn empty_dataset_still_draws_titles_and_legend() {
    let scene = recompute(&[], Size::new(600.0, 400.0), &ChartConfig::default());
    assert_eq!(scene.bars().count(), 0);
    assert_eq!(scene.ticks(AxisSide::Bottom).count(), 0);
    assert_eq!(scene.axis_labels().count(), 2);
    assert_eq!(scene.legend().count(), 3);
    assert!(scene.warnings.is_empty());
}

#[test]
fn nan_values_are_skipped_with_warning() {
    let records = [Record::new("Human", "Omnivore", f64::NAN), Record::new("Lion", "Carnivore", 80.0)];
    let scene = recompute(&records, Size::new(600.0, 400.0), &ChartConfig::default());
    assert_eq!(scene.bars().map(|b| b.record).collect::<Vec<_>>(), [1]);
    assert!(matches!(scene.warnings.as_slice(), [DataIntegrityWarning::NonFiniteValue { index: 0, .. }]));
    assert_eq!(scene.warnings[0].record_index(), Some(0));
    // The NaN record still gets its category tick.
    assert_eq!(scene.ticks(AxisSide::Bottom).count(), 2);
    assert!(scene.bars().all(|b| b.rect().is_drawable()));
}

#[test]
fn values_above_domain_keep_raw_geometry_with_warning() {
    let records = [Record::new("Falcon", "Carnivore", 150.0)];
    let scene = recompute(&records, Size::new(600.0, 400.0), &ChartConfig::default());
    let bar = scene.bars().next().expect("out-of-domain bar stays in the scene");
    assert_eq!(bar.y, -100.0);
    assert_eq!(bar.height, 500.0);
    assert!(bar.height > scene.drawable.height);
    assert_eq!(scene.overflow, OverflowPolicy::Clamp);
    assert!(matches!(
        scene.warnings.as_slice(),
        [DataIntegrityWarning::OutOfDomain { index: 0, value, .. }] if *value == 150.0
    ));
}

#[test]
fn overflow_policy_decides_what_gets_painted() {
    let records = [Record::new("Falcon", "Carnivore", 150.0), Record::new("Lion", "Carnivore", 80.0)];
    let paint = |policy| {
        let config = ChartConfig { overflow: policy, ..ChartConfig::default() };
        let scene = recompute(&records, Size::new(600.0, 400.0), &config);
        assert_eq!(scene.warnings.len(), 1);
        scene.bars().map(|b| b.visible_rect(scene.overflow, scene.drawable.height)).collect::<Vec<_>>()
    };

    let clamped = paint(OverflowPolicy::Clamp);
    let falcon = clamped[0].expect("clamped bar painted");
    assert_eq!((falcon.top, falcon.bottom), (0.0, 400.0));
    assert!(clamped[1].is_some());

    let skipped = paint(OverflowPolicy::Skip);
    assert!(skipped[0].is_none());
    assert!(skipped[1].is_some(), "in-domain bars are unaffected");

    let raw = paint(OverflowPolicy::Overflow);
    assert_eq!(raw[0].map(|r| r.top), Some(-100.0));
}

#[test]
fn negative_values_never_emit_negative_heights() {
    let records = [Record::new("Mole", "Insectivore", -5.0)];
    let scene = recompute(&records, Size::new(600.0, 400.0), &ChartConfig::default());
    assert_eq!(scene.bars().count(), 0);
    assert!(scene.warnings.iter().any(|w| matches!(w, DataIntegrityWarning::NegativeHeight { .. })));
    assert!(scene.warnings.iter().any(|w| matches!(w, DataIntegrityWarning::OutOfDomain { .. })));
}

#[test]
fn duplicate_names_overlap_and_warn() {
    let records = [
        Record::new("Lion", "Carnivore", 80.0),
        Record::new("Zebra", "Herbivore", 65.0),
        Record::new("Lion", "Carnivore", 74.0),
    ];
    let scene = recompute(&records, Size::new(600.0, 400.0), &ChartConfig::default());
    let bars: Vec<_> = scene.bars().collect();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].x, bars[2].x);
    assert_ne!(bars[0].y, bars[2].y);
    assert_eq!(scene.ticks(AxisSide::Bottom).count(), 2);
    assert_eq!(
        scene.warnings,
        vec![DataIntegrityWarning::DuplicateName { name: "Lion".into(), count: 2 }]
    );
}

#[test]
fn repeated_runs_replace_rather_than_accumulate() {
    let surface = MountSurface::new(Size::new(700.0, 450.0));
    let mut mount = ChartMount::new(ChartConfig::default(), surface.clone());

    assert!(mount.set_records(sample()));
    let once = surface.snapshot().expect("scene mounted");
    assert!(mount.set_records(sample()));
    assert!(mount.run());
    let thrice = surface.snapshot().expect("scene mounted");

    assert_eq!(once.len(), thrice.len());
    assert_eq!(once, thrice);
    assert_eq!(surface.generation(), Some(3));
    assert_eq!(thrice.len(), recompute(&sample(), Size::new(700.0, 450.0), &ChartConfig::default()).len());
}

#[test]
fn resize_is_picked_up_on_next_run_only() {
    let surface = MountSurface::new(Size::new(700.0, 450.0));
    let mut mount = ChartMount::new(ChartConfig::default(), surface.clone());
    mount.set_records(sample());

    surface.set_container_size(Size::new(1000.0, 600.0));
    assert_eq!(surface.with_scene(|s| s.drawable), Some(Size::new(700.0, 450.0)));

    assert!(mount.container_resized());
    assert_eq!(surface.with_scene(|s| s.drawable), Some(Size::new(1000.0, 600.0)));
    assert_eq!(surface.with_scene(|s| s.surface_size), Some(Size::new(1050.0, 700.0)));
}
