// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{
    self, Config, ThemeMode, HERO_INTERVAL, HERO_SETTLE, TESTIMONIAL_INTERVAL,
    TESTIMONIAL_RESUME_GRACE,
};
use iced_folio::cycler::{Cycler, CyclerConfig, Direction, Effect};
use iced_folio::portfolio::{Filter, Portfolio};
use iced_folio::testimonials;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::tempdir;

use iced::Point;

/// The scanner only looks at extensions, so any bytes will do.
fn write_image(path: &Path) {
    fs::create_dir_all(path.parent().expect("image path has a parent"))
        .expect("failed to create image directory");
    fs::write(path, b"not-a-real-png").expect("failed to write image");
}

fn hero_cycler(now: Instant) -> Cycler {
    let mut cycler = Cycler::new(
        5,
        CyclerConfig {
            interval: Some(HERO_INTERVAL),
            settle: HERO_SETTLE,
            ..CyclerConfig::default()
        },
    );
    cycler.start_auto_advance(now);
    cycler
}

#[test]
fn hero_slideshow_full_cycle() {
    let t0 = Instant::now();
    let mut cycler = hero_cycler(t0);

    // Five intervals walk all the way around.
    let mut now = t0;
    for expected in [1, 2, 3, 4, 0] {
        now += HERO_INTERVAL;
        match cycler.tick(now) {
            Effect::Show { index, direction, .. } => {
                assert_eq!(index, expected);
                assert!(matches!(direction, Direction::Next));
            }
            Effect::None => panic!("tick at an elapsed deadline must advance"),
        }
    }
    assert_eq!(cycler.current(), 0);
}

#[test]
fn manual_navigation_during_settle_is_ignored() {
    let t0 = Instant::now();
    let mut cycler = hero_cycler(t0);

    cycler.next(t0);
    assert_eq!(cycler.current(), 1);

    // Inside the settle window nothing moves; just after it, it does.
    assert!(matches!(
        cycler.next(t0 + HERO_SETTLE - Duration::from_millis(1)),
        Effect::None
    ));
    assert_eq!(cycler.current(), 1);
    cycler.next(t0 + HERO_SETTLE);
    assert_eq!(cycler.current(), 2);
}

#[test]
fn timer_advance_then_jump_respects_settle() {
    let t0 = Instant::now();
    let mut cycler = hero_cycler(t0);

    let effect = cycler.tick(t0 + HERO_INTERVAL);
    assert!(matches!(effect, Effect::Show { index: 1, .. }));

    // A jump issued before the timer-driven transition settles is dropped.
    let during_settle = t0 + HERO_INTERVAL + Duration::from_millis(200);
    assert!(matches!(cycler.go_to(3, during_settle), Effect::None));
    assert_eq!(cycler.current(), 1);

    let after_settle = t0 + HERO_INTERVAL + HERO_SETTLE;
    assert!(matches!(
        cycler.go_to(3, after_settle),
        Effect::Show { index: 3, .. }
    ));
    assert_eq!(cycler.current(), 3);
}

#[test]
fn swipe_then_grace_then_auto_advance() {
    let t0 = Instant::now();
    let mut cycler = Cycler::new(
        3,
        CyclerConfig {
            interval: Some(TESTIMONIAL_INTERVAL),
            resume_grace: TESTIMONIAL_RESUME_GRACE,
            ..CyclerConfig::default()
        },
    );
    cycler.start_auto_advance(t0);

    cycler.gesture_start(Point::new(300.0, 100.0));
    cycler.gesture_move(Point::new(200.0, 100.0));
    let effect = cycler.gesture_end(Point::new(200.0, 100.0), t0);
    assert!(matches!(effect, Effect::Show { index: 1, .. }));

    // The grace delay pushes the next fire past one plain interval.
    assert!(matches!(cycler.tick(t0 + TESTIMONIAL_INTERVAL), Effect::None));
    let effect = cycler.tick(t0 + TESTIMONIAL_INTERVAL + TESTIMONIAL_RESUME_GRACE);
    assert!(matches!(effect, Effect::Show { index: 2, .. }));
}

#[test]
fn scan_filter_and_lightbox_flow() {
    let dir = tempdir().expect("failed to create temp dir");
    let root = dir.path();

    write_image(&root.join("hero/opening.jpg"));
    write_image(&root.join("landscape/dunes.jpg"));
    write_image(&root.join("landscape/ridge.png"));
    write_image(&root.join("portrait/anna.jpg"));
    fs::write(root.join("landscape/notes.txt"), "ignored").expect("failed to write file");

    let portfolio = Portfolio::scan(root).expect("scan should succeed");

    assert_eq!(portfolio.hero_slides().len(), 1);
    assert_eq!(portfolio.categories(), ["landscape", "portrait"]);
    assert_eq!(portfolio.items().len(), 3);

    let filtered = portfolio.visible_items(&Filter::Category("landscape".to_string()));
    assert_eq!(filtered.len(), 2);

    // Lightbox navigation over the filtered set wraps within it.
    let images: Vec<PathBuf> = filtered.iter().map(|item| item.path.clone()).collect();
    let mut cycler = Cycler::new(images.len(), CyclerConfig::default());
    let now = Instant::now();
    cycler.prev(now);
    assert_eq!(cycler.current(), images.len() - 1);
    cycler.next(now);
    assert_eq!(cycler.current(), 0);
}

#[test]
fn config_round_trip_through_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        portfolio_dir: Some(PathBuf::from("/photos/studio")),
        theme_mode: ThemeMode::Light,
        auto_advance: Some(false),
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded, saved);
    assert!(!loaded.auto_advance_enabled());
}

#[test]
fn testimonials_load_from_portfolio_dir() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("testimonials.toml"),
        r#"
[[testimonials]]
author = "A. Client"
role = "Wedding, 2025"
quote = "Wonderful photos."
rating = 5

[[testimonials]]
author = "B. Client"
quote = "Would book again."
rating = 9
"#,
    )
    .expect("failed to write testimonials");

    let items = testimonials::load(dir.path()).expect("load should succeed");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].role, "Wedding, 2025");
    // Out-of-range ratings clamp to the star scale.
    assert_eq!(items[1].rating(), 5);

    let empty_dir = tempdir().expect("failed to create temp dir");
    let items = testimonials::load(empty_dir.path()).expect("missing file is not an error");
    assert!(items.is_empty());
}
