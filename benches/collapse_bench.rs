//! Benchmarks for the sidebar collapser

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sidenav_autoclose::prelude::*;

fn create_sidebar(sections: usize, leaves_per_section: usize) -> Vec<ItemSource> {
    let mut sources = Vec::with_capacity(sections * (leaves_per_section + 1));
    for section in 0..sections {
        sources.push(ItemSource::header(format!("/docs/#section-{}", section)));
        for leaf in 0..leaves_per_section {
            sources.push(ItemSource::leaf(format!("/docs/#section-{}-{}", section, leaf)));
        }
    }
    sources
}

fn bench_find_header(c: &mut Criterion) {
    let nav = Collapser::new(&create_sidebar(50, 20));
    let last = "#section-49-19";

    c.bench_function("find_header_owning_last", |b| {
        b.iter(|| nav.find_header_owning(black_box(last)))
    });
}

fn bench_scroll_sync(c: &mut Criterion) {
    let mut nav = Collapser::new(&create_sidebar(50, 20));
    let mut surface = RecordingSurface::new();
    nav.start(None);
    nav.flush(&mut surface);

    let mut active = 0;
    c.bench_function("active_changed_and_flush", |b| {
        b.iter(|| {
            active = (active + 37) % nav.len();
            nav.active_changed(black_box(Some(active)));
            nav.flush(&mut surface);
            surface.take();
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let sources = create_sidebar(50, 20);

    c.bench_function("parse_sidebar_1050", |b| {
        b.iter(|| Collapser::new(black_box(&sources)))
    });
}

criterion_group!(benches, bench_find_header, bench_scroll_sync, bench_parse);
criterion_main!(benches);
