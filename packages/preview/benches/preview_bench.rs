use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagesmith_model::{WidgetId, WidgetInstance, WidgetType};
use pagesmith_preview::{render_preview, Viewport};
use pagesmith_render::HtmlOptions;

fn page(repeat: usize) -> Vec<WidgetInstance> {
    (0..repeat)
        .flat_map(|r| {
            WidgetType::ALL
                .iter()
                .enumerate()
                .map(move |(i, t)| WidgetInstance::new(WidgetId::new(format!("w{}", r * 8 + i + 1)), *t))
        })
        .collect()
}

fn preview_full_page(c: &mut Criterion) {
    let widgets = page(1);

    c.bench_function("preview_full_page", |b| {
        b.iter(|| render_preview(black_box(&widgets), Viewport::Tablet))
    });
}

fn preview_large_page_to_html(c: &mut Criterion) {
    let widgets = page(25);
    let options = HtmlOptions::default();

    c.bench_function("preview_large_page_to_html", |b| {
        b.iter(|| render_preview(black_box(&widgets), Viewport::Desktop).to_html(&options))
    });
}

criterion_group!(benches, preview_full_page, preview_large_page_to_html);
criterion_main!(benches);
