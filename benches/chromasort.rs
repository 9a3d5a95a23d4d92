use chromasort::{classify, Catalog, CatalogEntry, CropConfig, Cropper, OwnedRgb, Swatch};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Black-padded image with a textured subject rectangle.
fn make_padded_image(width: usize, height: usize, pad: usize) -> OwnedRgb {
    let mut data = vec![0u8; width * height * 3];
    for y in pad..height - pad {
        for x in pad..width - pad {
            let idx = (y * width + x) * 3;
            // Keep every channel nonzero so the subject never reads as
            // background in the luminance projection.
            data[idx] = (((x * 13) ^ (y * 7)) & 0xFF) as u8 | 0x40;
            data[idx + 1] = (((x * 5) ^ (y * 11)) & 0xFF) as u8 | 0x40;
            data[idx + 2] = (((x * 3) ^ (y * 17)) & 0xFF) as u8 | 0x40;
        }
    }
    OwnedRgb::new(data, width, height).unwrap()
}

fn make_catalog(searchable: usize) -> Catalog {
    let mut entries: Vec<CatalogEntry> = (0..searchable)
        .map(|i| {
            let base = (i * 37 % 256) as u8;
            CatalogEntry::new(
                format!("shade-{i}"),
                base,
                base.wrapping_mul(3),
                base.wrapping_add(91),
            )
        })
        .collect();
    entries.push(CatalogEntry::new("light gray", 192, 192, 192));
    entries.push(CatalogEntry::new("dark gray", 96, 96, 96));
    Catalog::new(entries).unwrap()
}

fn bench_crop(c: &mut Criterion) {
    let image = make_padded_image(512, 512, 64);
    let cropper = Cropper::new(CropConfig::new(1, (50, 50), 0.0, 32).unwrap());

    c.bench_function("crop_512_padded", |b| {
        b.iter(|| black_box(cropper.crop(image.view()).unwrap()));
    });

    c.bench_function("trim_borders_512_padded", |b| {
        b.iter(|| black_box(cropper.trim_borders(image.view()).unwrap()));
    });

    let coarse = Cropper::new(CropConfig::new(4, (50, 50), 0.05, 32).unwrap());
    c.bench_function("trim_borders_512_step4", |b| {
        b.iter(|| black_box(coarse.trim_borders(image.view()).unwrap()));
    });
}

fn bench_classify(c: &mut Criterion) {
    let catalog = make_catalog(160);
    let swatches = [Swatch::new(201, 77, 140)];

    c.bench_function("classify_160_entry_catalog", |b| {
        b.iter(|| black_box(classify(black_box(&swatches), &catalog)));
    });
}

criterion_group!(benches, bench_crop, bench_classify);
criterion_main!(benches);
