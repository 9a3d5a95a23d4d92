use chromasort::{
    locate_largest_foreground, ChromaSortError, CropConfig, CropOutcome, Cropper, OwnedRgb,
    RgbView,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds an all-black image with a solid `color` rectangle painted on it.
fn image_with_rect(
    width: usize,
    height: usize,
    rect: (usize, usize, usize, usize),
    color: [u8; 3],
) -> OwnedRgb {
    let mut data = vec![0u8; width * height * 3];
    let (rx, ry, rw, rh) = rect;
    for y in ry..ry + rh {
        for x in rx..rx + rw {
            let idx = (y * width + x) * 3;
            data[idx..idx + 3].copy_from_slice(&color);
        }
    }
    OwnedRgb::new(data, width, height).unwrap()
}

fn random_image(rng: &mut StdRng, width: usize, height: usize) -> OwnedRgb {
    let mut data = vec![0u8; width * height * 3];
    for pixel in data.chunks_exact_mut(3) {
        // Roughly half the pixels stay pure black background.
        if rng.random_range(0..10) >= 5 {
            pixel[0] = rng.random_range(1..=255);
            pixel[1] = rng.random_range(0..=255);
            pixel[2] = rng.random_range(0..=255);
        }
    }
    OwnedRgb::new(data, width, height).unwrap()
}

#[test]
fn trim_converges_to_the_bright_core() {
    // 3-pixel black padding on every side of a 6x4 bright core.
    let image = image_with_rect(12, 10, (3, 3, 6, 4), [200, 180, 160]);
    let cropper = Cropper::new(CropConfig::new(1, (2, 2), 0.0, 1).unwrap());

    let trimmed = cropper.trim_borders(image.view()).unwrap();
    assert_eq!((trimmed.width(), trimmed.height()), (6, 4));
    assert!(trimmed.data().chunks_exact(3).all(|px| px == &[200, 180, 160]));
}

#[test]
fn all_black_image_trims_to_the_minimum_span() {
    let image = OwnedRgb::new(vec![0u8; 20 * 20 * 3], 20, 20).unwrap();
    let cropper = Cropper::new(CropConfig::new(1, (8, 6), 0.0, 1).unwrap());

    let trimmed = cropper.trim_borders(image.view()).unwrap();
    assert_eq!((trimmed.width(), trimmed.height()), (8, 6));
}

#[test]
fn trim_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let cropper = Cropper::new(CropConfig::new(1, (4, 4), 0.1, 1).unwrap());

    for _ in 0..32 {
        let width = rng.random_range(16..40);
        let height = rng.random_range(16..40);
        let image = random_image(&mut rng, width, height);

        let once = cropper.trim_borders(image.view()).unwrap();
        let twice = cropper.trim_borders(once.view()).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn trim_never_undercuts_the_minimum_span() {
    let mut rng = StdRng::seed_from_u64(0xc0ffee);
    let min_span = (8, 6);
    let cropper = Cropper::new(CropConfig::new(2, min_span, 0.0, 1).unwrap());

    for _ in 0..32 {
        let width = rng.random_range(min_span.0..48);
        let height = rng.random_range(min_span.1..48);
        let image = random_image(&mut rng, width, height);

        let trimmed = cropper.trim_borders(image.view()).unwrap();
        assert!(trimmed.width() >= min_span.0);
        assert!(trimmed.height() >= min_span.1);
    }
}

#[test]
fn foreground_region_stays_inside_random_images() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..32 {
        let width = rng.random_range(8..32);
        let height = rng.random_range(8..32);
        let image = random_image(&mut rng, width, height);
        let gray = image.view().luminance();

        match locate_largest_foreground(gray.view()) {
            Ok(region) => {
                assert!(region.x + region.width <= width);
                assert!(region.y + region.height <= height);
                assert!(region.area() <= width * height);
            }
            Err(err) => assert_eq!(err, ChromaSortError::NoForegroundFound),
        }
    }
}

#[test]
fn crop_propagates_no_foreground_for_black_images() {
    let image = OwnedRgb::new(vec![0u8; 24 * 24 * 3], 24, 24).unwrap();
    let cropper = Cropper::new(CropConfig::default());

    let err = cropper.crop(image.view()).unwrap_err();
    assert_eq!(err, ChromaSortError::NoForegroundFound);
}

#[test]
fn crop_rejects_only_when_both_sides_are_small() {
    let cropper = Cropper::new(CropConfig::new(1, (4, 4), 0.0, 32).unwrap());

    // 10x10 subject: both sides below 32.
    let small = image_with_rect(100, 100, (40, 40, 10, 10), [180, 180, 180]);
    let outcome = cropper.crop(small.view()).unwrap();
    assert_eq!(
        outcome,
        CropOutcome::Rejected {
            width: 10,
            height: 10,
        }
    );

    // 10x50 subject: one side clears the threshold, so it is kept.
    let tall = image_with_rect(100, 100, (40, 20, 10, 50), [180, 180, 180]);
    match cropper.crop(tall.view()).unwrap() {
        CropOutcome::Cropped(img) => {
            assert_eq!((img.width(), img.height()), (10, 50));
        }
        other => panic!("expected a cropped subject, got {other:?}"),
    }
}

#[test]
fn crop_returns_the_subject_with_clean_borders() {
    let image = image_with_rect(60, 60, (10, 20, 40, 30), [90, 120, 150]);
    let cropper = Cropper::new(CropConfig::new(1, (4, 4), 0.0, 16).unwrap());

    match cropper.crop(image.view()).unwrap() {
        CropOutcome::Cropped(img) => {
            assert_eq!((img.width(), img.height()), (40, 30));
            assert_eq!(img.view().pixel(0, 0), Some([90, 120, 150]));
        }
        other => panic!("expected a cropped subject, got {other:?}"),
    }
}

#[test]
fn crop_config_rejects_invalid_parameters() {
    let err = CropConfig::new(0, (4, 4), 0.0, 1).unwrap_err();
    assert_eq!(
        err,
        ChromaSortError::InvalidConfig {
            name: "step",
            reason: "must be positive",
        }
    );

    assert!(CropConfig::new(1, (0, 4), 0.0, 1).is_err());
    assert!(CropConfig::new(1, (4, 4), 1.5, 1).is_err());
    assert!(CropConfig::new(1, (4, 4), -0.1, 1).is_err());
    assert!(CropConfig::new(1, (4, 4), 0.0, 0).is_err());
}

#[test]
fn view_errors_match_declared_geometry() {
    let data = [0u8; 12];
    let err = RgbView::from_slice(&data, 0, 2).unwrap_err();
    assert_eq!(
        err,
        ChromaSortError::InvalidDimensions {
            width: 0,
            height: 2,
        }
    );

    let err = RgbView::from_slice(&data, 4, 4).unwrap_err();
    assert_eq!(err, ChromaSortError::BufferTooSmall { needed: 48, got: 12 });

    let view = RgbView::from_slice(&data, 2, 2).unwrap();
    let err = view.roi(1, 1, 2, 2).unwrap_err();
    assert_eq!(
        err,
        ChromaSortError::RegionOutOfBounds {
            x: 1,
            y: 1,
            width: 2,
            height: 2,
            img_width: 2,
            img_height: 2,
        }
    );
}
