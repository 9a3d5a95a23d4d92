use chromasort::{classify, classify_top_k, Catalog, CatalogEntry, Classification, Swatch};

fn catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new("Red", 255, 0, 0),
        CatalogEntry::new("Blue", 0, 0, 255),
        CatalogEntry::new("light gray", 192, 192, 192),
        CatalogEntry::new("dark gray", 96, 96, 96),
    ])
    .unwrap()
}

#[test]
fn achromatic_shortcuts_name_fixed_categories() {
    let catalog = catalog();
    assert_eq!(
        classify(&[Swatch::new(10, 10, 10)], &catalog),
        Classification::Category("Black")
    );
    assert_eq!(
        classify(&[Swatch::new(250, 250, 250)], &catalog),
        Classification::Category("White")
    );
    assert_eq!(
        classify(&[Swatch::new(100, 100, 100)], &catalog),
        Classification::Category("DarkGray")
    );
    assert_eq!(
        classify(&[Swatch::new(200, 200, 200)], &catalog),
        Classification::Category("LightGray")
    );
}

#[test]
fn nearest_neighbor_resolves_chromatic_swatches() {
    // Distance to Red is about 55.7, to Blue about 286.4.
    let catalog = catalog();
    assert_eq!(
        classify(&[Swatch::new(200, 10, 10)], &catalog),
        Classification::Category("Red")
    );
}

#[test]
fn empty_swatch_input_is_no_match() {
    let catalog = catalog();
    let result = classify(&[], &catalog);
    assert!(result.is_no_match());
    assert_eq!(result.category(), None);
}

#[test]
fn gray_range_with_spread_channels_falls_through_to_search() {
    // Channels sit inside the dark-gray numeric range, but the pairwise
    // spread reaches 10, so no band matches and the nearest catalog entry
    // wins instead.
    let catalog = catalog();
    assert_eq!(
        classify(&[Swatch::new(70, 80, 90)], &catalog),
        Classification::Category("Blue")
    );
}

#[test]
fn reserved_rows_never_win_the_search() {
    let catalog = Catalog::new(vec![
        CatalogEntry::new("Olive", 128, 128, 0),
        CatalogEntry::new("Navy", 0, 0, 128),
        CatalogEntry::new("light gray", 192, 192, 192),
        CatalogEntry::new("dark gray", 96, 96, 96),
    ])
    .unwrap();

    // (150, 150, 150) sits between the gray bands and is numerically
    // closest to the reserved light-gray row; classification must pick a
    // searchable entry.
    assert_eq!(
        classify(&[Swatch::new(150, 150, 150)], &catalog),
        Classification::Category("Olive")
    );
}

#[test]
fn top_k_zero_inspects_nothing() {
    let catalog = catalog();
    assert_eq!(
        classify_top_k(&[Swatch::new(200, 10, 10)], &catalog, 0),
        Classification::NoMatch
    );
}

#[test]
fn only_the_most_prevalent_swatch_decides_by_default() {
    let catalog = catalog();
    let swatches = [Swatch::new(240, 40, 40), Swatch::new(10, 10, 10)];
    // The second (black) swatch is never inspected with the default top_k.
    assert_eq!(
        classify(&swatches, &catalog),
        Classification::Category("Red")
    );
}
