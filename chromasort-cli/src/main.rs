use chromasort::io::{load_rgb_image, to_rgb_image};
use chromasort::{
    classify, locate_largest_foreground, AchromaticBand, Catalog, ChromaSortError,
    ChromaSortResult, Classification, CropConfig, CropOutcome, Cropper, PaletteExtractor, RgbView,
    Swatch,
};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// File extensions picked up from the input directory (case-insensitive).
const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Sort photographs into color category directories")]
struct Cli {
    /// Directory containing images to classify (not read recursively).
    input_dir: PathBuf,
    /// Directory receiving one subdirectory per color category.
    output_dir: PathBuf,
    /// Path to the `name,r,g,b` reference catalog.
    #[arg(short, long, value_name = "FILE")]
    catalog: PathBuf,
    /// Directory holding unmasked originals to copy alongside the masked files.
    #[arg(long, value_name = "DIR")]
    orig_dir: Option<PathBuf>,
    /// Delete source files after analysis.
    #[arg(long)]
    delete: bool,
    /// Crop strategy applied before color extraction.
    #[arg(long, value_enum, default_value_t = CropMode::Twoside)]
    crop: CropMode,
    /// Minimum subject side length to accept an image.
    #[arg(long, default_value_t = 32)]
    min_side_length: usize,
    /// Square size images are resized to before palette extraction.
    #[arg(long, default_value_t = 100)]
    image_resize: u32,
    /// Write a JSON report of per-file outcomes.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CropMode {
    /// Foreground bounding plus iterative border trimming.
    Twoside,
    /// Foreground bounding only.
    Fitted,
    /// No cropping.
    Off,
}

#[derive(Debug, Serialize)]
struct FileRecord {
    file: String,
    category: Option<String>,
    skipped: Option<String>,
}

/// Outcome of one file before any copying happens.
enum Disposition {
    Sorted(String),
    Skipped(&'static str),
}

/// Dominant-color extractor over a quantized RGB histogram.
///
/// Resizes the subject to a small square first (smaller input is faster and
/// biases the histogram toward perceptually dominant colors), buckets
/// non-black pixels into 4-bit-per-channel bins, and reports the mean color
/// of the most populated bins, largest first.
struct HistogramExtractor {
    resize: u32,
    max_swatches: usize,
}

impl HistogramExtractor {
    fn new(resize: u32) -> Self {
        Self {
            resize,
            max_swatches: 4,
        }
    }
}

impl PaletteExtractor for HistogramExtractor {
    fn extract(&self, image: RgbView<'_>) -> Vec<Swatch> {
        let Ok(buffer) = to_rgb_image(&image.to_owned_rgb()) else {
            return Vec::new();
        };
        let resized = image::imageops::resize(
            &buffer,
            self.resize,
            self.resize,
            image::imageops::FilterType::Triangle,
        );

        let mut bins: HashMap<[u8; 3], (u64, [u64; 3])> = HashMap::new();
        for px in resized.pixels() {
            let [r, g, b] = px.0;
            if r == 0 && g == 0 && b == 0 {
                continue;
            }
            let (count, sums) = bins.entry([r >> 4, g >> 4, b >> 4]).or_default();
            *count += 1;
            sums[0] += u64::from(r);
            sums[1] += u64::from(g);
            sums[2] += u64::from(b);
        }

        let mut ranked: Vec<_> = bins.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(self.max_swatches)
            .map(|(_, (count, sums))| {
                Swatch::new(
                    (sums[0] / count) as u8,
                    (sums[1] / count) as u8,
                    (sums[2] / count) as u8,
                )
            })
            .collect()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("chromasort=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    let catalog_text = fs::read_to_string(&cli.catalog)?;
    let catalog = Catalog::from_csv_str(&catalog_text)?;

    let cropper = Cropper::new(CropConfig::new(1, (50, 50), 0.0, cli.min_side_length)?);
    let extractor = HistogramExtractor::new(cli.image_resize);

    create_category_dirs(&cli, &catalog)?;

    let images = collect_images(&cli.input_dir)?;
    let mut records = Vec::with_capacity(images.len());
    let mut sorted = 0usize;

    for path in &images {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let record = match process_file(path, cli.crop, &cropper, &extractor, &catalog) {
            Ok(Disposition::Sorted(category)) => {
                place_file(path, &file, &category, &cli)?;
                sorted += 1;
                tracing::info!(file = %file, category = %category, "sorted");
                FileRecord {
                    file,
                    category: Some(category),
                    skipped: None,
                }
            }
            Ok(Disposition::Skipped(reason)) => {
                tracing::info!(file = %file, reason = reason, "skipped");
                FileRecord {
                    file,
                    category: None,
                    skipped: Some(reason.to_string()),
                }
            }
            Err(err) => {
                tracing::warn!(file = %file, error = %err, "failed");
                FileRecord {
                    file,
                    category: None,
                    skipped: Some(err.to_string()),
                }
            }
        };
        records.push(record);

        if cli.delete {
            fs::remove_file(path)?;
        }
    }

    println!("sorted {sorted} of {} images", images.len());
    if let Some(report_path) = &cli.report {
        fs::write(report_path, serde_json::to_string_pretty(&records)?)?;
    }

    Ok(())
}

fn process_file(
    path: &Path,
    mode: CropMode,
    cropper: &Cropper,
    extractor: &HistogramExtractor,
    catalog: &Catalog,
) -> ChromaSortResult<Disposition> {
    let image = load_rgb_image(path)?;

    let outcome = match mode {
        CropMode::Twoside => cropper.crop(image.view()),
        CropMode::Fitted => fitted_crop(cropper, image.view()),
        CropMode::Off => Ok(CropOutcome::Cropped(image)),
    };
    let subject = match outcome {
        Ok(CropOutcome::Cropped(img)) => img,
        Ok(CropOutcome::Rejected { .. }) => return Ok(Disposition::Skipped("subject too small")),
        Err(ChromaSortError::NoForegroundFound) => {
            return Ok(Disposition::Skipped("no foreground"));
        }
        Err(err) => return Err(err),
    };

    let swatches = extractor.extract(subject.view());
    match classify(&swatches, catalog) {
        Classification::Category(name) => Ok(Disposition::Sorted(name.to_string())),
        Classification::NoMatch => Ok(Disposition::Skipped("no swatches extracted")),
    }
}

/// Crops to the foreground bounding region without border trimming.
fn fitted_crop(cropper: &Cropper, image: RgbView<'_>) -> ChromaSortResult<CropOutcome> {
    let gray = image.luminance();
    let region = locate_largest_foreground(gray.view())?;
    let min_side = cropper.config().min_side_length();
    if region.width < min_side && region.height < min_side {
        return Ok(CropOutcome::Rejected {
            width: region.width,
            height: region.height,
        });
    }
    let subject = image.roi(region.x, region.y, region.width, region.height)?;
    Ok(CropOutcome::Cropped(subject.to_owned_rgb()))
}

/// Creates one directory per assignable category, reserved catalog rows
/// included, plus the parallel tree for originals when requested.
fn create_category_dirs(cli: &Cli, catalog: &Catalog) -> std::io::Result<()> {
    let band_names = [
        AchromaticBand::Black,
        AchromaticBand::White,
        AchromaticBand::LightGray,
        AchromaticBand::DarkGray,
    ]
    .map(AchromaticBand::name);

    let names = catalog
        .entries()
        .iter()
        .map(|entry| entry.name.as_str())
        .chain(band_names);

    for name in names {
        fs::create_dir_all(cli.output_dir.join(name))?;
        if cli.orig_dir.is_some() {
            fs::create_dir_all(cli.output_dir.join("originals").join(name))?;
        }
    }
    Ok(())
}

fn collect_images(input_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));
        if accepted {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

fn place_file(path: &Path, file: &str, category: &str, cli: &Cli) -> std::io::Result<()> {
    fs::copy(path, cli.output_dir.join(category).join(file))?;

    if let Some(orig_dir) = &cli.orig_dir {
        let original = orig_dir.join(file);
        let dest = cli.output_dir.join("originals").join(category).join(file);
        if let Err(err) = fs::copy(&original, &dest) {
            // A missing original should not stop the batch.
            tracing::warn!(file = %file, error = %err, "original not copied");
        }
    }
    Ok(())
}
