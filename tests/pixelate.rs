//! End-to-end tests over the file-based API: decode, pixelate, encode,
//! sidecar, and batch processing.

use std::fs;
use std::path::Path;

use mosapix::api::{pixelate_file_to_path, process_directory_to_path};
use mosapix::{OutputFormat, ProcessingMode, ProcessingParams};

fn write_test_png(path: &Path, width: u32, height: u32) {
    let image = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 50) as u8, (y * 50) as u8, ((x + y) * 25) as u8])
    });
    image.save(path).unwrap();
}

#[test]
fn pixelates_a_png_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.png");
    write_test_png(&input, 4, 4);

    let params = ProcessingParams {
        square_size: 2,
        metadata: true,
        ..Default::default()
    };
    let report = pixelate_file_to_path(&input, &output, &params).unwrap();
    assert_eq!((report.width, report.height), (4, 4));
    assert_eq!(report.blocks, 4);

    let result = image::open(&output).unwrap().to_rgb8();
    // Top-left block: floor averages of the four original corner colors.
    assert_eq!(result.get_pixel(0, 0), &image::Rgb([25, 25, 25]));
    assert_eq!(result.get_pixel(1, 1), &image::Rgb([25, 25, 25]));
    // Top-right block averages x in {2,3}, y in {0,1}.
    assert_eq!(result.get_pixel(3, 0), &image::Rgb([125, 25, 75]));

    let sidecar = dir.path().join("output.png.json");
    assert!(sidecar.exists());
    let metadata: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&sidecar).unwrap()).unwrap();
    assert_eq!(metadata["square_size"], 2);
    assert_eq!(metadata["blocks"], 4);
    assert_eq!(metadata["mode"], "Sequential");
}

#[test]
fn concurrent_output_matches_sequential_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    write_test_png(&input, 23, 17);

    let sequential_out = dir.path().join("sequential.png");
    let concurrent_out = dir.path().join("concurrent.png");

    let mut params = ProcessingParams {
        square_size: 5,
        ..Default::default()
    };
    pixelate_file_to_path(&input, &sequential_out, &params).unwrap();

    params.mode = ProcessingMode::Concurrent;
    params.workers = Some(3);
    pixelate_file_to_path(&input, &concurrent_out, &params).unwrap();

    let sequential = image::open(&sequential_out).unwrap().to_rgb8();
    let concurrent = image::open(&concurrent_out).unwrap().to_rgb8();
    assert_eq!(sequential.as_raw(), concurrent.as_raw());
}

#[test]
fn writes_jpeg_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.jpg");
    write_test_png(&input, 16, 12);

    let params = ProcessingParams {
        square_size: 4,
        format: OutputFormat::JPEG,
        ..Default::default()
    };
    pixelate_file_to_path(&input, &output, &params).unwrap();

    let result = image::open(&output).unwrap().to_rgb8();
    assert_eq!(result.dimensions(), (16, 12));
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = pixelate_file_to_path(
        &dir.path().join("does-not-exist.png"),
        &dir.path().join("out.png"),
        &ProcessingParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, mosapix::Error::Io(_)));
}

#[test]
fn zero_square_size_is_rejected_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    write_test_png(&input, 4, 4);

    let params = ProcessingParams {
        square_size: 0,
        ..Default::default()
    };
    let err = pixelate_file_to_path(&input, &dir.path().join("out.png"), &params).unwrap_err();
    assert!(matches!(err, mosapix::Error::InvalidArgument { .. }));
}

#[test]
fn batch_processes_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("in");
    let output_dir = dir.path().join("out");
    fs::create_dir(&input_dir).unwrap();

    write_test_png(&input_dir.join("a.png"), 8, 8);
    write_test_png(&input_dir.join("b.png"), 6, 10);
    fs::write(input_dir.join("notes.txt"), "not an image").unwrap();

    let params = ProcessingParams {
        square_size: 4,
        ..Default::default()
    };
    let report = process_directory_to_path(&input_dir, &output_dir, &params, true).unwrap();

    assert_eq!(report.processed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);
    assert!(output_dir.join("a.png").exists());
    assert!(output_dir.join("b.png").exists());
    assert!(!output_dir.join("notes.png").exists());
}
