use gray_core::{PackedImage, PixelStore};
use gray_io::{pgm, read, write, Format, IoError};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn read_feep_fixture() {
    let image = read(fixture_path("feep.pgm")).expect("read pgm");
    assert_eq!(image.width(), 24);
    assert_eq!(image.height(), 7);
    assert_eq!(image.max_value(), 15);
    assert_eq!(image.name(), "feep.pgm");
    assert_eq!(image.get_point(1, 1).unwrap(), 3);
    assert_eq!(image.get_point(1, 7).unwrap(), 7);
    assert_eq!(image.get_point(3, 13).unwrap(), 11);
    assert_eq!(image.get_point(2, 22).unwrap(), 15);
    assert_eq!(image.row(0).unwrap(), vec![0; 24]);
    assert_eq!(image.row(6).unwrap(), vec![0; 24]);
}

#[test]
fn read_names_image_after_file_stem() {
    let image = read(fixture_path("nameless.pgm")).expect("read pgm");
    assert_eq!(image.name(), "nameless");
    assert_eq!(image.row(2).unwrap(), vec![7, 8, 9]);
}

#[test]
fn read_truncated_fixture() {
    let err = read(fixture_path("truncated.pgm")).unwrap_err();
    assert!(matches!(err, IoError::Truncated { expected: 8, got: 3 }));
}

#[test]
fn read_missing_file() {
    let err = read(fixture_path("does-not-exist.pgm")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}

#[test]
fn roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diag.pgm");

    let mut image = PackedImage::new("diagonal", 10, 10, 255).unwrap();
    for i in 0..10 {
        image.set_point(i, i, 255).unwrap();
    }
    write(&path, &image).expect("write pgm");

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("P2 10 10 255\n# diagonal\n255 0 0 0 0 0 0 0 0 0\n"));

    let loaded = read(&path).expect("read pgm");
    assert_eq!(loaded, image);
}

#[test]
fn copy_preserves_contents() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("copy.pgm");

    let src = pgm::read(fixture_path("feep.pgm")).unwrap();
    pgm::write(&dst, &src).unwrap();
    let copy = pgm::read(&dst).unwrap();

    assert_eq!(copy, src);
    assert_eq!(
        std::fs::read(&dst).unwrap(),
        pgm::write_to_memory(&src).unwrap()
    );
}

#[test]
fn format_detection_on_files() {
    let dir = tempfile::tempdir().unwrap();

    // Magic bytes win over a misleading extension
    let odd = dir.path().join("image.dat");
    std::fs::write(&odd, b"P2 1 1 255\n7\n").unwrap();
    assert_eq!(Format::detect(&odd).unwrap(), Format::Pgm);
    assert_eq!(read(&odd).unwrap().get_point(0, 0).unwrap(), 7);

    // A leading comment line does not hide the magic
    let commented = dir.path().join("commented.dat");
    std::fs::write(&commented, b"# made by hand\nP2 1 1 255\n7\n").unwrap();
    assert_eq!(Format::detect(&commented).unwrap(), Format::Pgm);
    let loaded = read(&commented).unwrap();
    assert_eq!(loaded.name(), "made by hand");
    assert_eq!(loaded.get_point(0, 0).unwrap(), 7);

    let binary = dir.path().join("binary.pgm");
    std::fs::write(&binary, b"P5\n1 1\n255\n\x07").unwrap();
    assert!(matches!(read(&binary), Err(IoError::UnsupportedFormat(_))));

    let image = PackedImage::new("x", 1, 1, 255).unwrap();
    let err = write(dir.path().join("out.png"), &image).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(ref ext) if ext == "png"));
}
