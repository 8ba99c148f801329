use std::path::{Path, PathBuf};

use ecgscope::data::error::UploadError;
use ecgscope::data::upload::{first_accepted, is_supported_image, ACCEPTED_EXTENSIONS};

#[test]
fn accepts_supported_extensions_any_case() {
    for name in ["scan.png", "scan.jpg", "scan.jpeg", "SCAN.PNG", "scan.JpEg"] {
        assert!(is_supported_image(Path::new(name)), "should accept {name}");
    }
}

#[test]
fn rejects_everything_else() {
    for name in ["scan.pdf", "scan.gif", "scan.bmp", "scan", "scan.png.txt"] {
        assert!(!is_supported_image(Path::new(name)), "should reject {name}");
    }
}

#[test]
fn accepted_extensions_cover_the_three_image_types() {
    assert_eq!(ACCEPTED_EXTENSIONS, ["png", "jpg", "jpeg"]);
}

#[test]
fn drop_selects_first_supported_file() {
    let paths = vec![
        PathBuf::from("notes.txt"),
        PathBuf::from("ecg.jpg"),
        PathBuf::from("other.png"),
    ];
    assert_eq!(first_accepted(&paths).unwrap(), PathBuf::from("ecg.jpg"));
}

#[test]
fn unsupported_drop_is_an_error() {
    let paths = vec![PathBuf::from("report.pdf")];
    match first_accepted(&paths) {
        Err(UploadError::UnsupportedType { path }) => {
            assert_eq!(path, PathBuf::from("report.pdf"));
        }
        other => panic!("expected UnsupportedType, got {other:?}"),
    }
}

#[test]
fn empty_drop_is_an_error() {
    assert!(matches!(first_accepted(&[]), Err(UploadError::Empty)));
}
