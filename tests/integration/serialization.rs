//! Persistence round trips over extracted models.

use declex_foundation::{ErrorKind, Language};
use declex_model::codec;
use declex_normalize::extract;

const SOURCE: &str = r#"
class Car {
    var brand: String
    var year: Int

    init(brand: String, year: Int) {
        self.brand = brand
        self.year = year
    }

    func startEngine() {
        print("vroom")
    }
}
"#;

#[test]
fn extracted_model_round_trips_through_bytes() {
    let model = extract(Language::Swift, SOURCE).unwrap();
    let bytes = codec::to_bytes(&model).unwrap();
    let restored = codec::from_bytes(&bytes).unwrap();
    assert_eq!(model, restored);
}

#[test]
fn bodies_survive_the_round_trip() {
    let model = extract(Language::Swift, SOURCE).unwrap();
    let restored = codec::from_bytes(&codec::to_bytes(&model).unwrap()).unwrap();
    let car = restored.find("Car").unwrap();
    assert!(car.method("startEngine").unwrap().body.contains("vroom"));
    assert!(car.constructors[0].body.contains("self.brand = brand"));
}

#[test]
fn file_round_trip() {
    let model = extract(Language::Swift, SOURCE).unwrap();
    let path = std::env::temp_dir().join("declex_integration_roundtrip.bin");
    codec::save_to_file(&model, &path).unwrap();
    let restored = codec::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(model, restored);
}

#[test]
fn garbage_bytes_fail_as_serialization_errors() {
    let err = codec::from_bytes(&[0xc1, 0xff, 0x00]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
}

#[test]
fn missing_file_fails_as_io_error() {
    let err = codec::load_from_file("/nonexistent/declex/model.bin").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
