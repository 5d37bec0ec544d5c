//! Frontend tests for Swift.

use declex_frontend::{RawKind, swift};

const FIXTURE: &str = r#"
import Foundation

class Car {
    var brand: String
    var color: String
    var year: Int

    init(brand: String, color: String, year: Int) {
        self.brand = brand
        self.color = color
        self.year = year
    }

    func startEngine() {
        print("The \(color) \(brand) from \(year) starts.")
    }

    func stopEngine() {
        print("The engine stops.")
    }
}

struct Vehicle {
    var brand: String
    var model: String
}
"#;

#[test]
fn fixture_yields_class_and_struct() {
    let declarations = swift::parse(FIXTURE).unwrap();
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].name, "Car");
    assert_eq!(declarations[0].kind, RawKind::Class);
    assert_eq!(declarations[1].name, "Vehicle");
    assert_eq!(declarations[1].kind, RawKind::Struct);
}

#[test]
fn stored_properties_carry_annotations() {
    let declarations = swift::parse(FIXTURE).unwrap();
    let car = &declarations[0];
    assert_eq!(car.fields.len(), 3);
    assert_eq!(car.fields[0].annotation.as_deref(), Some("String"));
    assert_eq!(car.fields[2].annotation.as_deref(), Some("Int"));
    assert!(car.fields.iter().all(|f| f.initializer.is_none()));
}

#[test]
fn init_is_separated_from_methods() {
    let declarations = swift::parse(FIXTURE).unwrap();
    let car = &declarations[0];
    assert_eq!(car.constructors.len(), 1);
    assert_eq!(car.constructors[0].assignments.len(), 3);
    assert_eq!(car.methods.len(), 2);
    assert_eq!(car.methods[0].name, "startEngine");
}

#[test]
fn struct_without_init_has_no_constructors() {
    let declarations = swift::parse(FIXTURE).unwrap();
    let vehicle = &declarations[1];
    assert!(vehicle.constructors.is_empty());
    assert_eq!(vehicle.fields.len(), 2);
}

#[test]
fn string_interpolation_does_not_break_bodies() {
    let declarations = swift::parse(FIXTURE).unwrap();
    let start = &declarations[0].methods[0];
    assert!(start.body.contains("\\(color)"));
}

#[test]
fn default_values_become_initializers() {
    let source = "struct Config {\n    var retries: Int = 3\n    var verbose = false\n}";
    let declarations = swift::parse(source).unwrap();
    let config = &declarations[0];
    assert_eq!(config.fields[0].initializer.as_deref(), Some("3"));
    assert_eq!(config.fields[1].annotation, None);
    assert_eq!(config.fields[1].initializer.as_deref(), Some("false"));
}

#[test]
fn throwing_init_still_parses() {
    let source = "class A {\n    var x: Int\n    init(x: Int) throws { self.x = x }\n}";
    let declarations = swift::parse(source).unwrap();
    assert_eq!(declarations[0].constructors.len(), 1);
}

#[test]
fn missing_body_is_a_syntax_error() {
    assert!(swift::parse("class Car").unwrap_err().is_syntax());
}
