//! Frontend tests for Go.

use declex_frontend::go;

const FIXTURE: &str = r#"
package main

import "fmt"

type Car struct {
    Brand string
    Color string
    Year  int
}

func NewCar(brand, color string, year int) *Car {
    return &Car{
        Brand: brand,
        Color: color,
        Year:  year,
    }
}

func (c *Car) StartEngine() {
    fmt.Printf("The %s %s from %d starts.\n", c.Color, c.Brand, c.Year)
}

func (c *Car) StopEngine() {
    fmt.Println("The engine stops.")
}

type Vehicle struct {
    Brand string
    Model string
}
"#;

#[test]
fn fixture_yields_both_structs() {
    let declarations = go::parse(FIXTURE).unwrap();
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].name, "Car");
    assert_eq!(declarations[1].name, "Vehicle");
}

#[test]
fn struct_fields_carry_annotations() {
    let declarations = go::parse(FIXTURE).unwrap();
    let car = &declarations[0];
    assert_eq!(car.fields.len(), 3);
    assert_eq!(car.fields[0].name, "Brand");
    assert_eq!(car.fields[0].annotation.as_deref(), Some("string"));
    assert_eq!(car.fields[2].annotation.as_deref(), Some("int"));
}

#[test]
fn receiver_methods_attach_to_their_struct() {
    let declarations = go::parse(FIXTURE).unwrap();
    let car = &declarations[0];
    assert_eq!(car.methods.len(), 2);
    assert_eq!(car.methods[0].name, "StartEngine");
    assert!(car.methods[0].body.contains("fmt.Printf"));
    let vehicle = &declarations[1];
    assert!(vehicle.methods.is_empty());
}

#[test]
fn new_convention_yields_a_constructor() {
    let declarations = go::parse(FIXTURE).unwrap();
    let car = &declarations[0];
    assert_eq!(car.constructors.len(), 1);
    let ctor = &car.constructors[0];
    assert_eq!(ctor.parameters.len(), 3);
    assert_eq!(ctor.parameters[1].name, "color");
    assert_eq!(ctor.parameters[1].annotation.as_deref(), Some("string"));
    assert_eq!(ctor.assignments.len(), 3);
    assert_eq!(ctor.assignments[1].field, "Color");
    assert_eq!(ctor.assignments[1].value, "color");
}

#[test]
fn vehicle_has_no_constructor() {
    let declarations = go::parse(FIXTURE).unwrap();
    assert!(declarations[1].constructors.is_empty());
}

#[test]
fn value_receivers_attach_too() {
    let source = "type P struct {\n    X int\n}\n\nfunc (p P) Get() int {\n    return p.X\n}\n";
    let declarations = go::parse(source).unwrap();
    assert_eq!(declarations[0].methods.len(), 1);
    assert_eq!(
        declarations[0].methods[0].return_annotation.as_deref(),
        Some("int")
    );
}

#[test]
fn multi_value_returns_are_captured() {
    let source =
        "type P struct {\n    X int\n}\n\nfunc (p *P) Fetch() (int, error) {\n    return p.X, nil\n}\n";
    let declarations = go::parse(source).unwrap();
    assert_eq!(
        declarations[0].methods[0].return_annotation.as_deref(),
        Some("int, error")
    );
}

#[test]
fn grouped_import_blocks_are_skipped() {
    let source =
        "package main\n\nimport (\n    \"fmt\"\n    \"strings\"\n)\n\ntype A struct {\n    X int\n}\n";
    let declarations = go::parse(source).unwrap();
    assert_eq!(declarations.len(), 1);
}

#[test]
fn constructor_for_missing_type_is_dropped() {
    let source = "func NewWidget() *Widget {\n    return &Widget{}\n}\n";
    let declarations = go::parse(source).unwrap();
    assert!(declarations.is_empty());
}
