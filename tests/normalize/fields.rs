//! Field lowering and synthesis tests.

use declex_foundation::{Language, TypeTag};
use declex_normalize::extract;

// =============================================================================
// Field Synthesis
// =============================================================================

#[test]
fn javascript_fields_synthesize_from_constructor() {
    let source = "class Car {\n    constructor(brand, year) {\n        this.brand = brand;\n        this.year = year;\n    }\n}";
    let model = extract(Language::JavaScript, source).unwrap();
    let car = model.find("Car").unwrap();
    assert_eq!(car.fields.len(), 2);
    assert_eq!(car.fields[0].name, "brand");
    assert!(car.fields[0].declared_type.is_unknown());
    assert!(car.field_is_assigned("brand"));
    assert!(car.field_is_assigned("year"));
}

#[test]
fn python_fields_synthesize_from_dunder_init() {
    let source = "class Car:\n    def __init__(self, brand, year):\n        self.brand = brand\n        self.year = year\n";
    let model = extract(Language::Python, source).unwrap();
    let car = model.find("Car").unwrap();
    assert_eq!(car.fields.len(), 2);
    assert!(car.has_explicit_constructor());
}

#[test]
fn typescript_parameter_types_flow_into_synthesized_fields() {
    let source = "class Car {\n    constructor(brand: string, year: number) {\n        this.brand = brand;\n        this.year = year;\n    }\n}";
    let model = extract(Language::TypeScript, source).unwrap();
    let car = model.find("Car").unwrap();
    assert_eq!(car.field("brand").unwrap().declared_type, TypeTag::String);
    assert_eq!(car.field("year").unwrap().declared_type, TypeTag::Float);
}

#[test]
fn declared_fields_are_not_duplicated_by_assignments() {
    let source = "class Car {\n    var brand: String\n    init(brand: String) {\n        self.brand = brand\n    }\n}";
    let model = extract(Language::Swift, source).unwrap();
    let car = model.find("Car").unwrap();
    assert_eq!(car.fields.len(), 1);
    assert_eq!(car.field("brand").unwrap().declared_type, TypeTag::String);
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn initializers_become_defaults_with_inferred_types() {
    let source = "class Car:\n    a = 5\n    b = \"hello\"\n";
    let model = extract(Language::Python, source).unwrap();
    let car = model.find("Car").unwrap();
    let a = car.field("a").unwrap();
    assert!(a.has_default);
    assert_eq!(a.declared_type, TypeTag::Integer);
    assert_eq!(a.default_literal.as_deref(), Some("5"));
    let b = car.field("b").unwrap();
    assert_eq!(b.declared_type, TypeTag::String);
}

#[test]
fn literal_constructor_assignments_become_defaults() {
    let source = "class Car {\n    constructor(brand) {\n        this.brand = brand;\n        this.mileage = 0;\n    }\n}";
    let model = extract(Language::JavaScript, source).unwrap();
    let car = model.find("Car").unwrap();
    let mileage = car.field("mileage").unwrap();
    assert!(mileage.has_default);
    assert_eq!(mileage.declared_type, TypeTag::Integer);
}

#[test]
fn annotation_beats_literal_inference() {
    let source = "class P:\n    x: float = 5\n";
    let model = extract(Language::Python, source).unwrap();
    assert_eq!(
        model.find("P").unwrap().field("x").unwrap().declared_type,
        TypeTag::Float
    );
}

// =============================================================================
// Constructors and Methods
// =============================================================================

#[test]
fn memberwise_constructor_synthesized_for_swift_structs() {
    let source = "struct Vehicle {\n    var brand: String\n    var model: String\n}";
    let model = extract(Language::Swift, source).unwrap();
    let vehicle = model.find("Vehicle").unwrap();
    assert!(!vehicle.has_explicit_constructor());
    assert_eq!(vehicle.constructors.len(), 1);
    let ctor = &vehicle.constructors[0];
    assert!(ctor.implicit);
    assert_eq!(ctor.arity(), 2);
    assert_eq!(ctor.parameters[0].declared_type, TypeTag::String);
    assert!(ctor.assigns("brand"));
    assert!(ctor.assigns("model"));
}

#[test]
fn memberwise_constructor_synthesized_for_go_structs() {
    let source = "type Vehicle struct {\n    Brand string\n    Model string\n}\n";
    let model = extract(Language::Go, source).unwrap();
    let vehicle = model.find("Vehicle").unwrap();
    assert!(vehicle.constructors[0].implicit);
    assert_eq!(vehicle.constructors[0].arity(), 2);
}

#[test]
fn go_constructor_maps_parameters_through_the_literal() {
    let source = "type Car struct {\n    Brand string\n    Year int\n}\n\nfunc NewCar(brand string, year int) *Car {\n    return &Car{Brand: brand, Year: year}\n}\n";
    let model = extract(Language::Go, source).unwrap();
    let car = model.find("Car").unwrap();
    assert!(car.has_explicit_constructor());
    let ctor = &car.constructors[0];
    assert_eq!(ctor.assignments.len(), 2);
    assert_eq!(ctor.assignments[0].parameter, "brand");
    assert_eq!(ctor.assignments[0].field, "Brand");
}

#[test]
fn method_signatures_are_lowered() {
    let source =
        "class Car {\n    var speed: Int = 0\n    func accelerate(by delta: Int) -> Bool {\n        return true\n    }\n}";
    let model = extract(Language::Swift, source).unwrap();
    let car = model.find("Car").unwrap();
    let accelerate = car.method("accelerate").unwrap();
    assert_eq!(accelerate.arity(), 1);
    assert_eq!(accelerate.parameters[0].name, "delta");
    assert_eq!(accelerate.parameters[0].declared_type, TypeTag::Integer);
    assert_eq!(accelerate.return_type, TypeTag::Boolean);
}

#[test]
fn untyped_methods_default_to_unit_and_unknown() {
    let source = "class Car {\n    drive(speed) { }\n}";
    let model = extract(Language::JavaScript, source).unwrap();
    let drive = model.find("Car").unwrap().method("drive").unwrap();
    assert_eq!(drive.return_type, TypeTag::Unit);
    assert!(drive.parameters[0].declared_type.is_unknown());
}
