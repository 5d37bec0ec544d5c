//! Cross-language equivalence over the Car and Vehicle fixtures.
//!
//! The same two types are written in each supported language's native
//! idiom; extraction must land them on canonical models that compare
//! equivalent in every pairing.

use declex_compare::{CompareConfig, Diff, compare, compare_models};
use declex_foundation::Language;
use declex_model::DeclarationModel;
use declex_normalize::extract;

const CAR_JS: &str = r#"
class Car {
    constructor(brand, color, year) {
        this.brand = brand;
        this.color = color;
        this.year = year;
    }

    startEngine() {
        console.log(`The ${this.color} ${this.brand} from ${this.year} starts.`);
    }

    stopEngine() {
        console.log("The engine stops.");
    }
}
"#;

const CAR_SWIFT: &str = r#"
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
"#;

const CAR_PY: &str = r#"
class Car:
    def __init__(self, brand, color, year):
        self.brand = brand
        self.color = color
        self.year = year

    def start_engine(self):
        print(f"The {self.color} {self.brand} from {self.year} starts.")

    def stop_engine(self):
        print("The engine stops.")
"#;

const CAR_GO: &str = r#"
package main

import "fmt"

type Car struct {
    Brand string
    Color string
    Year  int
}

func NewCar(brand, color string, year int) *Car {
    return &Car{Brand: brand, Color: color, Year: year}
}

func (c *Car) StartEngine() {
    fmt.Printf("The %s %s from %d starts.\n", c.Color, c.Brand, c.Year)
}

func (c *Car) StopEngine() {
    fmt.Println("The engine stops.")
}
"#;

fn car_models() -> Vec<DeclarationModel> {
    vec![
        extract(Language::JavaScript, CAR_JS).unwrap(),
        extract(Language::Swift, CAR_SWIFT).unwrap(),
        extract(Language::Python, CAR_PY).unwrap(),
        extract(Language::Go, CAR_GO).unwrap(),
    ]
}

// =============================================================================
// Car Equivalence
// =============================================================================

#[test]
fn car_is_equivalent_across_all_languages() {
    let config = CompareConfig::default();
    let models = car_models();
    for left in &models {
        for right in &models {
            let result = compare_models(left, right, &config);
            assert!(
                result.is_equivalent(),
                "{} vs {}: {:?}",
                left.language,
                right.language,
                result.diffs()
            );
        }
    }
}

#[test]
fn car_fields_agree_in_every_language() {
    for model in car_models() {
        let car = model.declarations.first().unwrap();
        assert_eq!(car.fields.len(), 3, "{}", model.language);
        for field in &car.fields {
            assert!(
                car.field_has_value_source(&field.name),
                "{}: {}",
                model.language,
                field.name
            );
        }
        assert_eq!(car.methods.len(), 2, "{}", model.language);
    }
}

#[test]
fn method_naming_conventions_fold_across_languages() {
    let config = CompareConfig::default();
    let python = extract(Language::Python, CAR_PY).unwrap();
    let go = extract(Language::Go, CAR_GO).unwrap();
    // start_engine vs StartEngine pair up under folding.
    let result = compare(
        python.find("Car").unwrap(),
        go.find("Car").unwrap(),
        &config,
    );
    assert!(result.is_equivalent(), "{:?}", result.diffs());
}

// =============================================================================
// Vehicle Equivalence and Divergence
// =============================================================================

#[test]
fn vehicle_struct_and_class_are_equivalent() {
    let config = CompareConfig::default();
    let swift = extract(
        Language::Swift,
        "struct Vehicle {\n    var brand: String\n    var model: String\n}",
    )
    .unwrap();
    let python = extract(
        Language::Python,
        "class Vehicle:\n    def __init__(self, brand, model):\n        self.brand = brand\n        self.model = model\n",
    )
    .unwrap();
    let result = compare_models(&swift, &python, &config);
    assert!(result.is_equivalent(), "{:?}", result.diffs());
}

#[test]
fn renamed_field_diverges_with_missing_field_on_both_sides() {
    let config = CompareConfig::default();
    let swift = extract(
        Language::Swift,
        "struct Vehicle {\n    var make: String\n    var model: String\n}",
    )
    .unwrap();
    let js = extract(
        Language::JavaScript,
        "class Vehicle {\n    constructor(brand, model) {\n        this.brand = brand;\n        this.model = model;\n    }\n}",
    )
    .unwrap();
    let result = compare_models(&swift, &js, &config);
    let diffs = result.diffs();
    assert_eq!(diffs.len(), 2);
    assert!(diffs
        .iter()
        .any(|d| matches!(d, Diff::MissingField { name, .. } if name == "make")));
    assert!(diffs
        .iter()
        .any(|d| matches!(d, Diff::MissingField { name, .. } if name == "brand")));
}

#[test]
fn go_capitalization_folds_against_other_languages() {
    let config = CompareConfig::default();
    let go = extract(
        Language::Go,
        "type Vehicle struct {\n    Brand string\n    Model string\n}\n",
    )
    .unwrap();
    let swift = extract(
        Language::Swift,
        "struct Vehicle {\n    var brand: String\n    var model: String\n}",
    )
    .unwrap();
    let result = compare_models(&go, &swift, &config);
    assert!(result.is_equivalent(), "{:?}", result.diffs());
}

// =============================================================================
// Body Opacity
// =============================================================================

#[test]
fn implementations_never_affect_equivalence() {
    let config = CompareConfig::default();
    let noisy = extract(
        Language::JavaScript,
        "class Car {\n    constructor(brand) {\n        this.brand = brand;\n        validate(brand);\n        registry.add(this);\n    }\n\n    startEngine() {\n        while (true) { spin(); }\n    }\n\n    stopEngine() { }\n}",
    )
    .unwrap();
    let quiet = extract(
        Language::Python,
        "class Car:\n    def __init__(self, brand):\n        self.brand = brand\n\n    def start_engine(self):\n        pass\n\n    def stop_engine(self):\n        pass\n",
    )
    .unwrap();
    let result = compare_models(&noisy, &quiet, &config);
    assert!(result.is_equivalent(), "{:?}", result.diffs());
}
