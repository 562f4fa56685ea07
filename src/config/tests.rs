use super::*;

const VALID_YAML: &str = r#"
image:
  width: 4
  height: 4
  depth: 1
classes:
  names: [empty, track, shower]
  weights: [1.0, 40.0, 120.0]
data:
  training:
    features: data/feature_training.csv
    labels: data/label_training.csv
  validation:
    features: data/feature_validation.csv
    labels: data/label_validation.csv
  testing:
    features: data/feature_testing.csv
    labels: data/label_testing.csv
  batch_size: 5
training:
  epochs: 10
  num_training: 12
  num_validation: 4
  num_testing: 4
"#;

#[test]
fn parse_valid_yaml() {
    let spec = TrainSpec::from_yaml_str(VALID_YAML).unwrap();
    assert_eq!(spec.image.width, 4);
    assert_eq!(spec.classes.names.len(), 3);
    assert_eq!(spec.data.batch_size, 5);
    assert_eq!(spec.training.epochs, 10);
    spec.validate().unwrap();
}

#[test]
fn geometry_derived_from_image_and_classes() {
    let spec = TrainSpec::from_yaml_str(VALID_YAML).unwrap();
    let g = spec.geometry();
    assert_eq!(g, Geometry::new(4, 4, 1, 3));
    assert_eq!(g.feature_len(), 16);
    assert_eq!(g.label_len(), 16);
}

#[test]
fn reject_weight_count_mismatch() {
    let mut spec = TrainSpec::from_yaml_str(VALID_YAML).unwrap();
    spec.classes.weights.pop();
    assert!(spec.validate().is_err());
}

#[test]
fn reject_non_positive_weight() {
    let mut spec = TrainSpec::from_yaml_str(VALID_YAML).unwrap();
    spec.classes.weights[1] = 0.0;
    assert!(spec.validate().is_err());
}

#[test]
fn reject_zero_batch_size() {
    let mut spec = TrainSpec::from_yaml_str(VALID_YAML).unwrap();
    spec.data.batch_size = 0;
    assert!(spec.validate().is_err());
}

#[test]
fn reject_malformed_yaml() {
    assert!(TrainSpec::from_yaml_str("image: [not, a, struct]").is_err());
}
