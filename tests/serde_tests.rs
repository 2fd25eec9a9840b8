#![cfg(feature = "serde")]

use acqgen::{
    AcquisitionKind, AcquisitionSpec, Bounds, Selection, StimuliPerTrial, StimulusPair,
};

#[test]
fn acquisition_spec_round_trips() {
    let spec = AcquisitionSpec::new(AcquisitionKind::UpperConfidenceBound).with_param("beta", 4.0);
    let json = serde_json::to_string(&spec).unwrap();
    let back: AcquisitionSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

#[test]
fn bounds_round_trip() {
    let bounds = Bounds::new(vec![0.0, -1.0], vec![1.0, 1.0]).unwrap();
    let json = serde_json::to_string(&bounds).unwrap();
    let back: Bounds = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bounds);
}

#[test]
fn stimuli_per_trial_round_trips() {
    for stimuli in [StimuliPerTrial::Single, StimuliPerTrial::Paired] {
        let json = serde_json::to_string(&stimuli).unwrap();
        let back: StimuliPerTrial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stimuli);
    }
}

#[test]
fn selection_round_trips() {
    let paired = Selection::Paired(vec![StimulusPair {
        first: vec![0.1, 0.2],
        second: vec![0.3, 0.4],
    }]);
    let json = serde_json::to_string(&paired).unwrap();
    let back: Selection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, paired);

    let single = Selection::Single(vec![vec![0.5, 0.6]]);
    let json = serde_json::to_string(&single).unwrap();
    let back: Selection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, single);
}
