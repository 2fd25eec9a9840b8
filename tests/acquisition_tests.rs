//! Acquisition calling conventions exercised through the public surface.

use acqgen::prelude::*;

/// Surrogate with a linear posterior mean in the first coordinate.
struct Linear {
    train: Option<Vec<Vec<f64>>>,
}

impl Surrogate for Linear {
    fn eval_mode(&mut self) {}

    fn posterior(&self, points: &CandidateBatch) -> Result<Posterior> {
        let mean = points.iter_points().map(|p| p[0]).collect();
        let std = vec![0.05; points.n_points()];
        Ok(Posterior { mean, std })
    }

    fn train_inputs(&self) -> Option<&[Vec<f64>]> {
        self.train.as_deref()
    }
}

fn generator_for(spec: AcquisitionSpec) -> Generator {
    Generator::builder()
        .bounds(vec![0.0], vec![1.0])
        .acquisition(spec)
        .stimuli_per_trial(StimuliPerTrial::Single)
        .samps(64)
        .build()
        .unwrap()
}

#[test]
fn expected_improvement_needs_best_f() {
    let generator = generator_for(AcquisitionSpec::new(AcquisitionKind::ExpectedImprovement));
    let mut model = Linear { train: None };
    let err = generator
        .gen(1, &mut model, &GenOptions { seed: Some(1) })
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAcquisitionParam { name: "best_f", .. }
    ));
}

#[test]
fn expected_improvement_runs_with_best_f() {
    let generator = generator_for(
        AcquisitionSpec::new(AcquisitionKind::ExpectedImprovement).with_param("best_f", 0.5),
    );
    let mut model = Linear { train: None };
    let selection = generator
        .gen(1, &mut model, &GenOptions { seed: Some(1) })
        .unwrap();
    assert_eq!(selection.num_points(), 1);
}

#[test]
fn baseline_requiring_kinds_refuse_models_without_history() {
    for kind in [
        AcquisitionKind::NoisyExpectedImprovement,
        AcquisitionKind::LogNoisyExpectedImprovement,
        AcquisitionKind::QNoisyExpectedImprovement,
        AcquisitionKind::QLogNoisyExpectedImprovement,
    ] {
        let generator = generator_for(AcquisitionSpec::new(kind));
        let mut model = Linear { train: None };
        let err = generator
            .gen(1, &mut model, &GenOptions { seed: Some(1) })
            .unwrap_err();
        assert!(
            matches!(err, Error::MissingTrainInputs { kind: k } if k == kind),
            "{kind} must not be silently downgraded"
        );
    }
}

#[test]
fn baseline_requiring_kinds_run_with_history() {
    for kind in [
        AcquisitionKind::NoisyExpectedImprovement,
        AcquisitionKind::QLogNoisyExpectedImprovement,
    ] {
        let generator = generator_for(AcquisitionSpec::new(kind));
        let mut model = Linear {
            train: Some(vec![vec![0.1], vec![0.4]]),
        };
        let selection = generator
            .gen(1, &mut model, &GenOptions { seed: Some(2) })
            .unwrap();
        assert_eq!(selection.num_points(), 1);
    }
}

#[test]
fn preference_kind_runs_without_history_or_params() {
    let generator = Generator::builder()
        .bounds(vec![0.0], vec![1.0])
        .acquisition(AcquisitionSpec::new(
            AcquisitionKind::ExpectedUtilityOfBestOption,
        ))
        .stimuli_per_trial(StimuliPerTrial::Paired)
        .samps(64)
        .build()
        .unwrap();
    let mut model = Linear { train: None };
    let selection = generator
        .gen(1, &mut model, &GenOptions { seed: Some(3) })
        .unwrap();
    match selection {
        Selection::Paired(pairs) => assert_eq!(pairs.len(), 1),
        Selection::Single(_) => panic!("expected paired selection"),
    }
}

#[test]
fn stimuli_per_trial_parses_from_raw_counts() {
    assert_eq!(
        StimuliPerTrial::try_from(1).unwrap(),
        StimuliPerTrial::Single
    );
    assert_eq!(
        StimuliPerTrial::try_from(2).unwrap(),
        StimuliPerTrial::Paired
    );
    assert!(matches!(
        StimuliPerTrial::try_from(3),
        Err(Error::InvalidStimuliPerTrial(3))
    ));
}

#[test]
fn spec_parameters_are_retrievable() {
    let spec = AcquisitionSpec::new(AcquisitionKind::UpperConfidenceBound)
        .with_param("beta", 9.0)
        .with_param("ignored", 1.0);
    assert_eq!(spec.param("beta"), Some(9.0));
    assert_eq!(spec.param("ignored"), Some(1.0));
    assert_eq!(spec.param("missing"), None);
    assert_eq!(spec.kind(), AcquisitionKind::UpperConfidenceBound);
}

#[test]
fn kind_names_render_for_diagnostics() {
    assert_eq!(
        AcquisitionKind::NoisyExpectedImprovement.to_string(),
        "NoisyExpectedImprovement"
    );
    assert_eq!(
        AcquisitionKind::QLogNoisyExpectedImprovement.to_string(),
        "qLogNoisyExpectedImprovement"
    );
}
