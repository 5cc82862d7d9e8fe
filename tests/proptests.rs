use itertools::Itertools;
use proptest::prelude::*;

use orbit_formulas::orbit::{orbit_system, OrbitVariable};

/// Known parameters of an orbit, consistent with each other.
fn orbit_inputs() -> impl Strategy<Value = Vec<(OrbitVariable, f64)>> {
    (1e10..1e15f64, 1e5..1e7f64, 1.0..10.0f64).prop_flat_map(|(gm, rp, ratio)| {
        let ra = rp * ratio;
        let inputs = vec![
            (OrbitVariable::Gm, gm),
            (OrbitVariable::PeriRadius, rp),
            (OrbitVariable::ApoRadius, ra),
        ];
        Just(inputs).prop_shuffle()
    })
}

fn assert_close(actual: f64, expected: f64) -> Result<(), TestCaseError> {
    let tol = 1e-9 * expected.abs().max(1.);
    prop_assert!(
        (actual - expected).abs() <= tol,
        "expected {}, got {}",
        expected,
        actual
    );
    Ok(())
}

proptest! {
    #[test]
    fn incremental_adds_reach_same_orbit(
        inputs in orbit_inputs(),
        split in 0usize..=3,
    ) {
        let mut at_once = orbit_system().unwrap();
        prop_assert!(at_once.add(inputs.iter().copied()));

        let mut split_up = orbit_system().unwrap();
        split_up.add(inputs[..split].iter().copied());
        split_up.add(inputs[split..].iter().copied());

        let at_once = at_once.known_variables();
        let split_up = split_up.known_variables();
        prop_assert_eq!(
            at_once.keys().sorted().collect_vec(),
            split_up.keys().sorted().collect_vec()
        );
        prop_assert_eq!(at_once.len(), OrbitVariable::ALL.len());
        for (var, value) in at_once {
            assert_close(split_up[var], *value)?;
        }
    }

    #[test]
    fn adding_nothing_is_idempotent(inputs in orbit_inputs()) {
        let mut system = orbit_system().unwrap();
        system.add(inputs);
        let known = system.known_variables().clone();
        let pending = system.n_pending();

        prop_assert!(!system.add([]));
        prop_assert_eq!(system.known_variables(), &known);
        prop_assert_eq!(system.n_pending(), pending);
    }
}
