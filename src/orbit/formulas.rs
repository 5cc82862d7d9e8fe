use std::f64::consts::PI;

use super::{OrbitSystem, OrbitVariable};
use crate::{Bindings, Formula, FormulaSystem, InvalidFormula, TabulatedFormula};

/// A formula between orbit variables.
pub type OrbitFormula = TabulatedFormula<OrbitVariable, f64>;

type OrbitBindings = Bindings<OrbitVariable, f64>;

fn get(known: &OrbitBindings, var: OrbitVariable) -> Option<f64> {
    known.get(&var).copied()
}

/// The two-body orbit formulas.
///
/// In order:
///  1. vis-viva at periapsis, `{GM, Vp, Rp, Ra}`,
///  2. vis-viva at apoapsis, `{GM, Rp, Ra, Va}`,
///  3. Kepler's third law, `{GM, period, a}`,
///  4. apsis sum, `{a, Ra, Rp}`,
///  5. periapsis from eccentricity, `{Rp, a, e}`,
///  6. eccentricity from the apsis ratio, `{e, Ra, Rp}`.
pub fn orbit_formulas() -> Result<Vec<Box<dyn Formula<OrbitVariable, f64>>>, InvalidFormula> {
    use OrbitVariable::*;

    let peri_vis_viva = OrbitFormula::try_new([Gm, PeriVelocity, PeriRadius, ApoRadius])?
        .with_solve(PeriVelocity, |k| {
            let (gm, rp, ra) = (get(k, Gm)?, get(k, PeriRadius)?, get(k, ApoRadius)?);
            Some((2. * gm * ra / (rp * (rp + ra))).sqrt())
        })?;

    let apo_vis_viva = OrbitFormula::try_new([Gm, PeriRadius, ApoRadius, ApoVelocity])?
        .with_solve(ApoVelocity, |k| {
            let (gm, rp, ra) = (get(k, Gm)?, get(k, PeriRadius)?, get(k, ApoRadius)?);
            Some((2. * gm * rp / (ra * (ra + rp))).sqrt())
        })?;

    let kepler = OrbitFormula::try_new([Gm, Period, SemiMajorAxis])?
        .with_solve(SemiMajorAxis, |k| {
            let (gm, t) = (get(k, Gm)?, get(k, Period)?);
            Some((gm * t * t / (4. * PI * PI)).cbrt())
        })?
        .with_solve(Period, |k| {
            let (gm, a) = (get(k, Gm)?, get(k, SemiMajorAxis)?);
            Some(2. * PI * (a.powi(3) / gm).sqrt())
        })?
        .with_solve(Gm, |k| {
            let (t, a) = (get(k, Period)?, get(k, SemiMajorAxis)?);
            Some(4. * PI * PI * a.powi(3) / (t * t))
        })?;

    let apsis_sum = OrbitFormula::try_new([SemiMajorAxis, ApoRadius, PeriRadius])?
        .with_solve(PeriRadius, |k| {
            Some(get(k, SemiMajorAxis)? * 2. - get(k, ApoRadius)?)
        })?
        .with_solve(ApoRadius, |k| {
            Some(get(k, SemiMajorAxis)? * 2. - get(k, PeriRadius)?)
        })?
        .with_solve(SemiMajorAxis, |k| {
            Some((get(k, ApoRadius)? + get(k, PeriRadius)?) / 2.)
        })?;

    let periapsis = OrbitFormula::try_new([PeriRadius, SemiMajorAxis, Eccentricity])?
        .with_solve(PeriRadius, |k| {
            Some(get(k, SemiMajorAxis)? * (1. - get(k, Eccentricity)?))
        })?
        .with_solve(SemiMajorAxis, |k| {
            Some(get(k, PeriRadius)? / (1. - get(k, Eccentricity)?))
        })?
        .with_solve(Eccentricity, |k| {
            Some(1. - get(k, PeriRadius)? / get(k, SemiMajorAxis)?)
        })?;

    let eccentricity = OrbitFormula::try_new([Eccentricity, ApoRadius, PeriRadius])?
        .with_solve(Eccentricity, |k| {
            Some(1. - 2. / (get(k, ApoRadius)? / get(k, PeriRadius)? + 1.))
        })?
        .with_solve(ApoRadius, |k| {
            let (e, rp) = (get(k, Eccentricity)?, get(k, PeriRadius)?);
            Some(rp * (1. + e) / (1. - e))
        })?
        .with_solve(PeriRadius, |k| {
            let (e, ra) = (get(k, Eccentricity)?, get(k, ApoRadius)?);
            Some(ra * (1. - e) / (1. + e))
        })?;

    Ok([
        peri_vis_viva,
        apo_vis_viva,
        kepler,
        apsis_sum,
        periapsis,
        eccentricity,
    ]
    .into_iter()
    .map(|f| Box::new(f) as Box<dyn Formula<_, _>>)
    .collect())
}

/// A formula system over [`orbit_formulas`], with nothing known yet.
pub fn orbit_system() -> Result<OrbitSystem, InvalidFormula> {
    Ok(FormulaSystem::new(orbit_formulas()?))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::orbit::GM_KERBIN;

    fn assert_close(actual: f64, expected: f64) {
        let tol = 1e-9 * expected.abs().max(1.);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn formula_order() {
        use OrbitVariable::*;

        let formulas = orbit_formulas().unwrap();
        let variables = formulas.iter().map(|f| f.variables().to_vec()).collect::<Vec<_>>();
        assert_eq!(
            variables,
            vec![
                vec![Gm, PeriVelocity, PeriRadius, ApoRadius],
                vec![Gm, PeriRadius, ApoRadius, ApoVelocity],
                vec![Gm, Period, SemiMajorAxis],
                vec![SemiMajorAxis, ApoRadius, PeriRadius],
                vec![PeriRadius, SemiMajorAxis, Eccentricity],
                vec![Eccentricity, ApoRadius, PeriRadius],
            ]
        );
    }

    #[test]
    fn eccentricity_from_apsides() {
        use OrbitVariable::*;

        let formulas = orbit_formulas().unwrap();
        let known = [(ApoRadius, 8_000_000.), (PeriRadius, 600_000.)]
            .into_iter()
            .collect::<OrbitBindings>();
        let (var, e) = formulas[5].solve(&known).unwrap();
        assert_eq!(var, Eccentricity);
        assert_close(e, 1. - 2. / (8_000_000. / 600_000. + 1.));
    }

    #[rstest]
    #[case(OrbitVariable::SemiMajorAxis)]
    #[case(OrbitVariable::Period)]
    #[case(OrbitVariable::Gm)]
    fn kepler_is_consistent(#[case] unknown: OrbitVariable) {
        let a = 700_000.;
        let period = 2. * std::f64::consts::PI * (a * a * a / GM_KERBIN).sqrt();
        let mut known = [
            (OrbitVariable::Gm, GM_KERBIN),
            (OrbitVariable::Period, period),
            (OrbitVariable::SemiMajorAxis, a),
        ]
        .into_iter()
        .collect::<OrbitBindings>();
        let expected = known.remove(&unknown).unwrap();

        let formulas = orbit_formulas().unwrap();
        let (var, value) = formulas[2].solve(&known).unwrap();
        assert_eq!(var, unknown);
        assert_close(value, expected);
    }

    #[test]
    fn circular_orbit() {
        use OrbitVariable::*;

        let mut system = orbit_system().unwrap();
        system.add([(Gm, GM_KERBIN), (PeriRadius, 700_000.), (Eccentricity, 0.)]);
        let known = system.known_variables();

        assert_close(known[&SemiMajorAxis], 700_000.);
        assert_close(known[&ApoRadius], 700_000.);
        let circular_velocity = (GM_KERBIN / 700_000_f64).sqrt();
        assert_close(known[&PeriVelocity], circular_velocity);
        assert_close(known[&ApoVelocity], circular_velocity);
        assert_eq!(known.len(), OrbitVariable::ALL.len());
    }
}
