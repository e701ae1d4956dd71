//! Builtin comparison tables, one per shipped calculation style.
//!
//! These centralize the per-style key lists that historically lived next to
//! each prepare script. Tolerance conventions are re-derived per field:
//! hand-set geometry in its own units gets an absolute threshold,
//! convergence settings that span orders of magnitude get a relative one.

use crate::spec::{ListRule, MatchSpec, MatchSpecBuilder, Tolerance};

/// Radial cutoffs are entered by hand in Å; 1e-3 Å absorbs unit round-trips.
const CUTOFF_R: Tolerance = Tolerance::Absolute(1e-3);

/// Target pressures in GPa; prepare inputs rarely carry more digits.
const PRESSURE: Tolerance = Tolerance::Absolute(1e-3);

/// Thermostat set points in K; runs within 1 K are the same experiment.
const TEMPERATURE: Tolerance = Tolerance::Absolute(1.0);

/// Minimizer convergence thresholds span orders of magnitude (1e-10..1e-4);
/// only a relative comparison is meaningful.
const CONVERGENCE: Tolerance = Tolerance::Relative(1e-2);

/// Fractional fault shifts are dimensionless in [0, 1).
const SHIFT_FRACTION: Tolerance = Tolerance::Absolute(1e-6);

/// Specs for every builtin style. Each style appears exactly once.
pub fn builtin_specs() -> Vec<MatchSpec> {
    vec![e_vs_r_scan(),
         relax_static(),
         relax_box(),
         relax_dynamic(),
         surface_energy(),
         stacking_fault(),
         point_defect()]
}

/// Keys shared by every style: which potential, which prototype family,
/// which symbols sit on which site, and the system size. Symbols compare as
/// content (model assignment order is arbitrary); size multipliers compare
/// positionally because position is the a/b/c axis.
fn common_keys(builder: MatchSpecBuilder) -> MatchSpecBuilder {
    builder.exact("potential_key")
           .exact("family")
           .list("symbols", ListRule::unordered())
           .list("sizemults", ListRule::ordered())
}

fn e_vs_r_scan() -> MatchSpec {
    build(common_keys(MatchSpec::for_style("E_vs_r_scan")).exact("number_of_measurements")
                                                          .tolerance("minimum_r", CUTOFF_R)
                                                          .tolerance("maximum_r", CUTOFF_R))
}

fn relax_static() -> MatchSpec {
    build(common_keys(MatchSpec::for_style("relax_static")).exact("load_key")
                                                           .tolerance("pressure_xx", PRESSURE)
                                                           .tolerance("pressure_yy", PRESSURE)
                                                           .tolerance("pressure_zz", PRESSURE)
                                                           .tolerance("energytolerance", CONVERGENCE))
}

fn relax_box() -> MatchSpec {
    build(common_keys(MatchSpec::for_style("relax_box")).tolerance("pressure_xx", PRESSURE)
                                                        .tolerance("pressure_yy", PRESSURE)
                                                        .tolerance("pressure_zz", PRESSURE)
                                                        .tolerance("strainrange", CONVERGENCE))
}

fn relax_dynamic() -> MatchSpec {
    build(common_keys(MatchSpec::for_style("relax_dynamic")).exact("integrator")
                                                            .tolerance("temperature", TEMPERATURE)
                                                            .tolerance("pressure", PRESSURE))
}

fn surface_energy() -> MatchSpec {
    build(common_keys(MatchSpec::for_style("surface_energy")).exact("cutboxvector")
                                                             .tolerance("minimum_width", Tolerance::Absolute(1e-2))
                                                             .list("hkl", ListRule::ordered()))
}

fn stacking_fault() -> MatchSpec {
    build(common_keys(MatchSpec::for_style("stacking_fault")).exact("stackingfault_key")
                                                             .tolerance("shiftfraction1", SHIFT_FRACTION)
                                                             .tolerance("shiftfraction2", SHIFT_FRACTION))
}

fn point_defect() -> MatchSpec {
    build(common_keys(MatchSpec::for_style("point_defect")).exact("pointdefect_key"))
}

fn build(builder: MatchSpecBuilder) -> MatchSpec {
    // The tables above are static and disjoint by construction.
    builder.build().expect("builtin match spec")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_style_is_distinct() {
        let specs = builtin_specs();
        let mut names: Vec<&str> = specs.iter().map(|s| s.style()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn every_builtin_style_carries_the_common_keys() {
        for spec in builtin_specs() {
            let exact: Vec<&str> = spec.exact_keys().collect();
            assert!(exact.contains(&"potential_key"), "{} lacks potential_key", spec.style());
            assert!(exact.contains(&"family"), "{} lacks family", spec.style());
            let lists: Vec<&str> = spec.list_keys().map(|(k, _)| k).collect();
            assert!(lists.contains(&"symbols"), "{} lacks symbols", spec.style());
            assert!(lists.contains(&"sizemults"), "{} lacks sizemults", spec.style());
        }
    }
}
