use std::collections::BTreeMap;

use h2gen_core::errors::H2Error;
use h2gen_core::naming::{NamingService, RadialOperatorKind};
use h2gen_core::truncation::WeightMax;

use crate::serde::to_canonical_json_string;
use crate::sources::SourceDescriptor;
use crate::targets::TargetSet;
use crate::task::TaskSpec;

/// Formats a coefficient in the fixed scientific form the mixer parses:
/// six fractional digits and a signed two-digit exponent.
pub fn format_coefficient(value: f64) -> String {
    if value == 0.0 {
        return String::from("0.000000e+00");
    }
    let negative = value.is_sign_negative();
    let magnitude = value.abs();
    let mut exponent = magnitude.log10().floor() as i32;
    let mut mantissa = magnitude / 10f64.powi(exponent);
    while mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    while mantissa < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    let mut rounded = (mantissa * 1.0e6).round() / 1.0e6;
    if rounded >= 10.0 {
        rounded /= 10.0;
        exponent += 1;
    }
    let sign = if negative { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{rounded:.6}e{exponent_sign}{:02}", exponent.abs())
}

/// Serializes the derivation results into the ordered mixer script.
///
/// The line order and field formatting are part of the external contract;
/// the downstream tool parses the stream positionally.
pub fn compile_script(
    task: &TaskSpec,
    targets: &TargetSet,
    sources: &BTreeMap<String, SourceDescriptor>,
    weight_max: &WeightMax,
    naming: &dyn NamingService,
    postfix: &str,
) -> Result<Vec<String>, H2Error> {
    let mut lines = Vec::new();

    lines.push(format!("# task: {}", to_canonical_json_string(task)?));
    lines.push(String::new());

    lines.push(format!(
        "set-target-indexing {} {}",
        naming.orbitals_filename(postfix),
        weight_max.indexing_fields()
    ));
    lines.push(String::from("set-target-multipolarity 0 0 0"));
    lines.push(format!("set-output-format {}", task.h2_format));
    lines.push(format!("set-mass {}", task.mass_number()));
    lines.push(String::new());

    for kind in [RadialOperatorKind::R, RadialOperatorKind::K] {
        for power in [1, 2] {
            lines.push(format!(
                "define-radial-operator {} {} {}",
                kind.as_str(),
                power,
                naming.radial_me_filename(postfix, kind, power)
            ));
        }
    }
    lines.push(String::new());

    lines.push(format!(
        "define-pn-overlaps {}",
        naming.pn_overlap_filename(postfix)
    ));
    lines.push(String::new());

    for (id, descriptor) in sources {
        lines.push(descriptor.mixer_line(id));
    }
    lines.push(String::new());

    for (basename, operator) in targets.iter() {
        lines.push(format!(
            "define-target {}",
            naming.target_filename(postfix, basename)
        ));
        for (id, coefficient) in operator.iter() {
            lines.push(format!("  add-source {id} {}", format_coefficient(coefficient)));
        }
        lines.push(String::new());
    }

    // Terminal line so the stream always ends in a blank separator.
    lines.push(String::new());

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_formatting_matches_mixer_contract() {
        assert_eq!(format_coefficient(1.0), "1.000000e+00");
        assert_eq!(format_coefficient(-60.0), "-6.000000e+01");
        assert_eq!(format_coefficient(0.125), "1.250000e-01");
        assert_eq!(format_coefficient(12.5), "1.250000e+01");
        assert_eq!(format_coefficient(0.0), "0.000000e+00");
        assert_eq!(format_coefficient(1.0e-12), "1.000000e-12");
        assert_eq!(format_coefficient(9.9999999), "1.000000e+01");
    }

    #[test]
    fn coefficient_formatting_keeps_six_digit_mantissa() {
        assert_eq!(format_coefficient(2.073_512_3), "2.073512e+00");
        assert_eq!(format_coefficient(-0.000_123_456_789), "-1.234568e-04");
    }
}
