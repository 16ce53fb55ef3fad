use crate::entities::{CircleSpec, Sheet, validate_circles};
use crate::io::ext_repr::{ExtInstance, ExtNumber, ExtSheet};
use anyhow::{Result, bail};

/// Converts an [`ExtInstance`] into a [`Sheet`] and the requested circles, validating both.
/// All problems found are reported together.
pub fn import(ext_instance: &ExtInstance) -> Result<(Sheet, Vec<CircleSpec>)> {
    let mut errors = vec![];

    let sheet = import_sheet(&ext_instance.sheet, &mut errors);

    let circles = ext_instance
        .circles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let diameter = read_number(&c.diameter, &format!("circle {}: diameter", i + 1), &mut errors);
            CircleSpec::new(diameter, c.color.clone())
        })
        .collect::<Vec<_>>();

    //unreadable diameters were already reported
    if errors.is_empty() {
        errors.extend(validate_circles(&circles));
    }

    if !errors.is_empty() {
        bail!("invalid instance:\n  {}", errors.join("\n  "));
    }
    Ok((sheet, circles))
}

fn import_sheet(ext_sheet: &ExtSheet, errors: &mut Vec<String>) -> Sheet {
    let width = read_number(&ext_sheet.width, "sheet width", errors);
    let height = read_number(&ext_sheet.height, "sheet height", errors);
    let gap = read_number(&ext_sheet.gap, "sheet gap", errors);

    for (name, value) in [("width", width), ("height", height)] {
        if value.is_finite() && value <= 0.0 {
            errors.push(format!("sheet {name} must be positive (got {value})"));
        }
    }
    if gap.is_finite() && gap < 0.0 {
        errors.push(format!("sheet gap must not be negative (got {gap})"));
    }
    Sheet::new(width, height, gap)
}

fn read_number(number: &ExtNumber, what: &str, errors: &mut Vec<String>) -> f64 {
    match number.value() {
        Some(v) if v.is_finite() => v,
        _ => {
            errors.push(format!("{what} is not a number: {number:?}"));
            f64::NAN
        }
    }
}
