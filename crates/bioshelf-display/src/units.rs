//! Quantity display strings.
//!
//! A small set of sanctioned unit names gets locale-style formatting
//! (grouped digits, short unit symbol, en-US conventions). Anything else
//! falls through to passthrough or a best-effort English pluralizer. The
//! pluralizer is heuristic by design; it is a known limitation for unit
//! words with irregular plurals, not a defect.

/// Short symbol for a sanctioned unit name. Milligram shares the gram
/// family's formatting with the symbol rewritten to `mg`.
fn sanctioned_symbol(unit: &str) -> Option<&'static str> {
    match unit {
        "milliliter" => Some("mL"),
        "gram" | "grams" => Some("g"),
        "milligram" => Some("mg"),
        _ => None,
    }
}

/// Render a quantity the way a JSON number prints: integers without a
/// decimal point, everything else with its natural shortest form.
fn format_number(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

/// en-US digit grouping on the integer part, e.g. `1234.5` → `1,234.5`.
fn format_grouped(quantity: f64) -> String {
    let plain = format_number(quantity);
    let (int_part, rest) = match plain.find('.') {
        Some(pos) => plain.split_at(pos),
        None => (plain.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{rest}")
}

/// Format a quantity with its unit for display.
///
/// `None` renders as the empty string and an empty unit as the bare number.
/// Sanctioned unit names get grouped digits and their short symbol; units
/// already ending in `L` or `g` are taken as abbreviations and passed
/// through; everything else is pluralized heuristically.
pub fn format_quantity(quantity: Option<f64>, unit: &str) -> String {
    let Some(quantity) = quantity else {
        return String::new();
    };
    if unit.is_empty() {
        return format_number(quantity);
    }

    if let Some(symbol) = sanctioned_symbol(unit) {
        return format!("{} {symbol}", format_grouped(quantity));
    }

    // Ad hoc abbreviations like mL, mg, µL: already short, leave alone.
    if unit.ends_with('L') || unit.ends_with('g') {
        return format!("{} {unit}", format_number(quantity));
    }

    let word = pluralize(unit, quantity);
    format!("{} {word}", format_number(quantity))
}

/// Best-effort English singular/plural adjustment. The `ss` and `es`
/// branches are ordered before the bare `s` branch on purpose: `glass`
/// must not lose its final `s` and `boxes` must shed both letters.
fn pluralize(unit: &str, quantity: f64) -> String {
    if quantity == 1.0 {
        if unit.ends_with("ss") {
            unit.to_string()
        } else if let Some(stem) = unit.strip_suffix("es") {
            stem.to_string()
        } else if let Some(stem) = unit.strip_suffix('s') {
            stem.to_string()
        } else {
            unit.to_string()
        }
    } else if unit.ends_with("ss") {
        format!("{unit}es")
    } else if unit.ends_with('s') {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
