//! Display names for raw game ids.
//!
//! Used wherever an id has no table entry to take a name from (prerequisite
//! reforms, culture ids, law categories).

/// Scope prefixes stripped before formatting, in order.
const PREFIXES: &[&str] = &[
    "government_reform:",
    "estate_privilege:",
    "law:",
    "policy:",
    "trait:",
    "building:",
    "religion:",
    "culture:",
    "advance:",
];

/// Applied in order after title-casing.
const REPLACEMENTS: &[(&str, &str)] = &[
    (" Vs ", " vs "),
    (" Of ", " of "),
    (" The ", " the "),
    (" And ", " and "),
    (" For ", " for "),
    (" To ", " to "),
    (" In ", " in "),
    (" On ", " on "),
    (" A ", " a "),
    (" An ", " an "),
    ("Hre ", "HRE "),
    (" Hre", " HRE"),
    // "Distribution of Power" law prefix
    ("Dop ", ""),
    ("Io ", "IO "),
    (" Io", " IO"),
    ("Ai ", "AI "),
    (" Ai", " AI"),
];

/// Converts a game id such as `law:dop_crown_power` into a display name.
pub fn prettify_id(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }

    let mut stripped = id;
    for prefix in PREFIXES {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            stripped = rest;
        }
    }

    let mut name = title_case(&stripped.replace('_', " "));
    for (from, to) in REPLACEMENTS {
        name = name.replace(from, to);
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars)
            .collect::<String>()
            .trim()
            .to_string(),
        None => name,
    }
}

/// Uppercases the first letter of every run of letters, lowercases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
