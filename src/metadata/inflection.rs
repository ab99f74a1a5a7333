//! Name inflection and normalization for property lookups.
//!
//! Forms address columns by accessor names (`updatedAt`, `IsActive`) as often
//! as by column names (`updated_at`), and to-many relations by their plural.
//! Uses the `inflector` crate with a table of irregular plurals that show up
//! in schemas.

use inflector::Inflector;

/// Irregular plurals that inflector doesn't handle well for model names.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
];

/// Pluralize a word, handling irregulars first then falling back to inflector.
///
/// Irregulars keep the leading capital of the input (`Person` -> `People`).
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *singular || lower == *plural {
            return match_leading_case(word, plural);
        }
    }

    // Compound names pluralize their last word (MainAuthor -> MainAuthors).
    let split = word
        .char_indices()
        .skip(1)
        .filter(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i)
        .last();
    if let Some(idx) = split {
        let (head, tail) = word.split_at(idx);
        return format!("{}{}", head, pluralize(tail));
    }

    word.to_plural()
}

fn match_leading_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        replacement.to_title_case()
    } else {
        replacement.to_string()
    }
}

/// Strip a `table.` prefix from a property name.
pub fn strip_table_prefix(property: &str) -> &str {
    split_table_prefix(property).1
}

/// Split `table.property` into its optional table prefix and the property.
pub fn split_table_prefix(property: &str) -> (Option<&str>, &str) {
    match property.rfind('.') {
        Some(idx) => (Some(&property[..idx]), &property[idx + 1..]),
        None => (None, property),
    }
}

/// Last segment of a model identifier (`App\Model\Item` or `app::model::Item` -> `Item`).
pub fn short_model_name(model: &str) -> &str {
    model
        .rsplit(['\\', ':', '/'])
        .find(|s| !s.is_empty())
        .unwrap_or(model)
}

/// Column-style spelling of a property (`updatedAt` -> `updated_at`).
pub fn to_column_name(property: &str) -> String {
    property.to_snake_case()
}

/// Accessor-style spelling of a column (`updated_at` -> `UpdatedAt`).
pub fn to_accessor_name(column: &str) -> String {
    column.to_pascal_case()
}
