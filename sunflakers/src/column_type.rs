//! Maps raw Snowflake column type tags to UI-facing categories and icons.

/// Semantic category plus display icon for a raw column type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnClass {
    pub category: String,
    pub icon: String,
}

/// Classify a raw Snowflake type tag.
///
/// Any `TIMESTAMP*` variant is a datetime and `FLOAT` is a number; every
/// other tag passes through lowercased, so unrecognized Snowflake types flow
/// through unchanged instead of being forced into a fixed enum.
pub fn classify(raw_type: &str) -> ColumnClass {
    let category = if raw_type.starts_with("TIMESTAMP") {
        "datetime".to_string()
    } else if raw_type == "FLOAT" {
        "number".to_string()
    } else {
        raw_type.to_lowercase()
    };
    ColumnClass {
        category,
        icon: type_icon(raw_type),
    }
}

/// Icon name for a raw column type tag.
///
/// Unknown tags fall back to the tag itself, which the editor then shows as
/// a plain label rather than an icon. Longstanding quirk, kept as-is.
pub fn type_icon(raw_type: &str) -> String {
    if raw_type.is_empty() {
        String::new()
    } else if raw_type == "TEXT" {
        "clipboard-alt".to_string()
    } else if raw_type.starts_with("TIMESTAMP") {
        "clock-nine".to_string()
    } else if raw_type == "NUMBER" || raw_type == "FLOAT" {
        "calculator-alt".to_string()
    } else if raw_type == "DATE" {
        "calendar-alt".to_string()
    } else if raw_type == "TIME" {
        "stopwatch-slash".to_string()
    } else {
        raw_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_variants_are_datetime() {
        assert_eq!(classify("TIMESTAMP_NTZ").category, "datetime");
        assert_eq!(classify("TIMESTAMP_TZ").category, "datetime");
        assert_eq!(classify("TIMESTAMP").icon, "clock-nine");
    }

    #[test]
    fn float_is_number_and_number_lowercases() {
        assert_eq!(classify("FLOAT").category, "number");
        assert_eq!(classify("FLOAT").icon, "calculator-alt");
        // NUMBER only matches the icon table; its category is the lowercased tag
        assert_eq!(classify("NUMBER").category, "number");
        assert_eq!(classify("NUMBER").icon, "calculator-alt");
    }

    #[test]
    fn unrecognized_tags_pass_through() {
        let class = classify("VARIANT");
        assert_eq!(class.category, "variant");
        assert_eq!(class.icon, "VARIANT");
    }

    #[test]
    fn known_scalar_icons() {
        assert_eq!(type_icon("TEXT"), "clipboard-alt");
        assert_eq!(type_icon("DATE"), "calendar-alt");
        assert_eq!(type_icon("TIME"), "stopwatch-slash");
        assert_eq!(type_icon(""), "");
    }
}
