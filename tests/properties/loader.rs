//! Property tests for the tolerant JS config loader.

use proptest::prelude::*;

use envswitch::loader::extract_config;

// no colons: a value ending in another field's `name:` would otherwise
// let that field's pattern borrow the closing quote
fn field_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9/._-]{1,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: extraction never panics on arbitrary input.
    #[test]
    fn property_extract_config_never_panics(content in "(?s).{0,512}") {
        let _ = extract_config(&content);
    }

    /// PROPERTY: each field is found independently of which others are present.
    #[test]
    fn property_fields_extracted_independently(
        quest in proptest::option::of(field_value()),
        front in proptest::option::of(field_value()),
        walkme in proptest::option::of(field_value()),
        maps in proptest::option::of(field_value()),
    ) {
        let mut content = String::from("var config = {\n");
        if let Some(v) = &quest {
            content.push_str(&format!("  questServer: '{v}',\n"));
        }
        if let Some(v) = &front {
            content.push_str(&format!("  questFront: '{v}',\n"));
        }
        if let Some(v) = &walkme {
            content.push_str(&format!("  walkmeUrl: '{v}',\n"));
        }
        if let Some(v) = &maps {
            content.push_str(&format!("  mapsKey: '{v}',\n"));
        }
        content.push_str("};\n");

        let config = extract_config(&content);
        prop_assert_eq!(config.quest_server.as_str(), quest.as_deref().unwrap_or(""));
        prop_assert_eq!(config.quest_front.as_str(), front.as_deref().unwrap_or(""));
        prop_assert_eq!(config.walkme_url.as_str(), walkme.as_deref().unwrap_or(""));
        prop_assert_eq!(config.google.maps_key.as_str(), maps.as_deref().unwrap_or(""));
    }

    /// PROPERTY: single and double quoting read the same.
    #[test]
    fn property_quote_style_irrelevant(value in field_value(), double in any::<bool>()) {
        let content = if double {
            format!("questServer: \"{value}\"")
        } else {
            format!("questServer: '{value}'")
        };
        let config = extract_config(&content);
        prop_assert_eq!(config.quest_server, value);
    }

    /// PROPERTY: a scalar server wins no matter where the field sits.
    #[test]
    fn property_scalar_server_extracted(
        value in field_value(),
        padding in proptest::string::string_regex("[A-Za-z0-9 =;\n]{0,80}").unwrap(),
    ) {
        let content = format!("{padding}\nserver: '{value}'\n");
        let config = extract_config(&content);
        prop_assert_eq!(config.server.as_url(), Some(value.as_str()));
    }
}
