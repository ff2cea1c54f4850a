//! Property tests for the substitution engine.

use proptest::prelude::*;

use envswitch::engine::braces::balanced_span;
use envswitch::{rewrite, EnvConfig, OutputFormat, ServerValue};

fn url_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9:/._-]{1,40}").unwrap()
}

fn any_config() -> impl Strategy<Value = EnvConfig> {
    (url_value(), url_value(), url_value(), url_value(), url_value()).prop_map(
        |(server, quest, front, walkme, recaptcha)| {
            let mut config = EnvConfig {
                server: ServerValue::Url(server),
                quest_server: quest,
                quest_front: front,
                walkme_url: walkme,
                ..EnvConfig::default()
            };
            config.google.recaptcha = recaptcha;
            config
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second rewrite with the same inputs is a no-op.
    #[test]
    fn property_compact_object_rewrite_idempotent(
        config in any_config(),
        is_dist in any::<bool>(),
    ) {
        let target = "window.ENV = {\n  baseUrl: 'a',\n  questUrl: 'b',\n  questFront: 'c',\n  isDist: true,\n  recaptchaApiKey: 'd',\n};";
        let once = rewrite(target, &config, is_dist, OutputFormat::CompactObject);
        let twice = rewrite(&once, &config, is_dist, OutputFormat::CompactObject);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: a second rewrite with the same inputs is a no-op.
    #[test]
    fn property_var_declarations_rewrite_idempotent(
        config in any_config(),
        is_dist in any::<bool>(),
    ) {
        let target = "var urls = {a: {b: 'x'}};\nvar recaptchaKey = 'k';\nvar isDist = false;\nvar walkMeUrl = 'w';";
        let once = rewrite(target, &config, is_dist, OutputFormat::VarDeclarations);
        let twice = rewrite(&once, &config, is_dist, OutputFormat::VarDeclarations);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: lines without recognized fields pass through byte-for-byte.
    #[test]
    fn property_rewrite_preserves_unrelated_lines(
        config in any_config(),
        prefix in proptest::string::string_regex("[A-Za-z0-9 =;()./_-]{0,60}").unwrap(),
        suffix in proptest::string::string_regex("[A-Za-z0-9 =;()./_-]{0,60}").unwrap(),
    ) {
        let target = format!("{prefix}\nbaseUrl: 'old',\n{suffix}");
        let out = rewrite(&target, &config, false, OutputFormat::CompactObject);
        let expected_prefix = format!("{prefix}\n");
        let expected_suffix = format!(",\n{suffix}");
        prop_assert!(out.starts_with(&expected_prefix));
        prop_assert!(out.ends_with(&expected_suffix));
    }

    /// PROPERTY: the engine never panics, whatever the target holds.
    #[test]
    fn property_rewrite_never_panics(
        config in any_config(),
        content in "(?s).{0,512}",
        is_dist in any::<bool>(),
    ) {
        let _ = rewrite(&content, &config, is_dist, OutputFormat::CompactObject);
        let _ = rewrite(&content, &config, is_dist, OutputFormat::VarDeclarations);
    }

    /// PROPERTY: a constructed balanced object always closes at its last byte.
    #[test]
    fn property_balanced_span_finds_constructed_close(
        inner in proptest::string::string_regex("[A-Za-z0-9 ,:]{0,40}").unwrap(),
        depth in 1usize..4,
    ) {
        let mut text = String::new();
        for _ in 0..depth {
            text.push('{');
        }
        text.push_str(&inner);
        for _ in 0..depth {
            text.push('}');
        }
        prop_assert_eq!(balanced_span(&text, 0), Some(text.len() - 1));
    }

    /// PROPERTY: brace scanning never panics on arbitrary input.
    #[test]
    fn property_balanced_span_never_panics(
        content in "(?s).{0,256}",
        open in 0usize..300,
    ) {
        let _ = balanced_span(&content, open);
    }
}
