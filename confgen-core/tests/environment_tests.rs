//! Validation gate and context builder behaviour over whole environments.

use confgen_core::{
    build_context, validate_environment, vars, ConfigError, MapEnv, RenderContext,
};
use rstest::rstest;

fn valid_env() -> MapEnv {
    MapEnv::new()
        .with(vars::OTLP_ENDPOINT, "https://example:4317")
        .with(vars::OTLP_API_KEY, "k")
}

// ---------------------------------------------------------------------------
// 1. Validation gate
// ---------------------------------------------------------------------------

#[rstest]
#[case::nothing_set(&[])]
#[case::both_empty(&[(vars::OTLP_ENDPOINT, ""), (vars::ELASTICSEARCH_ENDPOINT, "")])]
#[case::keys_but_no_endpoint(&[(vars::OTLP_API_KEY, "k"), (vars::ELASTICSEARCH_API_KEY, "k")])]
#[case::monitoring_only(&[(vars::MONITORING_OTLP_ENDPOINT, "https://mon:4317"), (vars::MONITORING_API_KEY, "k")])]
fn missing_endpoint_is_rejected(#[case] pairs: &[(&str, &str)]) {
    let env: MapEnv = pairs.iter().copied().collect();
    assert_eq!(validate_environment(&env), Err(ConfigError::MissingEndpoint));
}

#[rstest]
#[case::otlp_no_keys(&[(vars::OTLP_ENDPOINT, "https://otlp:4317")])]
#[case::es_empty_keys(&[(vars::ELASTICSEARCH_ENDPOINT, "https://es:9200"), (vars::OTLP_API_KEY, ""), (vars::ELASTICSEARCH_API_KEY, "")])]
#[case::monitoring_key_does_not_count(&[(vars::OTLP_ENDPOINT, "https://otlp:4317"), (vars::MONITORING_API_KEY, "k")])]
fn missing_credential_is_rejected(#[case] pairs: &[(&str, &str)]) {
    let env: MapEnv = pairs.iter().copied().collect();
    assert_eq!(validate_environment(&env), Err(ConfigError::MissingCredential));
}

#[rstest]
#[case::otlp_pair(vars::OTLP_ENDPOINT, vars::OTLP_API_KEY)]
#[case::es_pair(vars::ELASTICSEARCH_ENDPOINT, vars::ELASTICSEARCH_API_KEY)]
#[case::mixed(vars::ELASTICSEARCH_ENDPOINT, vars::OTLP_API_KEY)]
fn one_endpoint_and_one_key_pass(#[case] endpoint: &str, #[case] key: &str) {
    let env = MapEnv::new().with(endpoint, "https://host:1").with(key, "k");
    assert!(validate_environment(&env).is_ok());
}

#[test]
fn diagnostics_match_expected_wording() {
    assert_eq!(
        ConfigError::MissingEndpoint.to_string(),
        "expected OTLP_ENDPOINT or ELASTICSEARCH_ENDPOINT"
    );
    assert_eq!(
        ConfigError::MissingCredential.to_string(),
        "expected OTLP_API_KEY or ELASTICSEARCH_API_KEY"
    );
}

// ---------------------------------------------------------------------------
// 2. Context builder
// ---------------------------------------------------------------------------

#[test]
fn defaults_fill_unset_fields() {
    let ctx = build_context(&valid_env()).expect("context");
    assert_eq!(
        ctx,
        RenderContext {
            otlp_endpoint: "https://example:4317".to_string(),
            otlp_api_key: "k".to_string(),
            ..RenderContext::default()
        }
    );
    assert_eq!(ctx.numpipelines, 3);
}

#[rstest]
#[case("5", 5)]
#[case("0", 0)]
#[case("-2", -2)]
#[case(" 12 ", 12)]
fn pipeline_count_is_parsed_permissively(#[case] raw: &str, #[case] expected: i64) {
    let env = valid_env().with(vars::NUM_PIPELINES, raw);
    assert_eq!(build_context(&env).unwrap().numpipelines, expected);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("3.5")]
#[case("99999999999999999999")]
fn bad_pipeline_count_is_invalid_configuration(#[case] raw: &str) {
    let env = valid_env().with(vars::NUM_PIPELINES, raw);
    let err = build_context(&env).unwrap_err();
    assert!(
        matches!(&err, ConfigError::InvalidConfiguration { var, value, .. }
            if *var == "numpipelines" && value == raw),
        "got: {err:?}"
    );
}

#[test]
fn uppercase_pipeline_variable_is_ignored() {
    let env = valid_env().with("NUMPIPELINES", "9");
    assert_eq!(build_context(&env).unwrap().numpipelines, 3);
}

#[test]
fn same_environment_builds_equal_contexts() {
    let env = valid_env()
        .with(vars::ELASTICSEARCH_ENDPOINT, "https://es:9200")
        .with(vars::NUM_PIPELINES, "4");
    assert_eq!(build_context(&env).unwrap(), build_context(&env).unwrap());
}
