#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use statuspage_server::config;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config::load_from_lookup(lookup(&[])).expect("must load");
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 5000);
    assert_eq!(cfg.environment, "production");
    assert_eq!(cfg.build.build_version, "dev");
    assert_eq!(cfg.build.commit_sha, "local");
    assert_eq!(cfg.build.pipeline_url, "#");
}

#[test]
fn ci_variables_override_defaults() {
    let cfg = config::load_from_lookup(lookup(&[
        ("CI_COMMIT_SHORT_SHA", "abc1234"),
        ("CI_COMMIT_AUTHOR", "Jane Doe <jane@example.com>"),
        ("CI_PIPELINE_URL", "https://example.com/pipe"),
        ("FLASK_ENV", "staging"),
        ("FLASK_RUN_HOST", "0.0.0.0"),
        ("FLASK_RUN_PORT", " 8080 "),
    ]))
    .expect("must load");

    assert_eq!(cfg.build.build_version, "abc1234");
    assert_eq!(cfg.build.commit_author, "Jane Doe <jane@example.com>");
    assert_eq!(cfg.build.pipeline_url, "https://example.com/pipe");
    assert_eq!(cfg.build.job_id, "N/A");
    assert_eq!(cfg.environment, "staging");
    assert_eq!(cfg.server.bind_target(), ("0.0.0.0".to_string(), 8080));
}

#[test]
fn empty_value_is_kept_verbatim() {
    let cfg = config::load_from_lookup(lookup(&[("CI_COMMIT_MESSAGE", "")])).expect("must load");
    assert_eq!(cfg.build.commit_message, "");
}

#[test]
fn invalid_port_is_rejected() {
    let err = config::load_from_lookup(lookup(&[("FLASK_RUN_PORT", "http")])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");

    let err = config::load_from_lookup(lookup(&[("FLASK_RUN_PORT", "70000")])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}

#[test]
fn blank_host_is_rejected() {
    let err = config::load_from_lookup(lookup(&[("FLASK_RUN_HOST", "  ")])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "CONFIG_INVALID");
}
