//! End-to-end tests for `--js` legacy config loading.

mod common;

use std::fs;

use common::{envswitch, write_file, TARGET_COMPACT, TARGET_VARS};
use tempfile::tempdir;

const CONFIG_TEST_JS: &str = r#"'use strict';

angular.module('app.env', [])
  .constant('CONFIG', {
    server: 'https://api.js.example.com',
    questServer: "https://quest.js.example.com",
    questFront: 'https://front.js.example.com',
    walkmeUrl: 'https://cdn.walkme.js/player.js',
    firebase: {
      apiKey: 'js-firebase-key',
      authDomain: "js.firebaseapp.com",
      databaseURL: 'https://js.firebaseio.com',
      storageBucket: 'js.appspot.com',
      messaginSenderId: '987654321'
    },
    google: {
      mapsKey: 'js-maps-key',
      analytics: 'UA-JS-1',
      recaptcha: 'js-recaptcha-key'
    }
  });
"#;

const CONFIG_MAP_JS: &str = r#"var config = {
  server: {
    quest: 'https://quest.jsmap.example.com',
    agents: 'https://agents.jsmap.example.com',
    cdn: 'https://skip.example.com'
  },
  questServer: 'https://quest.jsmap.example.com'
};
"#;

#[test]
fn test_switch_reads_js_config() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("configs/config.test.js"), CONFIG_TEST_JS);
    write_file(&dir.path().join("serverConfig.js"), TARGET_COMPACT);

    let output = envswitch()
        .current_dir(dir.path())
        .args(["switch", "--env", "test", "--target", "serverConfig.js", "--js"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let rewritten = fs::read_to_string(dir.path().join("serverConfig.js")).unwrap();
    assert!(rewritten.contains(r#"baseUrl: "https://api.js.example.com","#));
    assert!(rewritten.contains(r#"questUrl: "https://quest.js.example.com","#));
    assert!(rewritten.contains(r#"questFront: "https://front.js.example.com","#));
    assert!(rewritten.contains(r#"recaptchaApiKey: "js-recaptcha-key","#));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("config.test.js"), "stdout:\n{stdout}");
}

#[test]
fn test_js_map_server_feeds_var_urls() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("configs/config.jsmap.js"), CONFIG_MAP_JS);
    write_file(&dir.path().join("bundle.js"), TARGET_VARS);

    let output = envswitch()
        .current_dir(dir.path())
        .args([
            "switch",
            "--env", "jsmap",
            "--target", "bundle.js",
            "--js",
            "--format", "var-declarations",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rewritten = fs::read_to_string(dir.path().join("bundle.js")).unwrap();
    // only known service names make it into the map; `cdn` is dropped
    assert!(rewritten.contains(
        r#"var urls = {"agents":"https://agents.jsmap.example.com","quest":"https://quest.jsmap.example.com"};"#
    ));
    assert!(!rewritten.contains("skip.example.com"));
}

#[test]
fn test_missing_js_config_reports_js_path() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("serverConfig.js"), TARGET_COMPACT);

    let output = envswitch()
        .current_dir(dir.path())
        .args(["switch", "--env", "test", "--target", "serverConfig.js", "--js"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"), "stderr:\n{stderr}");
    assert!(stderr.contains("config.test.js"), "stderr:\n{stderr}");
}
