//! Common test utilities for envswitch CLI tests.
//!
//! Provides a command builder with color disabled plus the config and
//! target fixtures the end-to-end tests share.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

/// Build an envswitch command with color disabled for stable output.
pub fn envswitch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_envswitch"));
    cmd.env("NO_COLOR", "1").env("TERM", "dumb");
    cmd
}

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// A full JSON environment config with a scalar server.
pub const CONFIG_TEST_JSON: &str = r#"{
  "server": "https://api.test.example.com",
  "questServer": "https://quest.test.example.com",
  "questFront": "https://front.test.example.com",
  "walkmeUrl": "https://cdn.walkme.test/player.js",
  "firebase": {
    "apiKey": "test-firebase-key",
    "authDomain": "test.firebaseapp.com",
    "databaseURL": "https://test.firebaseio.com",
    "storageBucket": "test.appspot.com",
    "messagingSenderId": "123456789"
  },
  "google": {
    "mapsKey": "test-maps-key",
    "analytics": "UA-TEST-1",
    "recaptcha": "test-recaptcha-key"
  }
}
"#;

/// A JSON config whose server is a service map.
pub const CONFIG_MAP_JSON: &str = r#"{
  "server": {
    "quest": "https://quest.map.example.com",
    "vault": "https://vault.map.example.com"
  },
  "questServer": "https://quest.map.example.com",
  "questFront": "https://front.map.example.com"
}
"#;

/// An object-literal target in the shape of a served Angular config.
pub const TARGET_COMPACT: &str = r#"'use strict';

angular.module('app.config', [])
  .constant('ENV', {
    name: 'frontend',
    baseUrl: "https://api.prod.example.com",
    questUrl: "https://quest.prod.example.com",
    questFront: "https://front.prod.example.com",
    isDist: true,
    recaptchaApiKey: "prod-recaptcha-key",
    timeout: 5000,
  });
"#;

/// A var-declaration target in the shape of a legacy bundle prologue.
pub const TARGET_VARS: &str = r#"var urls = {
  quest: 'https://quest.prod.example.com',
  vault: 'https://vault.prod.example.com'
};
var recaptchaKey = "prod-recaptcha-key";
var isDist = true;
var walkMeUrl = "https://cdn.walkme.prod/player.js";
loadApp(urls);
"#;
