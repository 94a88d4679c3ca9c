use deckhand_cli::run;
use serde_json::Value;
use serial_test::serial;

const VARS: [&str; 4] = [
    "DECKHAND_CONFIG",
    "DECKHAND_STORE_DIR",
    "DECKHAND_SHUFFLE",
    "DECKHAND_SEED",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn run_cfg(extra: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["deckhand"];
    argv.extend_from_slice(extra);
    argv.push("cfg");
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    clear_env();
    let (code, stdout, _) = run_cfg(&[]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["store_dir"]["value"], ".deckhand");
    assert_eq!(json["store_dir"]["source"], "default");
    assert_eq!(json["shuffle"]["value"], true);
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn cli_over_env_over_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("deckhand.toml");
    std::fs::write(
        &cfg_path,
        "store_dir = \"from-file\"\nshuffle = false\nseed = 456\n",
    )
    .unwrap();
    unsafe {
        std::env::set_var("DECKHAND_CONFIG", &cfg_path);
    }

    let (code, stdout, _) = run_cfg(&[]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["store_dir"]["value"], "from-file");
    assert_eq!(json["store_dir"]["source"], "file");
    assert_eq!(json["shuffle"]["value"], false);
    assert_eq!(json["seed"]["value"], 456);

    unsafe {
        std::env::set_var("DECKHAND_STORE_DIR", "from-env");
        std::env::set_var("DECKHAND_SEED", "7");
    }
    let (_, stdout, _) = run_cfg(&[]);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["store_dir"]["value"], "from-env");
    assert_eq!(json["store_dir"]["source"], "env");
    assert_eq!(json["seed"]["value"], 7);
    assert_eq!(json["shuffle"]["source"], "file");

    let (_, stdout, _) = run_cfg(&["--store", "from-cli"]);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["store_dir"]["value"], "from-cli");
    assert_eq!(json["store_dir"]["source"], "cli");

    clear_env();
}

#[test]
#[serial]
fn invalid_env_value_is_a_config_error() {
    clear_env();
    unsafe {
        std::env::set_var("DECKHAND_SHUFFLE", "sometimes");
    }
    let (code, _, stderr) = run_cfg(&[]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Configuration error"), "stderr={}", stderr);
    clear_env();
}

#[test]
#[serial]
fn configured_seed_makes_create_reproducible() {
    clear_env();
    let store = tempfile::tempdir().unwrap();
    let store_path = store.path().to_string_lossy().into_owned();
    unsafe {
        std::env::set_var("DECKHAND_SEED", "42");
    }
    let mut cards = Vec::new();
    for _ in 0..2 {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            ["deckhand", "--store", store_path.as_str(), "create"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
        let json: Value = serde_json::from_slice(&out).unwrap();
        cards.push(json["cards"].clone());
    }
    assert_eq!(cards[0], cards[1]);
    clear_env();
}
