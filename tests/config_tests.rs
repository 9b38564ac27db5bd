use std::io::Write;

use tempfile::NamedTempFile;
use tradetail::domain::{Cursor, Pair};
use tradetail::error::{ConfigError, Error};
use tradetail::infrastructure::config::logging::LogFormat;
use tradetail::infrastructure::config::settings::Config;
use tradetail::infrastructure::exchange::Since;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_complete_file() {
    let file = write_config(
        r#"
[exchange]
name = "btcchina"
pair = "BTC/CNY"

[logging]
level = "tradetail=debug"
format = "compact"

[transport]
connect_timeout_ms = 1500
timeout_ms = 4000

[tail]
interval_ms = 1000
max_backoff_ms = 60000
buffer = 16
since = "id:1000"
"#,
    );

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.exchange.name, "btcchina");
    assert_eq!(config.exchange.pair, Pair::btc_cny());
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.transport.connect_timeout_ms, 1_500);

    let options = config.tail.options();
    assert_eq!(options.buffer, 16);
    assert_eq!(options.since, Since::Cursor(Cursor::Id(1_000)));
}

#[test]
fn missing_file_is_read_error() {
    let result = Config::load("/definitely/not/here/tradetail.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn malformed_toml_is_parse_error() {
    let file = write_config("[exchange\nname = ");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn invalid_values_rejected_on_load() {
    for contents in [
        "[tail]\ninterval_ms = 0\n",
        "[tail]\nbuffer = 0\n",
        "[tail]\ninterval_ms = 5000\nmax_backoff_ms = 1000\n",
        "[transport]\ntimeout_ms = 0\n",
        "[transport]\nproxy = \"not a url\"\n",
    ] {
        let file = write_config(contents);
        let result = Config::load(file.path());
        assert!(
            matches!(result, Err(Error::Config(ConfigError::InvalidValue { .. }))),
            "{contents:?} should be rejected"
        );
    }
}

#[test]
fn bad_pair_fails_to_parse() {
    let file = write_config("[exchange]\npair = \"bitcoin\"\n");
    assert!(Config::load(file.path()).is_err());
}
