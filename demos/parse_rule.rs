//! Parses a stylesheet and prints it back as canonical CSS.
//!
//! Run with:
//! ```sh
//! CSSEL_LOG=trace cargo run --example parse-rule -- path/to/style.css
//! ```
//! Without an argument the embedded sample below is parsed.

use cssel_rs::parser::{parse_stylesheet, read_stylesheet};
use cssel_rs::{CsselError, LoggerConfig, init_logger, log};

const SAMPLE: &str = r#"
test-simple test.with-class test#with-id test[withattr*=value] .lone-class #lone-id {
    simple-prop: value42;
    another: good-value;
    yet-another: rgba(0, 1, 1, 1);
}

a[href^=https] {
    color: blue;
    broken = value;
    ignored: after-the-error;
}
"#;

fn main() -> Result<(), CsselError> {
    if let Err(err) = init_logger(LoggerConfig::from_env()) {
        eprintln!("logger already installed: {err}");
    }

    let stylesheet = match std::env::args().nth(1) {
        Some(path) => read_stylesheet(path)?,
        None => parse_stylesheet(SAMPLE)?,
    };

    log::info!("parsed {} rule(s)", stylesheet.rules.len());
    println!("{stylesheet}");
    Ok(())
}
