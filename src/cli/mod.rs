//! Subcommands of the `conda-version` binary
//!
//! Each command renders its result to a `String`; `main` only prints it.

pub mod output;

use clap::Subcommand;
use serde::Serialize;
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::version::Version;
use crate::version::select::{latest_compatible, sort_versions};

use output::{Comparison, Compatibility, LatestCompatible, OrderingName, ParsedVersion, PrefixMatch};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the canonical form of each version
    Parse {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Compare two versions, printing `<`, `==` or `>`
    Compare { lhs: String, rhs: String },
    /// Check whether VERSION matches PREFIX.*
    StartsWith { version: String, prefix: String },
    /// Check whether NEWER is a compatible upgrade of OLDER
    Compatible {
        newer: String,
        older: String,
        /// Index of the first segment allowed to change
        #[arg(long)]
        level: Option<usize>,
    },
    /// Sort versions in ascending order, skipping invalid ones
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print the newest compatible upgrade of CURRENT among AVAILABLE
    Latest {
        current: String,
        #[arg(required = true)]
        available: Vec<String>,
        /// Index of the first segment allowed to change
        #[arg(long)]
        level: Option<usize>,
    },
}

/// Run `command` and render its output in the configured format.
pub fn run(command: &Command, config: &Config) -> anyhow::Result<String> {
    debug!("Running {:?}", command);
    let json = config.output == OutputFormat::Json;

    match command {
        Command::Parse { versions } => {
            let parsed = versions
                .iter()
                .map(|text| Version::parse(text).map(|v| ParsedVersion::new(text, v)))
                .collect::<Result<Vec<_>, _>>()?;
            if json {
                return to_json(&parsed);
            }
            Ok(lines(parsed.iter().map(|p| p.canonical.to_string())))
        }
        Command::Compare { lhs, rhs } => {
            let lhs = Version::parse(lhs)?;
            let rhs = Version::parse(rhs)?;
            let ordering = OrderingName::from(lhs.cmp(&rhs));
            if json {
                return to_json(&Comparison { lhs, rhs, ordering });
            }
            Ok(ordering.symbol().to_string())
        }
        Command::StartsWith { version, prefix } => {
            let version = Version::parse(version)?;
            let prefix = Version::parse(prefix)?;
            let matches = version.starts_with(&prefix);
            if json {
                return to_json(&PrefixMatch {
                    version,
                    prefix,
                    matches,
                });
            }
            Ok(matches.to_string())
        }
        Command::Compatible {
            newer,
            older,
            level,
        } => {
            let newer = Version::parse(newer)?;
            let older = Version::parse(older)?;
            let level = level.unwrap_or(config.compatible_level);
            let compatible = newer.compatible_with(&older, level);
            if json {
                return to_json(&Compatibility {
                    newer,
                    older,
                    level,
                    compatible,
                });
            }
            Ok(compatible.to_string())
        }
        Command::Sort { versions } => {
            let sorted = sort_versions(versions);
            if json {
                return to_json(&sorted);
            }
            Ok(lines(sorted.iter().map(ToString::to_string)))
        }
        Command::Latest {
            current,
            available,
            level,
        } => {
            let current = Version::parse(current)?;
            let level = level.unwrap_or(config.compatible_level);
            let latest = latest_compatible(&current, available, level);
            if json {
                return to_json(&LatestCompatible {
                    current,
                    level,
                    latest,
                });
            }
            Ok(latest.map(|v| v.to_string()).unwrap_or_default())
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn text_config() -> Config {
        Config::default()
    }

    fn json_config() -> Config {
        Config {
            output: OutputFormat::Json,
            ..Config::default()
        }
    }

    fn run_json(command: Command) -> Value {
        serde_json::from_str(&run(&command, &json_config()).unwrap()).unwrap()
    }

    #[rstest]
    #[case(Command::Parse { versions: strings(&["1.0-Post-1", "2!3"]) }, "1.0.0post.1\n2!3")]
    #[case(Command::Compare { lhs: "1.0dev".into(), rhs: "1.0".into() }, "<")]
    #[case(Command::Compare { lhs: "1.2".into(), rhs: "1.2.0".into() }, "==")]
    #[case(Command::Compare { lhs: "1!0.1".into(), rhs: "2.0".into() }, ">")]
    #[case(Command::StartsWith { version: "1.2.3".into(), prefix: "1.2".into() }, "true")]
    #[case(Command::StartsWith { version: "1.3.0".into(), prefix: "1.2".into() }, "false")]
    #[case(Command::Compatible { newer: "1.3.0".into(), older: "1.2.5".into(), level: None }, "true")]
    #[case(Command::Compatible { newer: "1.3.0".into(), older: "1.2.5".into(), level: Some(2) }, "false")]
    #[case(Command::Sort { versions: strings(&["2.0", "1.0post1", "bad..", "1.0"]) }, "1.0\n1.0post1\n2.0")]
    #[case(Command::Latest { current: "1.2.3".into(), available: strings(&["1.2.5", "1.3.0", "2.0"]), level: None }, "1.3.0")]
    #[case(Command::Latest { current: "2.0".into(), available: strings(&["1.2.5", "2.0"]), level: None }, "")]
    fn run_renders_text(#[case] command: Command, #[case] expected: &str) {
        assert_eq!(run(&command, &text_config()).unwrap(), expected);
    }

    #[test]
    fn run_fails_on_invalid_version() {
        let command = Command::Compare {
            lhs: "1..0".into(),
            rhs: "1.0".into(),
        };

        let err = run(&command, &text_config()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error parsing version '1..0'. Empty part in '1..0'."
        );
    }

    #[test]
    fn parse_renders_json_structure() {
        let value = run_json(Command::Parse {
            versions: strings(&["1!2.0rc1+cuda.11"]),
        });

        assert_eq!(
            value,
            json!([{
                "input": "1!2.0rc1+cuda.11",
                "canonical": "1!2.0rc1+0cuda.11",
                "epoch": 1,
                "version": ["2", "0rc1"],
                "local": ["0cuda", "11"]
            }])
        );
    }

    #[test]
    fn compare_renders_json_ordering() {
        let value = run_json(Command::Compare {
            lhs: "1.0".into(),
            rhs: "1.0post1".into(),
        });

        assert_eq!(
            value,
            json!({ "lhs": "1.0", "rhs": "1.0post1", "ordering": "less" })
        );
    }

    #[test]
    fn compatible_json_uses_configured_level() {
        let config = Config {
            output: OutputFormat::Json,
            compatible_level: 2,
            ..Config::default()
        };
        let command = Command::Compatible {
            newer: "1.2.6".into(),
            older: "1.2.5".into(),
            level: None,
        };

        let value: Value = serde_json::from_str(&run(&command, &config).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({ "newer": "1.2.6", "older": "1.2.5", "level": 2, "compatible": true })
        );
    }

    #[test]
    fn latest_json_reports_null_when_up_to_date() {
        let value = run_json(Command::Latest {
            current: "2.0".into(),
            available: strings(&["1.0", "2.0"]),
            level: Some(0),
        });

        assert_eq!(
            value,
            json!({ "current": "2.0", "level": 0, "latest": null })
        );
    }

    #[test]
    fn sort_json_is_array_of_strings() {
        let value = run_json(Command::Sort {
            versions: strings(&["1.10", "1.9"]),
        });

        assert_eq!(value, json!(["1.9", "1.10"]));
    }
}
