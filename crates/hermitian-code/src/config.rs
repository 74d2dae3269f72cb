// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::builder::MatrixStrategy;
use crate::errors::{HermitianCodeError, HermitianCodeResult};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables overriding configuration values.
pub const ENV_PREFIX: &str = "HERMITIAN_CODE_";

/// Parameters of a Hermitian code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HermitianCodeConfig {
    /// Curve parameter, a prime power
    pub m: u32,
    /// Divisor degree; `m^3 - m^2 + m + 1` when absent
    #[serde(default)]
    pub a: Option<usize>,
    /// Matrix construction strategy
    #[serde(default)]
    pub strategy: MatrixStrategy,
}

impl Default for HermitianCodeConfig {
    fn default() -> Self {
        Self {
            m: 4,
            a: None,
            strategy: MatrixStrategy::Direct,
        }
    }
}

/// Load configuration from defaults, an optional YAML file and `HERMITIAN_CODE_*`
/// environment variables, later sources taking precedence.
pub fn load_config(path: Option<&Path>) -> HermitianCodeResult<HermitianCodeConfig> {
    let mut figment = Figment::from(Serialized::defaults(HermitianCodeConfig::default()));

    if let Some(path) = path {
        if !path.exists() {
            return Err(HermitianCodeError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }
        figment = figment.merge(Yaml::file(path));
    }

    Ok(figment.merge(Env::prefixed(ENV_PREFIX)).extract()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config, HermitianCodeConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_yaml_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "code.yaml",
                r#"
m: 2
a: 6
strategy: dual
"#,
            )?;
            let config = load_config(Some(Path::new("code.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(
                config,
                HermitianCodeConfig {
                    m: 2,
                    a: Some(6),
                    strategy: MatrixStrategy::Dual,
                }
            );

            jail.set_env("HERMITIAN_CODE_A", "7");
            let config = load_config(Some(Path::new("code.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.a, Some(7));
            assert_eq!(config.m, 2);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file() {
        Jail::expect_with(|_jail| {
            let err = load_config(Some(Path::new("absent.yaml"))).unwrap_err();
            assert!(matches!(err, HermitianCodeError::Config { .. }));
            Ok(())
        });
    }
}
