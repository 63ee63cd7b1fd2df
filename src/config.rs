use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AgariError, AgariResult};
use crate::model::PatternName;

// 判定に用いる和了形の構成
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgariConfig {
    // 七対子で同じ牌の対子の重複を認めない
    pub strict_seven_pairs: bool,
    // 判定する和了形 (この順に結果が並ぶ)
    pub patterns: Vec<PatternName>,
}

impl Default for AgariConfig {
    fn default() -> Self {
        Self {
            strict_seven_pairs: false,
            patterns: PatternName::ALL.to_vec(),
        }
    }
}

impl AgariConfig {
    pub fn from_json(json: &str) -> AgariResult<Self> {
        serde_json::from_str(json).map_err(|e| AgariError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> AgariResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AgariError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

#[test]
fn test_config_json() {
    let cfg = AgariConfig::from_json(r#"{"strict_seven_pairs": true}"#).unwrap();
    assert!(cfg.strict_seven_pairs);
    assert_eq!(cfg.patterns, PatternName::ALL.to_vec());

    let cfg = AgariConfig::from_json(r#"{"patterns": ["thirteen_orphans", "regular"]}"#).unwrap();
    assert!(!cfg.strict_seven_pairs);
    assert_eq!(
        cfg.patterns,
        vec![PatternName::ThirteenOrphans, PatternName::Regular]
    );

    assert_eq!(AgariConfig::from_json("{}").unwrap(), AgariConfig::default());
    assert!(matches!(
        AgariConfig::from_json(r#"{"patterns": ["nine_gates"]}"#),
        Err(AgariError::Config(_))
    ));
    assert!(AgariConfig::from_json(r#"{"strict": true}"#).is_err());
    assert!(AgariConfig::from_file("no/such/config.json").is_err());
}
