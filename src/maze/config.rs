//! 迷宫配置

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 迷宫生成配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// 列数
    pub width: usize,
    /// 行数
    pub height: usize,
    /// 随机种子
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// 从 JSON 解析配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidArgument(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验尺寸
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidArgument(format!(
                "迷宫尺寸必须为正: {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MazeConfig::default();

        assert_eq!(config.width, 10);
        assert_eq!(config.height, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = MazeConfig::from_json(r#"{"width": 4, "seed": 7}"#).unwrap();

        assert_eq!(config.width, 4);
        assert_eq!(config.height, 10);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            MazeConfig::from_json(r#"{"width": 0}"#),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            MazeConfig::from_json("not json"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
