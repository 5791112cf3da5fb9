use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    enum Mode {
        Fast,
        Slow,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        mode: Mode,
        label: Option<String>,
    }

    #[test]
    fn test_enum_is_written_as_plain_name() {
        let serializer = YamlConfigSerializer::new();
        let text = serializer
            .serialize(&Sample { mode: Mode::Slow, label: None })
            .unwrap();
        assert!(text.contains("mode: Slow"));
    }

    #[test]
    fn test_malformed_yaml_reports_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Sample, String> = serializer.deserialize("mode: [unclosed");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }

    #[test]
    fn test_unknown_variant_reports_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Sample, String> = serializer.deserialize("mode: Medium\n");
        assert!(result.is_err());
        let parsed: Sample = serializer.deserialize("mode: Fast\nlabel: x\n").unwrap();
        assert_eq!(parsed, Sample { mode: Mode::Fast, label: Some("x".to_string()) });
    }
}
