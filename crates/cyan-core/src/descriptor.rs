//! Descriptor handed to the render host

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a matched file is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobType {
    /// Variables are substituted into the file
    Template,
    /// The file is copied byte for byte
    Copy,
}

/// A set of files under `root` matching `glob`, minus `exclude`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRule {
    #[serde(rename = "type")]
    pub kind: GlobType,
    pub exclude: Vec<String>,
    pub glob: String,
    pub root: String,
}

/// Variables substituted into template files; values are always scalars
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    pub vars: BTreeMap<String, String>,
}

/// A named unit of file-processing instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processor {
    pub name: String,
    pub files: Vec<FileRule>,
    pub config: ProcessorConfig,
}

/// A plugin invocation; never emitted by the template prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

/// Full output of a template run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub processors: Vec<Processor>,
    pub plugins: Vec<Plugin>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Descriptor {
        Descriptor {
            processors: vec![Processor {
                name: "cyan/default".to_string(),
                files: vec![FileRule {
                    kind: GlobType::Template,
                    exclude: vec![],
                    glob: "cyan.yaml".to_string(),
                    root: "template".to_string(),
                }],
                config: ProcessorConfig {
                    vars: BTreeMap::from([("username".to_string(), "alice".to_string())]),
                },
            }],
            plugins: vec![],
        }
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["processors"][0]["name"], "cyan/default");
        assert_eq!(value["processors"][0]["files"][0]["type"], "template");
        assert_eq!(value["processors"][0]["files"][0]["glob"], "cyan.yaml");
        assert_eq!(value["processors"][0]["config"]["vars"]["username"], "alice");
        assert_eq!(value["plugins"], serde_json::json!([]));
    }

    #[test]
    fn test_glob_type_names() {
        assert_eq!(serde_json::to_string(&GlobType::Copy).unwrap(), "\"copy\"");
        assert_eq!(
            serde_json::from_str::<GlobType>("\"template\"").unwrap(),
            GlobType::Template
        );
    }

    #[test]
    fn test_yaml_output() {
        let yaml = serde_yaml::to_string(&sample()).unwrap();
        assert!(yaml.contains("type: template"));
        assert!(yaml.contains("plugins: []"));
    }
}
