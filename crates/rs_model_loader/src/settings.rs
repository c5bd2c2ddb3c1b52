use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ImportSettings {
    pub is_triangulate: bool,
    pub is_flip_uvs: bool,
    pub is_calc_tangent_space: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            is_triangulate: true,
            is_flip_uvs: true,
            is_calc_tangent_space: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetSettings {
    pub io_thread_count: usize,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self { io_thread_count: 1 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub import_setting: ImportSettings,
    pub asset_setting: AssetSettings,
}

impl Settings {
    pub fn from_json_str(json: &str) -> crate::error::Result<Settings> {
        serde_json::from_str(json).map_err(|err| crate::error::Error::Settings(err))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::Result<Settings> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            crate::error::Error::IO(err, Some(format!("Can not read {}", path.display())))
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod test {
    use super::Settings;

    #[test]
    fn test_case_default_settings() {
        let settings = Settings::default();
        assert!(settings.import_setting.is_triangulate);
        assert!(settings.import_setting.is_flip_uvs);
        assert!(settings.import_setting.is_calc_tangent_space);
        assert_eq!(settings.asset_setting.io_thread_count, 1);
    }

    #[test]
    fn test_case_partial_json() {
        let settings =
            Settings::from_json_str(r#"{ "import_setting": { "is_flip_uvs": false } }"#).unwrap();
        assert!(!settings.import_setting.is_flip_uvs);
        assert!(settings.import_setting.is_triangulate);
        assert_eq!(settings.asset_setting.io_thread_count, 1);
    }

    #[test]
    fn test_case_invalid_json() {
        assert!(Settings::from_json_str("{ import_setting").is_err());
    }
}
