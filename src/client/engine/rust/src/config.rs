/* src/client/engine/rust/src/config.rs */

use serde::Deserialize;

use crate::error::ConfigError;
use crate::i18n::Locale;

/// Page-level tunables. Every section is optional in the TOML source; a
/// missing section or field takes the value the live site ships with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub kicker: KickerSection,
  #[serde(default)]
  pub typewriter: TypewriterSection,
  #[serde(default)]
  pub cv: CvSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  #[serde(default = "default_start_year")]
  pub start_year: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default)]
  pub default_locale: Locale,
  #[serde(default = "default_storage_key")]
  pub storage_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KickerSection {
  #[serde(default = "default_kicker_interval")]
  pub interval_ms: u64,
  #[serde(default = "default_kicker_fade")]
  pub fade_ms: u64,
  #[serde(default = "default_kicker_phrases")]
  pub phrases: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypewriterSection {
  #[serde(default = "default_typewriter_step")]
  pub step_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CvSection {
  #[serde(default = "default_cv_spanish")]
  pub spanish_href: String,
  #[serde(default = "default_cv_other")]
  pub other_href: String,
}

fn default_start_year() -> i32 {
  2024
}

fn default_storage_key() -> String {
  "lang".to_string()
}

fn default_kicker_interval() -> u64 {
  5000
}

fn default_kicker_fade() -> u64 {
  220
}

fn default_kicker_phrases() -> Vec<String> {
  [
    "Apps · Administración · Implementación · Soporte Funcional",
    "Infraestructura · Seguridad · SysAdmin · Cloud · Escalabilidad",
    "DB · Observabilidad · Métricas · Performance · Optimización",
    "Programación · Python · PowerShell · Bash · Automatización",
    "Oil & Gas · Ingeniería · Perforación · Workover · Geonavegación",
  ]
  .into_iter()
  .map(String::from)
  .collect()
}

fn default_typewriter_step() -> u64 {
  38
}

fn default_cv_spanish() -> String {
  "assets/pdf/CV_DOUGLAS-MENDOZA.pdf".to_string()
}

fn default_cv_other() -> String {
  "assets/pdf/CS_DOUGLAS-MENDOZA.pdf".to_string()
}

impl Default for SiteSection {
  fn default() -> Self {
    Self { start_year: default_start_year() }
  }
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { default_locale: Locale::default(), storage_key: default_storage_key() }
  }
}

impl Default for KickerSection {
  fn default() -> Self {
    Self {
      interval_ms: default_kicker_interval(),
      fade_ms: default_kicker_fade(),
      phrases: default_kicker_phrases(),
    }
  }
}

impl Default for TypewriterSection {
  fn default() -> Self {
    Self { step_ms: default_typewriter_step() }
  }
}

impl Default for CvSection {
  fn default() -> Self {
    Self { spanish_href: default_cv_spanish(), other_href: default_cv_other() }
  }
}

impl CvSection {
  /// Link target for `locale`: the Spanish file for Spanish, the other file
  /// for every other language.
  pub fn href_for(&self, locale: Locale) -> &str {
    if locale == Locale::Es { &self.spanish_href } else { &self.other_href }
  }
}

impl PageConfig {
  pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
    let config: PageConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.i18n.storage_key.trim().is_empty() {
      return Err(ConfigError::Invalid("i18n.storage_key must not be empty".into()));
    }
    if self.kicker.interval_ms == 0 {
      return Err(ConfigError::Invalid("kicker.interval_ms must be greater than zero".into()));
    }
    if self.kicker.fade_ms >= self.kicker.interval_ms {
      return Err(ConfigError::Invalid(format!(
        "kicker.fade_ms ({}) must be shorter than kicker.interval_ms ({})",
        self.kicker.fade_ms, self.kicker.interval_ms
      )));
    }
    if self.kicker.phrases.is_empty() {
      return Err(ConfigError::Invalid("kicker.phrases must not be empty".into()));
    }
    if self.typewriter.step_ms == 0 {
      return Err(ConfigError::Invalid("typewriter.step_ms must be greater than zero".into()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_source_uses_defaults() {
    let config = PageConfig::from_toml("").unwrap();
    assert_eq!(config.site.start_year, 2024);
    assert_eq!(config.i18n.default_locale, Locale::Es);
    assert_eq!(config.i18n.storage_key, "lang");
    assert_eq!(config.kicker.interval_ms, 5000);
    assert_eq!(config.kicker.fade_ms, 220);
    assert_eq!(config.kicker.phrases.len(), 5);
    assert_eq!(config.typewriter.step_ms, 38);
  }

  #[test]
  fn partial_sections_keep_other_defaults() {
    let config = PageConfig::from_toml(
      r#"
[i18n]
default_locale = "pt-BR"

[kicker]
phrases = ["uno", "dos"]
"#,
    )
    .unwrap();
    assert_eq!(config.i18n.default_locale, Locale::PtBr);
    assert_eq!(config.i18n.storage_key, "lang");
    assert_eq!(config.kicker.phrases, vec!["uno", "dos"]);
    assert_eq!(config.kicker.interval_ms, 5000);
  }

  #[test]
  fn rejects_unknown_locale() {
    let err = PageConfig::from_toml("[i18n]\ndefault_locale = \"fr\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
  }

  #[test]
  fn rejects_empty_phrases() {
    let err = PageConfig::from_toml("[kicker]\nphrases = []").unwrap_err();
    assert_eq!(err.to_string(), "invalid page config: kicker.phrases must not be empty");
  }

  #[test]
  fn rejects_zero_interval() {
    let err = PageConfig::from_toml("[kicker]\ninterval_ms = 0").unwrap_err();
    assert!(err.to_string().contains("interval_ms"));
  }

  #[test]
  fn rejects_fade_longer_than_interval() {
    let err = PageConfig::from_toml("[kicker]\ninterval_ms = 100\nfade_ms = 100").unwrap_err();
    assert!(err.to_string().contains("fade_ms (100)"));
  }

  #[test]
  fn rejects_blank_storage_key() {
    assert!(PageConfig::from_toml("[i18n]\nstorage_key = \" \"").is_err());
  }

  #[test]
  fn cv_href_by_locale() {
    let cv = CvSection::default();
    assert_eq!(cv.href_for(Locale::Es), "assets/pdf/CV_DOUGLAS-MENDOZA.pdf");
    assert_eq!(cv.href_for(Locale::En), "assets/pdf/CS_DOUGLAS-MENDOZA.pdf");
    assert_eq!(cv.href_for(Locale::PtBr), "assets/pdf/CS_DOUGLAS-MENDOZA.pdf");
  }
}
