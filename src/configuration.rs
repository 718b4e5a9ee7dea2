use std::collections::HashMap;
use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidayengine::HolidayEngine;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrule::HolidayRule;
use crate::holiday::holidaytable::builtin_definitions;
use crate::holiday::weekdaycorrection::WeekdayCorrection;
use crate::locale::datelocalizer::BuiltinDateLocalizer;
use crate::locale::language::{
    FixedLanguageProvider,
    Language
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Holiday(#[from] HolidayError)
}

fn parse_json_value<T: DeserializeOwned>(json: serde_json::Value) -> Result<T, ConfigurationError> {
    Ok(serde_json::from_value(json)?)
}

fn parse_language(tag: &str) -> Result<Language, ConfigurationError> {
    Ok(tag.parse::<Language>()?)
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    NthWeekday,
    LegacyRow
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType
}

/// Fields shared by every holiday kind.
#[derive(Deserialize)]
struct HolidayJsonProp {
    language: String,
    name: String,
    #[serde(default = "default_true")]
    active: bool,
    #[serde(default)]
    weekday_corrections: HashMap<Weekday, i32>,
    #[serde(default)]
    only_active_if_year_mod_x: u32
}

#[derive(Deserialize)]
struct LegacyRowJsonProp {
    #[serde(default)]
    days_from_easter: i32,
    #[serde(default)]
    absolute_day: i32,
    #[serde(default)]
    absolute_month: i32
}

fn holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ConfigurationError> {
    let typed: HolidayTypedObject = parse_json_value(json.clone())?;
    match typed.holiday_type {
        HolidayType::EasterRelated | HolidayType::FixedDate | HolidayType::NthWeekday => parse_json_value(json),
        HolidayType::LegacyRow => {
            let row: LegacyRowJsonProp = parse_json_value(json)?;
            Ok(HolidayRule::from_legacy_fields(row.days_from_easter, row.absolute_day, row.absolute_month))
        }
    }
}

fn holiday_definition_from_json(json: serde_json::Value) -> Result<HolidayDefinition, ConfigurationError> {
    let rule = holiday_rule_from_json(json.clone())?;
    let json_prop: HolidayJsonProp = parse_json_value(json)?;
    let definition = HolidayDefinition::new(
        parse_language(&json_prop.language)?,
        json_prop.active,
        json_prop.name,
        rule,
        WeekdayCorrection::new(&json_prop.weekday_corrections),
        json_prop.only_active_if_year_mod_x
    );
    definition.validate()?;
    Ok(definition)
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    default_language: String,
    #[serde(default)]
    supported_languages: Option<Vec<String>>,
    #[serde(default = "default_true")]
    include_builtin_holidays: bool,
    #[serde(default)]
    holidays: Vec<serde_json::Value>
}

/// Engine settings and extra holiday definitions loaded from JSON.
///
/// ```json
/// {
///     "default_language": "nl-NL",
///     "supported_languages": ["nl-NL", "en-US"],
///     "include_builtin_holidays": true,
///     "holidays": [
///         { "holiday_type": "FixedDate", "language": "nl-NL", "name": "Sinterklaas", "month": 12, "day": 5 }
///     ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    default_language: Language,
    supported_languages: Vec<Language>,
    include_builtin_holidays: bool,
    holidays: Vec<HolidayDefinition>
}

impl Configuration {
    pub fn from_json_value(json: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json)?;

        let default_language = parse_language(&json_prop.default_language)?;
        let supported_languages = match json_prop.supported_languages {
            Some(tags) => tags
                .iter()
                .map(|tag| parse_language(tag))
                .collect::<Result<Vec<Language>, ConfigurationError>>()?,
            None => Language::ALL.to_vec()
        };
        if !supported_languages.contains(&default_language) {
            return Err(HolidayError::UnsupportedLanguage(default_language.tag().to_owned()).into());
        }

        let holidays = json_prop.holidays
            .into_iter()
            .map(holiday_definition_from_json)
            .collect::<Result<Vec<HolidayDefinition>, ConfigurationError>>()?;

        debug!(
            %default_language,
            languages = supported_languages.len(),
            holidays = holidays.len(),
            "configuration loaded"
        );

        Ok(Configuration {
            default_language,
            supported_languages,
            include_builtin_holidays: json_prop.include_builtin_holidays,
            holidays
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigurationError> {
        let json: serde_json::Value = serde_json::from_reader(reader)?;
        Configuration::from_json_value(json)
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        Configuration::from_reader(BufReader::new(file))
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn supported_languages(&self) -> &[Language] {
        &self.supported_languages
    }

    pub fn include_builtin_holidays(&self) -> bool {
        self.include_builtin_holidays
    }

    pub fn holidays(&self) -> &[HolidayDefinition] {
        &self.holidays
    }

    /// Built-in rows of the supported languages (when enabled) followed by the
    /// configured holidays.
    pub fn build_engine(&self) -> Result<HolidayEngine, ConfigurationError> {
        let mut definitions: Vec<HolidayDefinition> = if self.include_builtin_holidays {
            builtin_definitions()
                .into_iter()
                .filter(|d| self.supported_languages.contains(&d.language()))
                .collect()
        } else {
            Vec::new()
        };
        definitions.extend(self.holidays.iter().cloned());

        let engine = HolidayEngine::with_collaborators(
            definitions,
            &self.supported_languages,
            Arc::new(FixedLanguageProvider::new(self.default_language)),
            Arc::new(BuiltinDateLocalizer)
        )?;
        Ok(engine)
    }
}
