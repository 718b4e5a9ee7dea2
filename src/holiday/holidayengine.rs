use std::collections::HashMap;
use std::sync::{
    Arc,
    Mutex,
    PoisonError
};

use chrono::{
    Datelike,
    NaiveDate,
    NaiveDateTime
};
use tracing::debug;

use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidaytable::builtin_definitions;
use crate::holiday::resolvedholiday::ResolvedHoliday;
use crate::locale::datelocalizer::{
    BuiltinDateLocalizer,
    DateLocalizer
};
use crate::locale::language::{
    DEFAULT_LANGUAGE,
    FixedLanguageProvider,
    Language,
    LanguageProvider
};
use crate::time::datearithmetic::zero_time;
use crate::time::easter::EasterCalculator;
use crate::time::nthweekday;
use crate::time::utility::{
    is_supported_year,
    year_or_current
};

pub const NEWLINE: &str = "\r\n";

/// Base dates of the floating (nth-weekday) rows for one year, keyed by the
/// row's index in the definition list.
struct FloatingDates {
    year: i32,
    dates: HashMap<usize, NaiveDate>
}

/// Resolves holiday definitions into concrete dates per year and language.
///
/// The definitions never change after construction. Two caches sit behind
/// locks so the engine can be shared across threads:
/// - Easter Sunday per year (unbounded)
/// - floating-holiday dates of the most recently requested year; the lock is
///   held while a new year is resolved, so at most one recomputation runs.
pub struct HolidayEngine {
    definitions: Vec<HolidayDefinition>,
    supported_languages: Vec<Language>,
    language_provider: Arc<dyn LanguageProvider>,
    localizer: Arc<dyn DateLocalizer>,
    easter: EasterCalculator,
    floating_cache: Mutex<Option<Arc<FloatingDates>>>
}

impl HolidayEngine {
    /// Engine over the built-in table for all supported languages.
    pub fn new() -> Result<HolidayEngine, HolidayError> {
        HolidayEngine::with_collaborators(
            builtin_definitions(),
            &Language::ALL,
            Arc::new(FixedLanguageProvider::default()),
            Arc::new(BuiltinDateLocalizer)
        )
    }

    /// Fails when a definition uses a language outside `supported_languages`
    /// or carries a rule that cannot resolve in every supported year.
    pub fn with_collaborators(
        definitions: Vec<HolidayDefinition>,
        supported_languages: &[Language],
        language_provider: Arc<dyn LanguageProvider>,
        localizer: Arc<dyn DateLocalizer>
    ) -> Result<HolidayEngine, HolidayError> {
        for definition in definitions.iter() {
            if !supported_languages.contains(&definition.language()) {
                return Err(HolidayError::UnsupportedTableLanguage {
                    language: definition.language(),
                    name: definition.name().to_owned()
                });
            }
            definition.validate()?;
        }

        debug!(
            definitions = definitions.len(),
            languages = supported_languages.len(),
            "holiday engine ready"
        );

        Ok(HolidayEngine {
            definitions,
            supported_languages: supported_languages.to_vec(),
            language_provider,
            localizer,
            easter: EasterCalculator::new(),
            floating_cache: Mutex::new(None)
        })
    }

    pub fn all_holidays(&self) -> &[HolidayDefinition] {
        &self.definitions
    }

    pub fn total_holiday_records(&self) -> usize {
        self.definitions.len()
    }

    pub fn supported_languages(&self) -> &[Language] {
        &self.supported_languages
    }

    /// Length in characters of the longest holiday name.
    pub fn size_holiday_name(&self) -> usize {
        self.definitions
            .iter()
            .map(|d| d.name().chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn holiday_count(&self, language: Language, only_active: bool) -> usize {
        self.definitions
            .iter()
            .filter(|d| d.language() == language && (!only_active || d.active()))
            .count()
    }

    /// The provider's current language when the engine supports it, then
    /// [`DEFAULT_LANGUAGE`] when supported, then the first supported language.
    pub fn default_language(&self) -> Language {
        let current = self.language_provider.current_language();
        if self.supported_languages.contains(&current) {
            current
        } else if self.supported_languages.contains(&DEFAULT_LANGUAGE) {
            DEFAULT_LANGUAGE
        } else {
            self.supported_languages.first().copied().unwrap_or(DEFAULT_LANGUAGE)
        }
    }

    fn effective_language(&self, language: Option<&str>) -> Language {
        match language.map(str::parse::<Language>) {
            Some(Ok(l)) if self.supported_languages.contains(&l) => l,
            None => self.default_language(),
            Some(_) => {
                let fallback = self.default_language();
                debug!(requested = ?language, %fallback, "unsupported language, using default");
                fallback
            }
        }
    }

    fn effective_year(&self, year: Option<i32>) -> i32 {
        let effective = year_or_current(year);
        if let Some(requested) = year {
            if !is_supported_year(requested) {
                debug!(requested, effective, "year out of range, using current year");
            }
        }
        effective
    }

    pub fn easter_sunday(&self, year: Option<i32>) -> NaiveDate {
        self.easter.easter_sunday(year)
    }

    /// Day of month of the `n`-th `weekday` (Sunday = 0) in zero-based `month0`.
    pub fn nth_weekday(&self, year: i32, month0: u32, weekday: u32, n: i32) -> Result<u32, HolidayError> {
        nthweekday::nth_weekday(year, month0, weekday, n)
    }

    fn floating_dates(&self, year: i32) -> Result<Arc<FloatingDates>, HolidayError> {
        let mut cache = self.floating_cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = cache.as_ref() {
            if cached.year == year {
                return Ok(Arc::clone(cached));
            }
        }

        debug!(year, "resolving floating holidays");
        let mut dates = HashMap::new();
        for (index, definition) in self.definitions.iter().enumerate() {
            if definition.rule().is_floating() {
                dates.insert(index, definition.rule().base_date(year, &self.easter)?);
            }
        }

        let resolved = Arc::new(FloatingDates { year, dates });
        *cache = Some(Arc::clone(&resolved));
        Ok(resolved)
    }

    /// Active holidays of `language` in `year`, in table order.
    ///
    /// An absent or unsupported language falls back to [`Self::default_language`];
    /// an absent year or one outside 1583..=9999 falls back to the current year.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn get_holidays_for_year(
        &self,
        year: Option<i32>,
        language: Option<&str>
    ) -> Result<Vec<ResolvedHoliday>, HolidayError> {
        let language = self.effective_language(language);
        let year = self.effective_year(year);
        let floating = self.floating_dates(year)?;

        self.definitions
            .iter()
            .enumerate()
            .filter(|(_, d)| d.language() == language && d.is_active_in(year))
            .map(|(index, d)| {
                let date = match floating.dates.get(&index) {
                    Some(&base) => d.resolve_from(base)?,
                    None => d.resolve(year, &self.easter)?
                };
                Ok(ResolvedHoliday::new(
                    year,
                    language,
                    date,
                    self.localizer.day_name(date, language),
                    d.name().to_owned()
                ))
            })
            .collect()
    }

    /// One line per holiday: `"{year} {language} {name} {day name} {date}\r\n"`.
    /// Empty when `year` is absent.
    pub fn get_holidays_for_year_as_string(
        &self,
        year: Option<i32>,
        language: Option<&str>
    ) -> Result<String, HolidayError> {
        if year.is_none() {
            return Ok(String::new());
        }
        let mut result = String::new();
        for holiday in self.get_holidays_for_year(year, language)? {
            result.push_str(&format!(
                "{} {} {} {} {}{}",
                holiday.year(),
                holiday.language(),
                holiday.holiday_name(),
                holiday.day_name(),
                self.localizer.format_dmy(holiday.date(), holiday.language()),
                NEWLINE
            ));
        }
        Ok(result)
    }

    fn find_holiday(
        &self,
        date: NaiveDateTime,
        language: Option<&str>
    ) -> Result<Option<ResolvedHoliday>, HolidayError> {
        let just_date = zero_time(Some(date)).date();
        Ok(self
            .get_holidays_for_year(Some(date.year()), language)?
            .into_iter()
            .find(|h| h.date() == just_date))
    }

    /// Whether `date` (time of day ignored) is a holiday. A missing date is not.
    pub fn is_holiday(&self, date: Option<NaiveDateTime>, language: Option<&str>) -> Result<bool, HolidayError> {
        match date {
            Some(d) => Ok(self.find_holiday(d, language)?.is_some()),
            None => Ok(false)
        }
    }

    /// Name of the holiday on `date`, or an empty string.
    pub fn holiday_name(&self, date: Option<NaiveDateTime>, language: Option<&str>) -> Result<String, HolidayError> {
        match date {
            Some(d) => Ok(self
                .find_holiday(d, language)?
                .map(|h| h.holiday_name().to_owned())
                .unwrap_or_default()),
            None => Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::holiday::holidayrule::HolidayRule;
    use crate::holiday::weekdaycorrection::WeekdayCorrection;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<HolidayEngine>();
    }

    #[test]
    fn table_language_outside_supported_set_fails_construction() {
        let result = HolidayEngine::with_collaborators(
            builtin_definitions(),
            &[Language::NlNl, Language::EnUs],
            Arc::new(FixedLanguageProvider::default()),
            Arc::new(BuiltinDateLocalizer)
        );
        assert!(matches!(
            result,
            Err(HolidayError::UnsupportedTableLanguage { language: Language::NlBe, .. })
        ));
    }

    #[test]
    fn unresolvable_rule_fails_construction() {
        let definitions = vec![HolidayDefinition::new(
            Language::EnUs,
            true,
            "Fifth Monday",
            HolidayRule::NthWeekday { month: 5, weekday: Weekday::Mon, n: 5 },
            WeekdayCorrection::NONE,
            0
        )];
        let result = HolidayEngine::with_collaborators(
            definitions,
            &Language::ALL,
            Arc::new(FixedLanguageProvider::default()),
            Arc::new(BuiltinDateLocalizer)
        );
        assert!(matches!(result, Err(HolidayError::InvalidNthWeekday { n: 5, .. })));
    }

    #[test]
    fn floating_cache_follows_requested_year() {
        let engine = HolidayEngine::new().unwrap();
        let first = engine.floating_dates(2024).unwrap();
        let again = engine.floating_dates(2024).unwrap();
        assert!(Arc::ptr_eq(&first, &again));

        let next = engine.floating_dates(2025).unwrap();
        assert_eq!(next.year, 2025);
        assert!(!Arc::ptr_eq(&first, &next));
        // Martin Luther King Day is row 0
        assert_eq!(first.dates[&0], ymd(2024, 1, 15));
        assert_eq!(next.dates[&0], ymd(2025, 1, 20));
    }

    #[test]
    fn provider_language_outside_engine_set_falls_back_to_default() {
        let engine = HolidayEngine::with_collaborators(
            Vec::new(),
            &[Language::NlNl],
            Arc::new(FixedLanguageProvider::new(Language::DeDe)),
            Arc::new(BuiltinDateLocalizer)
        ).unwrap();
        assert_eq!(engine.default_language(), DEFAULT_LANGUAGE);
        assert_eq!(engine.effective_language(Some("de-DE")), DEFAULT_LANGUAGE);
        assert_eq!(engine.effective_language(Some("nl-NL")), Language::NlNl);
    }

    #[test]
    fn nth_weekday_passthrough() {
        let engine = HolidayEngine::new().unwrap();
        // fourth Thursday of November 2024
        assert_eq!(engine.nth_weekday(2024, 10, 4, 4), Ok(28));
        assert!(engine.nth_weekday(2024, 10, 4, 0).is_err());
    }

    #[test]
    fn fallback_uses_first_supported_language_without_default() {
        let engine = HolidayEngine::with_collaborators(
            builtin_definitions().into_iter().filter(|d| d.language() == Language::EnUs).collect(),
            &[Language::EnUs],
            Arc::new(FixedLanguageProvider::new(Language::DeDe)),
            Arc::new(BuiltinDateLocalizer)
        ).unwrap();
        assert_eq!(engine.default_language(), Language::EnUs);
        let holidays = engine.get_holidays_for_year(Some(2024), None).unwrap();
        assert_eq!(holidays.len(), 10);
        assert!(holidays.iter().all(|h| h.language() == Language::EnUs));
    }

    #[test]
    fn empty_language_set_keeps_the_default() {
        let engine = HolidayEngine::with_collaborators(
            Vec::new(),
            &[],
            Arc::new(FixedLanguageProvider::new(Language::DeDe)),
            Arc::new(BuiltinDateLocalizer)
        ).unwrap();
        assert_eq!(engine.default_language(), DEFAULT_LANGUAGE);
        assert!(engine.get_holidays_for_year(Some(2024), None).unwrap().is_empty());
    }

    #[test]
    fn provider_language_used_when_none_given() {
        let engine = HolidayEngine::with_collaborators(
            builtin_definitions(),
            &Language::ALL,
            Arc::new(FixedLanguageProvider::new(Language::EnUs)),
            Arc::new(BuiltinDateLocalizer)
        ).unwrap();
        assert_eq!(engine.effective_language(None), Language::EnUs);
        assert_eq!(engine.effective_language(Some("")), Language::EnUs);
        assert_eq!(engine.effective_language(Some("xx-YY")), Language::EnUs);
    }
}
