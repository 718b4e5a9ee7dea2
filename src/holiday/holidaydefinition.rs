use chrono::{
    Datelike,
    NaiveDate
};

use crate::holiday::holidayerror::HolidayError;
use crate::holiday::holidayrule::{
    HolidayRule,
    MAX_SHIFT_DAYS
};
use crate::holiday::weekdaycorrection::WeekdayCorrection;
use crate::locale::language::Language;
use crate::time::easter::EasterCalculator;

/// One holiday of one language. Immutable once built.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HolidayDefinition {
    language: Language,
    active: bool,
    name: String,
    rule: HolidayRule,
    correction: WeekdayCorrection,
    only_active_if_year_mod_x: u32
}

impl HolidayDefinition {
    pub fn new(
        language: Language,
        active: bool,
        name: impl Into<String>,
        rule: HolidayRule,
        correction: WeekdayCorrection,
        only_active_if_year_mod_x: u32
    ) -> HolidayDefinition {
        HolidayDefinition {
            language,
            active,
            name: name.into(),
            rule,
            correction,
            only_active_if_year_mod_x
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    pub fn correction(&self) -> &WeekdayCorrection {
        &self.correction
    }

    pub fn only_active_if_year_mod_x(&self) -> u32 {
        self.only_active_if_year_mod_x
    }

    /// Active flag combined with the "every N years" condition.
    pub fn is_active_in(&self, year: i32) -> bool {
        self.active
            && (self.only_active_if_year_mod_x == 0
                || year.rem_euclid(self.only_active_if_year_mod_x as i32) == 0)
    }

    pub fn validate(&self) -> Result<(), HolidayError> {
        self.rule.validate(&self.name)?;
        let max_shift = self.correction.max_shift();
        if max_shift > MAX_SHIFT_DAYS {
            return Err(HolidayError::ShiftOutOfRange { name: self.name.clone(), days: max_shift as i64 });
        }
        Ok(())
    }

    /// Applies the weekday correction to `base`.
    ///
    /// The engine passes its cached floating dates through here instead of
    /// recomputing the rule.
    pub fn resolve_from(&self, base: NaiveDate) -> Result<NaiveDate, HolidayError> {
        self.correction.adjust(base).ok_or_else(|| HolidayError::ShiftOutOfRange {
            name: self.name.clone(),
            days: self.correction.shift_for(base.weekday()) as i64
        })
    }

    /// Date of this holiday in `year` with the weekday correction applied.
    pub fn resolve(&self, year: i32, easter: &EasterCalculator) -> Result<NaiveDate, HolidayError> {
        let base = self.rule.base_date(year, easter).map_err(|err| match err {
            HolidayError::InvalidFixedDate { month, day, .. } => HolidayError::InvalidFixedDate {
                name: self.name.clone(),
                month,
                day
            },
            HolidayError::ShiftOutOfRange { days, .. } => HolidayError::ShiftOutOfRange {
                name: self.name.clone(),
                days
            },
            other => other
        })?;
        self.resolve_from(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn modulus_limits_active_years() {
        let liberation = HolidayDefinition::new(
            Language::NlNl,
            true,
            "Bevrijdingsdag",
            HolidayRule::FixedDate { month: 5, day: 5 },
            WeekdayCorrection::NONE,
            5
        );
        assert!(liberation.is_active_in(2020));
        assert!(liberation.is_active_in(2025));
        assert!(!liberation.is_active_in(2021));
    }

    #[test]
    fn inactive_rows_never_apply() {
        let good_friday = HolidayDefinition::new(
            Language::NlNl,
            false,
            "Goede Vrijdag",
            HolidayRule::EasterRelative { days_from_easter: -2 },
            WeekdayCorrection::NONE,
            0
        );
        assert!(!good_friday.is_active_in(2024));
    }

    #[test]
    fn resolve_applies_correction() {
        let kings_day = HolidayDefinition::new(
            Language::NlNl,
            true,
            "Koningsdag",
            HolidayRule::FixedDate { month: 4, day: 27 },
            WeekdayCorrection::from_shifts([-1, 0, 0, 0, 0, 0, 0]),
            0
        );
        let easter = EasterCalculator::new();
        assert_eq!(kings_day.resolve(2024, &easter), Ok(ymd(2024, 4, 27)));
        assert_eq!(kings_day.resolve(2025, &easter), Ok(ymd(2025, 4, 26)));
    }

    #[test]
    fn resolve_names_bad_fixed_date() {
        let leap = HolidayDefinition::new(
            Language::EnUs,
            true,
            "Leap",
            HolidayRule::FixedDate { month: 2, day: 29 },
            WeekdayCorrection::NONE,
            0
        );
        let easter = EasterCalculator::new();
        assert!(leap.resolve(2024, &easter).is_ok());
        assert_eq!(
            leap.resolve(2023, &easter),
            Err(HolidayError::InvalidFixedDate { name: "Leap".to_owned(), month: 2, day: 29 })
        );
    }

    #[test]
    fn oversized_correction_fails_validation() {
        let christmas = HolidayDefinition::new(
            Language::EnUs,
            true,
            "Christmas Day",
            HolidayRule::FixedDate { month: 12, day: 25 },
            WeekdayCorrection::from_shifts([0, 0, 0, i32::MAX, 0, 0, 0]),
            0
        );
        assert_eq!(
            christmas.validate(),
            Err(HolidayError::ShiftOutOfRange { name: "Christmas Day".to_owned(), days: i32::MAX as i64 })
        );
        // 2024-12-25 is a Wednesday
        assert!(matches!(
            christmas.resolve(2024, &EasterCalculator::new()),
            Err(HolidayError::ShiftOutOfRange { .. })
        ));
    }
}
