use chrono::Weekday;

use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidayrule::HolidayRule;
use crate::holiday::weekdaycorrection::WeekdayCorrection;
use crate::locale::language::Language;
use crate::locale::language::Language::{DeDe, EnUs, FrBe, FrFr, FrLu, NlBe, NlNl};

/// Static row of the built-in holiday table.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRow {
    pub language: Language,
    pub active: bool,
    pub name: &'static str,
    pub rule: HolidayRule,
    pub correction: WeekdayCorrection,
    pub only_active_if_year_mod_x: u32
}

impl HolidayRow {
    const fn easter(language: Language, active: bool, name: &'static str, days_from_easter: i32) -> HolidayRow {
        HolidayRow {
            language,
            active,
            name,
            rule: HolidayRule::EasterRelative { days_from_easter },
            correction: WeekdayCorrection::NONE,
            only_active_if_year_mod_x: 0
        }
    }

    const fn fixed(language: Language, active: bool, name: &'static str, day: u32, month: u32) -> HolidayRow {
        HolidayRow {
            language,
            active,
            name,
            rule: HolidayRule::FixedDate { month, day },
            correction: WeekdayCorrection::NONE,
            only_active_if_year_mod_x: 0
        }
    }

    const fn nth(language: Language, active: bool, name: &'static str, month: u32, weekday: Weekday, n: i32) -> HolidayRow {
        HolidayRow {
            language,
            active,
            name,
            rule: HolidayRule::NthWeekday { month, weekday, n },
            correction: WeekdayCorrection::NONE,
            only_active_if_year_mod_x: 0
        }
    }

    const fn corrected(self, shifts: [i32; 7]) -> HolidayRow {
        HolidayRow { correction: WeekdayCorrection::from_shifts(shifts), ..self }
    }

    const fn every(self, years: u32) -> HolidayRow {
        HolidayRow { only_active_if_year_mod_x: years, ..self }
    }

    pub fn to_definition(&self) -> HolidayDefinition {
        HolidayDefinition::new(
            self.language,
            self.active,
            self.name,
            self.rule,
            self.correction,
            self.only_active_if_year_mod_x
        )
    }
}

// indexed sun, mon, tue, wed, thu, fri, sat
const SUNDAY_TO_SATURDAY: [i32; 7] = [-1, 0, 0, 0, 0, 0, 0];

pub static EN_US: [HolidayRow; 10] = [
    HolidayRow::nth(EnUs, true, "Martin Luther King Day", 1, Weekday::Mon, 3),
    HolidayRow::nth(EnUs, true, "Presidents Day", 2, Weekday::Mon, 3),
    HolidayRow::nth(EnUs, true, "Memorial Day", 5, Weekday::Mon, -1),
    HolidayRow::nth(EnUs, true, "Labor Day", 9, Weekday::Mon, 1),
    HolidayRow::nth(EnUs, true, "Columbus Day", 10, Weekday::Mon, 2),
    HolidayRow::nth(EnUs, true, "Thanksgiving Day", 11, Weekday::Thu, 4),
    HolidayRow::fixed(EnUs, true, "New Year's Day", 1, 1),
    HolidayRow::fixed(EnUs, true, "Independence Day", 4, 7),
    HolidayRow::fixed(EnUs, true, "Veterans Day", 11, 11),
    HolidayRow::fixed(EnUs, true, "Christmas Day", 25, 12)
];

pub static NL_NL: [HolidayRow; 14] = [
    HolidayRow::easter(NlNl, false, "Goede Vrijdag", -2),
    HolidayRow::easter(NlNl, true, "1e Paasdag", 0),
    HolidayRow::easter(NlNl, true, "2e Paasdag", 1),
    HolidayRow::easter(NlNl, true, "Hemelvaart", 39),
    HolidayRow::easter(NlNl, true, "1e Pinksterdag", 49),
    HolidayRow::easter(NlNl, true, "2e Pinksterdag", 50),
    HolidayRow::fixed(NlNl, true, "Nieuwjaar", 1, 1),
    HolidayRow::fixed(NlNl, true, "Koningsdag", 27, 4).corrected(SUNDAY_TO_SATURDAY),
    HolidayRow::fixed(NlNl, false, "Dag vd Arbeid", 1, 5),
    HolidayRow::fixed(NlNl, true, "Bevrijdingsdag", 5, 5).every(5),
    HolidayRow::fixed(NlNl, false, "OLV hemelvaart", 15, 8),
    HolidayRow::fixed(NlNl, false, "Aller heiligen", 1, 11),
    HolidayRow::fixed(NlNl, true, "1e Kerstdag", 25, 12),
    HolidayRow::fixed(NlNl, true, "2e Kerstdag", 26, 12)
];

pub static NL_BE: [HolidayRow; 14] = [
    HolidayRow::easter(NlBe, false, "Goede Vrijdag", -2),
    HolidayRow::easter(NlBe, true, "1e Paasdag", 0),
    HolidayRow::easter(NlBe, true, "2e Paasdag", 1),
    HolidayRow::easter(NlBe, true, "Hemelvaart", 39),
    HolidayRow::easter(NlBe, true, "1e Pinksterdag", 49),
    HolidayRow::easter(NlBe, true, "2e Pinksterdag", 50),
    HolidayRow::fixed(NlBe, true, "Nieuwjaar", 1, 1),
    HolidayRow::fixed(NlBe, true, "Dag vd Arbeid", 1, 5),
    HolidayRow::fixed(NlBe, true, "Nationale feestdag", 21, 7),
    HolidayRow::fixed(NlBe, true, "OLV hemelvaart", 15, 8),
    HolidayRow::fixed(NlBe, true, "Allerheiligen", 1, 11),
    HolidayRow::fixed(NlBe, true, "Wapenstilstand 1918", 11, 11),
    HolidayRow::fixed(NlBe, true, "1e Kerstdag", 25, 12),
    HolidayRow::fixed(NlBe, false, "2e Kerstdag", 26, 12)
];

pub static FR_BE: [HolidayRow; 14] = [
    HolidayRow::easter(FrBe, false, "Vendredi saint", -2),
    HolidayRow::easter(FrBe, true, "Pàques 1", 0),
    HolidayRow::easter(FrBe, true, "Pàques 2", 1),
    HolidayRow::easter(FrBe, true, "Ascension", 39),
    HolidayRow::easter(FrBe, true, "Pentecôte 1", 49),
    HolidayRow::easter(FrBe, true, "Pentecôte 2", 50),
    HolidayRow::fixed(FrBe, true, "Nouvel an", 1, 1),
    HolidayRow::fixed(FrBe, true, "Travail", 1, 5),
    HolidayRow::fixed(FrBe, true, "Fête Nationale", 21, 7),
    HolidayRow::fixed(FrBe, true, "Assomption", 15, 8),
    HolidayRow::fixed(FrBe, true, "Toussaint", 1, 11),
    HolidayRow::fixed(FrBe, true, "Jour de l'Armistice", 11, 11),
    HolidayRow::fixed(FrBe, true, "Noël", 25, 12),
    HolidayRow::fixed(FrBe, false, "Noël 2", 26, 12)
];

pub static FR_FR: [HolidayRow; 15] = [
    HolidayRow::easter(FrFr, false, "Vendredi saint", -2),
    HolidayRow::easter(FrFr, true, "Pàques", 0),
    HolidayRow::easter(FrFr, true, "Lundi de Pâques", 1),
    HolidayRow::easter(FrFr, true, "Ascension", 39),
    HolidayRow::easter(FrFr, true, "Pentecôte", 49),
    HolidayRow::easter(FrFr, true, "Lundi de Pentecôte", 50),
    HolidayRow::fixed(FrFr, true, "Nouvel an", 1, 1),
    HolidayRow::fixed(FrFr, true, "Fête du Travail", 1, 5),
    HolidayRow::fixed(FrFr, true, "Fête de la Victoire", 8, 5),
    HolidayRow::fixed(FrFr, true, "Fête Nationale", 14, 7),
    HolidayRow::fixed(FrFr, true, "Assomption", 15, 8),
    HolidayRow::fixed(FrFr, true, "Toussaint", 1, 11),
    HolidayRow::fixed(FrFr, true, "Jour de l'Armistice", 11, 11),
    HolidayRow::fixed(FrFr, true, "Noël", 25, 12),
    HolidayRow::fixed(FrFr, false, "Saint Etienne", 26, 12)
];

pub static FR_LU: [HolidayRow; 14] = [
    HolidayRow::easter(FrLu, false, "Vendredi saint", -2),
    HolidayRow::easter(FrLu, true, "Pàques", 0),
    HolidayRow::easter(FrLu, true, "Lundi de Pâques", 1),
    HolidayRow::easter(FrLu, true, "Ascension", 39),
    HolidayRow::easter(FrLu, true, "Pentecôte", 49),
    HolidayRow::easter(FrLu, true, "Lundi de Pentecôte", 50),
    HolidayRow::fixed(FrLu, true, "Jour de l'an", 1, 1),
    HolidayRow::fixed(FrLu, true, "Fête du Travail", 1, 5),
    HolidayRow::fixed(FrLu, true, "Journée de l'Europe", 9, 5),
    HolidayRow::fixed(FrLu, true, "Fête Nationale", 23, 6),
    HolidayRow::fixed(FrLu, true, "Assomption", 15, 8),
    HolidayRow::fixed(FrLu, true, "Toussaint", 1, 11),
    HolidayRow::fixed(FrLu, true, "Noël", 25, 12),
    HolidayRow::fixed(FrLu, true, "Saint Etienne", 26, 12)
];

pub static DE_DE: [HolidayRow; 13] = [
    HolidayRow::easter(DeDe, true, "Karfreitag", -2),
    HolidayRow::easter(DeDe, true, "Ostersonntag", 0),
    HolidayRow::easter(DeDe, true, "Ostermontag", 1),
    HolidayRow::easter(DeDe, true, "Christi Himmelfahrt", 39),
    HolidayRow::easter(DeDe, true, "Pfingstsonntag", 49),
    HolidayRow::easter(DeDe, true, "Pfingstmontag", 50),
    HolidayRow::fixed(DeDe, true, "Neujahr", 1, 1),
    HolidayRow::fixed(DeDe, true, "Tag der Arbeit", 1, 5),
    HolidayRow::fixed(DeDe, false, "Maria Himmelfahrt", 15, 8),
    HolidayRow::fixed(DeDe, true, "Deutschen Einheit", 3, 10),
    HolidayRow::fixed(DeDe, true, "Allerheiligen", 1, 11),
    HolidayRow::fixed(DeDe, true, "1. Weihnachtstag", 25, 12),
    HolidayRow::fixed(DeDe, true, "2. Weihnachtstag", 26, 12)
];

/// All built-in rows in table order.
pub fn builtin_rows() -> impl Iterator<Item = &'static HolidayRow> {
    EN_US.iter()
        .chain(NL_NL.iter())
        .chain(NL_BE.iter())
        .chain(FR_BE.iter())
        .chain(FR_FR.iter())
        .chain(FR_LU.iter())
        .chain(DE_DE.iter())
}

pub fn builtin_definitions() -> Vec<HolidayDefinition> {
    builtin_rows().map(HolidayRow::to_definition).collect()
}
