use chrono::{
    Datelike,
    NaiveDate
};

use super::language::Language;

/// Renders localized day names, month names and short dates.
pub trait DateLocalizer: Send + Sync {
    /// Long weekday name, capitalized (e.g. `"Zondag"`).
    fn day_name(&self, d: NaiveDate, language: Language) -> String;

    /// Long month name, capitalized (e.g. `"Maart"`).
    fn month_name(&self, d: NaiveDate, language: Language) -> String;

    /// Two-digit day and month with a four-digit year, in the order and with
    /// the separator customary for `language`.
    fn format_dmy(&self, d: NaiveDate, language: Language) -> String;
}

const DAY_NAMES_EN: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const DAY_NAMES_NL: [&str; 7] = ["Zondag", "Maandag", "Dinsdag", "Woensdag", "Donderdag", "Vrijdag", "Zaterdag"];
const DAY_NAMES_FR: [&str; 7] = ["Dimanche", "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi"];
const DAY_NAMES_DE: [&str; 7] = ["Sonntag", "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag"];

const MONTH_NAMES_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
];
const MONTH_NAMES_NL: [&str; 12] = [
    "Januari", "Februari", "Maart", "April", "Mei", "Juni",
    "Juli", "Augustus", "September", "Oktober", "November", "December"
];
const MONTH_NAMES_FR: [&str; 12] = [
    "Janvier", "Février", "Mars", "Avril", "Mai", "Juin",
    "Juillet", "Août", "Septembre", "Octobre", "Novembre", "Décembre"
];
const MONTH_NAMES_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni",
    "Juli", "August", "September", "Oktober", "November", "Dezember"
];

/// Table-driven localizer covering every supported [`Language`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinDateLocalizer;

impl BuiltinDateLocalizer {
    fn day_names(language: Language) -> &'static [&'static str; 7] {
        match language {
            Language::EnUs => &DAY_NAMES_EN,
            Language::NlNl | Language::NlBe => &DAY_NAMES_NL,
            Language::FrBe | Language::FrFr | Language::FrLu => &DAY_NAMES_FR,
            Language::DeDe => &DAY_NAMES_DE
        }
    }

    fn month_names(language: Language) -> &'static [&'static str; 12] {
        match language {
            Language::EnUs => &MONTH_NAMES_EN,
            Language::NlNl | Language::NlBe => &MONTH_NAMES_NL,
            Language::FrBe | Language::FrFr | Language::FrLu => &MONTH_NAMES_FR,
            Language::DeDe => &MONTH_NAMES_DE
        }
    }
}

impl DateLocalizer for BuiltinDateLocalizer {
    fn day_name(&self, d: NaiveDate, language: Language) -> String {
        let idx = d.weekday().num_days_from_sunday() as usize;
        BuiltinDateLocalizer::day_names(language)[idx].to_owned()
    }

    fn month_name(&self, d: NaiveDate, language: Language) -> String {
        BuiltinDateLocalizer::month_names(language)[d.month0() as usize].to_owned()
    }

    fn format_dmy(&self, d: NaiveDate, language: Language) -> String {
        let (day, month, year) = (d.day(), d.month(), d.year());
        match language {
            Language::EnUs => format!("{:02}/{:02}/{:04}", month, day, year),
            Language::NlNl => format!("{:02}-{:02}-{:04}", day, month, year),
            Language::DeDe => format!("{:02}.{:02}.{:04}", day, month, year),
            Language::NlBe | Language::FrBe | Language::FrFr | Language::FrLu => {
                format!("{:02}/{:02}/{:04}", day, month, year)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_names_per_language() {
        let easter = ymd(2024, 3, 31);
        let localizer = BuiltinDateLocalizer;
        assert_eq!(localizer.day_name(easter, Language::NlNl), "Zondag");
        assert_eq!(localizer.day_name(easter, Language::EnUs), "Sunday");
        assert_eq!(localizer.day_name(easter, Language::FrBe), "Dimanche");
        assert_eq!(localizer.day_name(easter, Language::DeDe), "Sonntag");
        assert_eq!(localizer.day_name(ymd(2024, 4, 27), Language::NlNl), "Zaterdag");
    }

    #[test]
    fn month_names_per_language() {
        let d = ymd(2024, 3, 31);
        let localizer = BuiltinDateLocalizer;
        assert_eq!(localizer.month_name(d, Language::NlBe), "Maart");
        assert_eq!(localizer.month_name(d, Language::DeDe), "März");
        assert_eq!(localizer.month_name(ymd(2024, 8, 15), Language::FrLu), "Août");
    }

    #[test]
    fn dmy_layout_per_language() {
        let d = ymd(2024, 4, 1);
        let localizer = BuiltinDateLocalizer;
        assert_eq!(localizer.format_dmy(d, Language::NlNl), "01-04-2024");
        assert_eq!(localizer.format_dmy(d, Language::EnUs), "04/01/2024");
        assert_eq!(localizer.format_dmy(d, Language::FrFr), "01/04/2024");
        assert_eq!(localizer.format_dmy(d, Language::DeDe), "01.04.2024");
    }
}
