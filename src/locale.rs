//! Static locale registry for calendar display names.
//!
//! Each [`Locale`] is a read-only table of month and weekday names plus
//! the week-start convention. Entries are registered at compile time and
//! looked up by language tag; unknown tags fall back to English.

use std::fmt;

/// Display-name tables for one language.
///
/// Weekday tables are stored Sunday-first so indexes line up with
/// `chrono`'s `num_days_from_sunday`; `week_start` says where the
/// rendered week begins (0 = Sunday, 1 = Monday, ...).
#[derive(Clone)]
pub struct Locale {
    pub tag: &'static str,
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    pub week_start: u32,
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale").field("tag", &self.tag).finish()
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Locale {}

pub static EN: Locale = Locale {
    tag: "en",
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    week_start: 0,
};

pub static FR: Locale = Locale {
    tag: "fr",
    months: [
        "Janvier",
        "Février",
        "Mars",
        "Avril",
        "Mai",
        "Juin",
        "Juillet",
        "Août",
        "Septembre",
        "Octobre",
        "Novembre",
        "Décembre",
    ],
    months_short: [
        "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
    ],
    weekdays: [
        "Dimanche",
        "Lundi",
        "Mardi",
        "Mercredi",
        "Jeudi",
        "Vendredi",
        "Samedi",
    ],
    weekdays_short: ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
    week_start: 1,
};

pub static ES: Locale = Locale {
    tag: "es",
    months: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
    months_short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ],
    weekdays: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    weekdays_short: ["dom.", "lun.", "mar.", "mié.", "jue.", "vie.", "sáb."],
    week_start: 1,
};

/// All registered locales, English first.
pub static LOCALES: [&Locale; 3] = [&EN, &FR, &ES];

/// Looks up a locale by language tag. Unknown tags fall back to English.
pub fn locale_for_tag(tag: &str) -> &'static Locale {
    LOCALES
        .iter()
        .find(|locale| locale.tag == tag)
        .copied()
        .unwrap_or(&EN)
}

/// Caller-facing locale configuration.
///
/// Wraps a registry entry and optionally overrides the weekday header
/// labels wholesale (some widgets want single-letter columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub lang: &'static Locale,
    pub week_days: Option<Vec<String>>,
}

impl LocaleConfig {
    pub const fn new(lang: &'static Locale) -> Self {
        Self {
            lang,
            week_days: None,
        }
    }

    /// Replaces the weekday header labels returned by [`get_week_days`].
    pub fn with_week_days(mut self, labels: Vec<String>) -> Self {
        self.week_days = Some(labels);
        self
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::new(&EN)
    }
}

impl From<&'static Locale> for LocaleConfig {
    fn from(lang: &'static Locale) -> Self {
        Self::new(lang)
    }
}

/// Returns the 7 weekday header labels for the locale.
///
/// An explicit override list wins; otherwise the locale's abbreviated
/// weekday names, rotated so the list starts on the locale's week-start
/// day.
pub fn get_week_days(config: &LocaleConfig) -> Vec<String> {
    if let Some(labels) = &config.week_days {
        return labels.clone();
    }
    let start = config.lang.week_start as usize % 7;
    (0..7)
        .map(|offset| config.lang.weekdays_short[(start + offset) % 7].to_owned())
        .collect()
}

/// Returns the 12 abbreviated month names for the locale, January first.
pub fn get_months(config: &LocaleConfig) -> Vec<String> {
    config
        .lang
        .months_short
        .iter()
        .map(|&name| name.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_days_override_wins() {
        let config = LocaleConfig::new(&FR).with_week_days(
            ["L", "M", "M", "J", "V", "S", "D"]
                .iter()
                .map(|&s| s.to_owned())
                .collect(),
        );
        assert_eq!(get_week_days(&config), ["L", "M", "M", "J", "V", "S", "D"]);
    }

    #[test]
    fn test_week_days_rotated_to_week_start() {
        let fr = LocaleConfig::new(&FR);
        assert_eq!(
            get_week_days(&fr),
            ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"]
        );

        let es = LocaleConfig::new(&ES);
        assert_eq!(
            get_week_days(&es),
            ["lun.", "mar.", "mié.", "jue.", "vie.", "sáb.", "dom."]
        );
    }

    #[test]
    fn test_week_days_sunday_start() {
        let en = LocaleConfig::default();
        assert_eq!(
            get_week_days(&en),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }

    #[test]
    fn test_months_abbreviated() {
        let months = get_months(&LocaleConfig::default());
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], "Jan");
        assert_eq!(months[11], "Dec");
    }

    #[test]
    fn test_locale_tables_are_complete() {
        for locale in LOCALES {
            assert_eq!(locale.months.len(), 12, "{}", locale.tag);
            assert_eq!(locale.weekdays.len(), 7, "{}", locale.tag);
            assert!(locale.week_start < 7, "{}", locale.tag);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_english() {
        assert_eq!(locale_for_tag("toto"), &EN);
        assert_eq!(locale_for_tag("fr"), &FR);
        assert_eq!(locale_for_tag("es"), &ES);
    }
}
