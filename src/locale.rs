use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unknown language id {0}")]
    UnknownLanguage(u8),
}

/// Day/month names and the word for "week", indexed by the numeric language
/// id the settings form submits. Lookups fail explicitly on an id outside
/// the shipped tables; the watch never receives partial locale text.
pub trait LocaleDataProvider {
    fn day_names(&self, language_id: u8) -> Result<&[&'static str; 7], LocaleError>;
    fn month_names(&self, language_id: u8) -> Result<&[&'static str; 12], LocaleError>;
    fn word_for_week(&self, language_id: u8) -> Result<&'static str, LocaleError>;
}

struct LanguageTable {
    day_names: [&'static str; 7],
    month_names: [&'static str; 12],
    word_for_week: &'static str,
}

// Display strings are abbreviated to fit the sidebar width.
// Index order is fixed; the form's language ids point into this table.
static LANGUAGES: &[LanguageTable] = &[
    // 0: English
    LanguageTable {
        day_names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
        month_names: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        word_for_week: "Wk",
    },
    // 1: French
    LanguageTable {
        day_names: ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
        month_names: [
            "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc",
        ],
        word_for_week: "Sem",
    },
    // 2: Spanish
    LanguageTable {
        day_names: ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"],
        month_names: [
            "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
        ],
        word_for_week: "Sem",
    },
    // 3: German
    LanguageTable {
        day_names: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
        month_names: [
            "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
        ],
        word_for_week: "KW",
    },
    // 4: Italian
    LanguageTable {
        day_names: ["Dom", "Lun", "Mar", "Mer", "Gio", "Ven", "Sab"],
        month_names: [
            "Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic",
        ],
        word_for_week: "Sett",
    },
    // 5: Dutch
    LanguageTable {
        day_names: ["Zo", "Ma", "Di", "Wo", "Do", "Vr", "Za"],
        month_names: [
            "Jan", "Feb", "Mrt", "Apr", "Mei", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dec",
        ],
        word_for_week: "Wk",
    },
    // 6: Portuguese
    LanguageTable {
        day_names: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
        month_names: [
            "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
        ],
        word_for_week: "Sem",
    },
];

/// The locale tables compiled into the bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLocales;

impl BundledLocales {
    pub fn language_count() -> usize {
        LANGUAGES.len()
    }

    fn table(language_id: u8) -> Result<&'static LanguageTable, LocaleError> {
        LANGUAGES
            .get(language_id as usize)
            .ok_or(LocaleError::UnknownLanguage(language_id))
    }
}

impl LocaleDataProvider for BundledLocales {
    fn day_names(&self, language_id: u8) -> Result<&[&'static str; 7], LocaleError> {
        Ok(&Self::table(language_id)?.day_names)
    }

    fn month_names(&self, language_id: u8) -> Result<&[&'static str; 12], LocaleError> {
        Ok(&Self::table(language_id)?.month_names)
    }

    fn word_for_week(&self, language_id: u8) -> Result<&'static str, LocaleError> {
        Ok(Self::table(language_id)?.word_for_week)
    }
}
