/// Languages the controls ship default texts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Parse a language tag such as `es`, `es-MX` or `en_US`, falling back
    /// to the default locale.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Locale::En,
            "es" => Locale::Es,
            _ => Locale::default(),
        }
    }

    /// Default prompt shown in an empty search field.
    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Locale::Es => "Buscar...",
            Locale::En => "Search...",
        }
    }
}
