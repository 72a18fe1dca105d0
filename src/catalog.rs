//! Language catalog: single source of truth for the application's languages.
//!
//! The catalog is a static table of every language the translator offers as a
//! target. It is initialized once behind a `OnceLock`, validated fail-fast on
//! first access, and immutable for the life of the process.

use std::sync::OnceLock;

/// A supported application language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// ISO 639-1 language code (e.g., "en", "fr")
    pub code: &'static str,

    /// Display name, native form first (e.g., "Français (French)")
    pub name: &'static str,

    /// Flag icon shown next to the name
    pub icon: &'static str,
}

/// The catalog of supported languages, in declaration order.
///
/// Declaration order is the order the UI renders the checkbox list in, so it
/// is preserved by [`Catalog::all`].
pub struct Catalog {
    entries: &'static [LanguageEntry],
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the global catalog, building and validating it on first call.
    ///
    /// # Panics
    /// Panics if the catalog table is malformed (duplicate codes, empty
    /// fields). A broken table is a programming error and must stop the
    /// process at startup rather than degrade every lookup to "Unknown".
    pub fn get() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            let catalog = Catalog { entries: LANGUAGES };
            catalog.validate();
            catalog
        })
    }

    fn validate(&self) {
        for (i, entry) in self.entries.iter().enumerate() {
            assert!(
                entry.code.len() == 2,
                "catalog entry {:?} is not an ISO 639-1 code",
                entry.code
            );
            assert!(!entry.name.is_empty(), "catalog entry {} has an empty name", entry.code);
            assert!(!entry.icon.is_empty(), "catalog entry {} has an empty icon", entry.code);
            assert!(
                !self.entries[..i].iter().any(|e| e.code == entry.code),
                "duplicate catalog code {}",
                entry.code
            );
        }
    }

    /// Look up a language by its ISO 639-1 code.
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    /// All languages in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &'static LanguageEntry> {
        self.entries.iter()
    }

    /// Number of supported languages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (it never is for a valid build).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The supported languages. Order here is render order.
static LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "ar", name: "العربية (Arabic)", icon: "🇸🇦" },
    LanguageEntry { code: "zh", name: "中文 (Chinese)", icon: "🇨🇳" },
    LanguageEntry { code: "cs", name: "Čeština (Czech)", icon: "🇨🇿" },
    LanguageEntry { code: "nl", name: "Nederlands (Dutch)", icon: "🇳🇱" },
    LanguageEntry { code: "en", name: "English (English)", icon: "🇬🇧" },
    LanguageEntry { code: "fi", name: "Suomi (Finnish)", icon: "🇫🇮" },
    LanguageEntry { code: "fr", name: "Français (French)", icon: "🇫🇷" },
    LanguageEntry { code: "de", name: "Deutsch (German)", icon: "🇩🇪" },
    LanguageEntry { code: "he", name: "עברית (Hebrew)", icon: "🇮🇱" },
    LanguageEntry { code: "hi", name: "हिन्दी (Hindi)", icon: "🇮🇳" },
    LanguageEntry { code: "it", name: "Italiano (Italian)", icon: "🇮🇹" },
    LanguageEntry { code: "ja", name: "日本語 (Japanese)", icon: "🇯🇵" },
    LanguageEntry { code: "ko", name: "한국어 (Korean)", icon: "🇰🇷" },
    LanguageEntry { code: "fa", name: "فارسی (Persian)", icon: "🇮🇷" },
    LanguageEntry { code: "pl", name: "Polski (Polish)", icon: "🇵🇱" },
    LanguageEntry { code: "pt", name: "Português (Portuguese)", icon: "🇵🇹" },
    LanguageEntry { code: "ro", name: "Română (Romanian)", icon: "🇷🇴" },
    LanguageEntry { code: "ru", name: "Русский (Russian)", icon: "🇷🇺" },
    LanguageEntry { code: "sv", name: "Svenska (Swedish)", icon: "🇸🇪" },
    LanguageEntry { code: "ta", name: "தமிழ் (Tamil)", icon: "🇮🇳" },
    LanguageEntry { code: "tr", name: "Türkçe (Turkish)", icon: "🇹🇷" },
    LanguageEntry { code: "uk", name: "Українська (Ukrainian)", icon: "🇺🇦" },
    LanguageEntry { code: "vi", name: "Tiếng Việt (Vietnamese)", icon: "🇻🇳" },
    LanguageEntry { code: "es", name: "Español (Spanish)", icon: "🇪🇸" },
];
