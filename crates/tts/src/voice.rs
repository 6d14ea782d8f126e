use std::collections::HashMap;

use indexmap::IndexMap;
use voxgate_config::VoicesConfig;

use crate::error::{Result, TtsError};

/// Built-in catalog: canonical key, male voice, female voice, code aliases
///
/// Covers the languages the stock neural relay ships voices for; a
/// `[tts.voices]` config section replaces this table entirely.
const BUILTIN_VOICES: &[(&str, &str, &str, &[&str])] = &[
    ("english", "en-US-GuyNeural", "en-US-AriaNeural", &["en", "en-us", "en-in"]),
    ("hindi", "hi-IN-MadhurNeural", "hi-IN-SwararaNeural", &["hi", "hi-in"]),
    ("telugu", "te-IN-MohanNeural", "te-IN-ShrutiNeural", &["te", "te-in"]),
    ("tamil", "ta-IN-ValluvarNeural", "ta-IN-PallaviNeural", &["ta", "ta-in"]),
    ("kannada", "kn-IN-GaganNeural", "kn-IN-SapnaNeural", &["kn", "kn-in"]),
    ("marathi", "mr-IN-ManoharNeural", "mr-IN-AarohiNeural", &["mr", "mr-in"]),
    ("malayalam", "ml-IN-MidhunNeural", "ml-IN-SobhanaNeural", &["ml", "ml-in"]),
];

/// Male/female voice identifiers for one language
#[derive(Debug, Clone)]
pub struct VoicePair {
    pub male: String,
    pub female: String,
}

/// Immutable language-key -> voice-pair table
///
/// Exactly one entry per canonical key. Lookups for unknown keys degrade
/// to the default language's pair instead of failing.
pub struct VoiceCatalog {
    entries: IndexMap<String, VoicePair>,
    default_language: String,
}

impl VoiceCatalog {
    /// Voice pair for a canonical language key
    pub fn voices_for(&self, language_key: &str) -> &VoicePair {
        self.entries
            .get(language_key)
            .unwrap_or_else(|| &self.entries[&self.default_language])
    }

    /// The always-available voice: the default language's female voice
    pub fn fallback_voice(&self) -> &str {
        &self.entries[&self.default_language].female
    }

    /// Canonical keys in catalog order
    pub fn languages(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Maps free-form language tokens to canonical catalog keys
///
/// Tokens are trimmed and case-folded. Code aliases are checked before
/// canonical names; anything unrecognized resolves to the default key,
/// so resolution is total.
pub struct LanguageResolver {
    codes: HashMap<String, String>,
    names: HashMap<String, String>,
    default_language: String,
}

impl LanguageResolver {
    pub fn resolve(&self, token: &str) -> &str {
        let token = token.trim().to_lowercase();
        self.codes
            .get(&token)
            .or_else(|| self.names.get(&token))
            .map_or(&self.default_language, String::as_str)
    }
}

/// The concrete voice chosen for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVoice {
    /// Canonical language key the token resolved to
    pub language: String,
    /// Backend voice identifier
    pub voice_id: String,
}

/// Composes the resolver and catalog into one voice decision
pub struct VoiceSelector {
    resolver: LanguageResolver,
    catalog: VoiceCatalog,
}

impl VoiceSelector {
    /// Build the selector from configuration, falling back to the
    /// built-in catalog when no languages are configured
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an empty voice id, a default language
    /// missing from the table, or a duplicate code alias. Construction
    /// happens once at startup, so any of these aborts the server.
    pub fn from_config(config: &VoicesConfig) -> Result<Self> {
        let mut entries = IndexMap::new();
        let mut codes: HashMap<String, String> = HashMap::new();
        let mut names = HashMap::new();

        let configured: Vec<(String, String, String, Vec<String>)> = if config.languages.is_empty() {
            BUILTIN_VOICES
                .iter()
                .map(|(key, male, female, aliases)| {
                    (
                        (*key).to_string(),
                        (*male).to_string(),
                        (*female).to_string(),
                        aliases.iter().map(|a| (*a).to_string()).collect(),
                    )
                })
                .collect()
        } else {
            config
                .languages
                .iter()
                .map(|(key, entry)| (key.clone(), entry.male.clone(), entry.female.clone(), entry.codes.clone()))
                .collect()
        };

        for (key, male, female, aliases) in configured {
            let key = key.trim().to_lowercase();

            if male.is_empty() || female.is_empty() {
                return Err(TtsError::ConfigError(format!(
                    "voice entry '{key}' must have non-empty male and female voice ids"
                )));
            }

            for alias in aliases {
                let alias = alias.trim().to_lowercase();
                if let Some(existing) = codes.insert(alias.clone(), key.clone())
                    && existing != key
                {
                    return Err(TtsError::ConfigError(format!(
                        "code '{alias}' is claimed by both '{existing}' and '{key}'"
                    )));
                }
            }

            names.insert(key.clone(), key.clone());
            entries.insert(key, VoicePair { male, female });
        }

        let default_language = config.default_language.trim().to_lowercase();
        if !entries.contains_key(&default_language) {
            return Err(TtsError::ConfigError(format!(
                "default language '{default_language}' has no voice entry"
            )));
        }

        Ok(Self {
            resolver: LanguageResolver {
                codes,
                names,
                default_language: default_language.clone(),
            },
            catalog: VoiceCatalog {
                entries,
                default_language,
            },
        })
    }

    /// Resolve a language token and gender hint to a concrete voice
    ///
    /// Only a case-insensitive "female" selects the female voice; absent
    /// or unrecognized hints select the male voice. Pure function of the
    /// immutable tables.
    pub fn select(&self, language_token: &str, gender_hint: &str) -> ResolvedVoice {
        let key = self.resolver.resolve(language_token);
        let pair = self.catalog.voices_for(key);

        let voice_id = if gender_hint.eq_ignore_ascii_case("female") {
            pair.female.clone()
        } else {
            pair.male.clone()
        };

        ResolvedVoice {
            language: key.to_string(),
            voice_id,
        }
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }
}
