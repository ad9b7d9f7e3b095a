use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const FALLBACK_LANG: SupportedLang = SupportedLang::English;

/// UI languages with an embedded FTL resource.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIter,
    strum::Display,
)]
pub enum SupportedLang {
    #[default]
    #[strum(to_string = "en")]
    English,
    #[strum(to_string = "ru")]
    Russian,
}

impl SupportedLang {
    pub fn code(self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Russian => "ru",
        }
    }

    /// Accepts "en", "ru-RU", "EN_us" and the like; only the primary subtag matters.
    pub fn from_code(code: &str) -> Result<Self, LocalizationError> {
        let lower = code.trim().to_ascii_lowercase();
        let sep = lower.find(['-', '_']).unwrap_or(lower.len());
        match &lower[..sep] {
            "en" => Ok(SupportedLang::English),
            "ru" => Ok(SupportedLang::Russian),
            _ => Err(LocalizationError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Message id of the language's display name.
    pub fn label_id(self) -> &'static str {
        match self {
            SupportedLang::English => "language-en",
            SupportedLang::Russian => "language-ru",
        }
    }

    fn ftl_source(self) -> &'static str {
        match self {
            SupportedLang::English => include_str!("resources/en.ftl"),
            SupportedLang::Russian => include_str!("resources/ru.ftl"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

fn detect_system_lang() -> SupportedLang {
    sys_locale::get_locale()
        .and_then(|code| SupportedLang::from_code(&code).ok())
        .unwrap_or(FALLBACK_LANG)
}

fn build_bundle(lang: SupportedLang) -> Bundle {
    let langid: LanguageIdentifier = lang.code().parse().unwrap_or_default();
    let mut bundle: Bundle = FluentBundle::new(vec![langid]);
    // Plain text output; egui renders the isolation marks as boxes.
    bundle.set_use_isolating(false);
    let res = FluentResource::try_new(lang.ftl_source().to_string()).unwrap_or_else(
        |(partial, errors)| {
            log::error!("FTL resource for {} has {} parse errors", lang, errors.len());
            partial
        },
    );
    if let Err(errors) = bundle.add_resource(res) {
        log::error!("Failed to add FTL for {}: {:?}", lang, errors);
    }
    bundle
}

struct LocalizationManager {
    current: SupportedLang,
    bundles: HashMap<SupportedLang, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let bundles = <SupportedLang as strum::IntoEnumIterator>::iter()
            .map(|lang| (lang, build_bundle(lang)))
            .collect();
        Self {
            current: FALLBACK_LANG,
            bundles,
        }
    }

    fn set_current(&mut self, lang: SupportedLang) -> Result<(), LocalizationError> {
        if !self.bundles.contains_key(&lang) {
            return Err(LocalizationError::UnsupportedLanguage(lang.to_string()));
        }
        self.current = lang;
        Ok(())
    }

    fn format(&self, lang: SupportedLang, id: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(id)?.value()?;
        let mut errors = vec![];
        let s = bundle.format_pattern(pattern, args, &mut errors).to_string();
        if !errors.is_empty() {
            log::warn!("formatting '{}' ({}) reported {:?}", id, lang, errors);
        }
        Some(s)
    }

    fn format_with_args(&self, id: &str, args: Option<&FluentArgs>) -> String {
        self.format(self.current, id, args)
            .or_else(|| self.format(FALLBACK_LANG, id, args))
            .unwrap_or_else(|| format!("[missing: {}]", id))
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

/// Initialize localization. `None` means follow the system locale; anything
/// unsupported ends up as English.
pub fn initialize_localization(preferred: Option<SupportedLang>) -> Result<(), LocalizationError> {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        mgr.set_current(lang).or_else(|_| mgr.set_current(FALLBACK_LANG))
    })
}

pub fn set_current_language(lang: SupportedLang) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| cell.borrow_mut().set_current(lang))
}

pub fn current_language() -> SupportedLang {
    LOCALIZATION.with(|cell| cell.borrow().current)
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, Some(&fargs)))
}
