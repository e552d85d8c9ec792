//! Keyed string lookup against the embedded locale tables.
//!
//! Keys are dotted paths into the locale JSON (`page_review.queued_post`).
//! A missing key resolves to the key itself so gaps show up on screen instead
//! of rendering blank.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use leptos::logging::{error, warn};
use leptos::{provide_context, use_context};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    ZhCn,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::ZhCn => "zh_CN",
        }
    }

    fn table(self) -> &'static str {
        match self {
            Locale::EnUs => include_str!("../locales/en_US.json"),
            Locale::ZhCn => include_str!("../locales/zh_CN.json"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown locale `{0}`")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").to_ascii_lowercase().as_str() {
            "en" | "en_us" => Ok(Locale::EnUs),
            "zh" | "zh_cn" => Ok(Locale::ZhCn),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
    table: Rc<Value>,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        let table = serde_json::from_str(locale.table()).unwrap_or_else(|err| {
            error!("[I18N] Locale table {} is not valid JSON: {}", locale, err);
            Value::Null
        });
        Self {
            locale,
            table: Rc::new(table),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| {
            warn!("[I18N] Missing key {} for {}", key, self.locale);
            key.to_string()
        })
    }

    /// Like [`Translator::t`], replacing `{{name}}` placeholders.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{{{name}}}}}"), value)
        })
    }

    fn lookup(&self, key: &str) -> Option<String> {
        key.split('.')
            .try_fold(self.table.as_ref(), |node, part| node.get(part))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

pub fn provide_i18n(locale: Locale) {
    provide_context(Translator::new(locale));
}

/// The translator from context, or the default locale when none was provided.
pub fn use_i18n() -> Translator {
    use_context::<Translator>().unwrap_or_default()
}
