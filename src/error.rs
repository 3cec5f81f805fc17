// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A Fluent resource failed to parse or register.
    Catalog(String),
    UnsupportedLocale(String),
    MissingTranslationKey {
        locale: String,
        key: String,
    },
    InvalidSelector(String),
    /// The host document could not be read as markup.
    Document(String),
    MountTargetNotFound {
        selector: String,
    },
    AlreadyMounted {
        selector: String,
    },
    /// Mounting was attempted before a localization service was registered.
    LocalizationNotRegistered,
    /// The UI runtime failed after mounting.
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::UnsupportedLocale(locale) => {
                write!(f, "Unsupported locale: {}", locale)
            }
            Error::MissingTranslationKey { locale, key } => {
                write!(f, "Missing translation key '{}' for locale {}", key, locale)
            }
            Error::InvalidSelector(selector) => {
                write!(f, "Invalid mount selector: {}", selector)
            }
            Error::Document(e) => write!(f, "Document Error: {}", e),
            Error::MountTargetNotFound { selector } => {
                write!(f, "Mount target not found: {}", selector)
            }
            Error::AlreadyMounted { selector } => {
                write!(f, "An application is already mounted on {}", selector)
            }
            Error::LocalizationNotRegistered => {
                write!(f, "No localization service registered before mounting")
            }
            Error::Runtime(e) => write!(f, "Runtime Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Runtime(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Document(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
