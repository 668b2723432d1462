use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A display language supported by the page.
///
/// Spanish is the primary language; English is the secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language tag: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    pub fn translation(self) -> &'static Translation {
        match self {
            Self::Es => &ES,
            Self::En => &EN,
        }
    }

    /// Infers a language from a user-agent locale such as `es-MX` or `en-US`.
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_ascii_lowercase().starts_with(Self::Es.tag()) {
            Self::Es
        } else {
            Self::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Picks the startup language.
///
/// A valid stored preference wins, then the locale, then the primary language.
pub fn resolve_language(stored: Option<&str>, locale: Option<&str>) -> Language {
    if let Some(lang) = stored.and_then(|s| s.parse().ok()) {
        return lang;
    }
    locale.map(Language::from_locale).unwrap_or_default()
}

/// Every display string of the page for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub available: &'static str,
    pub description: &'static str,
    pub download_cv: &'static str,
    pub download_cv_en: &'static str,
    pub copy_name: &'static str,
    pub tilt_effect: &'static str,
    pub certifications: &'static str,
    pub scroll_more: &'static str,
    pub name_copied: &'static str,
    pub copy_error: &'static str,
    pub certs_protected: &'static str,
    pub close: &'static str,
    pub toggle_theme: &'static str,
}

impl Translation {
    pub fn tilt_label(&self, enabled: bool) -> String {
        format!("{} {}", self.tilt_effect, if enabled { "ON" } else { "OFF" })
    }
}

static ES: Translation = Translation {
    available: "Disponible para roles técnicos",
    description: "Administración de sistemas y soporte técnico. Desarrollo Web y Aplicaciones de Escritorio, Configuración de servidores, Automatización con Python y servicios en Windows/Linux. Diseño de soluciones reproducibles, seguras y escalables.",
    download_cv: "Descargar CV (PDF)",
    download_cv_en: "Download CV (English)",
    copy_name: "Copiar nombre completo",
    tilt_effect: "Efecto tilt:",
    certifications: "🏆 Certificaciones",
    scroll_more: "← Desliza para ver más →",
    name_copied: "Nombre copiado",
    copy_error: "No se pudo copiar",
    certs_protected: "Las certificaciones están protegidas",
    close: "Cerrar",
    toggle_theme: "Cambiar tema",
};

static EN: Translation = Translation {
    available: "Available for technical roles",
    description: "Systems administration and technical support. Web Development and Desktop Applications, Server configuration, Automation with Python and Windows/Linux services. Design of reproducible, secure and scalable solutions.",
    // The Spanish CV keeps its Spanish title in both languages
    download_cv: "Descargar CV (Español)",
    download_cv_en: "Download CV (English)",
    copy_name: "Copy full name",
    tilt_effect: "Tilt effect:",
    certifications: "🏆 Certifications",
    scroll_more: "← Scroll for more →",
    name_copied: "Name copied",
    copy_error: "Could not copy",
    certs_protected: "Certifications are protected",
    close: "Close",
    toggle_theme: "Toggle theme",
};
