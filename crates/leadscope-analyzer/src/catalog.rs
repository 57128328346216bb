//! Static signal registry and problem weights.
//!
//! Every pattern is lowercase; content is lowercased once before matching.
//! A signal is present when any of its patterns occurs anywhere in the page.

use serde::{Deserialize, Serialize};

/// A named indicator detected in page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Flash,
    Html4,
    Xhtml,
    Frameset,
    TableLayout,
    LegacyEditor,
    IeCompat,
    JoomlaLegacy,
    WordpressLegacy,
    Php5,
    Wordpress,
    Joomla,
    Drupal,
    Wix,
    Squarespace,
    Shopify,
    React,
    Vue,
    Angular,
    Tailwind,
    Bootstrap,
    Bulma,
    Jquery,
    GoogleFonts,
    Html5,
    InsecureReference,
    UpgradeInsecure,
}

impl Signal {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Flash => "flash",
            Signal::Html4 => "html4",
            Signal::Xhtml => "xhtml",
            Signal::Frameset => "frameset",
            Signal::TableLayout => "table_layout",
            Signal::LegacyEditor => "legacy_editor",
            Signal::IeCompat => "ie_compat",
            Signal::JoomlaLegacy => "joomla_legacy",
            Signal::WordpressLegacy => "wordpress_legacy",
            Signal::Php5 => "php5",
            Signal::Wordpress => "wordpress",
            Signal::Joomla => "joomla",
            Signal::Drupal => "drupal",
            Signal::Wix => "wix",
            Signal::Squarespace => "squarespace",
            Signal::Shopify => "shopify",
            Signal::React => "react",
            Signal::Vue => "vue",
            Signal::Angular => "angular",
            Signal::Tailwind => "tailwind",
            Signal::Bootstrap => "bootstrap",
            Signal::Bulma => "bulma",
            Signal::Jquery => "jquery",
            Signal::GoogleFonts => "google_fonts",
            Signal::Html5 => "html5",
            Signal::InsecureReference => "insecure_reference",
            Signal::UpgradeInsecure => "upgrade_insecure",
        }
    }

    /// Registry entry for this signal.
    #[must_use]
    pub fn def(self) -> Option<&'static SignalDef> {
        CATALOG.iter().find(|d| d.signal == self)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Deprecated technology or markup era.
    Obsolete,
    Cms,
    Platform,
    /// Earns the modern-stack bonus.
    ModernFramework,
    CssFramework,
    Library,
    ModernMarkup,
    Security,
}

impl SignalKind {
    /// `true` for technology/platform indicators reported as
    /// `technologies_detected`.
    #[must_use]
    pub fn is_technology(self) -> bool {
        matches!(
            self,
            SignalKind::Cms
                | SignalKind::Platform
                | SignalKind::ModernFramework
                | SignalKind::CssFramework
                | SignalKind::Library
        )
    }
}

/// One registry row: the signal, how it is classified, what it matches,
/// and the problem category it raises (if any).
#[derive(Debug)]
pub struct SignalDef {
    pub signal: Signal,
    pub kind: SignalKind,
    pub patterns: &'static [&'static str],
    pub problem: Option<Problem>,
}

/// The signal registry, in problem-detection order.
pub const CATALOG: &[SignalDef] = &[
    // Obsolete technology
    SignalDef {
        signal: Signal::Flash,
        kind: SignalKind::Obsolete,
        patterns: &[".swf", "application/x-shockwave-flash"],
        problem: Some(Problem::Flash),
    },
    SignalDef {
        signal: Signal::JoomlaLegacy,
        kind: SignalKind::Obsolete,
        patterns: &["joomla! 1.5", "joomla 1.5", "joomla! 2.5", "joomla 2.5"],
        problem: Some(Problem::LegacyJoomla),
    },
    SignalDef {
        signal: Signal::Html4,
        kind: SignalKind::Obsolete,
        patterns: &["html 4.01", "<!doctype html public"],
        problem: Some(Problem::LegacyMarkup),
    },
    SignalDef {
        signal: Signal::Xhtml,
        kind: SignalKind::Obsolete,
        patterns: &["xhtml 1.0", "xhtml 1.1"],
        problem: Some(Problem::LegacyMarkup),
    },
    SignalDef {
        signal: Signal::WordpressLegacy,
        kind: SignalKind::Obsolete,
        patterns: &["wordpress 3.", "wordpress 2."],
        problem: Some(Problem::LegacyWordPress),
    },
    SignalDef {
        signal: Signal::Php5,
        kind: SignalKind::Obsolete,
        patterns: &["php/5.", "php 5."],
        problem: Some(Problem::LegacyPhp),
    },
    SignalDef {
        signal: Signal::Frameset,
        kind: SignalKind::Obsolete,
        patterns: &["<frameset"],
        problem: Some(Problem::FramesetLayout),
    },
    SignalDef {
        signal: Signal::TableLayout,
        kind: SignalKind::Obsolete,
        patterns: &["<td><img", "<table width="],
        problem: Some(Problem::TableLayout),
    },
    SignalDef {
        signal: Signal::LegacyEditor,
        kind: SignalKind::Obsolete,
        patterns: &["dreamweaver", "frontpage", "mso-"],
        problem: Some(Problem::LegacyEditor),
    },
    SignalDef {
        signal: Signal::IeCompat,
        kind: SignalKind::Obsolete,
        patterns: &["x-ua-compatible"],
        problem: None,
    },
    // CMS
    SignalDef {
        signal: Signal::Wordpress,
        kind: SignalKind::Cms,
        patterns: &["wp-content", "wp-includes", "wordpress"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Joomla,
        kind: SignalKind::Cms,
        patterns: &["com_content", "joomla"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Drupal,
        kind: SignalKind::Cms,
        patterns: &["drupal", "sites/default/files"],
        problem: None,
    },
    // Hosted platforms
    SignalDef {
        signal: Signal::Wix,
        kind: SignalKind::Platform,
        patterns: &["wixstatic", "wix.com"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Squarespace,
        kind: SignalKind::Platform,
        patterns: &["squarespace"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Shopify,
        kind: SignalKind::Platform,
        patterns: &["cdn.shopify", "shopify"],
        problem: None,
    },
    // Modern frameworks
    SignalDef {
        signal: Signal::React,
        kind: SignalKind::ModernFramework,
        patterns: &["react-dom", "data-reactroot", "_next/"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Vue,
        kind: SignalKind::ModernFramework,
        patterns: &["vue.js", "vue.min.js", "data-v-"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Angular,
        kind: SignalKind::ModernFramework,
        patterns: &["ng-app", "ng-version", "angular"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Tailwind,
        kind: SignalKind::ModernFramework,
        patterns: &["tailwind"],
        problem: None,
    },
    // CSS frameworks and libraries
    SignalDef {
        signal: Signal::Bootstrap,
        kind: SignalKind::CssFramework,
        patterns: &["bootstrap"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Bulma,
        kind: SignalKind::CssFramework,
        patterns: &["bulma"],
        problem: None,
    },
    SignalDef {
        signal: Signal::Jquery,
        kind: SignalKind::Library,
        patterns: &["jquery"],
        problem: None,
    },
    SignalDef {
        signal: Signal::GoogleFonts,
        kind: SignalKind::Library,
        patterns: &["fonts.googleapis"],
        problem: None,
    },
    // Markup era and security indicators
    SignalDef {
        signal: Signal::Html5,
        kind: SignalKind::ModernMarkup,
        patterns: &["<!doctype html>"],
        problem: None,
    },
    SignalDef {
        signal: Signal::InsecureReference,
        kind: SignalKind::Security,
        patterns: &["http://"],
        problem: None,
    },
    SignalDef {
        signal: Signal::UpgradeInsecure,
        kind: SignalKind::Security,
        patterns: &["upgrade-insecure-requests"],
        problem: None,
    },
];

/// A weighted defect category. Each category contributes its penalty at
/// most once per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Unreachable,
    MalformedContent,
    Flash,
    LegacyJoomla,
    LegacyMarkup,
    LegacyWordPress,
    LegacyPhp,
    FramesetLayout,
    TableLayout,
    LegacyEditor,
    NoHttps,
    MixedContent,
    NotResponsive,
    MissingMetaDescription,
    MissingTitle,
    NoContactForm,
    NoSocialLinks,
}

const HTML5_REBUILD: &str = "Rebuild the markup on semantic HTML5";
const HTTPS_SETUP: &str = "Install an SSL certificate and serve the site over HTTPS";
const BASIC_SEO: &str = "Basic SEO optimization";

impl Problem {
    /// Points subtracted from the baseline score of 10.
    #[must_use]
    pub fn penalty(self) -> u8 {
        match self {
            Problem::Flash => 4,
            Problem::LegacyJoomla | Problem::NotResponsive => 3,
            Problem::NoHttps
            | Problem::LegacyWordPress
            | Problem::LegacyPhp
            | Problem::LegacyMarkup
            | Problem::FramesetLayout => 2,
            Problem::TableLayout
            | Problem::LegacyEditor
            | Problem::MixedContent
            | Problem::MissingMetaDescription
            | Problem::MissingTitle => 1,
            Problem::Unreachable
            | Problem::MalformedContent
            | Problem::NoContactForm
            | Problem::NoSocialLinks => 0,
        }
    }

    /// Human-readable problem statement.
    #[must_use]
    pub fn statement(self) -> &'static str {
        match self {
            Problem::Unreachable => "Site unreachable",
            Problem::MalformedContent => "Page content is not recognizable HTML",
            Problem::Flash => "Uses Flash, which no browser supports anymore",
            Problem::LegacyJoomla => "Outdated Joomla release with known vulnerabilities",
            Problem::LegacyMarkup => "Obsolete HTML4/XHTML markup, not responsive",
            Problem::LegacyWordPress => "Very old WordPress release, likely vulnerable",
            Problem::LegacyPhp => "Runs on PHP 5, which no longer receives security fixes",
            Problem::FramesetLayout => "Layout built on framesets",
            Problem::TableLayout => "Layout built with HTML tables",
            Problem::LegacyEditor => "Markup generated by a discontinued desktop editor",
            Problem::NoHttps => "Not served over HTTPS, insecure for customers",
            Problem::MixedContent => "Mixed HTTP/HTTPS content",
            Problem::NotResponsive => "Not responsive: no viewport for mobile devices",
            Problem::MissingMetaDescription => "Missing meta description, hurts SEO",
            Problem::MissingTitle => "Page title missing or too short",
            Problem::NoContactForm => "No contact form found",
            Problem::NoSocialLinks => "No social media links",
        }
    }

    /// Remediation recommended for this problem. Several problems share a
    /// remedy; the opportunity generator deduplicates them.
    #[must_use]
    pub fn opportunity(self) -> Option<&'static str> {
        match self {
            Problem::Unreachable => Some("Restore hosting so customers can reach the site"),
            Problem::MalformedContent => None,
            Problem::Flash => Some("Migrate Flash content to modern HTML5"),
            Problem::LegacyJoomla => Some("Upgrade or migrate off the outdated Joomla release"),
            Problem::LegacyWordPress => Some("Update WordPress to the current release"),
            Problem::LegacyPhp => Some("Move hosting to a supported PHP version"),
            Problem::LegacyMarkup
            | Problem::FramesetLayout
            | Problem::TableLayout
            | Problem::LegacyEditor => Some(HTML5_REBUILD),
            Problem::NoHttps | Problem::MixedContent => Some(HTTPS_SETUP),
            Problem::NotResponsive => Some("Responsive redesign for phones and tablets"),
            Problem::MissingMetaDescription | Problem::MissingTitle => Some(BASIC_SEO),
            Problem::NoContactForm => Some("Add a contact form for customer inquiries"),
            Problem::NoSocialLinks => Some("Link social media profiles and WhatsApp"),
        }
    }
}
