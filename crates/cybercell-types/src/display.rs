//! Closed display vocabularies.
//!
//! These enums carry no behavior beyond selecting a color, glyph or asset.
//! Frontends map them to whatever their medium supports.

use serde::Serialize;

/// Named palette entries used by gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hue {
    CyberBlue,
    CyberPurple,
    CyberPink,
    CyberGreen,
    CyberOrange,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Cyan,
    Purple,
    Pink,
}

/// Two-stop gradient, top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Gradient {
    pub from: Hue,
    pub to: Hue,
}

impl Gradient {
    /// Substituted when a card does not specify one.
    pub const DEFAULT: Gradient = Gradient::new(Hue::CyberBlue, Hue::CyberPurple);

    pub const fn new(from: Hue, to: Hue) -> Self {
        Self { from, to }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Badge color selected by a severity, complexity or similar label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Red,
    Orange,
    Yellow,
    Green,
    Gray,
}

/// Icons referenced by the content, named after the glyph set they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    AlertTriangle,
    ArrowRight,
    BookOpen,
    Bot,
    Brain,
    CheckCircle,
    Clock,
    Cpu,
    Download,
    ExternalLink,
    Eye,
    FileText,
    Globe,
    Lock,
    Mail,
    Shield,
    Star,
    Target,
    Users,
    Wifi,
    Zap,
}

/// Static image assets referenced by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageAsset {
    HeroCyber,
    CyberAwareness,
    CyberThreats,
    Mitigation,
    References,
    ByteLogo,
    PyneveraLogo,
}

impl ImageAsset {
    pub fn path(self) -> &'static str {
        match self {
            ImageAsset::HeroCyber => "assets/hero-cyber.jpg",
            ImageAsset::CyberAwareness => "assets/cyber-awareness.jpg",
            ImageAsset::CyberThreats => "assets/cyber-threats.jpg",
            ImageAsset::Mitigation => "assets/mitigation.jpg",
            ImageAsset::References => "assets/references.jpg",
            ImageAsset::ByteLogo => "assets/byte.png",
            ImageAsset::PyneveraLogo => "assets/logo.png",
        }
    }
}
