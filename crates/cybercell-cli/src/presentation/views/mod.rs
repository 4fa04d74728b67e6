pub mod init;
pub mod page;
pub mod route;
pub mod tui;

use cybercell_types::{BadgeTone, Hue, Icon};

/// Terminal color for a palette entry.
pub(crate) fn hue_rgb(hue: Hue) -> (u8, u8, u8) {
    match hue {
        Hue::CyberBlue => (0, 191, 255),
        Hue::CyberPurple => (153, 51, 255),
        Hue::CyberPink => (255, 51, 187),
        Hue::CyberGreen => (0, 255, 128),
        Hue::CyberOrange => (255, 128, 26),
        Hue::Red => (239, 68, 68),
        Hue::Orange => (249, 115, 22),
        Hue::Yellow => (234, 179, 8),
        Hue::Green => (34, 197, 94),
        Hue::Blue => (59, 130, 246),
        Hue::Cyan => (6, 182, 212),
        Hue::Purple => (168, 85, 247),
        Hue::Pink => (236, 72, 153),
    }
}

pub(crate) fn tone_rgb(tone: BadgeTone) -> (u8, u8, u8) {
    match tone {
        BadgeTone::Red => hue_rgb(Hue::Red),
        BadgeTone::Orange => hue_rgb(Hue::Orange),
        BadgeTone::Yellow => hue_rgb(Hue::Yellow),
        BadgeTone::Green => hue_rgb(Hue::Green),
        BadgeTone::Gray => (156, 163, 175),
    }
}

/// Single-cell stand-in for an icon.
pub(crate) fn icon_glyph(icon: Icon) -> char {
    match icon {
        Icon::AlertTriangle => '△',
        Icon::ArrowRight => '→',
        Icon::BookOpen => '▤',
        Icon::Bot => '◘',
        Icon::Brain => '✺',
        Icon::CheckCircle => '✓',
        Icon::Clock => '◷',
        Icon::Cpu => '▣',
        Icon::Download => '↓',
        Icon::ExternalLink => '↗',
        Icon::Eye => '◉',
        Icon::FileText => '≡',
        Icon::Globe => '◍',
        Icon::Lock => '◈',
        Icon::Mail => '✉',
        Icon::Shield => '◆',
        Icon::Star => '★',
        Icon::Target => '◎',
        Icon::Users => '☻',
        Icon::Wifi => '≋',
        Icon::Zap => 'ϟ',
    }
}
