//! Static icon tables.
//!
//! Records carry icon names as plain strings; each context maps them onto a
//! small closed set of symbols and falls back to a default for unknown keys.

use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    CheckCircle,
    Star,
    Apple,
    Atom,
    Server,
    Swift,
    Flutter,
    Circle,
    GitHub,
    LinkedIn,
    Twitter,
    Mail,
    Briefcase,
    ArrowRight,
    ChevronLeft,
    ChevronRight,
}

impl Icon {
    /// Single-character stand-in for renderers without an icon font
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Award => "🏆",
            Icon::CheckCircle => "✔",
            Icon::Star => "★",
            Icon::Apple => "◍",
            Icon::Atom => "⚛",
            Icon::Server => "▤",
            Icon::Swift => "◭",
            Icon::Flutter => "◈",
            Icon::Circle => "○",
            Icon::GitHub => "⌥",
            Icon::LinkedIn => "in",
            Icon::Twitter => "𝕏",
            Icon::Mail => "✉",
            Icon::Briefcase => "▣",
            Icon::ArrowRight => "→",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Icon::Award => "Award",
            Icon::CheckCircle => "CheckCircle",
            Icon::Star => "Star",
            Icon::Apple => "Apple",
            Icon::Atom => "Atom",
            Icon::Server => "Server",
            Icon::Swift => "Swift",
            Icon::Flutter => "Flutter",
            Icon::Circle => "Circle",
            Icon::GitHub => "GitHub",
            Icon::LinkedIn => "LinkedIn",
            Icon::Twitter => "Twitter",
            Icon::Mail => "Mail",
            Icon::Briefcase => "Briefcase",
            Icon::ArrowRight => "ArrowRight",
            Icon::ChevronLeft => "ChevronLeft",
            Icon::ChevronRight => "ChevronRight",
        }
    }
}

/// Social networks the contact block knows how to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
}

impl SocialKind {
    pub fn name(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::Twitter => "Twitter",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            SocialKind::GitHub => Icon::GitHub,
            SocialKind::LinkedIn => Icon::LinkedIn,
            SocialKind::Twitter => Icon::Twitter,
        }
    }
}

lazy_static! {
    static ref ACHIEVEMENT_ICONS: HashMap<&'static str, Icon> = HashMap::from([
        ("Award", Icon::Award),
        ("CheckCircle", Icon::CheckCircle),
        ("Star", Icon::Star),
    ]);
    static ref SKILL_ICONS: HashMap<&'static str, Icon> = HashMap::from([
        ("Swift", Icon::Swift),
        ("Flutter", Icon::Flutter),
        ("Apple", Icon::Apple),
        ("React", Icon::Atom),
        ("Server", Icon::Server),
    ]);
}

/// Which lookup table an icon name is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    Achievement,
    Skill,
}

impl IconSet {
    pub fn fallback(self) -> Icon {
        match self {
            IconSet::Achievement => Icon::Award,
            IconSet::Skill => Icon::Circle,
        }
    }

    fn table(self) -> &'static HashMap<&'static str, Icon> {
        match self {
            IconSet::Achievement => &*ACHIEVEMENT_ICONS,
            IconSet::Skill => &*SKILL_ICONS,
        }
    }

    /// Resolve a record's icon name; unknown names get the set's fallback
    pub fn resolve(self, name: &str) -> Icon {
        self.table()
            .get(name)
            .copied()
            .unwrap_or_else(|| self.fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_icons() {
        assert_eq!(IconSet::Achievement.resolve("Star"), Icon::Star);
        assert_eq!(IconSet::Achievement.resolve("CheckCircle"), Icon::CheckCircle);
        assert_eq!(IconSet::Achievement.resolve("Rocket"), Icon::Award);
        assert_eq!(IconSet::Achievement.resolve(""), Icon::Award);
    }

    #[test]
    fn test_skill_icons() {
        assert_eq!(IconSet::Skill.resolve("React"), Icon::Atom);
        assert_eq!(IconSet::Skill.resolve("Swift"), Icon::Swift);
        assert_eq!(IconSet::Skill.resolve("Flutter"), Icon::Flutter);
        assert_eq!(IconSet::Skill.resolve("Kotlin"), Icon::Circle);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(IconSet::Achievement.resolve("star"), Icon::Award);
    }

    #[test]
    fn test_social_icons() {
        assert_eq!(SocialKind::GitHub.icon(), Icon::GitHub);
        assert_eq!(SocialKind::LinkedIn.name(), "LinkedIn");
        assert!(!Icon::Twitter.glyph().is_empty());
    }
}
