//! User-facing display strings, English and Chinese.

use std::fmt;
use std::str::FromStr;

/// Display language for labels on the fretboard and status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Zh,
}

impl Lang {
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Zh,
            Lang::Zh => Lang::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Label shown at an open-string position.
    pub fn open_label(self) -> &'static str {
        match self {
            Lang::En => "Open",
            Lang::Zh => "空弦",
        }
    }

    /// Fingering legend under the fretboard.
    pub fn legend(self) -> &'static str {
        match self {
            Lang::En => "Numbers inside dots indicate recommended fingering (1=Index, 4=Pinky).",
            Lang::Zh => "圆点内的数字代表推荐指法 (1=食指, 4=小指)。",
        }
    }

    pub fn major_label(self) -> &'static str {
        match self {
            Lang::En => "major",
            Lang::Zh => "大调",
        }
    }

    pub fn shape_suffix(self) -> &'static str {
        match self {
            Lang::En => "-shape",
            Lang::Zh => "-型",
        }
    }

    pub fn position_label(self) -> &'static str {
        match self {
            Lang::En => "Position",
            Lang::Zh => "把位",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "zh" => Ok(Lang::Zh),
            other => Err(format!("unknown language: {other} (en|zh)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Lang::En.toggled(), Lang::Zh);
        assert_eq!(Lang::Zh.toggled().toggled(), Lang::Zh);
    }

    #[test]
    fn parse_tags() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("ZH".parse::<Lang>(), Ok(Lang::Zh));
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn labels_differ_per_language() {
        assert_ne!(Lang::En.open_label(), Lang::Zh.open_label());
        assert_ne!(Lang::En.legend(), Lang::Zh.legend());
    }
}
