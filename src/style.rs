use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tone applied to generated captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaptionStyle {
    #[default]
    Funny,
    Casual,
    Professional,
    Inspirational,
    Minimalist,
    Punny,
}

impl CaptionStyle {
    /// Every style, in display order.
    pub const ALL: [CaptionStyle; 6] = [
        CaptionStyle::Funny,
        CaptionStyle::Casual,
        CaptionStyle::Professional,
        CaptionStyle::Inspirational,
        CaptionStyle::Minimalist,
        CaptionStyle::Punny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptionStyle::Funny => "Funny",
            CaptionStyle::Casual => "Casual",
            CaptionStyle::Professional => "Professional",
            CaptionStyle::Inspirational => "Inspirational",
            CaptionStyle::Minimalist => "Minimalist",
            CaptionStyle::Punny => "Punny",
        }
    }

    /// Case-insensitive lookup by tag name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Writing guidance handed to the model for this tone.
    pub fn guideline(&self) -> &'static str {
        match self {
            CaptionStyle::Funny => "Use humor, irony, or relatable wit.",
            CaptionStyle::Casual => "Use a conversational and friendly tone.",
            CaptionStyle::Professional => {
                "Focus on value, authority, and clear language."
            }
            CaptionStyle::Inspirational => "Focus on motivation and growth.",
            CaptionStyle::Minimalist => "Keep every caption under 10 words.",
            CaptionStyle::Punny => "Use wordplay related to the topic.",
        }
    }
}

impl fmt::Display for CaptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown caption style: {}", s))
    }
}

/// Language the captions are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_funny() {
        assert_eq!(CaptionStyle::default(), CaptionStyle::Funny);
    }

    #[test]
    fn test_all_styles_distinct() {
        let mut names: Vec<_> = CaptionStyle::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(CaptionStyle::parse("punny"), Some(CaptionStyle::Punny));
        assert_eq!(
            " PROFESSIONAL ".parse::<CaptionStyle>(),
            Ok(CaptionStyle::Professional)
        );
        assert!("sarcastic".parse::<CaptionStyle>().is_err());
    }

    #[test]
    fn test_minimalist_guideline() {
        assert!(CaptionStyle::Minimalist.guideline().contains("under 10 words"));
    }

    #[test]
    fn test_serde_uses_tag_name() {
        let json = serde_json::to_string(&CaptionStyle::Inspirational).unwrap();
        assert_eq!(json, "\"Inspirational\"");
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("french".parse::<Language>(), Ok(Language::French));
        assert_eq!(Language::default(), Language::English);
        assert!("klingon".parse::<Language>().is_err());
    }
}
