//! Source and quality enums for movie releases.

use super::ParseError;

/// Source/origin of the media release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// Lossless remux from disc
    Remux,
    /// Web download (lossless from streaming service)
    WebDl,
    /// Web rip (capture from streaming service)
    WebRip,
    /// Blu-ray disc rip
    BluRay,
    /// DVD rip
    Dvd,
}

impl Source {
    /// Canonical token as it appears in synthesized library names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Remux => "Remux",
            Source::WebDl => "WEB-DL",
            Source::WebRip => "Webrip",
            Source::BluRay => "BluRay",
            Source::Dvd => "DVD",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remux" => Ok(Source::Remux),
            "web-dl" | "webdl" => Ok(Source::WebDl),
            "webrip" | "web-rip" => Ok(Source::WebRip),
            "bluray" | "blu-ray" => Ok(Source::BluRay),
            "dvd" => Ok(Source::Dvd),
            _ => Err(ParseError(format!("invalid source: {}", s))),
        }
    }
}

/// Video quality tier of the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    /// 480p SD
    _480p,
    /// 720p HD
    _720p,
    /// 1080p Full HD
    _1080p,
    /// 4K Ultra HD
    _4K,
}

impl Quality {
    /// Canonical token as it appears in filenames and synthesized names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::_480p => "480p",
            Quality::_720p => "720p",
            Quality::_1080p => "1080p",
            Quality::_4K => "4K",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Quality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "480p" => Ok(Quality::_480p),
            "720p" => Ok(Quality::_720p),
            "1080p" => Ok(Quality::_1080p),
            "4k" => Ok(Quality::_4K),
            _ => Err(ParseError(format!("invalid quality: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_display_fromstr_roundtrip() {
        let variants = [
            Source::Remux,
            Source::WebDl,
            Source::WebRip,
            Source::BluRay,
            Source::Dvd,
        ];
        for variant in variants {
            let s = variant.to_string();
            let parsed: Source = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn quality_display_fromstr_roundtrip() {
        let variants = [
            Quality::_480p,
            Quality::_720p,
            Quality::_1080p,
            Quality::_4K,
        ];
        for variant in variants {
            let s = variant.to_string();
            let parsed: Quality = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn source_display_tokens() {
        assert_eq!(Source::Remux.to_string(), "Remux");
        assert_eq!(Source::WebDl.to_string(), "WEB-DL");
        assert_eq!(Source::WebRip.to_string(), "Webrip");
        assert_eq!(Source::BluRay.to_string(), "BluRay");
        assert_eq!(Source::Dvd.to_string(), "DVD");
    }

    #[test]
    fn unknown_tokens_rejected() {
        assert!("hdtv".parse::<Source>().is_err());
        assert!("2160p".parse::<Quality>().is_err());
    }
}
