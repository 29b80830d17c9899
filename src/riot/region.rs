use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Platform routing values for Riot API (League-v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    LA1,
    LA2,
    NA1,
    OC1,
    JP1,
    KR,
    EUN1,
    EUW1,
    ME1,
    TR1,
    RU,
    PH2,
    SG2,
    TH2,
    TW2,
    VN2,
}

/// Every region code accepted from callers, aliases included.
pub const REGION_CODES: &[(&str, Platform)] = &[
    ("BR", Platform::BR1),
    ("BR1", Platform::BR1),
    ("LAN", Platform::LA1),
    ("LA1", Platform::LA1),
    ("LAS", Platform::LA2),
    ("LA2", Platform::LA2),
    ("NA", Platform::NA1),
    ("NA1", Platform::NA1),
    ("OC", Platform::OC1),
    ("OCE", Platform::OC1),
    ("OC1", Platform::OC1),
    ("JP", Platform::JP1),
    ("JP1", Platform::JP1),
    ("KR", Platform::KR),
    ("EUN", Platform::EUN1),
    ("EUNE", Platform::EUN1),
    ("EUN1", Platform::EUN1),
    ("EUW", Platform::EUW1),
    ("EUW1", Platform::EUW1),
    ("ME", Platform::ME1),
    ("ME1", Platform::ME1),
    ("TR", Platform::TR1),
    ("TR1", Platform::TR1),
    ("RU", Platform::RU),
    ("RU1", Platform::RU),
    ("PH", Platform::PH2),
    ("PH2", Platform::PH2),
    ("SG", Platform::SG2),
    ("SG2", Platform::SG2),
    ("TH", Platform::TH2),
    ("TH2", Platform::TH2),
    ("TW", Platform::TW2),
    ("TW2", Platform::TW2),
    ("VN", Platform::VN2),
    ("VN2", Platform::VN2),
];

impl Platform {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::NA1 => "na1",
            Self::OC1 => "oc1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::ME1 => "me1",
            Self::TR1 => "tr1",
            Self::RU => "ru",
            Self::PH2 => "ph2",
            Self::SG2 => "sg2",
            Self::TH2 => "th2",
            Self::TW2 => "tw2",
            Self::VN2 => "vn2",
        }
    }

    /// Account-v1 routing group. Oceania accounts live on the americas cluster.
    pub fn to_region(self) -> Region {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::NA1 | Self::OC1 => Region::Americas,
            Self::JP1 | Self::KR => Region::Asia,
            Self::EUN1 | Self::EUW1 | Self::ME1 | Self::TR1 | Self::RU => Region::Europe,
            Self::PH2 | Self::SG2 | Self::TH2 | Self::TW2 | Self::VN2 => Region::Sea,
        }
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();

        REGION_CODES
            .iter()
            .find(|(alias, _)| *alias == code)
            .map(|(_, platform)| *platform)
            .ok_or_else(|| AppError::InvalidRegion(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Regional routing values for Riot API (Account-v1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base URL to use for a caller supplied region code.
///
/// `want_area_wide` selects the regional cluster (account lookups) instead of
/// the platform shard (league lookups).
pub fn resolve_base_url(region_code: &str, want_area_wide: bool) -> Result<String, AppError> {
    let platform: Platform = region_code.parse()?;

    if want_area_wide {
        Ok(platform.to_region().base_url())
    } else {
        Ok(platform.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_to_regional_and_platform_urls() {
        for (code, platform) in REGION_CODES {
            let regional = resolve_base_url(code, true).unwrap();
            let shard = resolve_base_url(code, false).unwrap();

            assert_eq!(regional, platform.to_region().base_url(), "{code}");
            assert_eq!(shard, platform.base_url(), "{code}");
        }
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(
            resolve_base_url("na1", false).unwrap(),
            "https://na1.api.riotgames.com"
        );
        assert_eq!(
            resolve_base_url("euw", true).unwrap(),
            "https://europe.api.riotgames.com"
        );
        assert_eq!("Kr".parse::<Platform>().unwrap(), Platform::KR);
    }

    #[test]
    fn known_routes() {
        assert_eq!(
            resolve_base_url("OCE", true).unwrap(),
            "https://americas.api.riotgames.com"
        );
        assert_eq!(
            resolve_base_url("OCE", false).unwrap(),
            "https://oc1.api.riotgames.com"
        );
        assert_eq!(
            resolve_base_url("RU1", false).unwrap(),
            "https://ru.api.riotgames.com"
        );
        assert_eq!(
            resolve_base_url("VN", true).unwrap(),
            "https://sea.api.riotgames.com"
        );
        assert_eq!(
            resolve_base_url("JP", true).unwrap(),
            "https://asia.api.riotgames.com"
        );
    }

    #[test]
    fn unknown_code_is_invalid_region() {
        for code in ["ZZ9", "", "REGION", "americas"] {
            assert!(
                matches!(
                    resolve_base_url(code, true),
                    Err(AppError::InvalidRegion(_))
                ),
                "{code}"
            );
            assert!(matches!(
                resolve_base_url(code, false),
                Err(AppError::InvalidRegion(_))
            ));
        }
    }

    #[test]
    fn every_platform_belongs_to_one_region() {
        let platforms: Vec<Platform> = REGION_CODES.iter().map(|(_, p)| *p).collect();
        for platform in platforms {
            let region = platform.to_region();
            assert!(region.base_url().starts_with("https://"));
            assert_eq!(platform.to_string(), platform.as_str().to_uppercase());
        }
    }
}
