// src/company.rs
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// The closed set of companies the dashboard covers. Keys double as the
/// `news_<key>.json` path segment and as JSON map keys, so the serde form is
/// the lowercase identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyKey {
    Tencent,
    Baidu,
    Jd,
    Alibaba,
    Xiaomi,
    Meituan,
}

impl CompanyKey {
    /// Index-page card order.
    pub const ALL: [CompanyKey; 6] = [
        CompanyKey::Tencent,
        CompanyKey::Baidu,
        CompanyKey::Jd,
        CompanyKey::Alibaba,
        CompanyKey::Xiaomi,
        CompanyKey::Meituan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyKey::Tencent => "tencent",
            CompanyKey::Baidu => "baidu",
            CompanyKey::Jd => "jd",
            CompanyKey::Alibaba => "alibaba",
            CompanyKey::Xiaomi => "xiaomi",
            CompanyKey::Meituan => "meituan",
        }
    }

    /// Human-readable name as rendered on the cards.
    pub fn display_name(&self) -> &'static str {
        match self {
            CompanyKey::Tencent => "Tencent",
            CompanyKey::Baidu => "Baidu",
            CompanyKey::Jd => "JD.com",
            CompanyKey::Alibaba => "Alibaba",
            CompanyKey::Xiaomi => "Xiaomi",
            CompanyKey::Meituan => "Meituan",
        }
    }
}

impl fmt::Display for CompanyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("unknown company key: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_via_str() {
        for k in CompanyKey::ALL {
            assert_eq!(k.as_str().parse::<CompanyKey>().unwrap(), k);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Tencent".parse::<CompanyKey>().unwrap(), CompanyKey::Tencent);
        assert!("netflix".parse::<CompanyKey>().is_err());
    }

    #[test]
    fn serde_form_is_lowercase_key() {
        let json = serde_json::to_string(&CompanyKey::Jd).unwrap();
        assert_eq!(json, r#""jd""#);
        let back: CompanyKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CompanyKey::Jd);
    }
}
