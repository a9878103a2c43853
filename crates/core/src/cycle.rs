//! Cyclic symbol tables: the ten heavenly stems and twelve earthly branches

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::element::Element;
use crate::error::DomainError;

/// Reduce an arbitrary index into `[0, base)`.
pub fn cyc_index(n: i64, base: usize) -> usize {
    n.rem_euclid(base as i64) as usize
}

/// Heavenly stem (天干)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl HeavenlyStem {
    pub const COUNT: usize = 10;

    pub const ALL: [HeavenlyStem; HeavenlyStem::COUNT] = [
        HeavenlyStem::Jia,
        HeavenlyStem::Yi,
        HeavenlyStem::Bing,
        HeavenlyStem::Ding,
        HeavenlyStem::Wu,
        HeavenlyStem::Ji,
        HeavenlyStem::Geng,
        HeavenlyStem::Xin,
        HeavenlyStem::Ren,
        HeavenlyStem::Gui,
    ];

    pub fn from_index(index: i64) -> Self {
        Self::ALL[cyc_index(index, Self::COUNT)]
    }

    pub fn position(&self) -> usize {
        *self as usize
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            HeavenlyStem::Jia => "甲",
            HeavenlyStem::Yi => "乙",
            HeavenlyStem::Bing => "丙",
            HeavenlyStem::Ding => "丁",
            HeavenlyStem::Wu => "戊",
            HeavenlyStem::Ji => "己",
            HeavenlyStem::Geng => "庚",
            HeavenlyStem::Xin => "辛",
            HeavenlyStem::Ren => "壬",
            HeavenlyStem::Gui => "癸",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            HeavenlyStem::Jia | HeavenlyStem::Yi => Element::Wood,
            HeavenlyStem::Bing | HeavenlyStem::Ding => Element::Fire,
            HeavenlyStem::Wu | HeavenlyStem::Ji => Element::Earth,
            HeavenlyStem::Geng | HeavenlyStem::Xin => Element::Metal,
            HeavenlyStem::Ren | HeavenlyStem::Gui => Element::Water,
        }
    }
}

/// Earthly branch (地支)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl EarthlyBranch {
    pub const COUNT: usize = 12;

    pub const ALL: [EarthlyBranch; EarthlyBranch::COUNT] = [
        EarthlyBranch::Zi,
        EarthlyBranch::Chou,
        EarthlyBranch::Yin,
        EarthlyBranch::Mao,
        EarthlyBranch::Chen,
        EarthlyBranch::Si,
        EarthlyBranch::Wu,
        EarthlyBranch::Wei,
        EarthlyBranch::Shen,
        EarthlyBranch::You,
        EarthlyBranch::Xu,
        EarthlyBranch::Hai,
    ];

    pub fn from_index(index: i64) -> Self {
        Self::ALL[cyc_index(index, Self::COUNT)]
    }

    pub fn position(&self) -> usize {
        *self as usize
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            EarthlyBranch::Zi => "子",
            EarthlyBranch::Chou => "丑",
            EarthlyBranch::Yin => "寅",
            EarthlyBranch::Mao => "卯",
            EarthlyBranch::Chen => "辰",
            EarthlyBranch::Si => "巳",
            EarthlyBranch::Wu => "午",
            EarthlyBranch::Wei => "未",
            EarthlyBranch::Shen => "申",
            EarthlyBranch::You => "酉",
            EarthlyBranch::Xu => "戌",
            EarthlyBranch::Hai => "亥",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            EarthlyBranch::Zi | EarthlyBranch::Hai => Element::Water,
            EarthlyBranch::Chou | EarthlyBranch::Chen | EarthlyBranch::Wei | EarthlyBranch::Xu => {
                Element::Earth
            }
            EarthlyBranch::Yin | EarthlyBranch::Mao => Element::Wood,
            EarthlyBranch::Si | EarthlyBranch::Wu => Element::Fire,
            EarthlyBranch::Shen | EarthlyBranch::You => Element::Metal,
        }
    }
}

macro_rules! symbol_traits {
    ($ty:ty, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.symbol() == s)
                    .ok_or_else(|| DomainError::$err(s.to_string()))
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.symbol())
            }
        }
    };
}

symbol_traits!(HeavenlyStem, UnknownStem);
symbol_traits!(EarthlyBranch, UnknownBranch);
