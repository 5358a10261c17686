use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - projection horizon in days
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, From, Into, Display, Serialize, Deserialize,
)]
pub struct Horizon(u32);

impl Horizon {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Regression model requested from the projection endpoint
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ProjectionModel {
    #[default]
    #[strum(serialize = "linear")]
    #[serde(rename = "linear")]
    Linear,

    #[strum(serialize = "rf")]
    #[serde(rename = "rf")]
    RandomForest,
}

impl ProjectionModel {
    /// Human label for the model select control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Linear Regression",
            Self::RandomForest => "Random Forest",
        }
    }
}

/// How often the recurring contribution is applied
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum ContributionFrequency {
    #[default]
    #[strum(serialize = "monthly")]
    #[serde(rename = "monthly")]
    Monthly,

    #[strum(serialize = "quarterly")]
    #[serde(rename = "quarterly")]
    Quarterly,

    #[strum(serialize = "annually")]
    #[serde(rename = "annually")]
    Annually,
}

impl ContributionFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
        }
    }
}

/// Lookback window token understood by the historical endpoint
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum HistoryPeriod {
    #[strum(serialize = "1mo")]
    #[serde(rename = "1mo")]
    OneMonth,

    #[strum(serialize = "3mo")]
    #[serde(rename = "3mo")]
    ThreeMonths,

    #[strum(serialize = "6mo")]
    #[serde(rename = "6mo")]
    SixMonths,

    #[default]
    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    OneYear,

    #[strum(serialize = "2y")]
    #[serde(rename = "2y")]
    TwoYears,

    #[strum(serialize = "5y")]
    #[serde(rename = "5y")]
    FiveYears,

    #[strum(serialize = "max")]
    #[serde(rename = "max")]
    Max,
}

impl HistoryPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::OneYear => "1 Year",
            Self::TwoYears => "2 Years",
            Self::FiveYears => "5 Years",
            Self::Max => "Max",
        }
    }
}
