use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ADMIN_FLAG: &str = "1";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub age: Option<i64>,
    pub counter: i64,
    pub grill: i64,
    pub checkout: i64,
    pub prep: i64,
    pub administrator: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.administrator == ADMIN_FLAG
    }

    pub fn skills(&self) -> SkillRatings {
        SkillRatings {
            counter: self.counter,
            grill: self.grill,
            checkout: self.checkout,
            prep: self.prep,
        }
    }
}

/// Row data for a freshly registered employee. Ratings and the administrator
/// flag start at their column defaults.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub code: String,
    pub password_hash: String,
    pub age: Option<i64>,
}

/// The four station ratings, always written together.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SkillRatings {
    pub counter: i64,
    pub grill: i64,
    pub checkout: i64,
    pub prep: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Station {
    Counter,
    Grill,
    Checkout,
    Prep,
}

impl Station {
    pub const ALL: [Station; 4] = [Station::Counter, Station::Grill, Station::Checkout, Station::Prep];

    /// Form field and column name.
    pub fn field(&self) -> &'static str {
        match self {
            Station::Counter => "counter",
            Station::Grill => "grill",
            Station::Checkout => "checkout",
            Station::Prep => "prep",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Station::Counter => "カウンター",
            Station::Grill => "焼き場",
            Station::Checkout => "会計",
            Station::Prep => "仕込み",
        }
    }

    pub fn rating(&self, skills: &SkillRatings) -> i64 {
        match self {
            Station::Counter => skills.counter,
            Station::Grill => skills.grill,
            Station::Checkout => skills.checkout,
            Station::Prep => skills.prep,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    None,
    Some,
    Moderate,
    Mastery,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [SkillLevel::None, SkillLevel::Some, SkillLevel::Moderate, SkillLevel::Mastery];

    /// Ratings are stored unchecked, so anything outside 0..=3 has no level.
    pub fn from_rating(rating: i64) -> Option<Self> {
        match rating {
            0 => Some(SkillLevel::None),
            1 => Some(SkillLevel::Some),
            2 => Some(SkillLevel::Moderate),
            3 => Some(SkillLevel::Mastery),
            _ => None,
        }
    }

    pub fn rating(&self) -> i64 {
        match self {
            SkillLevel::None => 0,
            SkillLevel::Some => 1,
            SkillLevel::Moderate => 2,
            SkillLevel::Mastery => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::None => "まったく",
            SkillLevel::Some => "少し",
            SkillLevel::Moderate => "まあまあ",
            SkillLevel::Mastery => "マスター",
        }
    }
}
