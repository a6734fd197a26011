use std::fmt;
use std::str::FromStr;

use crate::error::SplitcatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Splitwise,
    Personal,
    #[default]
    Uncategorized,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Splitwise, Category::Personal, Category::Uncategorized];

    /// Literal token used in exported files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Splitwise => "splitwise",
            Self::Personal => "personal",
            Self::Uncategorized => "uncategorized",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Splitwise => "Splitwise",
            Self::Personal => "Personal",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SplitcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "splitwise" => Ok(Self::Splitwise),
            "personal" => Ok(Self::Personal),
            "uncategorized" => Ok(Self::Uncategorized),
            _ => Err(SplitcatError::UnknownCategory(s.to_string())),
        }
    }
}

/// One row of a card export. Only `category` ever changes after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: usize,
    pub posted_date: String,
    pub reference_number: String,
    pub payee: String,
    pub address: String,
    pub amount: f64,
    pub category: Category,
}
