use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronic,
    Garden,
    Clothes,
    Shoe,
    Game,
    Furniture,
    Kitchenware,
    Others,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Electronic,
        Category::Garden,
        Category::Clothes,
        Category::Shoe,
        Category::Game,
        Category::Furniture,
        Category::Kitchenware,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronic => "Electronic",
            Category::Garden => "Garden",
            Category::Clothes => "Clothes",
            Category::Shoe => "Shoe",
            Category::Game => "Game",
            Category::Furniture => "Furniture",
            Category::Kitchenware => "Kitchenware",
            Category::Others => "Others",
        }
    }

    /// Parses a select-box value where the empty string means "unset".
    pub fn parse_optional(value: &str) -> Result<Option<Category>, UnknownCategory> {
        if value.is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
