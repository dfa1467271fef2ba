//! Score categories — the twelve fixed rows of the sheet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rows on every score card. Each card has exactly this many slots.
pub const CATEGORY_COUNT: usize = 12;

/// One row of the score sheet: the six number categories, then the
/// combination categories. Declaration order is sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "UNO")]
    Uno,
    #[serde(rename = "DUE")]
    Due,
    #[serde(rename = "TRE")]
    Tre,
    #[serde(rename = "QUA")]
    Quattro,
    #[serde(rename = "CIN")]
    Cinque,
    #[serde(rename = "SEI")]
    Sei,
    #[serde(rename = "FUL")]
    Full,
    #[serde(rename = "POK")]
    Poker,
    #[serde(rename = "YAH")]
    Yahtzee,
    #[serde(rename = "SCA")]
    ScalaGrande,
    #[serde(rename = "SCP")]
    ScalaPiccola,
    #[serde(rename = "LIB")]
    TiroLibero,
}

impl Category {
    /// All categories in sheet order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Uno,
        Category::Due,
        Category::Tre,
        Category::Quattro,
        Category::Cinque,
        Category::Sei,
        Category::Full,
        Category::Poker,
        Category::Yahtzee,
        Category::ScalaGrande,
        Category::ScalaPiccola,
        Category::TiroLibero,
    ];

    /// Three-letter code, as typed at the prompt.
    #[inline]
    pub fn code(self) -> &'static str {
        match self {
            Category::Uno => "UNO",
            Category::Due => "DUE",
            Category::Tre => "TRE",
            Category::Quattro => "QUA",
            Category::Cinque => "CIN",
            Category::Sei => "SEI",
            Category::Full => "FUL",
            Category::Poker => "POK",
            Category::Yahtzee => "YAH",
            Category::ScalaGrande => "SCA",
            Category::ScalaPiccola => "SCP",
            Category::TiroLibero => "LIB",
        }
    }

    /// Name printed on the sheet.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Category::Uno => "Uno",
            Category::Due => "Due",
            Category::Tre => "Tre",
            Category::Quattro => "Quattro",
            Category::Cinque => "Cinque",
            Category::Sei => "Sei",
            Category::Full => "Full",
            Category::Poker => "Poker",
            Category::Yahtzee => "Yahtzee",
            Category::ScalaGrande => "Scala Grande",
            Category::ScalaPiccola => "Scala Piccola",
            Category::TiroLibero => "Tiro Libero",
        }
    }

    /// Row index in sheet order (0–11).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a code typed at the prompt. Case-insensitive.
    pub fn from_code(code: &str) -> Option<Category> {
        let upper = code.to_ascii_uppercase();
        Category::ALL.iter().copied().find(|c| c.code() == upper)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), CATEGORY_COUNT);
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
        let mut codes: Vec<&str> = Category::ALL.iter().map(|c| c.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), CATEGORY_COUNT, "codes must be distinct");
    }

    #[test]
    fn test_codes_match_sheet_order() {
        let codes: Vec<&str> = Category::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(
            codes,
            vec!["UNO", "DUE", "TRE", "QUA", "CIN", "SEI", "FUL", "POK", "YAH", "SCA", "SCP", "LIB"]
        );
    }

    #[test]
    fn test_labels_match_sheet() {
        assert_eq!(Category::Quattro.label(), "Quattro");
        assert_eq!(Category::ScalaGrande.label(), "Scala Grande");
        assert_eq!(Category::ScalaPiccola.label(), "Scala Piccola");
        assert_eq!(Category::TiroLibero.label(), "Tiro Libero");
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Category::from_code("YAH"), Some(Category::Yahtzee));
        assert_eq!(Category::from_code("yah"), Some(Category::Yahtzee));
        assert_eq!(Category::from_code("Scp"), Some(Category::ScalaPiccola));
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Category::from_code(""), None);
        assert_eq!(Category::from_code("XYZ"), None);
        assert_eq!(Category::from_code("UNO "), None);
    }

    #[test]
    fn test_serde_tokens_are_the_codes() {
        for cat in Category::ALL {
            let token = serde_json::to_value(cat).unwrap();
            assert_eq!(token, serde_json::json!(cat.code()));
        }
        let back: Category = serde_json::from_str("\"SCA\"").unwrap();
        assert_eq!(back, Category::ScalaGrande);
    }
}
