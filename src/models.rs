use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned offer identifier. The offers API has shipped both string
/// and numeric ids, so either is accepted and rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfferId {
    Number(serde_json::Number),
    Text(String),
}

impl Default for OfferId {
    fn default() -> Self {
        OfferId::Text(String::new())
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferId::Number(n) => write!(f, "{n}"),
            OfferId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    pub id: OfferId,
    pub upc: String,
    pub name: String,
    pub party_name: String,
    pub semantic_name: String,
    pub main_image_file_url: String,
    pub party_image_file_url: String,
    pub product_category: String,
    pub price: f64,
    pub rating: f64,
    pub num_reviews: i64,
}

impl Offer {
    /// Table cells in rendering order, unescaped.
    pub fn cells(&self) -> [String; 11] {
        [
            self.id.to_string(),
            self.upc.clone(),
            self.name.clone(),
            self.party_name.clone(),
            self.semantic_name.clone(),
            self.main_image_file_url.clone(),
            self.party_image_file_url.clone(),
            self.product_category.clone(),
            self.price.to_string(),
            self.rating.to_string(),
            self.num_reviews.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    pub page: u32,
    pub page_count: u32,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OfferList {
    #[serde(default)]
    pub list: Vec<Offer>,
    #[serde(default)]
    pub summary: Option<Summary>,
}

/// Add payload. Non-finite floats and a missing review count serialize as
/// `null`, so malformed input still reaches the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub upc: String,
    pub name: String,
    pub party_name: String,
    pub semantic_name: String,
    pub main_image_file_url: String,
    pub party_image_file_url: String,
    pub product_category: String,
    pub price: f64,
    pub rating: f64,
    pub num_reviews: Option<i64>,
}

/// Raw text of the add form, exactly as the browser posted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferForm {
    pub upc: String,
    pub name: String,
    pub party_name: String,
    pub semantic_name: String,
    pub main_image_file_url: String,
    pub party_image_file_url: String,
    pub product_category: String,
    pub price: String,
    pub rating: String,
    pub num_reviews: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_accepts_numeric_and_text_ids() {
        let numeric: Offer = serde_json::from_str(r#"{"id":1,"name":"Widget"}"#).unwrap();
        assert_eq!(numeric.id.to_string(), "1");
        assert_eq!(numeric.name, "Widget");

        let text: Offer = serde_json::from_str(r#"{"id":"a-b-c"}"#).unwrap();
        assert_eq!(text.id.to_string(), "a-b-c");
        assert_eq!(text.num_reviews, 0);
    }

    #[test]
    fn offer_list_summary_is_optional() {
        let bare: OfferList = serde_json::from_str(r#"{"list":[]}"#).unwrap();
        assert!(bare.summary.is_none());

        let paged: OfferList = serde_json::from_str(
            r#"{"list":[],"summary":{"page":1,"pageCount":3,"totalCount":25}}"#,
        )
        .unwrap();
        assert_eq!(paged.summary.map(|s| s.total_count), Some(25));
    }
}
