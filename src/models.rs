use serde::{Deserialize, Serialize};

/// One extracted catalog record. Keys serialize in declaration order:
/// id, name, brand, price, colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub brand: String,
    /// Tax-inclusive price in minor currency units.
    pub price: u64,
    /// "/"-joined composite labels; primary color first, then sibling colors.
    pub colors: Vec<String>,
}

/// Decoded shape of one catalog page. Only the paths the extractor reads are
/// modeled; everything else in the response is ignored by the decoder.
#[derive(Debug, Deserialize)]
pub struct CatalogPage {
    pub entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: u64,
    pub attributes: Attributes,
    pub price_range: PriceRange,
    pub advanced_attributes: AdvancedAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub name: LabeledAttribute,
    pub brand: LabeledAttribute,
    pub color_detail: ColorAttribute,
}

/// Attribute whose `values` is a single labeled object (`name`, `brand`).
#[derive(Debug, Deserialize)]
pub struct LabeledAttribute {
    pub values: Labeled,
}

/// Attribute whose `values` is an array of labeled objects (`colorDetail`).
#[derive(Debug, Deserialize)]
pub struct ColorAttribute {
    pub values: Vec<Labeled>,
}

#[derive(Debug, Deserialize)]
pub struct Labeled {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct PriceRange {
    pub min: PricePoint,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub with_tax: u64,
}

/// `siblings` is the only optional piece of the page: entities without color
/// variants simply do not carry the key.
#[derive(Debug, Deserialize)]
pub struct AdvancedAttributes {
    pub siblings: Option<Siblings>,
}

#[derive(Debug, Deserialize)]
pub struct Siblings {
    pub values: Vec<SiblingGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiblingGroup {
    pub field_set: Vec<Vec<Sibling>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sibling {
    pub is_sold_out: bool,
    pub color_detail: Vec<Labeled>,
}
