use crate::error::{ExportError, Result};
use crate::models::{CatalogPage, Entity, Labeled, Product};

/// Decodes a raw catalog body. Every field path the extractor reads is
/// validated here in a single pass.
pub fn parse_catalog(body: &str) -> Result<CatalogPage> {
    Ok(serde_json::from_str(body)?)
}

/// Extracts the product at `index` from a decoded page.
pub fn extract_product(page: &CatalogPage, index: usize) -> Result<Product> {
    let entity = page.entities.get(index).ok_or_else(|| ExportError::Index {
        index,
        available: page.entities.len(),
    })?;
    product_from_entity(entity)
}

/// Extracts every product on the page, in entity order.
pub fn extract_products(page: &CatalogPage) -> Result<Vec<Product>> {
    (0..page.entities.len())
        .map(|index| extract_product(page, index))
        .collect()
}

fn product_from_entity(entity: &Entity) -> Result<Product> {
    Ok(Product {
        id: entity.id,
        name: entity.attributes.name.values.label.clone(),
        brand: entity.attributes.brand.values.label.clone(),
        price: entity.price_range.min.with_tax,
        colors: extract_colors(entity)?,
    })
}

/// Primary color first, then the colors of in-stock siblings in array order.
/// Sold-out siblings are dropped without a placeholder.
fn extract_colors(entity: &Entity) -> Result<Vec<String>> {
    let mut colors = vec![join_labels(&entity.attributes.color_detail.values)];

    let Some(siblings) = &entity.advanced_attributes.siblings else {
        return Ok(colors);
    };

    let group = siblings.values.first().ok_or_else(|| ExportError::Schema {
        detail: "advancedAttributes.siblings.values is empty".into(),
    })?;
    let variants = group.field_set.first().ok_or_else(|| ExportError::Schema {
        detail: "advancedAttributes.siblings fieldSet is empty".into(),
    })?;

    for sibling in variants {
        if sibling.is_sold_out {
            continue;
        }
        colors.push(join_labels(&sibling.color_detail));
    }

    Ok(colors)
}

fn join_labels(values: &[Labeled]) -> String {
    values
        .iter()
        .map(|value| value.label.as_str())
        .collect::<Vec<_>>()
        .join("/")
}
