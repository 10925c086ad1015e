mod fetcher;
mod parser;
mod models;
mod archiver;
mod error;

#[cfg(test)]
mod test_utils;

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PRODUCTS_PER_PAGE: u32 = 100;
const OUTPUT_FILE: &str = "result.json";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let summary = run(&catalog_url(PRODUCTS_PER_PAGE), Path::new(OUTPUT_FILE))?;

    println!(
        "Triggered HTTP requests = {}, extracted products = {}",
        summary.requests, summary.products
    );
    Ok(())
}

struct RunSummary {
    requests: u32,
    products: usize,
}

/// Fetches one catalog page and writes every record it contains to `output`.
/// Exports however many entities the page actually holds; the page size only
/// shapes the request.
fn run(url: &str, output: &Path) -> error::Result<RunSummary> {
    let mut session = fetcher::FetchSession::new()?;
    let body = session.fetch_text(url)?;
    info!(bytes = body.len(), "fetched catalog page");

    let page = parser::parse_catalog(&body)?;
    let products = parser::extract_products(&page)?;
    info!(count = products.len(), "extracted products");

    archiver::save_to_file(&products, output)?;
    info!(path = %output.display(), "wrote output file");

    Ok(RunSummary {
        requests: session.request_count(),
        products: products.len(),
    })
}

/// The fixed catalog query: category 20290 on shop 605, sponsored sort, first
/// page, attribute/advanced-attribute/variant/image field selection baked in.
fn catalog_url(per_page: u32) -> String {
    format!(
        "https://api-cloud.aboutyou.de/v1/products\
         ?with=attributes%3Akey%28brand%7CbrandLogo%7CbrandAlignment%7Cname%7CquantityPerPack\
         %7CplusSize%7CcolorDetail%7CsponsorBadge%7CsponsoredType%7CmaternityNursing%7Cexclusive\
         %7Cgenderage%7CspecialSizesProduct%7CmaterialStyle%7CsustainabilityIcons%7CassortmentType\
         %7CdROPS%29%2CadvancedAttributes%3Akey%28materialCompositionTextile%7Csiblings%29\
         %2Cvariants%2Cvariants.attributes%3Akey%28shopSize%7CcategoryShopFilterSizes%7Ccup\
         %7Ccupsize%7CvendorSize%7Clength%7Cdimension3%7CsizeType%7Csort%29\
         %2Cimages.attributes%3Alegacy%28false%29%3Akey%28imageNextDetailLevel%7CimageBackground\
         %7CimageFocus%7CimageGender%7CimageType%7CimageView%29%2CpriceRange\
         &filters%5Bcategory%5D=20290&sortDir=desc&sortScore=category_scores\
         &sortChannel=sponsored_web_default&shopId=605&page=1&perPage={per_page}"
    )
}
