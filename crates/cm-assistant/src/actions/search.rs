//! search, recommend, and the direct-browse fallback.

use cm_catalog::{Filters, Vehicle, apply_filters};

use crate::format::grouped;
use crate::recommend::{TOP_N, top_picks};
use crate::response::Response;

/// Ask for a budget on soft-only input; otherwise hand back a search directive.
///
/// The catalog is not consulted here: the caller runs the query.
pub fn search(filters: &Filters) -> Response {
    if filters.has_soft() && !filters.has_strong() {
        return Response::text("Got it, any budget range in mind?");
    }
    Response::search(describe(filters), filters.clone())
}

/// `Searching for {powertrain} {bodyType} cars[ under $N][ in R][ (Y)]...`
pub fn describe(filters: &Filters) -> String {
    let mut message = format!(
        "Searching for {} {} cars",
        filters.powertrain.as_deref().unwrap_or_default(),
        filters.body_type.as_deref().unwrap_or_default()
    );
    if let Some(max) = filters.max_price {
        message.push_str(&format!(" under ${}", grouped(max)));
    }
    if let Some(region) = &filters.region {
        message.push_str(&format!(" in {region}"));
    }
    if let Some(year) = filters.year {
        message.push_str(&format!(" ({year})"));
    }
    message.push_str("...");
    message
}

pub fn recommend(catalog: &[Vehicle], filters: &Filters) -> Response {
    let candidates = apply_filters(catalog, filters);
    let picks = top_picks(&candidates);
    if picks.is_empty() {
        return Response::text("No recommendations matched your request.");
    }
    Response::cars("Here are a few recommendations for you:", picks)
}

/// Filter the catalog directly and show the first few matches.
pub fn browse(catalog: &[Vehicle], filters: &Filters) -> Response {
    let mut results = apply_filters(catalog, filters);
    if results.is_empty() {
        return Response::text("No matches found. Try relaxing your filters or changing the region.");
    }
    let message = format!("Found {} match(es). Showing top results:", results.len());
    results.truncate(TOP_N);
    Response::cars(message, results)
}
