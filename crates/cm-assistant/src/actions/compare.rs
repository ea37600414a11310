//! Side-by-side price and efficiency for two mentioned models.

use cm_catalog::{Filters, Vehicle};

use crate::format::grouped;
use crate::response::Response;

/// Vehicles whose name/trim/model code contain any model token, in catalog order.
pub fn find_by_models<'a>(
    catalog: &'a [Vehicle],
    models: &'a [String],
) -> impl Iterator<Item = &'a Vehicle> + 'a {
    catalog.iter().filter(move |v| v.matches_any_token(models))
}

pub fn compare(catalog: &[Vehicle], filters: &Filters) -> Response {
    let pair: Vec<Vehicle> = find_by_models(catalog, &filters.models)
        .take(2)
        .cloned()
        .collect();

    let [a, b] = pair.as_slice() else {
        return Response::text("I need two models to compare, e.g., \"compare camry and corolla\".");
    };

    let price_diff = (a.msrp - b.msrp).abs();
    let (mpg_a, mpg_b) = (a.total_mpg(), b.total_mpg());
    let verdict = if mpg_a == mpg_b {
        "Similar efficiency.".to_string()
    } else if mpg_a > mpg_b {
        format!("{} tends to have better MPG.", a.name)
    } else {
        format!("{} tends to have better MPG.", b.name)
    };

    let message = format!(
        "Comparing {} vs {}:\n- Price difference ≈ {} {}\n- {}",
        a.label(),
        b.label(),
        a.currency,
        grouped(price_diff),
        verdict
    );
    tracing::debug!(left = %a.id, right = %b.id, "comparison built");
    Response::cars(message, pair)
}
