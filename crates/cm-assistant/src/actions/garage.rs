//! Save the first mentioned model through the caller's hook.

use cm_catalog::{Filters, Vehicle};

use super::compare::find_by_models;
use crate::hooks::Hooks;
use crate::response::Response;

pub fn add_to_garage(catalog: &[Vehicle], filters: &Filters, hooks: Hooks<'_>) -> Response {
    let Some(car) = find_by_models(catalog, &filters.models).next() else {
        return Response::text(
            "I could not find that model to add. Try \"add corolla to my garage\".",
        );
    };

    let delivered = hooks.add_to_garage(car);
    tracing::info!(vehicle_id = %car.id, delivered, "garage add requested");
    Response::text(format!("✅ Added {} to your garage.", car.label()))
}
