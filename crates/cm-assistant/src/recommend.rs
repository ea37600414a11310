//! Recommendation scorer: ranks vehicles by fuel economy against price.

use cm_catalog::Vehicle;

/// How many vehicles a recommendation returns.
pub const TOP_N: usize = 3;

/// `(city_mpg + hwy_mpg) * 2 - price / 1000`. Missing fields count as zero.
pub fn score(vehicle: &Vehicle) -> f64 {
    vehicle.total_mpg() * 2.0 - vehicle.msrp / 1000.0
}

/// Highest-scoring `TOP_N` vehicles, best first.
///
/// The sort is stable: exact ties keep their input order.
pub fn top_picks(candidates: &[Vehicle]) -> Vec<Vehicle> {
    let mut scored: Vec<(f64, &Vehicle)> = candidates.iter().map(|v| (score(v), v)).collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(TOP_N)
        .map(|(_, v)| v.clone())
        .collect()
}
