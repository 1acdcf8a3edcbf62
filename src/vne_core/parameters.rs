// For indicatif
pub const PB_TEMPLATES: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta_precise}) \t{msg}";
pub const PB_CHARS: &str = "#9876543210>-";

pub const SHORTEST_K: usize = 100;
pub const HOP_SLUG: usize = 2;

// Tolerance for f64 rounding when a mapping reverses its own load
// contributions. A real accounting bug under-runs by a whole demand.
pub const LOAD_EPSILON: f64 = 1e-9;
