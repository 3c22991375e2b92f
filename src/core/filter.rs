use crate::domain::model::{RadiusRange, Record};

/// Records with `min <= radius <= max`, in input order.
pub fn filter_by_radius(records: &[Record], min: f64, max: f64) -> Vec<Record> {
    filter_by_range(records, RadiusRange::new(min, max))
}

pub fn filter_by_range(records: &[Record], range: RadiusRange) -> Vec<Record> {
    records
        .iter()
        .filter(|r| range.contains(r.radius()))
        .cloned()
        .collect()
}
