use crate::domain::model::{ClassifiedRecord, RawRecord};

pub const OPEN: &str = "open";
pub const PRIMARY_COLORS: [&str; 3] = ["red", "blue", "yellow"];

pub fn is_primary(color: &str) -> bool {
    PRIMARY_COLORS.contains(&color)
}

pub fn classify(record: &RawRecord) -> ClassifiedRecord {
    ClassifiedRecord {
        id: record.id.clone(),
        color: record.color.clone(),
        disposition: record.disposition.clone(),
        is_primary: is_primary(&record.color),
    }
}

/// Per-page aggregates computed from the first page's records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub ids: Vec<String>,
    pub open: Vec<ClassifiedRecord>,
    pub closed_primary_count: usize,
}

pub fn summarize(records: &[RawRecord]) -> Classification {
    let mut summary = Classification {
        ids: Vec::with_capacity(records.len()),
        ..Default::default()
    };

    for record in records.iter().map(classify) {
        summary.ids.push(record.id.clone());

        // Exact, case-sensitive match.
        if record.disposition == OPEN {
            summary.open.push(record);
        } else if record.is_primary {
            summary.closed_primary_count += 1;
        }
    }

    summary
}
