use crate::Record;

/// Filters records by a search term.
///
/// A record matches when its name contains the term, its backend ID equals the term, or its
/// zero-padded catalogue number contains the term. A blank term matches everything.
pub fn search<'r>(records: &'r [Record], term: &str) -> Vec<&'r Record> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&term)
                || record.id.to_string() == term
                || record
                    .custom_id
                    .is_some_and(|custom_id| format!("{custom_id:04}").contains(&term))
        })
        .collect()
}
