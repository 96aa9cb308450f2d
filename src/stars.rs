use crate::github::RepoRecord;

/// Sum `stargazers_count` across a repository listing.
///
/// Total over any input: a missing key or a value that is not a non-negative
/// integer counts as 0 rather than erroring.
pub fn sum_stars(records: &[RepoRecord]) -> u64 {
    records
        .iter()
        .map(|record| {
            record
                .get("stargazers_count")
                .and_then(|value| value.as_u64())
                .unwrap_or(0)
        })
        .sum()
}
