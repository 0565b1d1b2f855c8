// Resume-to-job relevance ranking.
// Flow: validate → fetch candidate pool → dedup by id → score each description → sort.
// Pure functions below `matcher`; only `matcher` touches the provider.

pub mod dedup;
pub mod handlers;
pub mod matcher;
pub mod ranking;
pub mod similarity;
pub mod tokenize;
