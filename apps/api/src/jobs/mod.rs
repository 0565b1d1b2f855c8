// Job listings: posting model, provider collaborator, and the raw candidate-pool endpoint.
// The provider is the only module that talks to the external job-search API.

pub mod handlers;
pub mod models;
pub mod provider;

#[cfg(test)]
pub mod fake;
