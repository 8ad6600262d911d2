/// BOM resolution domain: the decoded manifest, the selection and registry
/// policies, and the resolver service built on them.
pub mod domain;
pub mod policies;
pub mod services;
