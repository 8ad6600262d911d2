/// Use cases module containing application business logic orchestration
mod resolve_bootstrap_images;

pub use resolve_bootstrap_images::ResolveBootstrapImagesUseCase;
