/// Use cases module containing application business logic orchestration
mod search_nvd;

pub use search_nvd::SearchNvdUseCase;
