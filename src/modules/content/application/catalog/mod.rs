pub mod lookup;
pub mod seeds;

pub use lookup::{
    BrowseCatalogError, BrowseCatalogUseCase, CatalogItem, CatalogKind, IBrowseCatalogUseCase,
    LogoCatalog, UnknownCatalog,
};
