pub mod descriptor;
pub mod search;
pub mod views;

pub use descriptor::{render_value, FieldDescriptor, RenderFn, EMPTY_PLACEHOLDER};
pub use search::{filter_documents, matches_query};
pub use views::{view_for, CollectionView};
