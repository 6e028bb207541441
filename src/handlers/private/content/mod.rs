pub mod assets;
pub mod page;

// Re-export handler functions for use in routing
pub use assets::delete as asset_delete;
pub use assets::upload;
pub use assets::upload_many;

pub use page::save as page_save;
