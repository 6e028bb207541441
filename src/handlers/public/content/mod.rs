pub mod boxes;
pub mod folder;
pub mod pages;

// Re-export handler functions for use in routing
pub use boxes::get as box_get;
pub use boxes::get_for_store as store_box_get;
pub use boxes::list as boxes_list;
pub use boxes::summary as summary_list;

pub use folder::get as folder_get;
pub use folder::images as store_images_get;

pub use pages::get as page_get;
pub use pages::list as pages_list;
