// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Storefront read endpoints. Every handler resolves its merchant store and
// language explicitly before delegating to the content facade.

pub mod content;
