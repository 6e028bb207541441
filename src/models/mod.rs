pub mod content;
pub mod store;

pub use content::{
    ContentFile, ContentFolder, ContentFileEntry, ContentName, PageTranslation,
    PersistableContentPage, ReadableContentBox, ReadableContentPage,
};
pub use store::{Language, MerchantStore};
