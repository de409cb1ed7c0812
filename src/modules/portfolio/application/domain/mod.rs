pub mod entities;
pub mod metadata;
pub mod view;
