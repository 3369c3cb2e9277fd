pub mod draft;
pub mod parsed;
