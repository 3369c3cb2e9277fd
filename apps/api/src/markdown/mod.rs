// Markdown round trip between editor drafts and free-form résumé markdown.
// Parser and generator are independent one-way transforms; neither calls the other.

pub mod bullets;
pub mod contact;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod vocabulary;

// Re-export the public API consumed by state and handlers.
pub use generator::{generate_markdown, GeneratedMarkdown};
pub use parser::MarkdownResumeParser;
