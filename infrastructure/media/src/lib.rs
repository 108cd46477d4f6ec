pub mod content_resolver;
