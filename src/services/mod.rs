pub mod prompt_builder;
pub mod title_extractor;
