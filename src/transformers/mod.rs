//! Visitors which rewrite a parsed [`parser::Module`]

pub mod amp;
