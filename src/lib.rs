pub mod convert;
pub mod input;
pub mod pipeline;
pub mod prompt;
pub mod scan;
