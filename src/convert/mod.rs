pub mod lexicon;
pub mod spell;

pub use lexicon::Lexicon;
pub use spell::{spell_out, write_number};
