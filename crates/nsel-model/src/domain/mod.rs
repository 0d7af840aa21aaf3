mod labels;
pub use labels::Labels;

mod token;
pub use token::DisplayToken;

mod catalog;
pub use catalog::LabelCatalog;

mod constants;
pub use constants::{ESCAPE_CHAR, LABEL_SEPARATOR};
