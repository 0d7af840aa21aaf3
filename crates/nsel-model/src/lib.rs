mod domain;
pub use domain::{ESCAPE_CHAR, LABEL_SEPARATOR};
pub use domain::{DisplayToken, LabelCatalog, Labels};

mod error;
pub use error::{ModelError, ModelResult};

pub mod codec;
pub use codec::{DecodeReport, DropReason, DroppedToken, decode, decode_report, encode};
