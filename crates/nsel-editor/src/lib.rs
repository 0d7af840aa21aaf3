pub mod editor;
pub mod error;
pub mod sink;
pub mod view;

pub mod prelude {
    pub use crate::editor::MultiSelectEditor;
    pub use crate::error::EditorError;
    pub use crate::sink::{LabelSink, SinkHandle, noop_sink};
    pub use crate::view::{FieldText, SelectOption, SelectSurface, SelectView};
}
