pub mod html;
pub mod value;

pub use html::{HtmlRenderer, PageEntry};
pub use value::MetricFormatter;
