pub mod coerce;
pub mod csv;
pub mod document;
pub mod factory;
pub mod font;
pub mod item;
pub mod layout;
pub mod template;

pub use document::{Document, TableProperties};
pub use font::{CustomFont, FontSource};
pub use item::{BarLayout, BarLink, Button, Divider, Image, Item, LinkBar, Spacer, Text, WidthUnit};
pub use layout::{Borders, Cell, Direction, FlexAlign, HAlign, Padding, Row, VAlign};
pub use template::SignatureTemplate;

/// Fresh node id. Ids are unique within a document for its whole lifetime.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
