// Layout: turns a résumé document into a positioned display list.
// Text is measured with static width tables, so rendering is pure and synchronous.

pub mod arrangements;
pub mod flow;
pub mod font_metrics;
pub mod page;
pub mod surface;

pub use arrangements::Arrangement;
pub use page::{PageFormat, PageGeometry};
pub use surface::{Color, Surface};
