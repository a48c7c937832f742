//! Platform-independent effect logic. Nothing in here touches the DOM, so it
//! builds and tests on the host.

pub mod attrs;
pub mod page;
pub mod particles;
pub mod theme;
pub mod tilt;
pub mod typing;

pub use attrs::*;
pub use page::*;
pub use particles::*;
pub use theme::*;
pub use tilt::*;
pub use typing::*;
