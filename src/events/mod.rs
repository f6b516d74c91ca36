pub mod pointer;
pub mod sections;

pub use pointer::{wire_pointer_handlers, PointerListeners, PointerWiring};
pub use sections::SectionObserver;
