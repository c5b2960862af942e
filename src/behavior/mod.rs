//! Site behavior controllers
//!
//! Each controller owns the state its behavior needs (no module-level
//! globals) and reaches the document only through `ElementRegistry`, so
//! every one of them can be driven in tests without a terminal or a
//! wall clock.

pub mod carousel;
pub mod form;
pub mod navbar;
pub mod router;

pub use carousel::Carousel;
pub use form::ContactForm;
pub use navbar::NavbarController;
pub use router::PageRouter;
