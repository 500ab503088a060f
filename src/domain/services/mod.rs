pub mod month;
pub mod reconciler;
pub mod validation;
