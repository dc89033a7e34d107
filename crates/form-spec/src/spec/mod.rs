pub mod control;
pub mod form;

pub use control::{Choice, Control, ControlLabel, Validation};
pub use form::{Column, Form, Group, Page, Row, Rule, Section};
