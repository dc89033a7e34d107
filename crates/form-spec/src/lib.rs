#![allow(missing_docs)]

pub mod load;
pub mod outline;
pub mod schema;
pub mod spec;
pub mod visibility;

pub use load::{LoadError, load_form};
pub use outline::{flatten_section, format_choices, mandatory_status, render_outline};
pub use schema::generate as form_schema;
pub use spec::{
    Choice, Column, Control, ControlLabel, Form, Group, Page, Row, Rule, Section, Validation,
};
pub use visibility::{VisibilityHost, resolve_visibility};
