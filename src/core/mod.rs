pub mod consent;
pub mod controller;
pub mod countdown;
pub mod message;
pub mod modal;
pub mod page;
pub mod reviews;
pub mod validator;

pub use crate::domain::model::{FieldInput, LeadForm, Notification, Tariff};
pub use crate::domain::ports::{AnalyticsSink, ConfigProvider, ConsentStore, FormView, LeadSink};
pub use crate::utils::error::Result;
