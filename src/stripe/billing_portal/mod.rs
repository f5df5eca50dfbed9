//! Customer portal configurations and the sessions that open the portal.

pub mod configuration;
pub mod session;

pub use configuration::{
    Configuration, CreateConfiguration, FeaturesParams, ListConfigurations, UpdateConfiguration,
};
pub use session::{CreateSession, Flow, FlowType, Session};
