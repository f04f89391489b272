//! Local visitor client adapter
//!
//! - [`local::LocalVisitorClient`] - in-process implementation of the
//!   [`VisitorClient`](chatview_application::VisitorClient) port
//! - [`script`] - JSONL event scripts replayed into the local client

pub mod local;
pub mod script;
