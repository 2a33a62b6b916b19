//! Host collaborator model — ports, params, lights and the module trait.

pub mod module;
pub mod port;

pub use module::{Module, ProcessArgs, load_state, save_state};
pub use port::{Input, Light, Output, Param, ParamConfig};
