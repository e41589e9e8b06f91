//! Resource model types

pub mod descriptor;
pub mod resource_id;
pub mod state;

pub use descriptor::{
    ChangePolicy, Encoding, Endpoint, Endpoints, FieldKind, FieldRule, FieldSpec, HttpMethod,
    OutputSpec, ReadMode, ResourceDescriptor,
};
pub use resource_id::{IdShape, ResourceId};
pub use state::{is_empty_value, Args, CreateOutcome, DiffResult, ReadOutcome, ResourceState};
