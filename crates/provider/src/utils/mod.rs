pub mod logging;
pub mod operation_helpers;
