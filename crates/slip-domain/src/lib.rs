// slip-domain library entry point
pub mod branch;
pub mod change_request;
pub mod error;
pub mod slip;
pub mod slip_type;
pub use branch::Branch;
pub use change_request::{ChangeRequest, RequestStatus};
pub use error::DomainError;
pub use slip::{DraftSlip, Slip};
pub use slip_type::SlipType;
