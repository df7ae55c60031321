//! Noyau fault : codes, raisons localisées, producteurs de fault
//!
//! - [`FaultCode`] : code hiérarchique (nom + namespace + sous-codes) ;
//! - [`FaultReason`] / [`FaultReasonText`] : raisons localisées avec repli
//!   par généralisation de langue ;
//! - [`ProblemHeaderQNameFault`] : détail WS-Addressing 1.0 désignant le
//!   header fautif ;
//! - [`ProtocolViolation`] : diagnostics structurés des violations de
//!   protocole, chacun producteur du message de fault correspondant.

mod code;
mod problem_header;
mod reason;
mod violation;

pub use code::FaultCode;
pub use problem_header::ProblemHeaderQNameFault;
pub use reason::{FaultReason, FaultReasonText, LanguageTag};
pub use violation::{HeaderId, ProtocolViolation};
