//! # pmosoap - Noyau fault SOAP
//!
//! Ce crate implémente la traduction des violations de protocole en messages
//! de fault SOAP versionnés : sélection du namespace selon le dialecte
//! d'enveloppe (SOAP 1.1 / SOAP 1.2), codes de fault hiérarchiques,
//! négociation des textes de raison par langue.
//!
//! ## Fonctionnalités
//!
//! - ✅ Versions d'enveloppe (None / SOAP 1.1 / SOAP 1.2) et règles d'actor
//! - ✅ Versions d'adressage WS-Addressing et appariements standard
//! - ✅ Codes de fault hiérarchiques avec classification Sender/Receiver
//! - ✅ Raisons localisées avec repli par généralisation de langue
//! - ✅ Production des faults WS-Addressing 1.0 (ActionMismatch,
//!   cardinalité de header, mustUnderstand)
//! - ✅ Sérialisation et parsing des enveloppes de fault
//!
//! ## Architecture
//!
//! - [`EnvelopeVersion`] / [`AddressingVersion`] / [`MessageVersion`] :
//!   descripteurs de dialecte
//! - [`FaultCode`] / [`FaultReason`] : contenu du fault
//! - [`ProtocolViolation`] : diagnostic → message de fault
//! - [`Message`] : message de fault prêt à émettre
//!
//! ## Example
//!
//! ```ignore
//! use pmosoap::{MessageVersion, ProtocolViolation};
//!
//! // Un header To dupliqué détecté sur un message entrant
//! let violation = ProtocolViolation::duplicate_header(
//!     "To",
//!     "http://www.w3.org/2005/08/addressing",
//! );
//!
//! // Traduction en fault SOAP 1.2 prêt à émettre
//! let message = violation.to_fault_message(MessageVersion::SOAP12_WSA10);
//! let xml = message.to_xml().unwrap();
//! assert!(xml.contains("InvalidCardinality"));
//! ```

pub mod addressing;
pub mod envelope;
pub mod errors;
pub mod fault;
pub mod message;
pub mod strings;

pub use crate::addressing::{AddressingVersion, MessageVersion};
pub use crate::envelope::EnvelopeVersion;
pub use crate::errors::SoapFaultError;
pub use crate::fault::{
    FaultCode, FaultReason, FaultReasonText, HeaderId, LanguageTag, ProblemHeaderQNameFault,
    ProtocolViolation,
};
pub use crate::message::{
    FaultDetail, FaultParseError, Message, MessageFault, MessageHeader, MessageHeaders,
    ReceivedFault, parse_fault_envelope,
};
