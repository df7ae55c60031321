//! Fault WS-Addressing 1.0 « problem header »
//!
//! [`ProblemHeaderQNameFault`] porte le qname du header d'adressage fautif,
//! le code hiérarchique et la raison. Selon l'enveloppe active, le détail
//! voyage dans un header `a:FaultDetail` (SOAP 1.1) ou dans le `s:Detail`
//! du corps (SOAP 1.2).

use crate::envelope::EnvelopeVersion;
use crate::fault::{FaultCode, FaultReason};
use crate::message::{FaultDetail, MessageFault, MessageHeader, MessageHeaders};
use crate::strings::addressing10;

/// Détail de fault désignant un header d'adressage fautif
#[derive(Debug, Clone)]
pub struct ProblemHeaderQNameFault {
    code: FaultCode,
    reason: FaultReason,
    invalid_header_name: String,
    invalid_header_namespace: String,
}

impl ProblemHeaderQNameFault {
    /// Fault pour un header dupliqué ou manquant
    ///
    /// Dupliqué : `Sender/[InvalidAddressingHeader/[InvalidCardinality]]` ;
    /// manquant : `Sender/[MessageAddressingHeaderRequired]`.
    pub fn from_header_cardinality(
        header_name: impl Into<String>,
        header_namespace: impl Into<String>,
        is_duplicate: bool,
        reason_text: impl Into<String>,
    ) -> ProblemHeaderQNameFault {
        let code = if is_duplicate {
            let invalid_cardinality = addressing10_code(addressing10::INVALID_CARDINALITY);
            let invalid_header = FaultCode::with_sub_code(
                addressing10::INVALID_ADDRESSING_HEADER,
                addressing10::NAMESPACE,
                invalid_cardinality,
            )
            .expect("well-known WS-Addressing fault code");
            FaultCode::create_sender_fault_code(invalid_header)
        } else {
            FaultCode::create_sender_fault_code(addressing10_code(
                addressing10::MESSAGE_ADDRESSING_HEADER_REQUIRED,
            ))
        };

        ProblemHeaderQNameFault {
            code,
            reason: FaultReason::new(reason_text),
            invalid_header_name: header_name.into(),
            invalid_header_namespace: header_namespace.into(),
        }
    }

    /// Fault pour une action en désaccord avec le header Action
    ///
    /// Le header fautif est toujours `wsa:Action`, code
    /// `Sender/[ActionMismatch]`.
    pub fn from_action_mismatch(reason_text: impl Into<String>) -> ProblemHeaderQNameFault {
        ProblemHeaderQNameFault {
            code: FaultCode::create_sender_fault_code(addressing10_code(
                addressing10::ACTION_MISMATCH,
            )),
            reason: FaultReason::new(reason_text),
            invalid_header_name: addressing10::ACTION.to_string(),
            invalid_header_namespace: addressing10::NAMESPACE.to_string(),
        }
    }

    pub fn code(&self) -> &FaultCode {
        &self.code
    }

    pub fn reason(&self) -> &FaultReason {
        &self.reason
    }

    pub fn invalid_header_name(&self) -> &str {
        &self.invalid_header_name
    }

    pub fn invalid_header_namespace(&self) -> &str {
        &self.invalid_header_namespace
    }

    /// Fault de message : le détail ProblemHeaderQName part dans le corps
    /// (il n'y est sérialisé qu'en SOAP 1.2)
    pub fn to_message_fault(&self) -> MessageFault {
        MessageFault::with_detail(
            self.code.clone(),
            self.reason.clone(),
            FaultDetail::ProblemHeaderQName {
                name: self.invalid_header_name.clone(),
                namespace: self.invalid_header_namespace.clone(),
            },
        )
    }

    /// Ajoute les headers propres au dialecte : `a:FaultDetail` en SOAP 1.1,
    /// rien en SOAP 1.2 (le détail est dans le corps)
    pub fn add_headers(&self, headers: &mut MessageHeaders, envelope: EnvelopeVersion) {
        if envelope == EnvelopeVersion::Soap11 {
            headers.add(MessageHeader::ProblemFaultDetail {
                name: self.invalid_header_name.clone(),
                namespace: self.invalid_header_namespace.clone(),
            });
        }
    }
}

/// Code du vocabulaire WS-Addressing 1.0
fn addressing10_code(name: &str) -> FaultCode {
    FaultCode::with_namespace(name, addressing10::NAMESPACE)
        .expect("well-known WS-Addressing fault code")
}
