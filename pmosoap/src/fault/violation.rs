//! Violations de protocole et production des messages de fault
//!
//! Chaque variante de [`ProtocolViolation`] porte le diagnostic structuré
//! d'une violation détectée sur le fil et sait produire le message de fault
//! correspondant : fonction pure de (diagnostic, version cible) vers
//! [`Message`], sans effet de bord, rejouable.

use thiserror::Error;
use tracing::debug;

use crate::addressing::{AddressingVersion, MessageVersion};
use crate::envelope::EnvelopeVersion;
use crate::fault::problem_header::ProblemHeaderQNameFault;
use crate::fault::{FaultCode, FaultReason};
use crate::message::{Message, MessageFault, MessageHeader};
use crate::strings::message;

/// Identité d'un header SOAP (nom local + namespace)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderId {
    pub name: String,
    pub namespace: String,
}

impl HeaderId {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> HeaderId {
        HeaderId {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Violation de protocole détectée sur un message entrant
#[derive(Error, Debug, Clone)]
pub enum ProtocolViolation {
    /// L'action du corps ne concorde pas avec le header wsa:Action
    #[error("The SOAP action '{soap_action}' does not match the addressing Action header '{header_action}'")]
    ActionMismatch {
        soap_action: String,
        header_action: String,
    },

    /// Cardinalité invalide d'un header d'adressage obligatoire :
    /// dupliqué (trop) ou absent (pas assez)
    #[error("{}", cardinality_message(.header_name, .header_namespace, .is_duplicate))]
    HeaderCardinality {
        header_name: String,
        header_namespace: String,
        is_duplicate: bool,
    },

    /// Headers marqués mustUnderstand non compris par le récepteur
    #[error("{}", must_understand_message(.not_understood))]
    MustUnderstand { not_understood: Vec<HeaderId> },
}

fn cardinality_message(name: &str, namespace: &str, is_duplicate: &bool) -> String {
    if *is_duplicate {
        format!("The header '{name}' from namespace '{namespace}' appears more than once")
    } else {
        format!("The required header '{name}' from namespace '{namespace}' is not present")
    }
}

fn must_understand_message(not_understood: &[HeaderId]) -> String {
    match not_understood.first() {
        Some(h) => format!(
            "The header '{}' from namespace '{}' was not understood by the recipient",
            h.name, h.namespace
        ),
        None => "A mustUnderstand header was not understood by the recipient".to_string(),
    }
}

impl ProtocolViolation {
    pub fn action_mismatch(
        soap_action: impl Into<String>,
        header_action: impl Into<String>,
    ) -> ProtocolViolation {
        ProtocolViolation::ActionMismatch {
            soap_action: soap_action.into(),
            header_action: header_action.into(),
        }
    }

    pub fn duplicate_header(
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> ProtocolViolation {
        ProtocolViolation::HeaderCardinality {
            header_name: name.into(),
            header_namespace: namespace.into(),
            is_duplicate: true,
        }
    }

    pub fn missing_header(
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> ProtocolViolation {
        ProtocolViolation::HeaderCardinality {
            header_name: name.into(),
            header_namespace: namespace.into(),
            is_duplicate: false,
        }
    }

    pub fn must_understand(not_understood: Vec<HeaderId>) -> ProtocolViolation {
        ProtocolViolation::MustUnderstand { not_understood }
    }

    /// Produit le message de fault de la violation pour la version cible
    ///
    /// Transformation en un coup, idempotente et sans effet de bord.
    ///
    /// # Panics
    ///
    /// Les faults d'adressage (ActionMismatch, HeaderCardinality) exigent
    /// WS-Addressing 1.0 : tout autre dialecte est une rupture de contrat
    /// interne, fatale.
    pub fn to_fault_message(&self, version: MessageVersion) -> Message {
        debug!("🧾 Building fault message for {} ({})", self, version);

        match self {
            ProtocolViolation::ActionMismatch { .. } => {
                self.problem_header_fault_message(
                    version,
                    ProblemHeaderQNameFault::from_action_mismatch(self.to_string()),
                )
            }
            ProtocolViolation::HeaderCardinality {
                header_name,
                header_namespace,
                is_duplicate,
            } => self.problem_header_fault_message(
                version,
                ProblemHeaderQNameFault::from_header_cardinality(
                    header_name,
                    header_namespace,
                    *is_duplicate,
                    self.to_string(),
                ),
            ),
            ProtocolViolation::MustUnderstand { not_understood } => {
                let code = FaultCode::with_namespace(
                    message::MUST_UNDERSTAND_FAULT,
                    version.envelope.namespace(),
                )
                .expect("envelope namespaces are valid URIs");
                let fault = MessageFault::new(code, FaultReason::new(self.to_string()));
                let mut msg = Message::create_fault_message(
                    version,
                    fault,
                    version.addressing.default_fault_action(),
                );
                // Un header NotUnderstood par bloc fautif, SOAP 1.2 seulement :
                // la forme 1.1 du fault mustUnderstand n'a pas d'équivalent
                if version.envelope == EnvelopeVersion::Soap12 {
                    for header in not_understood {
                        msg.headers_mut().add(MessageHeader::NotUnderstood {
                            name: header.name.clone(),
                            namespace: header.namespace.clone(),
                        });
                    }
                }
                msg
            }
        }
    }

    fn problem_header_fault_message(
        &self,
        version: MessageVersion,
        fault: ProblemHeaderQNameFault,
    ) -> Message {
        assert_eq!(
            version.addressing,
            AddressingVersion::WsAddressing10,
            "addressing faults require WS-Addressing 1.0"
        );
        let mut msg = Message::create_fault_message(
            version,
            fault.to_message_fault(),
            version.addressing.default_fault_action(),
        );
        fault.add_headers(msg.headers_mut(), version.envelope);
        msg
    }
}
