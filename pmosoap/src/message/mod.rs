//! Modèle de message de fault
//!
//! Le noyau fault ne transporte que des messages de fault : un [`Message`]
//! apparie une [`MessageVersion`], une collection de headers et un
//! [`MessageFault`] (code + raison + détail optionnel). La sérialisation XML
//! est dans [`builder`], le parsing des faults reçus dans [`parser`].

mod builder;
mod parser;

pub use builder::build_fault_envelope;
pub use parser::{FaultParseError, ReceivedFault, parse_fault_envelope};

use crate::addressing::MessageVersion;
use crate::fault::{FaultCode, FaultReason};

/// Contenu de fault d'un message (code, raison, détail)
#[derive(Debug, Clone)]
pub struct MessageFault {
    code: FaultCode,
    reason: FaultReason,
    actor: String,
    node: String,
    detail: Option<FaultDetail>,
}

impl MessageFault {
    pub fn new(code: FaultCode, reason: FaultReason) -> MessageFault {
        MessageFault {
            code,
            reason,
            actor: String::new(),
            node: String::new(),
            detail: None,
        }
    }

    pub fn with_detail(code: FaultCode, reason: FaultReason, detail: FaultDetail) -> MessageFault {
        MessageFault {
            code,
            reason,
            actor: String::new(),
            node: String::new(),
            detail: Some(detail),
        }
    }

    /// Renseigne le nœud fautif (élément `s:Node`, SOAP 1.2 seulement)
    pub fn set_node(&mut self, node: impl Into<String>) {
        self.node = node.into();
    }

    /// Renseigne l'actor/role du fault (`faultactor` en 1.1, `s:Role` en 1.2)
    pub fn set_actor(&mut self, actor: impl Into<String>) {
        self.actor = actor.into();
    }

    pub fn code(&self) -> &FaultCode {
        &self.code
    }

    pub fn reason(&self) -> &FaultReason {
        &self.reason
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn detail(&self) -> Option<&FaultDetail> {
        self.detail.as_ref()
    }
}

/// Détail structuré d'un fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultDetail {
    /// Qname du header d'adressage fautif (WS-Addressing 1.0)
    ProblemHeaderQName { name: String, namespace: String },
}

/// Header d'un message de fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageHeader {
    /// Header wsa:Action (mustUnderstand)
    Action { value: String },

    /// Header SOAP 1.2 NotUnderstood désignant un bloc non compris
    NotUnderstood { name: String, namespace: String },

    /// Header SOAP 1.1 wsa:FaultDetail portant le ProblemHeaderQName
    ProblemFaultDetail { name: String, namespace: String },
}

/// Collection ordonnée de headers
#[derive(Debug, Clone, Default)]
pub struct MessageHeaders {
    entries: Vec<MessageHeader>,
}

impl MessageHeaders {
    pub fn new() -> MessageHeaders {
        MessageHeaders::default()
    }

    pub fn add(&mut self, header: MessageHeader) {
        self.entries.push(header);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageHeader> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Valeur du header Action, si présent
    pub fn action(&self) -> Option<&str> {
        self.entries.iter().find_map(|h| match h {
            MessageHeader::Action { value } => Some(value.as_str()),
            _ => None,
        })
    }
}

/// Message de fault prêt à émettre
#[derive(Debug, Clone)]
pub struct Message {
    version: MessageVersion,
    headers: MessageHeaders,
    fault: MessageFault,
}

impl Message {
    /// Construit un message de fault depuis un fault complet
    pub fn create_fault_message(
        version: MessageVersion,
        fault: MessageFault,
        action: impl Into<String>,
    ) -> Message {
        let mut headers = MessageHeaders::new();
        headers.add(MessageHeader::Action {
            value: action.into(),
        });
        Message {
            version,
            headers,
            fault,
        }
    }

    /// Variante de convenance : code + texte de raison
    pub fn create_fault_message_from_code(
        version: MessageVersion,
        code: FaultCode,
        reason: impl Into<String>,
        action: impl Into<String>,
    ) -> Message {
        Message::create_fault_message(
            version,
            MessageFault::new(code, FaultReason::new(reason)),
            action,
        )
    }

    pub fn version(&self) -> MessageVersion {
        self.version
    }

    pub fn headers(&self) -> &MessageHeaders {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut MessageHeaders {
        &mut self.headers
    }

    pub fn fault(&self) -> &MessageFault {
        &self.fault
    }

    /// Sérialise le message en enveloppe XML
    pub fn to_xml(&self) -> Result<String, xmltree::Error> {
        build_fault_envelope(self)
    }
}
