//! Versions d'adressage et appariements enveloppe/adressage
//!
//! [`AddressingVersion`] décrit le dialecte WS-Addressing actif ;
//! [`MessageVersion`] apparie une version d'enveloppe et une version
//! d'adressage, comme les combinaisons standard exposées ici en constantes.

use crate::envelope::EnvelopeVersion;
use crate::strings::{addressing_none, addressing10, addressing200408};

/// Dialecte WS-Addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingVersion {
    /// Pas de headers WS-Addressing
    None,
    /// WS-Addressing 1.0 (W3C Recommendation)
    WsAddressing10,
    /// WS-Addressing August 2004 (member submission)
    WsAddressingAugust2004,
}

impl AddressingVersion {
    /// Namespace du dialecte
    pub const fn namespace(self) -> &'static str {
        match self {
            AddressingVersion::None => addressing_none::NAMESPACE,
            AddressingVersion::WsAddressing10 => addressing10::NAMESPACE,
            AddressingVersion::WsAddressingAugust2004 => addressing200408::NAMESPACE,
        }
    }

    /// Action par défaut des messages de fault
    pub const fn default_fault_action(self) -> &'static str {
        match self {
            AddressingVersion::None => addressing_none::FAULT_ACTION,
            AddressingVersion::WsAddressing10 => addressing10::FAULT_ACTION,
            AddressingVersion::WsAddressingAugust2004 => addressing200408::FAULT_ACTION,
        }
    }

    /// Adresse anonyme du dialecte, si définie
    pub const fn anonymous(self) -> Option<&'static str> {
        match self {
            AddressingVersion::None => None,
            AddressingVersion::WsAddressing10 => Some(addressing10::ANONYMOUS),
            AddressingVersion::WsAddressingAugust2004 => Some(addressing200408::ANONYMOUS),
        }
    }
}

impl std::fmt::Display for AddressingVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressingVersion::None => write!(f, "AddressingNone"),
            AddressingVersion::WsAddressing10 => write!(f, "Addressing10"),
            AddressingVersion::WsAddressingAugust2004 => write!(f, "Addressing200408"),
        }
    }
}

/// Appariement enveloppe + adressage d'un message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageVersion {
    pub envelope: EnvelopeVersion,
    pub addressing: AddressingVersion,
}

impl MessageVersion {
    /// SOAP 1.2 + WS-Addressing 1.0, l'appariement par défaut
    pub const SOAP12_WSA10: MessageVersion = MessageVersion {
        envelope: EnvelopeVersion::Soap12,
        addressing: AddressingVersion::WsAddressing10,
    };

    /// SOAP 1.1 + WS-Addressing 1.0
    pub const SOAP11_WSA10: MessageVersion = MessageVersion {
        envelope: EnvelopeVersion::Soap11,
        addressing: AddressingVersion::WsAddressing10,
    };

    /// SOAP 1.2 sans adressage
    pub const SOAP12: MessageVersion = MessageVersion {
        envelope: EnvelopeVersion::Soap12,
        addressing: AddressingVersion::None,
    };

    /// SOAP 1.1 sans adressage
    pub const SOAP11: MessageVersion = MessageVersion {
        envelope: EnvelopeVersion::Soap11,
        addressing: AddressingVersion::None,
    };

    /// Ni enveloppe ni adressage (POX)
    pub const NONE: MessageVersion = MessageVersion {
        envelope: EnvelopeVersion::None,
        addressing: AddressingVersion::None,
    };

    pub const fn new(envelope: EnvelopeVersion, addressing: AddressingVersion) -> Self {
        MessageVersion {
            envelope,
            addressing,
        }
    }
}

impl Default for MessageVersion {
    fn default() -> Self {
        MessageVersion::SOAP12_WSA10
    }
}

impl std::fmt::Display for MessageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.envelope, self.addressing)
    }
}
