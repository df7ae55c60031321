//! Versions d'enveloppe SOAP
//!
//! [`EnvelopeVersion`] décrit un dialecte d'enveloppe (None / SOAP 1.1 /
//! SOAP 1.2) : namespace, attribut de routage, noms des faults émetteur et
//! récepteur, valeurs d'actor reconnues. Les trois valeurs sont globales et
//! immuables ; l'égalité est l'identité de variante.

use crate::strings::{message11, message12, message_none};

/// Dialecte d'enveloppe SOAP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeVersion {
    /// Messages sans enveloppe SOAP (POX)
    None,
    /// SOAP 1.1
    Soap11,
    /// SOAP 1.2
    Soap12,
}

impl EnvelopeVersion {
    /// Namespace de l'enveloppe, clé unique du dialecte
    pub const fn namespace(self) -> &'static str {
        match self {
            EnvelopeVersion::None => message_none::NAMESPACE,
            EnvelopeVersion::Soap11 => message11::NAMESPACE,
            EnvelopeVersion::Soap12 => message12::NAMESPACE,
        }
    }

    /// Attribut de routage des headers (« actor » en 1.1, « role » en 1.2)
    pub const fn actor_attribute(self) -> Option<&'static str> {
        match self {
            EnvelopeVersion::None => None,
            EnvelopeVersion::Soap11 => Some(message11::ACTOR),
            EnvelopeVersion::Soap12 => Some(message12::ROLE),
        }
    }

    /// Nom du fault imputé à l'émetteur (« Client » en 1.1, « Sender » en 1.2)
    pub const fn sender_fault_name(self) -> &'static str {
        match self {
            EnvelopeVersion::Soap11 => message11::SENDER_FAULT,
            EnvelopeVersion::Soap12 | EnvelopeVersion::None => message12::SENDER_FAULT,
        }
    }

    /// Nom du fault imputé au récepteur (« Server » en 1.1, « Receiver » en 1.2)
    pub const fn receiver_fault_name(self) -> &'static str {
        match self {
            EnvelopeVersion::Soap11 => message11::RECEIVER_FAULT,
            EnvelopeVersion::Soap12 | EnvelopeVersion::None => message12::RECEIVER_FAULT,
        }
    }

    /// Valeur d'actor désignant le prochain intermédiaire
    pub const fn next_destination_actor_value(self) -> Option<&'static str> {
        match self {
            EnvelopeVersion::None => None,
            EnvelopeVersion::Soap11 => Some(message11::NEXT_ACTOR),
            EnvelopeVersion::Soap12 => Some(message12::NEXT_ROLE),
        }
    }

    /// Valeurs d'actor adressant le destinataire final
    pub const fn ultimate_destination_actor_values(self) -> &'static [&'static str] {
        match self {
            EnvelopeVersion::None => &[],
            EnvelopeVersion::Soap11 => &["", message11::NEXT_ACTOR],
            EnvelopeVersion::Soap12 => {
                &["", message12::ULTIMATE_RECEIVER_ROLE, message12::NEXT_ROLE]
            }
        }
    }

    /// Valeurs d'actor soumises au contrôle mustUnderstand
    pub const fn must_understand_actor_values(self) -> &'static [&'static str] {
        // Mêmes valeurs que pour le destinataire final dans les deux dialectes
        self.ultimate_destination_actor_values()
    }

    /// Le header visé par `actor` est-il à traiter par ce nœud ?
    ///
    /// Règles de routage des intermédiaires SOAP : un actor vide, égal au
    /// destinataire final ou égal au prochain intermédiaire est « pour moi ».
    pub fn is_ultimate_destination_actor(self, actor: &str) -> bool {
        actor.is_empty()
            || self
                .ultimate_destination_actor_values()
                .iter()
                .any(|value| *value == actor)
    }

    /// Retrouve la version depuis son namespace d'enveloppe
    pub fn from_namespace(ns: &str) -> Option<EnvelopeVersion> {
        match ns {
            message11::NAMESPACE => Some(EnvelopeVersion::Soap11),
            message12::NAMESPACE => Some(EnvelopeVersion::Soap12),
            message_none::NAMESPACE => Some(EnvelopeVersion::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for EnvelopeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvelopeVersion::None => write!(f, "EnvelopeNone"),
            EnvelopeVersion::Soap11 => write!(f, "Soap11"),
            EnvelopeVersion::Soap12 => write!(f, "Soap12"),
        }
    }
}
