//! Constantes de vocabulaire SOAP / WS-Addressing
//!
//! Regroupe les chaînes du protocole (namespaces, noms d'éléments, codes de
//! fault) utilisées par la construction et le parsing des enveloppes de fault.

/// Éléments communs aux deux dialectes d'enveloppe
pub mod message {
    /// Nom local de l'élément racine
    pub const ENVELOPE: &str = "Envelope";

    /// Nom local de l'en-tête
    pub const HEADER: &str = "Header";

    /// Nom local du corps
    pub const BODY: &str = "Body";

    /// Nom local de l'élément fault
    pub const FAULT: &str = "Fault";

    /// Code de fault émis quand un header mustUnderstand n'est pas compris
    pub const MUST_UNDERSTAND_FAULT: &str = "MustUnderstand";

    /// Attribut mustUnderstand
    pub const MUST_UNDERSTAND: &str = "mustUnderstand";

    /// Préfixe conventionnel de l'enveloppe
    pub const PREFIX: &str = "s";
}

/// Vocabulaire SOAP 1.1
pub mod message11 {
    /// Namespace de l'enveloppe SOAP 1.1
    pub const NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

    /// Attribut de routage (SOAP 1.1 parle d'« actor », SOAP 1.2 de « role »)
    pub const ACTOR: &str = "actor";

    /// Valeur d'actor « prochain intermédiaire »
    pub const NEXT_ACTOR: &str = "http://schemas.xmlsoap.org/soap/actor/next";

    pub const FAULT_CODE: &str = "faultcode";
    pub const FAULT_STRING: &str = "faultstring";
    pub const FAULT_ACTOR: &str = "faultactor";
    pub const FAULT_DETAIL: &str = "detail";

    /// Nom du fault côté émetteur
    pub const SENDER_FAULT: &str = "Client";

    /// Nom du fault côté récepteur
    pub const RECEIVER_FAULT: &str = "Server";
}

/// Vocabulaire SOAP 1.2
pub mod message12 {
    /// Namespace de l'enveloppe SOAP 1.2
    pub const NAMESPACE: &str = "http://www.w3.org/2003/05/soap-envelope";

    pub const ROLE: &str = "role";

    /// Valeur de role « prochain intermédiaire »
    pub const NEXT_ROLE: &str = "http://www.w3.org/2003/05/soap-envelope/role/next";

    /// Valeur de role « destinataire final »
    pub const ULTIMATE_RECEIVER_ROLE: &str =
        "http://www.w3.org/2003/05/soap-envelope/role/ultimateReceiver";

    pub const FAULT_CODE: &str = "Code";
    pub const FAULT_SUBCODE: &str = "Subcode";
    pub const FAULT_VALUE: &str = "Value";
    pub const FAULT_REASON: &str = "Reason";
    pub const FAULT_TEXT: &str = "Text";
    pub const FAULT_NODE: &str = "Node";
    pub const FAULT_ROLE: &str = "Role";
    pub const FAULT_DETAIL: &str = "Detail";

    /// Header signalant un bloc mustUnderstand non compris
    pub const NOT_UNDERSTOOD: &str = "NotUnderstood";

    /// Attribut qname du header NotUnderstood
    pub const QNAME: &str = "qname";

    pub const SENDER_FAULT: &str = "Sender";
    pub const RECEIVER_FAULT: &str = "Receiver";
}

/// Enveloppe « None » : messages sans enveloppe SOAP (POX)
pub mod message_none {
    pub const NAMESPACE: &str = "http://schemas.microsoft.com/ws/2005/05/envelope/none";
}

/// Vocabulaire WS-Addressing 1.0
pub mod addressing10 {
    /// Namespace WS-Addressing 1.0
    pub const NAMESPACE: &str = "http://www.w3.org/2005/08/addressing";

    /// Action par défaut des messages de fault
    pub const FAULT_ACTION: &str = "http://www.w3.org/2005/08/addressing/soap/fault";

    /// Adresse anonyme
    pub const ANONYMOUS: &str = "http://www.w3.org/2005/08/addressing/anonymous";

    /// Préfixe conventionnel
    pub const PREFIX: &str = "a";

    /// Header Action
    pub const ACTION: &str = "Action";

    // Codes de fault WS-Addressing 1.0
    pub const MESSAGE_ADDRESSING_HEADER_REQUIRED: &str = "MessageAddressingHeaderRequired";
    pub const INVALID_ADDRESSING_HEADER: &str = "InvalidAddressingHeader";
    pub const INVALID_CARDINALITY: &str = "InvalidCardinality";
    pub const ACTION_MISMATCH: &str = "ActionMismatch";

    /// Élément désignant le header fautif dans le détail du fault
    pub const PROBLEM_HEADER_QNAME: &str = "ProblemHeaderQName";

    /// Header SOAP 1.1 portant le détail du fault
    pub const FAULT_DETAIL: &str = "FaultDetail";
}

/// Vocabulaire WS-Addressing August 2004
pub mod addressing200408 {
    pub const NAMESPACE: &str = "http://schemas.xmlsoap.org/ws/2004/08/addressing";
    pub const FAULT_ACTION: &str = "http://schemas.xmlsoap.org/ws/2004/08/addressing/fault";
    pub const ANONYMOUS: &str =
        "http://schemas.xmlsoap.org/ws/2004/08/addressing/role/anonymous";
}

/// Adressage « None » : pas de headers WS-Addressing
pub mod addressing_none {
    pub const NAMESPACE: &str = "http://schemas.microsoft.com/ws/2005/05/addressing/none";
    pub const FAULT_ACTION: &str =
        "http://schemas.microsoft.com/ws/2005/05/addressing/none/fault";
}
