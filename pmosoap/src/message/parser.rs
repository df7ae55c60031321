//! Parsing des enveloppes de fault reçues
//!
//! Lit une enveloppe SOAP 1.1 ou 1.2 et en extrait le fault : version
//! d'enveloppe (retrouvée depuis le namespace racine), chaîne de codes et
//! traductions de la raison.

use std::io::BufReader;

use xmltree::Element;

use crate::envelope::EnvelopeVersion;
use crate::fault::{FaultReason, FaultReasonText, LanguageTag};
use crate::strings::{message, message11, message12};

/// Fault extrait d'une enveloppe reçue
#[derive(Debug, Clone)]
pub struct ReceivedFault {
    /// Version d'enveloppe du message
    pub envelope: EnvelopeVersion,

    /// Partie locale du code de premier niveau
    pub code: String,

    /// Parties locales des sous-codes, du plus englobant au plus précis
    /// (toujours vide en SOAP 1.1)
    pub sub_codes: Vec<String>,

    /// Traductions de la raison
    pub reason: FaultReason,
}

/// Erreur de parsing d'un fault
#[derive(Debug, thiserror::Error)]
pub enum FaultParseError {
    #[error("XML parse error: {0}")]
    XmlError(#[from] xmltree::ParseError),

    #[error("Missing SOAP Envelope")]
    MissingEnvelope,

    #[error("Unknown envelope namespace: {0}")]
    UnknownEnvelopeNamespace(String),

    #[error("Missing SOAP Body")]
    MissingBody,

    #[error("No Fault element in SOAP Body")]
    MissingFault,

    #[error("Fault has no code")]
    MissingCode,

    #[error("Fault has no reason text")]
    MissingReason,
}

/// Parse une enveloppe de fault à partir de bytes XML
pub fn parse_fault_envelope(xml: &[u8]) -> Result<ReceivedFault, FaultParseError> {
    let reader = BufReader::new(xml);
    let root = Element::parse(reader)?;

    if !root.name.ends_with(message::ENVELOPE) {
        return Err(FaultParseError::MissingEnvelope);
    }
    let root_ns = root.namespace.clone().unwrap_or_default();
    let envelope = EnvelopeVersion::from_namespace(&root_ns)
        .ok_or(FaultParseError::UnknownEnvelopeNamespace(root_ns))?;

    let body = child_named(&root, message::BODY).ok_or(FaultParseError::MissingBody)?;
    let fault = child_named(body, message::FAULT).ok_or(FaultParseError::MissingFault)?;

    match envelope {
        EnvelopeVersion::Soap12 => parse_fault12(fault),
        EnvelopeVersion::Soap11 => parse_fault11(fault),
        // Le dialecte « None » ne transporte pas d'enveloppe : un document
        // racine dans ce namespace n'a pas de fault à extraire
        EnvelopeVersion::None => Err(FaultParseError::MissingFault),
    }
}

fn parse_fault12(fault: &Element) -> Result<ReceivedFault, FaultParseError> {
    let code_elem = child_named(fault, message12::FAULT_CODE).ok_or(FaultParseError::MissingCode)?;
    let code = value_local_part(code_elem).ok_or(FaultParseError::MissingCode)?;

    let mut sub_codes = Vec::new();
    let mut current = child_named(code_elem, message12::FAULT_SUBCODE);
    while let Some(subcode_elem) = current {
        if let Some(local) = value_local_part(subcode_elem) {
            sub_codes.push(local);
        }
        current = child_named(subcode_elem, message12::FAULT_SUBCODE);
    }

    let reason_elem =
        child_named(fault, message12::FAULT_REASON).ok_or(FaultParseError::MissingReason)?;
    let translations: Vec<FaultReasonText> = reason_elem
        .children
        .iter()
        .filter_map(|n| n.as_element())
        .filter(|e| e.name.ends_with(message12::FAULT_TEXT))
        .map(|e| {
            let lang = e
                .attributes
                .iter()
                .find(|(k, _)| k.ends_with("lang"))
                .map(|(_, v)| v.as_str())
                .unwrap_or("en");
            FaultReasonText::new(
                e.get_text().unwrap_or_default().to_string(),
                LanguageTag::new(lang),
            )
        })
        .collect();
    let reason =
        FaultReason::from_translations(translations).map_err(|_| FaultParseError::MissingReason)?;

    Ok(ReceivedFault {
        envelope: EnvelopeVersion::Soap12,
        code,
        sub_codes,
        reason,
    })
}

fn parse_fault11(fault: &Element) -> Result<ReceivedFault, FaultParseError> {
    let code_elem =
        child_named(fault, message11::FAULT_CODE).ok_or(FaultParseError::MissingCode)?;
    let code = local_part(&code_elem.get_text().unwrap_or_default())
        .ok_or(FaultParseError::MissingCode)?;

    let string_elem =
        child_named(fault, message11::FAULT_STRING).ok_or(FaultParseError::MissingReason)?;
    let lang = string_elem
        .attributes
        .iter()
        .find(|(k, _)| k.ends_with("lang"))
        .map(|(_, v)| v.as_str())
        .unwrap_or("en");
    let reason = FaultReason::with_language(
        string_elem.get_text().unwrap_or_default().to_string(),
        LanguageTag::new(lang),
    );

    Ok(ReceivedFault {
        envelope: EnvelopeVersion::Soap11,
        code,
        sub_codes: Vec::new(),
        reason,
    })
}

/// Premier enfant dont le nom local correspond, préfixe ignoré
fn child_named<'a>(parent: &'a Element, local: &str) -> Option<&'a Element> {
    parent
        .children
        .iter()
        .filter_map(|n| n.as_element())
        .find(|e| e.name == local || e.name.ends_with(&format!(":{local}")))
}

/// Partie locale du texte qname d'un élément Value
fn value_local_part(parent: &Element) -> Option<String> {
    let value = child_named(parent, message12::FAULT_VALUE)?;
    local_part(&value.get_text().unwrap_or_default())
}

fn local_part(qname: &str) -> Option<String> {
    let local = qname.trim().rsplit(':').next().unwrap_or_default();
    if local.is_empty() {
        None
    } else {
        Some(local.to_string())
    }
}
