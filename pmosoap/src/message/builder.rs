//! Sérialisation des messages de fault en enveloppes XML
//!
//! Produit les formes de fil SOAP 1.1 et SOAP 1.2 :
//! - SOAP 1.1 : `faultcode`/`faultstring` non qualifiés, le détail
//!   ProblemHeaderQName voyage dans un header `a:FaultDetail` ;
//! - SOAP 1.2 : `s:Code`/`s:Value` avec chaîne de `s:Subcode`, un `s:Text`
//!   par traduction, détail dans `s:Detail`, headers `s:NotUnderstood`.

use xmltree::{Element, EmitterConfig, XMLNode};

use super::{FaultDetail, Message, MessageHeader};
use crate::addressing::AddressingVersion;
use crate::envelope::EnvelopeVersion;
use crate::fault::{FaultCode, LanguageTag};
use crate::strings::{addressing10, message, message11, message12};

/// Construit l'enveloppe XML d'un message de fault
///
/// # Panics
///
/// Une enveloppe `None` ne transporte pas de fault SOAP : l'appel est une
/// rupture de contrat interne, fatale.
pub fn build_fault_envelope(message: &Message) -> Result<String, xmltree::Error> {
    let envelope_version = message.version().envelope;
    assert!(
        envelope_version != EnvelopeVersion::None,
        "EnvelopeVersion::None carries no SOAP envelope"
    );
    let addressing = message.version().addressing;

    let mut envelope = Element::new("s:Envelope");
    envelope
        .attributes
        .insert("xmlns:s".to_string(), envelope_version.namespace().to_string());
    if addressing != AddressingVersion::None {
        envelope
            .attributes
            .insert("xmlns:a".to_string(), addressing.namespace().to_string());
    }

    let header = build_header(message, envelope_version, addressing);
    if !header.children.is_empty() {
        envelope.children.push(XMLNode::Element(header));
    }

    let fault = match envelope_version {
        EnvelopeVersion::Soap12 => build_fault12(message),
        EnvelopeVersion::Soap11 => build_fault11(message),
        EnvelopeVersion::None => unreachable!(),
    };

    let mut body = Element::new("s:Body");
    body.children.push(XMLNode::Element(fault));
    envelope.children.push(XMLNode::Element(body));

    let mut buf = Vec::new();
    let config = EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(true)
        .indent_string("  ");
    envelope.write_with_config(&mut buf, config)?;

    Ok(String::from_utf8(buf).unwrap())
}

fn build_header(
    message: &Message,
    envelope_version: EnvelopeVersion,
    addressing: AddressingVersion,
) -> Element {
    let mut header = Element::new("s:Header");

    for entry in message.headers().iter() {
        match entry {
            MessageHeader::Action { value } => {
                // Sans adressage, pas de header Action sur le fil
                if addressing == AddressingVersion::None {
                    continue;
                }
                let mut action = Element::new("a:Action");
                action.attributes.insert(
                    format!("s:{}", message::MUST_UNDERSTAND),
                    "1".to_string(),
                );
                action.children.push(XMLNode::Text(value.clone()));
                header.children.push(XMLNode::Element(action));
            }
            MessageHeader::NotUnderstood { name, namespace } => {
                // Forme SOAP 1.2 uniquement, garantie par la couche violation
                debug_assert_eq!(envelope_version, EnvelopeVersion::Soap12);
                let mut not_understood = Element::new("s:NotUnderstood");
                not_understood
                    .attributes
                    .insert("xmlns:h".to_string(), namespace.clone());
                not_understood
                    .attributes
                    .insert(message12::QNAME.to_string(), format!("h:{name}"));
                header.children.push(XMLNode::Element(not_understood));
            }
            MessageHeader::ProblemFaultDetail { name, namespace } => {
                let mut detail = Element::new("a:FaultDetail");
                detail
                    .children
                    .push(XMLNode::Element(problem_header_qname(name, namespace)));
                header.children.push(XMLNode::Element(detail));
            }
        }
    }

    header
}

/// Élément `a:ProblemHeaderQName` dont le texte référence le header fautif
fn problem_header_qname(name: &str, namespace: &str) -> Element {
    let mut elem = Element::new(&format!("a:{}", addressing10::PROBLEM_HEADER_QNAME));
    let qname = if namespace == addressing10::NAMESPACE {
        format!("a:{name}")
    } else {
        elem.attributes
            .insert("xmlns:h".to_string(), namespace.to_string());
        format!("h:{name}")
    };
    elem.children.push(XMLNode::Text(qname));
    elem
}

fn build_fault12(message: &Message) -> Element {
    let fault_content = message.fault();
    let mut fault = Element::new("s:Fault");

    // s:Code / s:Value, puis chaîne récursive de s:Subcode
    fault.children.push(XMLNode::Element(code_element(
        fault_content.code(),
        &format!("s:{}", message12::FAULT_CODE),
    )));

    // s:Reason : un s:Text par traduction
    let mut reason_elem = Element::new(&format!("s:{}", message12::FAULT_REASON));
    for translation in fault_content.reason().translations() {
        let mut text = Element::new(&format!("s:{}", message12::FAULT_TEXT));
        text.attributes
            .insert("xml:lang".to_string(), translation.lang().as_str().to_string());
        text.children
            .push(XMLNode::Text(translation.text().to_string()));
        reason_elem.children.push(XMLNode::Element(text));
    }
    fault.children.push(XMLNode::Element(reason_elem));

    if !fault_content.node().is_empty() {
        let mut node = Element::new(&format!("s:{}", message12::FAULT_NODE));
        node.children
            .push(XMLNode::Text(fault_content.node().to_string()));
        fault.children.push(XMLNode::Element(node));
    }
    if !fault_content.actor().is_empty() {
        let mut role = Element::new(&format!("s:{}", message12::FAULT_ROLE));
        role.children
            .push(XMLNode::Text(fault_content.actor().to_string()));
        fault.children.push(XMLNode::Element(role));
    }

    if let Some(FaultDetail::ProblemHeaderQName { name, namespace }) = fault_content.detail() {
        let mut detail = Element::new(&format!("s:{}", message12::FAULT_DETAIL));
        detail
            .children
            .push(XMLNode::Element(problem_header_qname(name, namespace)));
        fault.children.push(XMLNode::Element(detail));
    }

    fault
}

fn build_fault11(message: &Message) -> Element {
    let fault_content = message.fault();
    let mut fault = Element::new("s:Fault");

    // faultcode non qualifié : qname unique, les sous-codes n'ont pas de
    // forme SOAP 1.1 (le header a:FaultDetail porte la spécificité)
    let mut code_elem = Element::new(message11::FAULT_CODE);
    let qname = resolve_code_qname(fault_content.code(), EnvelopeVersion::Soap11, &mut code_elem);
    code_elem.children.push(XMLNode::Text(qname));
    fault.children.push(XMLNode::Element(code_elem));

    // faultstring : traduction retenue pour la langue du processus
    let translation = fault_content
        .reason()
        .get_matching_translation(&LanguageTag::system());
    let mut string_elem = Element::new(message11::FAULT_STRING);
    string_elem
        .attributes
        .insert("xml:lang".to_string(), translation.lang().as_str().to_string());
    string_elem
        .children
        .push(XMLNode::Text(translation.text().to_string()));
    fault.children.push(XMLNode::Element(string_elem));

    if !fault_content.actor().is_empty() {
        let mut actor_elem = Element::new(message11::FAULT_ACTOR);
        actor_elem
            .children
            .push(XMLNode::Text(fault_content.actor().to_string()));
        fault.children.push(XMLNode::Element(actor_elem));
    }

    // Le détail ProblemHeaderQName voyage en header sur SOAP 1.1, jamais
    // dans le corps
    fault
}

/// Élément Code ou Subcode : `s:Value` + sous-code récursif éventuel
fn code_element(code: &FaultCode, wrapper: &str) -> Element {
    let mut elem = Element::new(wrapper);
    elem.children
        .push(XMLNode::Element(value_element(code, EnvelopeVersion::Soap12)));
    if let Some(sub) = code.sub_code() {
        elem.children.push(XMLNode::Element(code_element(
            sub,
            &format!("s:{}", message12::FAULT_SUBCODE),
        )));
    }
    elem
}

/// Élément `s:Value` portant le qname résolu d'un code
fn value_element(code: &FaultCode, envelope_version: EnvelopeVersion) -> Element {
    let mut elem = Element::new(&format!("s:{}", message12::FAULT_VALUE));
    let qname = resolve_code_qname(code, envelope_version, &mut elem);
    elem.children.push(XMLNode::Text(qname));
    elem
}

/// Résout le qname d'un code de fault pour l'enveloppe cible
///
/// Les codes prédéfinis se résolvent contre le namespace d'enveloppe avec le
/// nom propre à la version (Sender → Client sur SOAP 1.1). Les namespaces
/// étrangers sont déclarés localement sur l'élément porteur.
fn resolve_code_qname(
    code: &FaultCode,
    envelope_version: EnvelopeVersion,
    carrier: &mut Element,
) -> String {
    if code.is_predefined_fault() {
        let name = if code.is_sender_fault() {
            envelope_version.sender_fault_name()
        } else if code.is_receiver_fault() {
            envelope_version.receiver_fault_name()
        } else {
            code.name()
        };
        format!("s:{name}")
    } else if code.namespace() == addressing10::NAMESPACE {
        format!("a:{}", code.name())
    } else {
        carrier
            .attributes
            .insert("xmlns:c".to_string(), code.namespace().to_string());
        format!("c:{}", code.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::MessageVersion;
    use crate::fault::{FaultReason, FaultReasonText};
    use crate::message::MessageFault;

    fn sender_code_with_sub(sub_name: &str) -> FaultCode {
        FaultCode::create_sender_fault_code_named(sub_name, addressing10::NAMESPACE).unwrap()
    }

    #[test]
    fn test_soap12_fault_shape() {
        let fault = MessageFault::new(
            sender_code_with_sub("ActionMismatch"),
            FaultReason::with_language("Action mismatch", LanguageTag::new("en")),
        );
        let msg = Message::create_fault_message(
            MessageVersion::SOAP12_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();

        assert!(xml.contains("xmlns:s=\"http://www.w3.org/2003/05/soap-envelope\""));
        assert!(xml.contains("xmlns:a=\"http://www.w3.org/2005/08/addressing\""));
        assert!(xml.contains("<s:Value>s:Sender</s:Value>"));
        assert!(xml.contains("<s:Subcode>"));
        assert!(xml.contains("<s:Value>a:ActionMismatch</s:Value>"));
        assert!(xml.contains("<s:Text xml:lang=\"en\">Action mismatch</s:Text>"));
        assert!(xml.contains("http://www.w3.org/2005/08/addressing/soap/fault"));
    }

    #[test]
    fn test_soap11_fault_shape() {
        let fault = MessageFault::new(
            sender_code_with_sub("ActionMismatch"),
            FaultReason::with_language("Action mismatch", LanguageTag::new("en")),
        );
        let msg = Message::create_fault_message(
            MessageVersion::SOAP11_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();

        assert!(xml.contains("xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\""));
        // Sender se résout en Client sur SOAP 1.1, sans sous-code
        assert!(xml.contains("<faultcode>s:Client</faultcode>"));
        assert!(!xml.contains("Subcode"));
        assert!(xml.contains("<faultstring xml:lang=\"en\">Action mismatch</faultstring>"));
    }

    #[test]
    fn test_soap12_detail_in_body() {
        let fault = MessageFault::with_detail(
            sender_code_with_sub("ActionMismatch"),
            FaultReason::with_language("bad action", LanguageTag::new("en")),
            FaultDetail::ProblemHeaderQName {
                name: "Action".to_string(),
                namespace: addressing10::NAMESPACE.to_string(),
            },
        );
        let msg = Message::create_fault_message(
            MessageVersion::SOAP12_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();

        assert!(xml.contains("<s:Detail>"));
        assert!(xml.contains("<a:ProblemHeaderQName>a:Action</a:ProblemHeaderQName>"));
        assert!(!xml.contains("a:FaultDetail"));
    }

    #[test]
    fn test_soap11_detail_in_header() {
        let fault = MessageFault::with_detail(
            sender_code_with_sub("ActionMismatch"),
            FaultReason::with_language("bad action", LanguageTag::new("en")),
            FaultDetail::ProblemHeaderQName {
                name: "Action".to_string(),
                namespace: addressing10::NAMESPACE.to_string(),
            },
        );
        let mut msg = Message::create_fault_message(
            MessageVersion::SOAP11_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        msg.headers_mut().add(MessageHeader::ProblemFaultDetail {
            name: "Action".to_string(),
            namespace: addressing10::NAMESPACE.to_string(),
        });
        let xml = msg.to_xml().unwrap();

        assert!(xml.contains("<a:FaultDetail>"));
        assert!(xml.contains("<a:ProblemHeaderQName>a:Action</a:ProblemHeaderQName>"));
        // Pas de détail dans le corps en SOAP 1.1
        assert!(!xml.contains("<detail>"));
        assert!(!xml.contains("<s:Detail>"));
    }

    #[test]
    fn test_actor_and_node_on_wire() {
        let mut fault = MessageFault::new(
            FaultCode::new("Sender").unwrap(),
            FaultReason::with_language("rejected upstream", LanguageTag::new("en")),
        );
        fault.set_actor("http://example.org/gateway");
        fault.set_node("http://example.org/node/7");

        let msg = Message::create_fault_message(
            MessageVersion::SOAP12_WSA10,
            fault.clone(),
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();
        assert!(xml.contains("<s:Node>http://example.org/node/7</s:Node>"));
        assert!(xml.contains("<s:Role>http://example.org/gateway</s:Role>"));

        // SOAP 1.1 : faultactor, pas d'équivalent pour le nœud
        let msg = Message::create_fault_message(
            MessageVersion::SOAP11_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();
        assert!(xml.contains("<faultactor>http://example.org/gateway</faultactor>"));
        assert!(!xml.contains("Node"));
    }

    #[test]
    fn test_actor_node_absent_by_default() {
        let fault = MessageFault::new(
            FaultCode::new("Sender").unwrap(),
            FaultReason::with_language("x", LanguageTag::new("en")),
        );
        let msg = Message::create_fault_message(
            MessageVersion::SOAP12_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();
        assert!(!xml.contains("<s:Node>"));
        assert!(!xml.contains("<s:Role>"));
    }

    #[test]
    fn test_multiple_reason_texts_soap12() {
        let reason = FaultReason::from_translations(vec![
            FaultReasonText::new("not understood", LanguageTag::new("en")),
            FaultReasonText::new("incompris", LanguageTag::new("fr")),
        ])
        .unwrap();
        let fault = MessageFault::new(FaultCode::new("Sender").unwrap(), reason);
        let msg = Message::create_fault_message(
            MessageVersion::SOAP12_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();

        assert!(xml.contains("<s:Text xml:lang=\"en\">not understood</s:Text>"));
        assert!(xml.contains("<s:Text xml:lang=\"fr\">incompris</s:Text>"));
    }

    #[test]
    fn test_foreign_namespace_declared_locally() {
        let code =
            FaultCode::create_sender_fault_code_named("QuotaExceeded", "urn:example:limits")
                .unwrap();
        let fault = MessageFault::new(
            code,
            FaultReason::with_language("quota", LanguageTag::new("en")),
        );
        let msg = Message::create_fault_message(
            MessageVersion::SOAP12_WSA10,
            fault,
            addressing10::FAULT_ACTION,
        );
        let xml = msg.to_xml().unwrap();

        assert!(xml.contains("xmlns:c=\"urn:example:limits\""));
        assert!(xml.contains("c:QuotaExceeded"));
    }

    #[test]
    #[should_panic(expected = "carries no SOAP envelope")]
    fn test_envelope_none_is_fatal() {
        let fault = MessageFault::new(
            FaultCode::new("Sender").unwrap(),
            FaultReason::with_language("x", LanguageTag::new("en")),
        );
        let msg = Message::create_fault_message(MessageVersion::NONE, fault, "urn:action");
        let _ = msg.to_xml();
    }
}
