//! Tests d'intégration : formes de fil des messages de fault
//!
//! Vérifie de bout en bout la traduction violation → enveloppe XML, dans les
//! deux dialectes, et la relecture des enveloppes produites.

use pmosoap::{
    EnvelopeVersion, FaultCode, HeaderId, LanguageTag, MessageVersion, ProtocolViolation,
    parse_fault_envelope,
};

const WSA10_NS: &str = "http://www.w3.org/2005/08/addressing";

/// Initialise le logging pour les tests (`RUST_LOG=debug cargo test` pour
/// suivre la production des faults)
fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn action_mismatch_soap12_wire_shape() {
    init_logs();
    let violation = ProtocolViolation::action_mismatch("urn:expected", "urn:received");
    let xml = violation
        .to_fault_message(MessageVersion::SOAP12_WSA10)
        .to_xml()
        .unwrap();

    // Enveloppe 1.2, action de fault WS-Addressing, code Sender/ActionMismatch
    assert!(xml.contains("xmlns:s=\"http://www.w3.org/2003/05/soap-envelope\""));
    assert!(xml.contains(">http://www.w3.org/2005/08/addressing/soap/fault</a:Action>"));
    assert!(xml.contains("<s:Value>s:Sender</s:Value>"));
    assert!(xml.contains("<s:Value>a:ActionMismatch</s:Value>"));
    // Détail dans le corps : qname du header Action
    assert!(xml.contains("<s:Detail>"));
    assert!(xml.contains("<a:ProblemHeaderQName>a:Action</a:ProblemHeaderQName>"));
}

#[test]
fn action_mismatch_soap11_wire_shape() {
    init_logs();
    let violation = ProtocolViolation::action_mismatch("urn:expected", "urn:received");
    let xml = violation
        .to_fault_message(MessageVersion::SOAP11_WSA10)
        .to_xml()
        .unwrap();

    assert!(xml.contains("xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\""));
    // Sender résolu en Client, détail porté par le header a:FaultDetail
    assert!(xml.contains("<faultcode>s:Client</faultcode>"));
    assert!(xml.contains("<a:FaultDetail>"));
    assert!(xml.contains("<a:ProblemHeaderQName>a:Action</a:ProblemHeaderQName>"));
    assert!(!xml.contains("<s:Detail>"));
}

#[test]
fn duplicate_header_nested_subcodes_on_wire() {
    init_logs();
    let violation = ProtocolViolation::duplicate_header("To", WSA10_NS);
    let xml = violation
        .to_fault_message(MessageVersion::SOAP12_WSA10)
        .to_xml()
        .unwrap();

    assert!(xml.contains("<s:Value>a:InvalidAddressingHeader</s:Value>"));
    assert!(xml.contains("<s:Value>a:InvalidCardinality</s:Value>"));
    assert!(xml.contains("<a:ProblemHeaderQName>a:To</a:ProblemHeaderQName>"));
}

#[test]
fn missing_header_single_subcode_on_wire() {
    init_logs();
    let violation = ProtocolViolation::missing_header("MessageID", WSA10_NS);
    let xml = violation
        .to_fault_message(MessageVersion::SOAP12_WSA10)
        .to_xml()
        .unwrap();

    assert!(xml.contains("<s:Value>a:MessageAddressingHeaderRequired</s:Value>"));
    assert!(!xml.contains("InvalidCardinality"));
}

#[test]
fn must_understand_not_understood_headers() {
    init_logs();
    let violation = ProtocolViolation::must_understand(vec![
        HeaderId::new("Lease", "urn:example:leases"),
        HeaderId::new("Quota", "urn:example:quotas"),
    ]);

    let xml12 = violation
        .to_fault_message(MessageVersion::SOAP12_WSA10)
        .to_xml()
        .unwrap();
    assert_eq!(xml12.matches("<s:NotUnderstood").count(), 2);
    assert!(xml12.contains("qname=\"h:Lease\""));
    assert!(xml12.contains("xmlns:h=\"urn:example:leases\""));
    assert!(xml12.contains("<s:Value>s:MustUnderstand</s:Value>"));

    // Forme 1.1 : pas de header NotUnderstood, faultcode simple
    let xml11 = violation
        .to_fault_message(MessageVersion::SOAP11_WSA10)
        .to_xml()
        .unwrap();
    assert_eq!(xml11.matches("NotUnderstood").count(), 0);
    assert!(xml11.contains("<faultcode>s:MustUnderstand</faultcode>"));
}

#[test]
fn produced_soap12_fault_parses_back() {
    init_logs();
    let violation = ProtocolViolation::duplicate_header("To", WSA10_NS);
    let xml = violation
        .to_fault_message(MessageVersion::SOAP12_WSA10)
        .to_xml()
        .unwrap();

    let fault = parse_fault_envelope(xml.as_bytes()).unwrap();
    assert_eq!(fault.envelope, EnvelopeVersion::Soap12);
    assert_eq!(fault.code, "Sender");
    assert_eq!(
        fault.sub_codes,
        vec!["InvalidAddressingHeader", "InvalidCardinality"]
    );
    assert!(
        fault
            .reason
            .get_matching_translation(&LanguageTag::new("en"))
            .text()
            .contains("'To'")
    );
}

#[test]
fn produced_soap11_fault_parses_back() {
    init_logs();
    let violation = ProtocolViolation::action_mismatch("urn:expected", "urn:received");
    let xml = violation
        .to_fault_message(MessageVersion::SOAP11_WSA10)
        .to_xml()
        .unwrap();

    let fault = parse_fault_envelope(xml.as_bytes()).unwrap();
    assert_eq!(fault.envelope, EnvelopeVersion::Soap11);
    assert_eq!(fault.code, "Client");
    assert!(fault.sub_codes.is_empty());
}

#[test]
fn receiver_fault_code_on_wire() {
    use pmosoap::{FaultReason, Message, MessageFault};

    let code = FaultCode::create_receiver_fault_code_named("Busy", "urn:example:faults").unwrap();
    let fault = MessageFault::new(
        code,
        FaultReason::with_language("service saturated", LanguageTag::new("en")),
    );
    let msg = Message::create_fault_message(
        MessageVersion::SOAP12_WSA10,
        fault,
        "http://www.w3.org/2005/08/addressing/soap/fault",
    );
    let xml = msg.to_xml().unwrap();

    assert!(xml.contains("<s:Value>s:Receiver</s:Value>"));
    assert!(xml.contains("xmlns:c=\"urn:example:faults\""));
    assert!(xml.contains("<s:Value>c:Busy</s:Value>"));
}
