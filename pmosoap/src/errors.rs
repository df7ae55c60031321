use thiserror::Error;

/// Erreurs de contrat d'appel du noyau fault
///
/// Ces erreurs signalent un argument invalide au point d'affectation (fail
/// fast, jamais de coercition silencieuse). Les violations de protocole
/// détectées sur le fil sont portées par [`crate::fault::ProtocolViolation`].
#[derive(Error, Debug)]
pub enum SoapFaultError {
    #[error("Fault code name cannot be empty")]
    EmptyFaultCodeName,

    #[error("Invalid fault code namespace '{0}': {1}")]
    InvalidNamespaceUri(String, url::ParseError),

    #[error("A fault reason requires at least one translation")]
    NoTranslations,
}
