//! Codes de fault hiérarchiques
//!
//! Un [`FaultCode`] est un nœud : nom + namespace + sous-code optionnel. Le
//! sous-code est possédé en exclusivité, la chaîne est acyclique par
//! construction. La version d'enveloppe correspondant au namespace est
//! résolue une fois à la construction et mise en cache.

use crate::envelope::EnvelopeVersion;
use crate::errors::SoapFaultError;
use crate::strings::message12;

/// Code de fault (nom + namespace + chaîne de sous-codes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultCode {
    name: String,
    namespace: String,
    sub_code: Option<Box<FaultCode>>,
    // Version résolue à la construction, jamais re-calculée
    version: Option<EnvelopeVersion>,
}

impl FaultCode {
    /// Code prédéfini : nom seul, namespace vide
    pub fn new(name: impl Into<String>) -> Result<FaultCode, SoapFaultError> {
        FaultCode::build(name.into(), String::new(), None)
    }

    /// Code qualifié par un namespace
    pub fn with_namespace(
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<FaultCode, SoapFaultError> {
        FaultCode::build(name.into(), namespace.into(), None)
    }

    /// Code qualifié portant un sous-code
    pub fn with_sub_code(
        name: impl Into<String>,
        namespace: impl Into<String>,
        sub_code: FaultCode,
    ) -> Result<FaultCode, SoapFaultError> {
        FaultCode::build(name.into(), namespace.into(), Some(sub_code))
    }

    fn build(
        name: String,
        namespace: String,
        sub_code: Option<FaultCode>,
    ) -> Result<FaultCode, SoapFaultError> {
        if name.is_empty() {
            return Err(SoapFaultError::EmptyFaultCodeName);
        }
        if !namespace.is_empty() {
            url::Url::parse(&namespace)
                .map_err(|e| SoapFaultError::InvalidNamespaceUri(namespace.clone(), e))?;
        }
        let version = EnvelopeVersion::from_namespace(&namespace);
        Ok(FaultCode {
            name,
            namespace,
            sub_code: sub_code.map(Box::new),
            version,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn sub_code(&self) -> Option<&FaultCode> {
        self.sub_code.as_deref()
    }

    /// Le code appartient-il au vocabulaire d'une enveloppe connue ?
    ///
    /// Vrai si le namespace est vide (résolu contre l'enveloppe active au
    /// moment de l'émission) ou s'il désigne une des trois enveloppes.
    pub fn is_predefined_fault(&self) -> bool {
        self.namespace.is_empty() || self.version.is_some()
    }

    /// Fault imputé à l'émetteur ?
    ///
    /// Comparaison contre le nom d'émetteur de la version mise en cache,
    /// SOAP 1.2 par défaut quand le namespace est vide.
    pub fn is_sender_fault(&self) -> bool {
        self.is_predefined_fault()
            && self.name == self.resolved_version().sender_fault_name()
    }

    /// Fault imputé au récepteur ?
    pub fn is_receiver_fault(&self) -> bool {
        self.is_predefined_fault()
            && self.name == self.resolved_version().receiver_fault_name()
    }

    fn resolved_version(&self) -> EnvelopeVersion {
        self.version.unwrap_or(EnvelopeVersion::Soap12)
    }

    /// Enveloppe un sous-code sous le code standard « Sender »
    ///
    /// Le code englobant a un namespace vide : il se résout comme prédéfini
    /// sous l'enveloppe active au moment de l'émission du fault.
    pub fn create_sender_fault_code(sub_code: FaultCode) -> FaultCode {
        FaultCode {
            name: message12::SENDER_FAULT.to_string(),
            namespace: String::new(),
            sub_code: Some(Box::new(sub_code)),
            version: None,
        }
    }

    /// Variante construisant le sous-code depuis un couple nom/namespace
    pub fn create_sender_fault_code_named(
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<FaultCode, SoapFaultError> {
        Ok(FaultCode::create_sender_fault_code(FaultCode::with_namespace(
            name, namespace,
        )?))
    }

    /// Enveloppe un sous-code sous le code standard « Receiver »
    pub fn create_receiver_fault_code(sub_code: FaultCode) -> FaultCode {
        FaultCode {
            name: message12::RECEIVER_FAULT.to_string(),
            namespace: String::new(),
            sub_code: Some(Box::new(sub_code)),
            version: None,
        }
    }

    /// Variante construisant le sous-code depuis un couple nom/namespace
    pub fn create_receiver_fault_code_named(
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<FaultCode, SoapFaultError> {
        Ok(FaultCode::create_receiver_fault_code(
            FaultCode::with_namespace(name, namespace)?,
        ))
    }
}
