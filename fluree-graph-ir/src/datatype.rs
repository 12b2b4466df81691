//! RDF datatype representation
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! Plain strings default to `xsd:string`, and language-tagged strings use
//! `rdf:langString`.

use fluree_vocab::xsd;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Common XSD and RDF datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use fluree_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use fluree_vocab::xsd::{
        ANY_URI as XSD_ANY_URI, BOOLEAN as XSD_BOOLEAN, DATE as XSD_DATE,
        DATE_TIME as XSD_DATE_TIME, DECIMAL as XSD_DECIMAL, DOUBLE as XSD_DOUBLE,
        FLOAT as XSD_FLOAT, INTEGER as XSD_INTEGER, STRING as XSD_STRING, TIME as XSD_TIME,
    };
}

/// Value space a datatype's lexical forms map into
///
/// Two literals are comparable by value only when their datatypes share a
/// value space other than `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueSpace {
    /// Integer family, decimal, float, double
    Numeric,
    /// xsd:dateTime and xsd:dateTimeStamp
    DateTime,
    /// xsd:date
    Date,
    /// xsd:time
    Time,
    /// xsd:boolean
    Boolean,
    /// Anything without a built-in value comparison
    Other,
}

/// RDF literal datatype, an expanded IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// xsd:float
    pub fn xsd_float() -> Self {
        Self::from_iri(iri::XSD_FLOAT)
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Self::from_iri(iri::XSD_DECIMAL)
    }

    /// xsd:date
    pub fn xsd_date() -> Self {
        Self::from_iri(iri::XSD_DATE)
    }

    /// xsd:dateTime
    pub fn xsd_date_time() -> Self {
        Self::from_iri(iri::XSD_DATE_TIME)
    }

    /// xsd:time
    pub fn xsd_time() -> Self {
        Self::from_iri(iri::XSD_TIME)
    }

    /// xsd:anyURI
    pub fn xsd_any_uri() -> Self {
        Self::from_iri(iri::XSD_ANY_URI)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }

    /// Check if this is a numeric type (integer family, decimal, float, double)
    pub fn is_numeric(&self) -> bool {
        xsd::is_numeric_datatype(self.as_iri())
    }

    /// Classify the value space of this datatype
    pub fn value_space(&self) -> ValueSpace {
        let iri = self.as_iri();
        if xsd::is_numeric_datatype(iri) {
            return ValueSpace::Numeric;
        }
        match iri {
            xsd::DATE_TIME | xsd::DATE_TIME_STAMP => ValueSpace::DateTime,
            xsd::DATE => ValueSpace::Date,
            xsd::TIME => ValueSpace::Time,
            xsd::BOOLEAN => ValueSpace::Boolean,
            _ => ValueSpace::Other,
        }
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_constructors() {
        assert_eq!(Datatype::xsd_string().as_iri(), iri::XSD_STRING);
        assert_eq!(Datatype::xsd_boolean().as_iri(), iri::XSD_BOOLEAN);
        assert_eq!(Datatype::xsd_integer().as_iri(), iri::XSD_INTEGER);
        assert_eq!(Datatype::xsd_double().as_iri(), iri::XSD_DOUBLE);
        assert_eq!(Datatype::rdf_lang_string().as_iri(), iri::RDF_LANG_STRING);
    }

    #[test]
    fn test_datatype_equality() {
        assert_eq!(Datatype::from_iri(iri::XSD_STRING), Datatype::xsd_string());
        assert_ne!(Datatype::xsd_string(), Datatype::xsd_integer());
    }

    #[test]
    fn test_is_checks() {
        assert!(Datatype::xsd_string().is_xsd_string());
        assert!(!Datatype::xsd_integer().is_xsd_string());

        assert!(Datatype::rdf_lang_string().is_lang_string());
        assert!(!Datatype::xsd_string().is_lang_string());

        assert!(Datatype::xsd_integer().is_numeric());
        assert!(Datatype::xsd_float().is_numeric());
        assert!(Datatype::from_iri(xsd::NON_NEGATIVE_INTEGER).is_numeric());
        assert!(!Datatype::xsd_string().is_numeric());
    }

    #[test]
    fn test_value_space() {
        assert_eq!(Datatype::xsd_decimal().value_space(), ValueSpace::Numeric);
        assert_eq!(Datatype::xsd_date_time().value_space(), ValueSpace::DateTime);
        assert_eq!(
            Datatype::from_iri(xsd::DATE_TIME_STAMP).value_space(),
            ValueSpace::DateTime
        );
        assert_eq!(Datatype::xsd_date().value_space(), ValueSpace::Date);
        assert_eq!(Datatype::xsd_time().value_space(), ValueSpace::Time);
        assert_eq!(Datatype::xsd_boolean().value_space(), ValueSpace::Boolean);
        assert_eq!(Datatype::xsd_any_uri().value_space(), ValueSpace::Other);
        assert_eq!(Datatype::xsd_string().value_space(), ValueSpace::Other);
    }
}
