//! Utilities shared by the PubMed parsing code

pub mod xml;

pub use xml::{XmlContent, XmlNode, parse_document};
