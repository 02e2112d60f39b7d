use crate::error::{RenameCfdError, Result};
use crate::extractor::decode::decode_document;
use crate::extractor::fields::{sign_for, InvoiceFields};
use crate::extractor::schema::SchemaVariant;
use log::{debug, warn};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

const ENVELOPE: &str = "Comprobante";

/// Read and parse the invoice stored at `path`.
pub fn extract_fields<P: AsRef<Path>>(path: P) -> Result<InvoiceFields> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let content = decode_document(&fs::read(path)?, &origin)?;

    debug!("Extracting invoice fields from {}", origin);
    parse_document(&content, &origin)
}

/// Parse invoice fields from XML text already in memory.
pub fn parse_fields(xml: &str) -> Result<InvoiceFields> {
    parse_document(xml, "<input>")
}

fn parse_document(xml: &str, origin: &str) -> Result<InvoiceFields> {
    let document = Document::parse(xml.trim_start_matches('\u{feff}')).map_err(|source| {
        RenameCfdError::Xml {
            path: origin.to_string(),
            source,
        }
    })?;
    let comprobante = document.root_element();

    let version = required(comprobante, ENVELOPE, "version")?;
    let variant = SchemaVariant::from_version(version);
    if let SchemaVariant::Unsupported(ref version) = variant {
        return Err(RenameCfdError::UnsupportedVersion {
            version: version.clone(),
        });
    }
    debug!("{} is a {} document, version {}", origin, variant, version);

    let document_type = required(comprobante, ENVELOPE, "tipoDeComprobante")?;
    let sign = sign_for(document_type);

    let fecha = required(comprobante, ENVELOPE, "fecha")?;
    let issue_date: String = fecha.chars().take(10).collect();
    let issue_time: String = fecha
        .chars()
        .skip(11)
        .take(8)
        .filter(|c| *c != ':')
        .collect();

    let subtotal = format!("{}{}", sign, required(comprobante, ENVELOPE, "subTotal")?);
    let total = format!("{}{}", sign, required(comprobante, ENVELOPE, "total")?);
    let discount = match comprobante.attribute("descuento") {
        Some(descuento) => format!("-{}", descuento),
        None => "0".to_string(),
    };

    let emisor = element(&variant, comprobante, "Emisor")?;
    let receptor = element(&variant, comprobante, "Receptor")?;

    let uuid = match variant {
        SchemaVariant::Cfdi => stamp_uuid(&variant, comprobante, origin),
        _ => None,
    };

    Ok(InvoiceFields {
        issuer_tax_id: required(emisor, "Emisor", "rfc")?.to_string(),
        issuer_name: emisor.attribute("nombre").unwrap_or_default().to_string(),
        receiver_tax_id: required(receptor, "Receptor", "rfc")?.to_string(),
        issue_date,
        issue_time,
        series: comprobante.attribute("serie").unwrap_or_default().to_string(),
        folio: comprobante.attribute("folio").unwrap_or_default().to_string(),
        subtotal,
        tax: transferred_tax(&variant, comprobante, sign),
        total,
        discount,
        document_type: document_type.to_string(),
        schema_version: version.to_string(),
        uuid,
    })
}

fn required<'a>(node: Node<'a, '_>, element: &str, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| RenameCfdError::missing_attribute(element, attribute))
}

fn element<'a, 'input>(
    variant: &SchemaVariant,
    root: Node<'a, 'input>,
    local_name: &str,
) -> Result<Node<'a, 'input>> {
    variant
        .find(root, local_name)
        .ok_or_else(|| RenameCfdError::MissingElement {
            element: local_name.to_string(),
        })
}

/// `totalImpuestosTrasladados` when it has a value, else the first
/// `Traslado/@importe`, else `"0"`. The sign applies only to values found in
/// the document.
fn transferred_tax(variant: &SchemaVariant, comprobante: Node, sign: &str) -> String {
    let aggregate = variant
        .find(comprobante, "Impuestos")
        .and_then(|impuestos| impuestos.attribute("totalImpuestosTrasladados"))
        .filter(|value| !value.is_empty());

    if let Some(value) = aggregate {
        return format!("{}{}", sign, value);
    }

    match variant
        .find_transfer(comprobante)
        .and_then(|traslado| traslado.attribute("importe"))
        .filter(|value| !value.is_empty())
    {
        Some(value) => {
            debug!("Tax total empty, using transferred tax amount {}", value);
            format!("{}{}", sign, value)
        }
        None => "0".to_string(),
    }
}

fn stamp_uuid(variant: &SchemaVariant, comprobante: Node, origin: &str) -> Option<String> {
    let uuid = variant
        .find_stamp(comprobante)
        .and_then(|stamp| stamp.attribute("UUID"))
        .map(str::to_string);

    if uuid.is_none() {
        warn!("{} has no fiscal stamp UUID", origin);
    }
    uuid
}
