use serde::Serialize;

/// Document type that flips the sign of subtotal, tax and total.
pub const CREDIT_NOTE: &str = "egreso";

/// Flat set of values read from one CFD/CFDI document.
///
/// Amounts are kept as the text found in the document, already carrying the
/// sign prefix for credit notes. Nothing here is validated or reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceFields {
    pub issuer_tax_id: String,
    pub issuer_name: String,
    pub receiver_tax_id: String,
    /// `YYYY-MM-DD`, the first 10 characters of `fecha`.
    pub issue_date: String,
    /// `HHMMSS`, the time part of `fecha` with the colons removed.
    pub issue_time: String,
    pub series: String,
    pub folio: String,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    /// `"-<descuento>"` when the document carries a discount, `"0"` otherwise.
    /// Never adjusted by document type.
    pub discount: String,
    pub document_type: String,
    pub schema_version: String,
    /// Fiscal stamp id; only CFDI documents carry one.
    pub uuid: Option<String>,
}

impl InvoiceFields {
    pub fn is_credit_note(&self) -> bool {
        self.document_type == CREDIT_NOTE
    }
}

/// Sign prefix applied to subtotal, tax and total.
pub fn sign_for(document_type: &str) -> &'static str {
    if document_type == CREDIT_NOTE {
        "-"
    } else {
        ""
    }
}
