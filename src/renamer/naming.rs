use crate::extractor::InvoiceFields;
use crate::renamer::RenameOptions;

pub const SEGMENT_SEPARATOR: &str = "_";

/// Ordered name segments for an invoice:
///
/// `[receptor rfc] fecha rfc serie folio subTotal iva total [descuento]
/// tipoDeComprobante [UUID]`
///
/// Optional segments are left out entirely when switched off. The UUID is
/// also left out when the document has no stamp.
pub fn name_segments(fields: &InvoiceFields, options: &RenameOptions) -> Vec<String> {
    let mut segments = Vec::with_capacity(11);

    if options.receiver_tax_id {
        segments.push(fields.receiver_tax_id.clone());
    }

    segments.extend([
        fields.issue_date.clone(),
        fields.issuer_tax_id.clone(),
        fields.series.clone(),
        fields.folio.clone(),
        fields.subtotal.clone(),
        fields.tax.clone(),
        fields.total.clone(),
    ]);

    if options.discount {
        segments.push(fields.discount.clone());
    }

    segments.push(fields.document_type.clone());

    if options.uuid {
        if let Some(ref uuid) = fields.uuid {
            segments.push(uuid.clone());
        }
    }

    segments
}

/// File stem shared by the renamed XML and PDF. Always ends with a trailing
/// separator.
pub fn destination_stem(fields: &InvoiceFields, options: &RenameOptions) -> String {
    let mut stem = name_segments(fields, options).join(SEGMENT_SEPARATOR);
    stem.push_str(SEGMENT_SEPARATOR);
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> InvoiceFields {
        InvoiceFields {
            issuer_tax_id: "BBB020202BBB".to_string(),
            issuer_name: "PROVEEDOR SA DE CV".to_string(),
            receiver_tax_id: "CCC030303CCC".to_string(),
            issue_date: "2014-02-25".to_string(),
            issue_time: "180405".to_string(),
            series: "NC".to_string(),
            folio: "77".to_string(),
            subtotal: "-500.00".to_string(),
            tax: "-72.00".to_string(),
            total: "-522.00".to_string(),
            discount: "-50.00".to_string(),
            document_type: "egreso".to_string(),
            schema_version: "3.2".to_string(),
            uuid: Some("6F2C3D4E-1A2B-4C5D-8E9F-0123456789AB".to_string()),
        }
    }

    #[test]
    fn test_default_stem() {
        let stem = destination_stem(&sample_fields(), &RenameOptions::new());
        assert_eq!(stem, "2014-02-25_BBB020202BBB_NC_77_-500.00_-72.00_-522.00_egreso_");
    }

    #[test]
    fn test_all_optional_segments() {
        let options = RenameOptions::new()
            .with_receiver_tax_id(true)
            .with_discount(true)
            .with_uuid(true);

        let stem = destination_stem(&sample_fields(), &options);
        assert_eq!(
            stem,
            "CCC030303CCC_2014-02-25_BBB020202BBB_NC_77_-500.00_-72.00_-522.00_-50.00_egreso_6F2C3D4E-1A2B-4C5D-8E9F-0123456789AB_"
        );
    }

    #[test]
    fn test_uuid_omitted_without_stamp() {
        let mut fields = sample_fields();
        fields.uuid = None;

        let options = RenameOptions::new().with_uuid(true);
        let segments = name_segments(&fields, &options);

        assert_eq!(segments.len(), 8);
        assert_eq!(segments.last().map(String::as_str), Some("egreso"));
    }

    #[test]
    fn test_missing_discount_segment() {
        let mut fields = sample_fields();
        fields.discount = "0".to_string();

        let with_discount = name_segments(&fields, &RenameOptions::new().with_discount(true));
        assert_eq!(with_discount[7], "0");

        let without_discount = name_segments(&fields, &RenameOptions::new());
        assert_eq!(without_discount[7], "egreso");
    }

    #[test]
    fn test_empty_series_and_folio_keep_their_slots() {
        let mut fields = sample_fields();
        fields.series.clear();
        fields.folio.clear();

        let stem = destination_stem(&fields, &RenameOptions::new());
        assert_eq!(stem, "2014-02-25_BBB020202BBB___-500.00_-72.00_-522.00_egreso_");
    }
}
