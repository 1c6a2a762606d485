use std::io::Write;

use crate::models::CostBreakdown;

const HEADER: [&str; 23] = [
    "label",
    "unit_price_krw",
    "total_goods_price_krw",
    "china_shipping_fee_cny",
    "china_shipping_krw",
    "exw_total_krw",
    "commission_krw",
    "commission_vat_krw",
    "first_payment_krw",
    "total_cbm",
    "total_weight_kg",
    "shipping_mode",
    "international_shipping_krw",
    "dutiable_value_krw",
    "customs_duty_krw",
    "import_vat_krw",
    "customs_broker_fee_krw",
    "customs_broker_vat_krw",
    "origin_certificate_fee_krw",
    "origin_certificate_vat_krw",
    "second_payment_krw",
    "total_cost_krw",
    "unit_cost_krw",
];

/// Write labelled breakdowns as CSV, header first
pub fn write_csv<W: Write>(rows: &[(String, CostBreakdown)], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;

    for (label, b) in rows {
        writer.write_record(&[
            label.clone(),
            b.unit_price_krw.to_string(),
            b.total_goods_price_krw.to_string(),
            b.china_shipping_fee_cny.to_string(),
            b.china_shipping_krw.to_string(),
            b.exw_total_krw.to_string(),
            b.commission_krw.to_string(),
            b.commission_vat_krw.to_string(),
            b.first_payment_krw.to_string(),
            b.total_cbm.to_string(),
            b.total_weight_kg.to_string(),
            b.resolved_shipping_mode.to_string(),
            b.international_shipping_krw.to_string(),
            b.dutiable_value_krw.to_string(),
            b.customs_duty_krw.to_string(),
            b.import_vat_krw.to_string(),
            b.customs_broker_fee_krw.to_string(),
            b.customs_broker_vat_krw.to_string(),
            b.origin_certificate_fee_krw.to_string(),
            b.origin_certificate_vat_krw.to_string(),
            b.second_payment_krw.to_string(),
            b.total_cost_krw.to_string(),
            b.unit_cost_krw.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
