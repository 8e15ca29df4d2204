use bccr_core::CatalogRecord;

/// `(code, parent, description, periodicity, unit, short name)`
type Row = (
    &'static str,
    Option<&'static str>,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
);

const ROWS: &[Row] = &[
    ("100", None, "Precios", "Mensual", "", None),
    (
        "25482",
        Some("100"),
        "Índice de precios al consumidor",
        "Mensual",
        "índice",
        Some("IPC"),
    ),
    (
        "25483",
        Some("25482"),
        "Variación interanual del índice de precios al consumidor",
        "Mensual",
        "%",
        None,
    ),
    ("200", None, "Producción", "Trimestral", "", None),
    (
        "35449",
        Some("200"),
        "Índice mensual de actividad económica",
        "Mensual",
        "índice",
        Some("IMAE"),
    ),
    (
        "33439",
        Some("200"),
        "Índice de producción",
        "Trimestral",
        "índice",
        None,
    ),
    (
        "33783",
        Some("200"),
        "Producto interno bruto a precios constantes",
        "Trimestral",
        "millones de colones",
        Some("PIB"),
    ),
    ("300", None, "Tipo de cambio", "Diaria", "", None),
    (
        "317",
        Some("300"),
        "Tipo de cambio de compra",
        "Diaria",
        "colones por dólar",
        None,
    ),
    (
        "318",
        Some("300"),
        "Tipo de cambio de venta",
        "Diaria",
        "colones por dólar",
        None,
    ),
    (
        "3541",
        None,
        "Tasa de política monetaria",
        "Diaria",
        "%",
        Some("TPM"),
    ),
    (
        "FAIL",
        None,
        "Serie de prueba con falla forzada",
        "Diaria",
        "",
        None,
    ),
    ("TIMEOUT", None, "Serie de prueba lenta", "Diaria", "", None),
];

/// The full fixture catalog dump.
pub fn records() -> Vec<CatalogRecord> {
    ROWS.iter()
        .map(|&(code, parent, description, frequency, unit, name)| {
            let mut rec = CatalogRecord::new(code, description, frequency, unit);
            if let Some(p) = parent {
                rec = rec.with_parent(p);
            }
            if let Some(n) = name {
                rec = rec.with_name(n);
            }
            rec
        })
        .collect()
}
