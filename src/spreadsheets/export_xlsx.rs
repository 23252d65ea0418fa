use crate::domain::PropertyRecord;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet};

/// Canonical column order for the export. Absent fields stay empty
/// cells so a missing value never reads as 0 in the spreadsheet.
const HEADERS: [&str; 13] = [
    "Parcel ID",
    "Address",
    "Owner",
    "Total Appraised Value",
    "Land Value",
    "Improvement Value",
    "Year Built",
    "Lot Size",
    "Legal Description",
    "Property Class",
    "Land Use",
    "Latitude",
    "Longitude",
];

pub fn export_properties_xlsx(records: &[PropertyRecord]) -> ResultResp {
    // Exporting an empty spreadsheet is a user-facing error, unlike an
    // empty search result.
    if records.is_empty() {
        return Err(ServerError::NoResultsForExport);
    }

    let buffer = build_workbook(records)?;
    xlsx_response(buffer, "denton_properties.xlsx")
}

pub fn build_workbook(records: &[PropertyRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .set_name("Properties")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name worksheet: {}", e)))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;

        write_text(worksheet, r, 0, &record.parcel_id)?;
        write_text(worksheet, r, 1, &record.address)?;
        write_text(worksheet, r, 2, &record.owner)?;
        write_num(worksheet, r, 3, record.total_appraised_value)?;
        write_num(worksheet, r, 4, record.land_value)?;
        write_num(worksheet, r, 5, record.improvement_value)?;
        write_num(worksheet, r, 6, record.year_built.map(|y| y as f64))?;
        write_num(worksheet, r, 7, record.lot_size)?;
        write_text(worksheet, r, 8, &record.legal_description)?;
        write_text(worksheet, r, 9, &record.property_class)?;
        write_text(worksheet, r, 10, &record.land_use)?;
        write_num(worksheet, r, 11, record.latitude)?;
        write_num(worksheet, r, 12, record.longitude)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Option<String>,
) -> Result<(), ServerError> {
    if let Some(text) = value {
        worksheet.write_string(row, col, text.as_str()).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write cell ({row},{col}): {}", e))
        })?;
    }
    Ok(())
}

fn write_num(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<(), ServerError> {
    if let Some(n) = value {
        worksheet.write_number(row, col, n).map_err(|e| {
            ServerError::XlsxError(format!("Failed to write cell ({row},{col}): {}", e))
        })?;
    }
    Ok(())
}
