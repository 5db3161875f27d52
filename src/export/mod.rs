//! Shortlist Export
//!
//! Layout -> PDF bytes -> browser download.

mod download;
mod layout;
mod pdf;

pub use layout::total_line;

use download::trigger_download;
use layout::build_layout;
use pdf::render_pdf;

use chrono::NaiveDateTime;

use crate::config::ShopConfig;
use crate::error::ShopResult;
use crate::shortlist::Shortlist;

pub const PDF_MIME: &str = "application/pdf";

/// Generated document ready to hand to the browser
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Build the PDF for a shortlist as of `generated_at`
pub fn export_shortlist(
    shortlist: &Shortlist,
    generated_at: NaiveDateTime,
    config: &ShopConfig,
) -> ShopResult<ExportedPdf> {
    let layout = build_layout(shortlist, generated_at, config);
    let bytes = render_pdf(&layout)?;
    Ok(ExportedPdf {
        file_name: layout.file_name,
        bytes,
    })
}

/// Export with the current local time and start the download.
/// Returns the file name.
pub fn download_shortlist(shortlist: &Shortlist, config: &ShopConfig) -> ShopResult<String> {
    let now = chrono::Local::now().naive_local();
    let pdf = export_shortlist(shortlist, now, config)?;
    trigger_download(&pdf.bytes, &pdf.file_name, PDF_MIME)?;
    log::info!(
        "exported {} entries to {} ({} bytes)",
        shortlist.len(),
        pdf.file_name,
        pdf.bytes.len()
    );
    Ok(pdf.file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use chrono::NaiveDate;

    #[test]
    fn test_export_total_matches_screen_total() {
        let mut list = Shortlist::new();
        list.add(&Product::new("Café molido 250g", 4.90));
        list.add(&Product::new("Pan lactal", 2.10));
        list.add(&Product::new("Café molido 250g", 4.90));
        let at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();

        let pdf = export_shortlist(&list, at, &ShopConfig::default()).expect("export");
        assert_eq!(pdf.file_name, "lista-de-compras-2026-01-02.pdf");

        let screen_total = total_line(list.total(), "$");
        assert_eq!(screen_total, "Total: $11.90");
        let needle = format!("({})", screen_total);
        let haystack = String::from_utf8_lossy(&pdf.bytes);
        assert!(haystack.contains(&needle), "total line missing from pdf");
    }
}
