//! Export Layout
//!
//! Positions every text run of the exported document. Pure, so the document
//! contents can be checked without a browser or a PDF parser.

use chrono::NaiveDateTime;

use crate::config::ShopConfig;
use crate::models::format_price;
use crate::shortlist::Shortlist;

/// Offset of the product name column from the left margin
const NAME_COLUMN: i64 = 30;

/// A single text run; `y` is measured from the bottom of the page
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: i64,
    pub y: i64,
    pub size: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportLayout {
    pub file_name: String,
    pub page_width: i64,
    pub page_height: i64,
    pub lines: Vec<TextLine>,
}

impl ExportLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}

/// `Total: $12.30`, shared by the on-screen total and the export
pub fn total_line(total: f64, currency: &str) -> String {
    format!("Total: {}{}", currency, format_price(total))
}

pub fn title_line(generated_at: NaiveDateTime) -> String {
    format!("Lista de compras - {}", generated_at.format("%d/%m/%Y %H:%M:%S"))
}

/// `<prefix>-YYYY-MM-DD.pdf`
pub fn file_name(prefix: &str, generated_at: NaiveDateTime) -> String {
    format!("{}-{}.pdf", prefix, generated_at.format("%Y-%m-%d"))
}

/// Lay out header, one row per entry and the total with fixed row offsets.
/// Single page only; long lists run past the bottom margin.
pub fn build_layout(
    shortlist: &Shortlist,
    generated_at: NaiveDateTime,
    config: &ShopConfig,
) -> ExportLayout {
    let page = &config.export;
    let currency = config.currency_symbol.as_str();
    let left = page.margin_left;
    let top = page.page_height - page.margin_top;
    let row_y = |row: i64| top - row * page.row_height;

    let cell = |x: i64, y: i64, text: String| TextLine {
        x,
        y,
        size: page.font_size,
        text,
    };

    let mut lines = vec![TextLine {
        x: left,
        y: top,
        size: page.title_font_size,
        text: title_line(generated_at),
    }];

    let header_y = row_y(2);
    lines.push(cell(left, header_y, "#".to_string()));
    lines.push(cell(left + NAME_COLUMN, header_y, "Producto".to_string()));
    lines.push(cell(left + page.quantity_column, header_y, "Cant.".to_string()));
    lines.push(cell(left + page.price_column, header_y, "Precio".to_string()));

    let mut row = 3;
    for (idx, entry) in shortlist.entries().iter().enumerate() {
        let y = row_y(row);
        lines.push(cell(left, y, format!("{}", idx + 1)));
        lines.push(cell(left + NAME_COLUMN, y, entry.name.clone()));
        lines.push(cell(left + page.quantity_column, y, entry.quantity.to_string()));
        lines.push(cell(
            left + page.price_column,
            y,
            format!("{}{}", currency, format_price(entry.price)),
        ));
        row += 1;
    }

    lines.push(TextLine {
        x: left,
        y: row_y(row + 1),
        size: page.title_font_size,
        text: total_line(shortlist.total(), currency),
    });

    ExportLayout {
        file_name: file_name(&page.file_prefix, generated_at),
        page_width: page.page_width,
        page_height: page.page_height,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(18, 4, 9)
            .unwrap()
    }

    fn sample_list() -> Shortlist {
        let mut list = Shortlist::new();
        list.add(&Product::new("Leche entera 1L", 1.25));
        list.add(&Product::new("Huevos x12", 3.5));
        list.add(&Product::new("Leche entera 1L", 1.25));
        list
    }

    #[test]
    fn test_file_name_embeds_iso_date() {
        let layout = build_layout(&sample_list(), at(), &ShopConfig::default());
        assert_eq!(layout.file_name, "lista-de-compras-2026-03-07.pdf");
    }

    #[test]
    fn test_title_has_timestamp() {
        let layout = build_layout(&sample_list(), at(), &ShopConfig::default());
        assert_eq!(layout.lines[0].text, "Lista de compras - 07/03/2026 18:04:09");
        assert_eq!(layout.lines[0].y, 842 - 60);
    }

    #[test]
    fn test_rows_and_total() {
        let list = sample_list();
        let layout = build_layout(&list, at(), &ShopConfig::default());
        let texts: Vec<_> = layout.texts().collect();
        assert_eq!(
            texts,
            vec![
                "Lista de compras - 07/03/2026 18:04:09",
                "#", "Producto", "Cant.", "Precio",
                "1", "Leche entera 1L", "2", "$1.25",
                "2", "Huevos x12", "1", "$3.50",
                "Total: $6.00",
            ]
        );
        assert_eq!(layout.lines.last().unwrap().text, total_line(list.total(), "$"));
    }

    #[test]
    fn test_rows_use_fixed_offsets() {
        let layout = build_layout(&sample_list(), at(), &ShopConfig::default());
        let first_row = &layout.lines[5];
        let second_row = &layout.lines[9];
        assert_eq!(first_row.y - second_row.y, 20);
        assert_eq!(first_row.x, 40);
        assert_eq!(layout.lines[8].x, 40 + 400);
    }

    #[test]
    fn test_empty_shortlist() {
        let layout = build_layout(&Shortlist::new(), at(), &ShopConfig::default());
        assert_eq!(layout.lines.len(), 6);
        assert_eq!(layout.lines.last().unwrap().text, "Total: $0.00");
    }

    #[test]
    fn test_currency_from_config() {
        let mut config = ShopConfig::default();
        config.currency_symbol = "€".to_string();
        let layout = build_layout(&sample_list(), at(), &config);
        assert_eq!(layout.lines.last().unwrap().text, "Total: €6.00");
    }
}
