//! Page-level PDF text extraction

use lopdf::Document;
use std::path::Path;

use pqa_core::{Error, Result};

/// Text of one PDF page, in page order
#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-based page number
    pub number: u32,
    pub text: String,
}

/// Load a PDF into ordered page-level text blocks, one per page
pub fn load_pages(path: &Path) -> Result<Vec<PageText>> {
    let document = Document::load(path)
        .map_err(|e| Error::Pdf(format!("{}: {e}", path.display())))?;

    let mut pages = Vec::new();
    for (number, _object_id) in document.get_pages() {
        let text = document
            .extract_text(&[number])
            .map_err(|e| Error::Pdf(format!("página {number}: {e}")))?;
        pages.push(PageText { number, text });
    }
    Ok(pages)
}

/// Write a single-page PDF containing `text`, for tests.
#[cfg(test)]
pub(crate) fn write_sample_pdf(path: &Path, text: &str) {
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();
    let font_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = document.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = document.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content stream"),
    ));
    let page_id = document.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    document
        .objects
        .insert(pages_id, Object::Dictionary(pages));
    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);
    document.save(path).expect("save sample pdf");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_pdf_error() {
        let result = load_pages(Path::new("/nonexistent/document.pdf"));
        assert!(matches!(result, Err(Error::Pdf(_))));
    }

    #[test]
    fn single_page_text_is_extracted_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pdf");
        write_sample_pdf(&path, "Faturamento da EmpresaX: R$ 10.000.000,00");

        let pages = load_pages(&path).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert!(pages[0].text.contains("Faturamento da EmpresaX"));
    }
}
