//! Shared helpers: generate small PDFs with lopdf and run the binary.

#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;

pub fn cmd() -> Command {
    Command::cargo_bin("extract-pdf-text").unwrap()
}

/// Create a PDF with one page per content stream, all sharing Helvetica.
pub fn pdf_with_contents(contents: &[&[u8]]) -> Vec<u8> {
    use lopdf::{Object, Stream, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let stream = Stream::new(dictionary! {}, content.to_vec());
        let content_id = doc.add_object(stream);

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(contents.len() as i64),
    };
    let pages_id = doc.add_object(pages_dict);

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Single-page PDF with the given content stream.
pub fn pdf_with_content(content: &[u8]) -> Vec<u8> {
    pdf_with_contents(&[content])
}

/// Multi-page PDF, one line of text per page.
pub fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
    let streams: Vec<Vec<u8>> = texts
        .iter()
        .map(|t| format!("BT /F1 12 Tf 72 720 Td ({t}) Tj ET").into_bytes())
        .collect();
    let refs: Vec<&[u8]> = streams.iter().map(Vec::as_slice).collect();
    pdf_with_contents(&refs)
}

/// Write bytes to a temporary `.pdf` file that lives as long as the handle.
pub fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}

/// Run the binary on `args` and parse its stdout as exactly one JSON line.
pub fn run_json(args: &[&str]) -> (serde_json::Value, Option<i32>) {
    let output = cmd().args(args).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected one line of output, got: {stdout:?}");
    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    (value, output.status.code())
}
