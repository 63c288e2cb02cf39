//! On-disk documents assembled at test time.

use std::io::Write;
use std::path::Path;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::FileOptions;

pub const IMAGE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
pub const HYPERLINK_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

pub fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn write_zip(path: &Path, parts: &[(&str, &[u8])]) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    for (name, content) in parts {
        zip.start_file(*name, FileOptions::default()).unwrap();
        zip.write_all(content).unwrap();
    }
    zip.finish().unwrap();
}

pub fn document_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    )
}

pub fn relationships_xml(rel_types: &[(&str, &str)]) -> String {
    let rels: String = rel_types
        .iter()
        .enumerate()
        .map(|(i, (rel_type, target))| {
            format!(
                r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
                i + 1,
                rel_type,
                target
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{}</Relationships>"#,
        rels
    )
}

pub fn write_docx(path: &Path, paragraphs: &[&str], rels: &[(&str, &str)]) {
    let document = document_xml(paragraphs);
    let relationships = relationships_xml(rels);
    write_zip(
        path,
        &[
            ("word/document.xml", document.as_bytes()),
            ("word/_rels/document.xml.rels", relationships.as_bytes()),
        ],
    );
}

pub fn write_xlsx(path: &Path, rows: &[&[&str]], with_media: bool) {
    let workbook = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
    let workbook_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

    let columns = ["A", "B", "C", "D"];
    let sheet_rows: String = rows
        .iter()
        .enumerate()
        .map(|(r, cells)| {
            let cells: String = cells
                .iter()
                .enumerate()
                .map(|(c, value)| {
                    format!(
                        r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                        columns[c],
                        r + 1,
                        value
                    )
                })
                .collect();
            format!(r#"<row r="{}">{}</row>"#, r + 1, cells)
        })
        .collect();
    let sheet = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
        sheet_rows
    );

    let mut parts: Vec<(&str, &[u8])> = vec![
        ("xl/workbook.xml", workbook.as_bytes()),
        ("xl/_rels/workbook.xml.rels", workbook_rels.as_bytes()),
        ("xl/worksheets/sheet1.xml", sheet.as_bytes()),
    ];
    if with_media {
        parts.push(("xl/media/image1.png", b"\x89PNG\r\n\x1a\n"));
    }
    write_zip(path, &parts);
}

pub fn write_compound_file(path: &Path, streams: &[&str]) {
    let mut compound = cfb::create(path).unwrap();
    for stream in streams {
        let mut writer = compound.create_stream(format!("/{}", stream)).unwrap();
        writer.write_all(b"payload").unwrap();
    }
    compound.flush().unwrap();
}

/// One page of a generated PDF.
pub enum PdfPage<'a> {
    Text(&'a str),
    Image,
    Blank,
}

/// Writes a single-font PDF with a correct cross-reference table.
/// `declared_pages` overrides the page tree's `/Count`, which lets a test
/// announce pages the file does not contain.
pub fn write_pdf(path: &Path, pages: &[PdfPage<'_>], declared_pages: Option<usize>) {
    // 1 catalog, 2 page tree, 3 font, 4 image, then a page and its content
    // stream for every page.
    let page_id = |i: usize| 5 + 2 * i;
    let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", page_id(i))).collect();

    let mut objects: Vec<Vec<u8>> = vec![
        b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            declared_pages.unwrap_or(pages.len())
        )
        .into_bytes(),
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_vec(),
        // Large enough that image extraction does not discard it as an icon.
        stream_object(
            "/Type /XObject /Subtype /Image /Width 16 /Height 16 /ColorSpace /DeviceGray /BitsPerComponent 8",
            &[0x80; 256],
        ),
    ];

    for (i, page) in pages.iter().enumerate() {
        let (resources, content) = match page {
            PdfPage::Text(text) => (
                "/Font << /F1 3 0 R >>",
                format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text),
            ),
            PdfPage::Image => (
                "/XObject << /Im1 4 0 R >>",
                "q 100 0 0 100 72 600 cm /Im1 Do Q".to_string(),
            ),
            PdfPage::Blank => ("", String::new()),
        };
        objects.push(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << {} >> /Contents {} 0 R >>",
                resources,
                page_id(i) + 1
            )
            .into_bytes(),
        );
        objects.push(stream_object("", content.as_bytes()));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
        pdf.extend_from_slice(body);
        pdf.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    std::fs::write(path, pdf).unwrap();
}

fn stream_object(dict_entries: &str, data: &[u8]) -> Vec<u8> {
    let mut object = format!("<< {} /Length {} >>\nstream\n", dict_entries, data.len()).into_bytes();
    object.extend_from_slice(data);
    object.extend_from_slice(b"\nendstream");
    object
}

/// Writes a BIFF8 workbook: one `Workbook` stream holding a globals
/// substream and one worksheet of inline-string cells, plus any extra
/// top-level streams (e.g. `Pictures`). Empty values leave the cell blank.
pub fn write_xls(path: &Path, sheet_name: &str, rows: &[&[&str]], extra_streams: &[&str]) {
    let mut sheet = biff_record(0x0809, &bof(0x0010));
    for (r, cells) in rows.iter().enumerate() {
        for (c, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let mut label = Vec::new();
            label.extend_from_slice(&(r as u16).to_le_bytes());
            label.extend_from_slice(&(c as u16).to_le_bytes());
            label.extend_from_slice(&0u16.to_le_bytes());
            label.extend_from_slice(&(value.len() as u16).to_le_bytes());
            label.push(0);
            label.extend_from_slice(value.as_bytes());
            sheet.extend(biff_record(0x0204, &label));
        }
    }
    sheet.extend(biff_record(0x000A, &[]));

    let globals = |sheet_offset: u32| {
        let mut bound_sheet = Vec::new();
        bound_sheet.extend_from_slice(&sheet_offset.to_le_bytes());
        bound_sheet.extend_from_slice(&[0, 0, sheet_name.len() as u8, 0]);
        bound_sheet.extend_from_slice(sheet_name.as_bytes());

        let mut globals = biff_record(0x0809, &bof(0x0005));
        globals.extend(biff_record(0x0085, &bound_sheet));
        globals.extend(biff_record(0x000A, &[]));
        globals
    };
    let globals_len = globals(0).len() as u32;

    let mut workbook = globals(globals_len);
    workbook.extend(sheet);
    // Keep the stream out of the mini stream, as Excel does.
    workbook.resize(workbook.len().max(4096), 0);

    let file = std::fs::File::create(path).unwrap();
    let mut compound = cfb::CompoundFile::create_with_version(cfb::Version::V3, file).unwrap();
    compound
        .create_stream("/Workbook")
        .unwrap()
        .write_all(&workbook)
        .unwrap();
    for stream in extra_streams {
        compound
            .create_stream(format!("/{}", stream))
            .unwrap()
            .write_all(b"payload")
            .unwrap();
    }
    compound.flush().unwrap();
}

fn bof(substream_type: u16) -> Vec<u8> {
    let mut data = Vec::with_capacity(16);
    data.extend_from_slice(&0x0600u16.to_le_bytes());
    data.extend_from_slice(&substream_type.to_le_bytes());
    data.extend_from_slice(&[0; 12]);
    data
}

fn biff_record(record_type: u16, data: &[u8]) -> Vec<u8> {
    let mut record = Vec::with_capacity(4 + data.len());
    record.extend_from_slice(&record_type.to_le_bytes());
    record.extend_from_slice(&(data.len() as u16).to_le_bytes());
    record.extend_from_slice(data);
    record
}
