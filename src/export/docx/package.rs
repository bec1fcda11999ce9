//! OPC container assembly.

use std::io::{Cursor, Write};

use chrono::{DateTime, Utc};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::export::docx::document::DocModel;
use crate::export::docx::{DocxError, xml};

/// Packs the rendered parts into the `.docx` zip container.
pub(crate) fn pack(model: &DocModel, now: DateTime<Utc>) -> Result<Vec<u8>, DocxError> {
    let parts: [(&str, Vec<u8>); 8] = [
        ("[Content_Types].xml", xml::content_types_xml()?),
        ("_rels/.rels", xml::root_rels_xml()?),
        ("word/document.xml", xml::document_xml(model)?),
        ("word/styles.xml", xml::styles_xml()?),
        ("word/_rels/document.xml.rels", xml::document_rels_xml(&model.hyperlinks)?),
        ("word/header1.xml", xml::header_xml(&model.label)?),
        ("word/footer1.xml", xml::footer_xml()?),
        ("docProps/core.xml", xml::core_xml(&model.label, now)?),
    ];

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, bytes) in &parts {
        writer.start_file(*name, options)?;
        writer.write_all(bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}
