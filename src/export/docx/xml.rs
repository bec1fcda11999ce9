//! WordprocessingML part writers.
//!
//! Each function renders one XML part of the OPC container. quick-xml
//! handles escaping of text and attribute values.

use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::export::docx::document::{CODE_FILL, DocModel, MONO_FONT, Para, ParaBorder, Run};

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOC: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_HEADER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
const REL_FOOTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

// Fixed relationship ids inside word/document.xml.rels; hyperlinks follow.
const RID_STYLES: &str = "rId1";
const RID_HEADER: &str = "rId2";
const RID_FOOTER: &str = "rId3";
const HYPERLINK_RID_BASE: usize = 4;

/// Relationship id for the hyperlink at `index` in `DocModel::hyperlinks`.
fn hyperlink_rid(index: usize) -> String {
    format!("rId{}", HYPERLINK_RID_BASE + index)
}

/// Thin wrapper over the quick-xml writer with element helpers.
struct Xml {
    writer: Writer<Vec<u8>>,
}

impl Xml {
    fn new() -> Result<Self, quick_xml::Error> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self { writer })
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), quick_xml::Error> {
        let mut el = BytesStart::new(name);
        for (k, v) in attrs {
            el.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Start(el))
    }

    fn close(&mut self, name: &str) -> Result<(), quick_xml::Error> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), quick_xml::Error> {
        let mut el = BytesStart::new(name);
        for (k, v) in attrs {
            el.push_attribute((*k, *v));
        }
        self.writer.write_event(Event::Empty(el))
    }

    fn text(&mut self, text: &str) -> Result<(), quick_xml::Error> {
        self.writer.write_event(Event::Text(BytesText::new(text)))
    }

    /// `<w:t xml:space="preserve">text</w:t>`
    fn w_text(&mut self, text: &str) -> Result<(), quick_xml::Error> {
        self.open("w:t", &[("xml:space", "preserve")])?;
        self.text(text)?;
        self.close("w:t")
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

/// Renders `word/document.xml`.
pub(crate) fn document_xml(model: &DocModel) -> Result<Vec<u8>, quick_xml::Error> {
    let mut xml = Xml::new()?;
    xml.open("w:document", &[("xmlns:w", NS_W), ("xmlns:r", NS_R)])?;
    xml.open("w:body", &[])?;

    for para in &model.paragraphs {
        write_paragraph(&mut xml, para)?;
    }

    xml.open("w:sectPr", &[])?;
    xml.empty("w:headerReference", &[("w:type", "default"), ("r:id", RID_HEADER)])?;
    xml.empty("w:footerReference", &[("w:type", "default"), ("r:id", RID_FOOTER)])?;
    // A4 portrait with one-inch margins.
    xml.empty("w:pgSz", &[("w:w", "11906"), ("w:h", "16838")])?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.close("w:sectPr")?;

    xml.close("w:body")?;
    xml.close("w:document")?;
    Ok(xml.finish())
}

fn write_paragraph(xml: &mut Xml, para: &Para) -> Result<(), quick_xml::Error> {
    xml.open("w:p", &[])?;

    let has_props = para.style.is_some()
        || para.page_break_before
        || para.indent.is_some()
        || para.border != ParaBorder::None
        || para.shaded;
    if has_props {
        xml.open("w:pPr", &[])?;
        if let Some(style) = para.style {
            xml.empty("w:pStyle", &[("w:val", style)])?;
        }
        if para.page_break_before {
            xml.empty("w:pageBreakBefore", &[])?;
        }
        write_border(xml, para.border)?;
        if para.shaded {
            xml.empty("w:shd", &[("w:val", "clear"), ("w:color", "auto"), ("w:fill", CODE_FILL)])?;
        }
        if let Some(indent) = para.indent {
            xml.empty("w:ind", &[("w:left", indent.to_string().as_str())])?;
        }
        xml.close("w:pPr")?;
    }

    for run in &para.runs {
        write_run(xml, run)?;
    }

    xml.close("w:p")
}

fn write_border(xml: &mut Xml, border: ParaBorder) -> Result<(), quick_xml::Error> {
    let edges: &[(&str, &str, &str)] = match border {
        ParaBorder::None => return Ok(()),
        ParaBorder::Left => &[("w:left", "18", "BFBFBF")],
        ParaBorder::Bottom => &[("w:bottom", "6", "auto")],
        ParaBorder::Box => &[
            ("w:top", "4", "D9D9D9"),
            ("w:left", "4", "D9D9D9"),
            ("w:bottom", "4", "D9D9D9"),
            ("w:right", "4", "D9D9D9"),
        ],
    };
    xml.open("w:pBdr", &[])?;
    for &(edge, size, color) in edges {
        xml.empty(
            edge,
            &[("w:val", "single"), ("w:sz", size), ("w:space", "4"), ("w:color", color)],
        )?;
    }
    xml.close("w:pBdr")
}

fn write_run(xml: &mut Xml, run: &Run) -> Result<(), quick_xml::Error> {
    match run {
        Run::Text { text, bold, italic, code } => {
            xml.open("w:r", &[])?;
            if *bold || *italic || *code {
                xml.open("w:rPr", &[])?;
                if *code {
                    xml.empty(
                        "w:rFonts",
                        &[("w:ascii", MONO_FONT), ("w:hAnsi", MONO_FONT)],
                    )?;
                }
                if *bold {
                    xml.empty("w:b", &[])?;
                }
                if *italic {
                    xml.empty("w:i", &[])?;
                }
                xml.close("w:rPr")?;
            }
            xml.w_text(text)?;
            xml.close("w:r")
        }
        Run::Hyperlink { text, index } => {
            let rid = hyperlink_rid(*index);
            xml.open("w:hyperlink", &[("r:id", rid.as_str())])?;
            xml.open("w:r", &[])?;
            xml.open("w:rPr", &[])?;
            xml.empty("w:rStyle", &[("w:val", "Hyperlink")])?;
            xml.close("w:rPr")?;
            xml.w_text(text)?;
            xml.close("w:r")?;
            xml.close("w:hyperlink")
        }
    }
}

/// Renders `word/styles.xml`: document defaults plus the title, four heading
/// levels, and the hyperlink character style.
pub(crate) fn styles_xml() -> Result<Vec<u8>, quick_xml::Error> {
    let mut xml = Xml::new()?;
    xml.open("w:styles", &[("xmlns:w", NS_W)])?;

    xml.open("w:docDefaults", &[])?;
    xml.open("w:rPrDefault", &[])?;
    xml.open("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[("w:ascii", "Calibri"), ("w:hAnsi", "Calibri"), ("w:eastAsia", "Yu Gothic")],
    )?;
    xml.empty("w:sz", &[("w:val", "21")])?;
    xml.empty("w:szCs", &[("w:val", "21")])?;
    xml.close("w:rPr")?;
    xml.close("w:rPrDefault")?;
    xml.close("w:docDefaults")?;

    write_paragraph_style(&mut xml, "Title", "Title", 40, true, false)?;
    write_paragraph_style(&mut xml, "Heading1", "heading 1", 32, true, false)?;
    write_paragraph_style(&mut xml, "Heading2", "heading 2", 28, true, false)?;
    write_paragraph_style(&mut xml, "Heading3", "heading 3", 26, true, false)?;
    write_paragraph_style(&mut xml, "Heading4", "heading 4", 24, true, true)?;

    xml.open("w:style", &[("w:type", "character"), ("w:styleId", "Hyperlink")])?;
    xml.empty("w:name", &[("w:val", "Hyperlink")])?;
    xml.open("w:rPr", &[])?;
    xml.empty("w:color", &[("w:val", "0563C1")])?;
    xml.empty("w:u", &[("w:val", "single")])?;
    xml.close("w:rPr")?;
    xml.close("w:style")?;

    xml.close("w:styles")?;
    Ok(xml.finish())
}

fn write_paragraph_style(
    xml: &mut Xml,
    id: &str,
    name: &str,
    half_point_size: u32,
    bold: bool,
    italic: bool,
) -> Result<(), quick_xml::Error> {
    xml.open("w:style", &[("w:type", "paragraph"), ("w:styleId", id)])?;
    xml.empty("w:name", &[("w:val", name)])?;
    xml.open("w:pPr", &[])?;
    xml.empty("w:spacing", &[("w:before", "240"), ("w:after", "120")])?;
    xml.close("w:pPr")?;
    xml.open("w:rPr", &[])?;
    if bold {
        xml.empty("w:b", &[])?;
    }
    if italic {
        xml.empty("w:i", &[])?;
    }
    xml.empty("w:sz", &[("w:val", half_point_size.to_string().as_str())])?;
    xml.close("w:rPr")?;
    xml.close("w:style")
}

/// Renders `word/header1.xml`: the document label, right-aligned.
pub(crate) fn header_xml(label: &str) -> Result<Vec<u8>, quick_xml::Error> {
    let mut xml = Xml::new()?;
    xml.open("w:hdr", &[("xmlns:w", NS_W)])?;
    xml.open("w:p", &[])?;
    xml.open("w:pPr", &[])?;
    xml.empty("w:jc", &[("w:val", "right")])?;
    xml.close("w:pPr")?;
    xml.open("w:r", &[])?;
    xml.w_text(label)?;
    xml.close("w:r")?;
    xml.close("w:p")?;
    xml.close("w:hdr")?;
    Ok(xml.finish())
}

/// Renders `word/footer1.xml`: centered `page / total` fields.
pub(crate) fn footer_xml() -> Result<Vec<u8>, quick_xml::Error> {
    let mut xml = Xml::new()?;
    xml.open("w:ftr", &[("xmlns:w", NS_W)])?;
    xml.open("w:p", &[])?;
    xml.open("w:pPr", &[])?;
    xml.empty("w:jc", &[("w:val", "center")])?;
    xml.close("w:pPr")?;
    write_page_field(&mut xml, " PAGE ")?;
    xml.open("w:r", &[])?;
    xml.w_text(" / ")?;
    xml.close("w:r")?;
    write_page_field(&mut xml, " NUMPAGES ")?;
    xml.close("w:p")?;
    xml.close("w:ftr")?;
    Ok(xml.finish())
}

fn write_page_field(xml: &mut Xml, instr: &str) -> Result<(), quick_xml::Error> {
    xml.open("w:fldSimple", &[("w:instr", instr)])?;
    xml.open("w:r", &[])?;
    xml.w_text("1")?;
    xml.close("w:r")?;
    xml.close("w:fldSimple")
}

/// Renders `word/_rels/document.xml.rels` including one external
/// relationship per hyperlink.
pub(crate) fn document_rels_xml(hyperlinks: &[String]) -> Result<Vec<u8>, quick_xml::Error> {
    let mut xml = Xml::new()?;
    xml.open("Relationships", &[("xmlns", NS_RELS)])?;
    xml.empty(
        "Relationship",
        &[("Id", RID_STYLES), ("Type", REL_STYLES), ("Target", "styles.xml")],
    )?;
    xml.empty(
        "Relationship",
        &[("Id", RID_HEADER), ("Type", REL_HEADER), ("Target", "header1.xml")],
    )?;
    xml.empty(
        "Relationship",
        &[("Id", RID_FOOTER), ("Type", REL_FOOTER), ("Target", "footer1.xml")],
    )?;
    for (i, url) in hyperlinks.iter().enumerate() {
        let rid = hyperlink_rid(i);
        xml.empty(
            "Relationship",
            &[
                ("Id", rid.as_str()),
                ("Type", REL_HYPERLINK),
                ("Target", url.as_str()),
                ("TargetMode", "External"),
            ],
        )?;
    }
    xml.close("Relationships")?;
    Ok(xml.finish())
}

/// Renders `_rels/.rels`.
pub(crate) fn root_rels_xml() -> Result<Vec<u8>, quick_xml::Error> {
    let mut xml = Xml::new()?;
    xml.open("Relationships", &[("xmlns", NS_RELS)])?;
    xml.empty(
        "Relationship",
        &[("Id", "rId1"), ("Type", REL_OFFICE_DOC), ("Target", "word/document.xml")],
    )?;
    xml.empty(
        "Relationship",
        &[("Id", "rId2"), ("Type", REL_CORE_PROPS), ("Target", "docProps/core.xml")],
    )?;
    xml.close("Relationships")?;
    Ok(xml.finish())
}

/// Renders `[Content_Types].xml`.
pub(crate) fn content_types_xml() -> Result<Vec<u8>, quick_xml::Error> {
    const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    let overrides: &[(&str, &str)] = &[
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/word/header1.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml",
        ),
        (
            "/word/footer1.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
    ];

    let mut xml = Xml::new()?;
    xml.open("Types", &[("xmlns", CT_NS)])?;
    xml.empty(
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;
    for &(part, content_type) in overrides {
        xml.empty("Override", &[("PartName", part), ("ContentType", content_type)])?;
    }
    xml.close("Types")?;
    Ok(xml.finish())
}

/// Renders `docProps/core.xml`.
pub(crate) fn core_xml(title: &str, now: DateTime<Utc>) -> Result<Vec<u8>, quick_xml::Error> {
    const NS_CP: &str =
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
    const NS_DCTERMS: &str = "http://purl.org/dc/terms/";
    const NS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";

    let stamp = now.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let mut xml = Xml::new()?;
    xml.open(
        "cp:coreProperties",
        &[
            ("xmlns:cp", NS_CP),
            ("xmlns:dc", NS_DC),
            ("xmlns:dcterms", NS_DCTERMS),
            ("xmlns:xsi", NS_XSI),
        ],
    )?;
    xml.open("dc:title", &[])?;
    xml.text(title)?;
    xml.close("dc:title")?;
    xml.open("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")])?;
    xml.text(&stamp)?;
    xml.close("dcterms:created")?;
    xml.open("dcterms:modified", &[("xsi:type", "dcterms:W3CDTF")])?;
    xml.text(&stamp)?;
    xml.close("dcterms:modified")?;
    xml.close("cp:coreProperties")?;
    Ok(xml.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_str(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn document_xml_escapes_text() {
        let model = DocModel {
            label: "l".into(),
            paragraphs: vec![Para {
                runs: vec![Run::Text {
                    text: "a < b & c".into(),
                    bold: false,
                    italic: false,
                    code: false,
                }],
                ..Default::default()
            }],
            hyperlinks: vec![],
        };
        let doc = as_str(document_xml(&model).unwrap());
        assert!(doc.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn document_xml_has_section_properties() {
        let model = DocModel { label: "l".into(), paragraphs: vec![], hyperlinks: vec![] };
        let doc = as_str(document_xml(&model).unwrap());
        assert!(doc.contains("<w:sectPr>"));
        assert!(doc.contains("w:headerReference"));
        assert!(doc.contains("w:footerReference"));
    }

    #[test]
    fn styles_define_title_headings_and_hyperlink() {
        let styles = as_str(styles_xml().unwrap());
        for id in ["Title", "Heading1", "Heading2", "Heading3", "Heading4", "Hyperlink"] {
            assert!(styles.contains(&format!("w:styleId=\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn hyperlink_rids_start_after_fixed_relationships() {
        assert_eq!(hyperlink_rid(0), "rId4");
        assert_eq!(hyperlink_rid(2), "rId6");
    }

    #[test]
    fn rels_escape_url_ampersands() {
        let rels =
            as_str(document_rels_xml(&["https://example.com/?a=1&b=2".to_string()]).unwrap());
        assert!(rels.contains("https://example.com/?a=1&amp;b=2"));
    }

    #[test]
    fn content_types_cover_every_part() {
        let types = as_str(content_types_xml().unwrap());
        assert!(types.contains("/word/document.xml"));
        assert!(types.contains("/word/header1.xml"));
        assert!(types.contains("wordprocessingml.document.main+xml"));
    }
}
