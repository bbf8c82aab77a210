//! End-to-end conversion tests over in-memory archives.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use unxmind::{
    detect_format_from_bytes, parse_bytes, render, ContentFormat, Error, RenderOptions,
};

fn archive_with(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn json_archive(content: &str) -> Vec<u8> {
    archive_with(&[("content.json", content)])
}

fn xml_archive(content: &str) -> Vec<u8> {
    archive_with(&[("content.xml", content)])
}

fn convert(data: &[u8]) -> String {
    let doc = parse_bytes(data).unwrap();
    render::to_markdown(&doc, &RenderOptions::default()).unwrap()
}

#[test]
fn format_detection() {
    let json = json_archive("[]");
    assert_eq!(detect_format_from_bytes(&json).unwrap(), ContentFormat::Json);

    let xml = xml_archive("<xmap-content/>");
    assert_eq!(detect_format_from_bytes(&xml).unwrap(), ContentFormat::Xml);

    let neither = archive_with(&[("metadata.json", "{}")]);
    assert!(matches!(
        detect_format_from_bytes(&neither),
        Err(Error::MissingContent)
    ));
}

#[test]
fn depth_fidelity_single_chain() {
    let data = json_archive(
        r#"[{"rootTopic": {"title": "root", "children": {"attached": [
            {"title": "A", "children": {"attached": [
                {"title": "B", "children": {"attached": [
                    {"title": "C"}
                ]}}
            ]}}
        ]}}}]"#,
    );

    assert_eq!(convert(&data), "# root\n\n- A\n  - B\n    - C");
}

#[test]
fn sibling_order_preserved() {
    let data = json_archive(
        r#"[{"rootTopic": {"title": "root", "children": {"attached": [
            {"title": "X"}, {"title": "Y"}, {"title": "Z"}
        ]}}}]"#,
    );

    assert_eq!(convert(&data), "# root\n\n- X\n- Y\n- Z");
}

#[test]
fn title_normalization() {
    let data = json_archive(r#"[{"rootTopic": {"title": "Line1\r\nLine2"}}]"#);
    let markdown = convert(&data);
    assert_eq!(markdown, "# Line1 Line2");
    assert!(!markdown.lines().any(|line| line.contains('\r')));
}

#[test]
fn leaf_topic_renders_single_line() {
    let data = json_archive(
        r#"[{"rootTopic": {"title": "root", "children": {"attached": [{"title": "leaf"}]}}}]"#,
    );

    assert_eq!(convert(&data), "# root\n\n- leaf");
}

#[test]
fn multi_sheet_concatenation() {
    let data = json_archive(
        r#"[
            {"rootTopic": {"title": "Sheet1", "children": {"attached": [{"title": "a"}]}}},
            {"rootTopic": {"title": "Sheet2", "children": {"attached": [{"title": "b"}]}}}
        ]"#,
    );

    let doc = parse_bytes(&data).unwrap();
    let sheets = render::render_sheets(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0], "# Sheet1\n\n- a");
    assert_eq!(sheets[1], "# Sheet2\n\n- b");

    let joined = render::to_markdown(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(joined, "# Sheet1\n\n- a\n\n# Sheet2\n\n- b");
}

const XML_TREE: &str = r#"<xmap-content xmlns="urn:xmind:xmap:xmlns:content:2.0"
        xmlns:fo="http://www.w3.org/1999/XSL/Format" version="2.0">
    <sheet id="s1" fo:font-family="Arial">
        <topic id="t0">
            <title>root</title>
            <children>
                <topics type="attached">
                    <topic id="t1">
                        <title>A</title>
                        <children>
                            <topics type="attached">
                                <topic id="t2"><title>B</title></topic>
                            </topics>
                        </children>
                    </topic>
                    <topic id="t3"><title>C</title></topic>
                </topics>
            </children>
        </topic>
        <title>Sheet 1</title>
    </sheet>
</xmap-content>"#;

const JSON_TREE: &str = r#"[{"rootTopic": {"title": "root", "children": {"attached": [
    {"title": "A", "children": {"attached": [{"title": "B"}]}},
    {"title": "C"}
]}}}]"#;

#[test]
fn cross_format_equivalence() {
    let from_json = convert(&json_archive(JSON_TREE));
    let from_xml = convert(&xml_archive(XML_TREE));
    assert_eq!(from_json, from_xml);
    assert_eq!(from_json, "# root\n\n- A\n  - B\n- C");
}

#[test]
fn xml_detached_topics_are_skipped() {
    let data = xml_archive(
        r#"<xmap-content>
            <sheet>
                <topic>
                    <title>root</title>
                    <children>
                        <topics type="attached">
                            <topic><title>kept</title></topic>
                        </topics>
                        <topics type="detached">
                            <topic><title>floating</title></topic>
                        </topics>
                    </children>
                </topic>
            </sheet>
        </xmap-content>"#,
    );

    assert_eq!(convert(&data), "# root\n\n- kept");
}

#[test]
fn json_wins_when_both_entries_exist() {
    let data = archive_with(&[
        ("content.xml", XML_TREE),
        ("content.json", r#"[{"rootTopic": {"title": "json wins"}}]"#),
    ]);

    assert_eq!(convert(&data), "# json wins");
}

#[test]
fn trimmed_output_is_idempotent() {
    let markdown = convert(&json_archive(JSON_TREE));
    assert_eq!(markdown, markdown.trim());
}

#[test]
fn xml_sheet_without_topic_is_malformed() {
    let data = xml_archive("<xmap-content><sheet><title>empty</title></sheet></xmap-content>");
    let doc = parse_bytes(&data).unwrap();
    let err = render::to_markdown(&doc, &RenderOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedTopic { sheet: 0, ref path } if path == "topic"
    ));
}

#[test]
fn xml_topic_without_title_is_malformed() {
    let data = xml_archive(
        r#"<xmap-content><sheet><topic>
            <title>root</title>
            <children><topics type="attached">
                <topic id="untitled"/>
            </topics></children>
        </topic></sheet></xmap-content>"#,
    );

    let doc = parse_bytes(&data).unwrap();
    let err = render::to_markdown(&doc, &RenderOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedTopic { sheet: 0, ref path } if path == "rootTopic/children[0]"
    ));
}

#[test]
fn convert_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.xmind");
    std::fs::write(&path, json_archive(JSON_TREE)).unwrap();

    let markdown = unxmind::to_markdown(&path).unwrap();
    assert_eq!(markdown, "# root\n\n- A\n  - B\n- C");
}

#[test]
fn corrupt_file_on_disk_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xmind");
    std::fs::write(&path, b"definitely not a zip").unwrap();

    assert!(matches!(
        unxmind::to_markdown(&path),
        Err(Error::ArchiveFormat(_))
    ));
}
