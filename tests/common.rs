#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimesheet::models::entry::TimeEntryRow;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use zip::write::SimpleFileOptions;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Command with a private (missing) config file, so user settings never leak in.
pub fn rts_isolated(name: &str) -> Command {
    let mut cmd = rts();
    cmd.args(["--config", &temp_out(&format!("{name}_cfg"), "conf")]);
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Row builder: date, week, start, finish, lunch, basic, ot15, ot20.
pub fn row(
    index: usize,
    week: &str,
    times: (&str, &str, &str),
    hours: (&str, &str, &str),
) -> TimeEntryRow {
    TimeEntryRow {
        index,
        date: format!("2025-03-{:02}", 9 + index),
        week: week.to_string(),
        start: times.0.to_string(),
        finish: times.1.to_string(),
        lunch: times.2.to_string(),
        basic: hours.0.to_string(),
        ot15: hours.1.to_string(),
        ot20: hours.2.to_string(),
        ..Default::default()
    }
}

pub const SAMPLE_CSV: &str = "\
Date,Day,Week,Start,Finish,Lunch,BasicHours,OT1_5Hours,OT2_0Hours,Notes
2025-03-10,Monday,Week 11,7:00,17:30,30,8,2,,Depot
2025-03-11,Tuesday,Week 11,7:00,17:30,0:30,8,2,,Depot
2025-03-12,Wednesday,Week 11,7:00,17:30,30,8,2,,\"Site 4, north gate\"
2025-03-13,Thursday,Week 11,7:00,17:30,30,8,1.5,0.5,Depot
2025-03-14,Friday,Week 11,7:00,12:00,0,5,,,
";

/// Writes `content` to a fresh temp file and returns its path.
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let path = temp_out(name, ext);
    fs::write(&path, content).expect("write temp file");
    path
}

/// Minimal WordprocessingML body with the given tables (rows of cells).
pub fn document_xml(preamble: &[&str], table: &[Vec<&str>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    for p in preamble {
        xml.push_str(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#
        ));
    }
    xml.push_str("<w:tbl><w:tblPr><w:tblW w:w=\"0\" w:type=\"auto\"/></w:tblPr>");
    for r in table {
        xml.push_str("<w:tr>");
        for c in r {
            xml.push_str(&format!(
                "<w:tc><w:tcPr/><w:p><w:r><w:t>{c}</w:t></w:r></w:p></w:tc>"
            ));
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl><w:sectPr/></w:body></w:document>");
    xml
}

/// Builds a `.docx` container holding `document_xml`.
pub fn write_docx(name: &str, document_xml: &str) -> String {
    let path = temp_out(name, "docx");
    let file = fs::File::create(&path).expect("create docx");
    let mut zip = zip::ZipWriter::new(file);

    zip.start_file("[Content_Types].xml", SimpleFileOptions::default()).expect("start part");
    zip.write_all(br#"<?xml version="1.0"?><Types/>"#)
        .expect("write part");
    zip.start_file("word/document.xml", SimpleFileOptions::default()).expect("start part");
    zip.write_all(document_xml.as_bytes()).expect("write part");
    zip.finish().expect("finish docx");
    path
}
