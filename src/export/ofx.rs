use chrono::{NaiveDate, NaiveDateTime};
use std::io::Write;

use crate::export::errors::ExportError;
use crate::models::{NormalizedRecord, Statement};

const HEADER: &str = "OFXHEADER:100
DATA:OFXSGML
VERSION:102
SECURITY:NONE
ENCODING:UTF-8
CHARSET:NONE
COMPRESSION:NONE
OLDFILEUID:NONE
NEWFILEUID:NONE
";

/// Writes an OFX 1.02 bank statement response.
pub fn write_ofx<W: Write>(statement: &Statement, generated: NaiveDateTime, output: W) -> Result<(), ExportError> {
    let mut writer = OfxWriter { output, depth: 0 };
    let settings = &statement.settings;

    writeln!(writer.output, "{HEADER}")?;

    writer.open("OFX")?;
    writer.open("SIGNONMSGSRSV1")?;
    writer.open("SONRS")?;
    writer.status()?;
    writer.element("DTSERVER", &generated.format("%Y%m%d%H%M%S").to_string())?;
    writer.element("LANGUAGE", "ENG")?;
    writer.close("SONRS")?;
    writer.close("SIGNONMSGSRSV1")?;

    writer.open("BANKMSGSRSV1")?;
    writer.open("STMTTRNRS")?;
    writer.element("TRNUID", "0")?;
    writer.status()?;
    writer.open("STMTRS")?;
    writer.element("CURDEF", &settings.currency)?;

    writer.open("BANKACCTFROM")?;
    writer.element("BANKID", &settings.bank_id)?;
    writer.element("ACCTID", &settings.account_id)?;
    writer.element("ACCTTYPE", settings.account_type.ofx_code())?;
    writer.close("BANKACCTFROM")?;

    writer.open("BANKTRANLIST")?;
    if let Some((start, end)) = statement.date_range() {
        writer.element("DTSTART", &ofx_date(start))?;
        writer.element("DTEND", &ofx_date(end))?;
    }
    for record in statement.records() {
        writer.transaction(record)?;
    }
    writer.close("BANKTRANLIST")?;

    writer.close("STMTRS")?;
    writer.close("STMTTRNRS")?;
    writer.close("BANKMSGSRSV1")?;
    writer.close("OFX")?;

    writer.output.flush()?;

    Ok(())
}

struct OfxWriter<W: Write> {
    output: W,
    depth: usize
}

impl<W: Write> OfxWriter<W> {
    fn indent(&mut self) -> std::io::Result<()> {
        write!(self.output, "{:width$}", "", width = self.depth * 2)
    }

    fn open(&mut self, tag: &str) -> std::io::Result<()> {
        self.indent()?;
        writeln!(self.output, "<{tag}>")?;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> std::io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.indent()?;
        writeln!(self.output, "</{tag}>")
    }

    fn element(&mut self, tag: &str, value: &str) -> std::io::Result<()> {
        self.indent()?;
        writeln!(self.output, "<{tag}>{}</{tag}>", escape(value))
    }

    fn status(&mut self) -> std::io::Result<()> {
        self.open("STATUS")?;
        self.element("CODE", "0")?;
        self.element("SEVERITY", "INFO")?;
        self.close("STATUS")
    }

    fn transaction(&mut self, record: &NormalizedRecord) -> std::io::Result<()> {
        self.open("STMTTRN")?;
        self.element("TRNTYPE", record.category.ofx_code())?;
        self.element("DTPOSTED", &ofx_date(record.date_posted))?;
        if let Some(date_user) = record.date_user {
            self.element("DTUSER", &ofx_date(date_user))?;
        }
        self.element("TRNAMT", &record.amount.to_string())?;
        self.element("FITID", &record.id)?;
        if let Some(check_number) = &record.check_number {
            self.element("CHECKNUM", check_number)?;
        }
        if let Some(reference) = &record.reference {
            self.element("REFNUM", reference)?;
        }
        if !record.payee.is_empty() {
            self.element("NAME", &record.payee)?;
        }
        if !record.memo.is_empty() {
            self.element("MEMO", &record.memo)?;
        }
        self.close("STMTTRN")
    }
}

fn ofx_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn escape(value: &str) -> String {
    value.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
