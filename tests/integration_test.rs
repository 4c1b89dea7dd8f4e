use std::io::Write;
use std::process::{Command, Output};

use anyhow::Result;
use encoding_rs::WINDOWS_1250;
use tempfile::NamedTempFile;

const LEGACY_EXPORT: &str = "\
Datum;Čas;Poznámka;Název účtu;Číslo účtu;Datum odepsání;Valuta;Typ;Kód transakce;Variabilní symbol;Konstantní symbol;Specifický symbol;Částka;Poplatek;Směna;Zpráva
01.03.2024;08:12;\"Nájem; březen\";Jan Novák;19-2000145399/0800;02.03.2024;02.03.2024;Příchozí platba;1001;42;0308;;15 000,00 Kč;;;
04.03.2024;12:40;Benzín;SHELL;;05.03.2024;05.03.2024;Platba kartou;1002;;;;-1 250,50;-5,00;-2,00;
31.03.2024;00:00;;;;31.03.2024;31.03.2024;Správa účtu;1003;;;;;-49,00;;
31.03.2024;00:00;;;;31.03.2024;31.03.2024;Zpráva;1004;;;;0,00;;;0,00
";

fn write_export(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    let (bytes, _, _) = WINDOWS_1250.encode(content);
    file.write_all(&bytes)?;

    Ok(file)
}

fn run(args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_raiffeisen-statement");

    Ok(Command::new(binary_path).args(args).output()?)
}

#[test]
fn test_cli_converts_legacy_export_to_ofx() -> Result<()> {
    let file = write_export(LEGACY_EXPORT)?;
    let path = file.path().to_string_lossy().to_string();

    let output = run(&[path.as_str(), "--account", "1234567890"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with("OFXHEADER:100"));
    assert!(stdout.contains("<ACCTID>1234567890</ACCTID>"));
    assert!(stdout.contains("<BANKID>RZBCCZPP</BANKID>"));
    assert_eq!(stdout.matches("<STMTTRN>").count(), 5);
    assert!(stdout.contains("<TRNAMT>15000.00</TRNAMT>"));
    assert!(stdout.contains("<MEMO>Nájem; březen|VS: 42|KS: 0308</MEMO>"));
    assert!(stdout.contains("<NAME>Jan Novák|ÚČ: 19-2000145399/0800</NAME>"));
    assert!(stdout.contains("<DTSTART>20240302</DTSTART>"));
    assert!(stdout.contains("<DTEND>20240331</DTEND>"));

    Ok(())
}

#[test]
fn test_cli_splits_and_folds_fees_in_csv_output() -> Result<()> {
    let file = write_export(LEGACY_EXPORT)?;
    let path = file.path().to_string_lossy().to_string();

    let output = run(&[path.as_str(), "--format", "csv"])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let rows: Vec<(String, String)> = stdout
        .lines()
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.rsplitn(4, ',').collect();
            (fields[3].rsplit(',').next().unwrap_or_default().to_string(), fields[2].to_string())
        })
        .collect();

    let expected = vec![
        ("15000.00", "CREDIT"),
        ("-1250.50", "XFER"),
        ("-5.00", "FEE"),
        ("-2.00", "FEE"),
        ("-49.00", "FEE"),
    ];

    assert_eq!(rows.len(), expected.len());

    for ((amount, category), (expected_amount, expected_category)) in rows.iter().zip(expected) {
        assert_eq!(amount, expected_amount);
        assert_eq!(category, expected_category);
    }

    Ok(())
}

#[test]
fn test_cli_writes_output_file() -> Result<()> {
    let file = write_export(LEGACY_EXPORT)?;
    let path = file.path().to_string_lossy().to_string();
    let target = NamedTempFile::new()?;
    let target_path = target.path().to_string_lossy().to_string();

    let output = run(&[path.as_str(), "--format", "csv", "--output", target_path.as_str()])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(target.path())?.lines().count(), 6);

    Ok(())
}

#[test]
fn test_cli_fails_when_profile_labels_are_missing() -> Result<()> {
    let file = write_export(LEGACY_EXPORT)?;
    let path = file.path().to_string_lossy().to_string();

    let output = run(&[path.as_str(), "--profile", "online"])?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Datum zaúčtování"));

    Ok(())
}

#[test]
fn test_cli_fails_with_row_number_on_malformed_amount() -> Result<()> {
    let content = LEGACY_EXPORT.replace("-1 250,50", "-1.250,50");
    let file = write_export(&content)?;
    let path = file.path().to_string_lossy().to_string();

    let output = run(&[path.as_str()])?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Row [3]"));
    assert!(stderr.contains("Částka"));

    Ok(())
}
