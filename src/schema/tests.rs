use super::{builtin_profiles, detect, ColumnSchema, SchemaError, SchemaProfile};
use anyhow::Result;

const EKONTO_HEADER: [&str; 16] = [
    "Datum", "Čas", "Poznámka", "Název účtu", "Číslo účtu", "Datum odepsání", "Valuta", "Typ",
    "Kód transakce", "Variabilní symbol", "Konstantní symbol", "Specifický symbol", "Částka",
    "Poplatek", "Směna", "Zpráva",
];

const ONLINE_HEADER: [&str; 17] = [
    "Datum provedení", "Datum zaúčtování", "Číslo účtu", "Název účtu", "Kategorie transakce",
    "Číslo protiúčtu", "Název protiúčtu", "Typ transakce", "Zpráva", "Poznámka", "VS", "KS", "SS",
    "Zaúčtovaná částka", "Měna účtu", "Poplatek", "Id transakce",
];

#[test]
fn test_resolve_maps_legacy_header_to_positions() -> Result<()> {
    let schema = ColumnSchema::resolve(&EKONTO_HEADER, &SchemaProfile::ekonto())?;

    assert_eq!(schema.date_user, Some(0));
    assert_eq!(schema.date_posted, 5);
    assert_eq!(schema.memo, Some(2));
    assert_eq!(schema.payee, Some(3));
    assert_eq!(schema.type_label, 7);
    assert_eq!(schema.amount, 12);
    assert_eq!(schema.reference, Some(8));
    assert_eq!(schema.check_number, Some(9));
    assert_eq!(schema.fees.iter().map(|fee| fee.index).collect::<Vec<_>>(), vec![13, 14, 15]);
    assert_eq!(schema.fees[1].marker, "Směna");
    assert_eq!(schema.payee_suffixes[0].index, 4);
    assert_eq!(schema.memo_suffixes.iter().map(|tag| tag.tag.as_str()).collect::<Vec<_>>(), vec!["VS", "KS", "SS"]);
    assert_eq!(schema.label(12), "Částka");

    Ok(())
}

#[test]
fn test_resolve_maps_online_header_to_positions() -> Result<()> {
    let schema = ColumnSchema::resolve(&ONLINE_HEADER, &SchemaProfile::online())?;

    assert_eq!(schema.date_posted, 1);
    assert_eq!(schema.date_user, Some(0));
    assert_eq!(schema.payee, Some(6));
    assert_eq!(schema.type_label, 7);
    assert_eq!(schema.memo, Some(9));
    assert_eq!(schema.amount, 13);
    assert_eq!(schema.fees.len(), 1);
    assert_eq!(schema.fees[0].index, 15);
    assert_eq!(schema.reference, Some(16));

    Ok(())
}

#[test]
fn test_resolve_names_the_missing_label() {
    let header: Vec<&str> = EKONTO_HEADER.iter().copied().filter(|label| *label != "Směna").collect();
    let result = ColumnSchema::resolve(&header, &SchemaProfile::ekonto());

    assert!(matches!(result, Err(SchemaError::MissingLabel { ref label, .. }) if label == "Směna"));
}

#[test]
fn test_resolve_ignores_padding_and_byte_order_mark() -> Result<()> {
    let mut header: Vec<String> = EKONTO_HEADER.iter().map(|label| format!(" {label} ")).collect();
    header[0] = format!("\u{feff}{}", header[0]);

    let schema = ColumnSchema::resolve(&header, &SchemaProfile::ekonto())?;

    assert_eq!(schema.date_user, Some(0));
    assert_eq!(schema.label(0), "Datum");

    Ok(())
}

#[test]
fn test_resolve_takes_first_of_repeated_labels() -> Result<()> {
    let mut header = ONLINE_HEADER.to_vec();
    header.push("Poplatek");

    let schema = ColumnSchema::resolve(&header, &SchemaProfile::online())?;

    assert_eq!(schema.fees[0].index, 15);

    Ok(())
}

#[test]
fn test_detect_picks_matching_generation() -> Result<()> {
    let (profile, _) = detect(&EKONTO_HEADER, &builtin_profiles())?;
    assert_eq!(profile.name, "ekonto");

    let (profile, _) = detect(&ONLINE_HEADER, &builtin_profiles())?;
    assert_eq!(profile.name, "online");

    Ok(())
}

#[test]
fn test_detect_fails_for_unknown_header() {
    let result = detect(&["Date", "Amount", "Description"], &builtin_profiles());

    assert!(matches!(result, Err(SchemaError::NoMatchingProfile { .. })));
}

#[test]
fn test_builtin_lookup_is_case_insensitive() -> Result<()> {
    assert_eq!(SchemaProfile::builtin("EKONTO")?, SchemaProfile::ekonto());
    assert!(matches!(SchemaProfile::builtin("fio"), Err(SchemaError::UnknownProfile(_))));

    Ok(())
}

#[test]
fn test_profile_loads_from_toml_with_defaults() -> Result<()> {
    let content = r#"
name = "business"
delimiter = ","

[columns]
date_posted = "Booking date"
amount = "Amount"
type_label = "Type"
payee = "Counterparty"

[[fees]]
label = "Charges"
marker = "Poplatek"

[[memo_suffixes]]
label = "VS"
tag = "VS"
"#;

    let profile = SchemaProfile::from_toml(content)?;

    assert_eq!(profile.delimiter_byte(), b',');
    assert_eq!(profile.quote, '"');
    assert_eq!(profile.decimal_separator, ',');
    assert_eq!(profile.date_format, "%d.%m.%Y");
    assert_eq!(profile.columns.memo, None);
    assert_eq!(profile.fees[0].marker, "Poplatek");

    let schema = ColumnSchema::resolve(&["Type", "Booking date", "Counterparty", "Amount", "Charges", "VS"], &profile)?;

    assert_eq!(schema.amount, 3);
    assert_eq!(schema.memo, None);
    assert_eq!(schema.memo_suffixes[0].index, 5);

    Ok(())
}

#[test]
fn test_profile_rejects_non_ascii_delimiter() {
    let content = r#"
name = "broken"
delimiter = "§"

[columns]
date_posted = "Datum"
amount = "Částka"
type_label = "Typ"
"#;

    assert!(matches!(SchemaProfile::from_toml(content), Err(SchemaError::InvalidProfile(_))));
}

#[test]
fn test_profile_rejects_fee_marker_that_is_not_a_fee_label() {
    let content = r#"
name = "business"

[columns]
date_posted = "Datum"
amount = "Částka"
type_label = "Typ"

[[fees]]
label = "Fee"
marker = "Bank fee"
"#;

    let result = SchemaProfile::from_toml(content);

    assert!(matches!(result, Err(SchemaError::InvalidProfile(ref message)) if message.contains("Bank fee")));
}

#[test]
fn test_builtin_profiles_pass_validation() -> Result<()> {
    for profile in builtin_profiles() {
        profile.validate()?;
    }

    Ok(())
}
