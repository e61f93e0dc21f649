//! End-to-end pipeline tests: registry file on disk, real folder, real
//! renames.

use namefix::core::Status;
use namefix::{load_canonical_names, parse_filename, run_pass};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_names(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("names.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn full_pass_over_mixed_folder() {
    let dir = TempDir::new().unwrap();
    let names_path = write_names(&dir, r#"[[1, "Alice"], [2, "Bob"]]"#);

    let folder = dir.path().join("scans");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("alice_report.pdf"), "").unwrap();
    fs::write(folder.join("Alise_invoice.xlsx"), "").unwrap();
    fs::write(folder.join("Bob_notes.txt"), "").unwrap();

    let names = load_canonical_names(&names_path).unwrap();
    let records = run_pass(&folder, &names, false).unwrap();

    assert_eq!(records.len(), 3);

    // Listing order is sorted by filename.
    assert_eq!(records[0].original, "Alise_invoice.xlsx");
    assert_eq!(records[0].extracted_name, "Alise");
    assert_eq!(records[0].matched_name, "Alice");
    assert_eq!(records[0].corrected_filename, "Alice_invoice.xlsx");
    assert_eq!(records[0].distance, 1);
    assert_eq!(records[0].status, Status::Renamed);

    assert_eq!(records[1].original, "Bob_notes.txt");
    assert_eq!(records[1].status, Status::Correct);

    assert_eq!(records[2].original, "alice_report.pdf");
    assert_eq!(records[2].matched_name, "Alice");
    assert_eq!(records[2].distance, 0);
    assert_eq!(records[2].status, Status::Correct);
    assert_eq!(records[2].corrected_filename, "Alice_report.pdf");
}

#[test]
fn corrected_filename_is_always_match_plus_suffix() {
    let dir = TempDir::new().unwrap();
    let names_path = write_names(&dir, r#"[[1, "Alice"], [2, "Bob"], [3, "Carol"]]"#);

    let folder = dir.path().join("scans");
    fs::create_dir(&folder).unwrap();
    for file in ["alice_a.txt", "bobb_b_c.txt", "Carrol.txt", "dave_d.txt"] {
        fs::write(folder.join(file), "").unwrap();
    }

    let names = load_canonical_names(&names_path).unwrap();
    let records = run_pass(&folder, &names, false).unwrap();

    for record in &records {
        let parsed = parse_filename(&record.original);
        assert_eq!(
            record.corrected_filename,
            format!("{}{}", record.matched_name, parsed.suffix)
        );
    }
}

#[test]
fn bom_prefixed_registry_loads_identically() {
    let dir = TempDir::new().unwrap();
    let plain = write_names(&dir, r#"[[1, "Alice"], [2, "Bob"]]"#);
    let bom_path = dir.path().join("names-bom.json");
    fs::write(&bom_path, format!("\u{feff}{}", r#"[[1, "Alice"], [2, "Bob"]]"#)).unwrap();

    assert_eq!(
        load_canonical_names(&plain).unwrap(),
        load_canonical_names(&bom_path).unwrap()
    );
}

#[test]
fn rename_mode_fixes_misspelled_files() {
    let dir = TempDir::new().unwrap();
    let names_path = write_names(&dir, r#"[[1, "Alice"], [2, "Bob"]]"#);

    let folder = dir.path().join("scans");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("Alise_invoice.xlsx"), "payload").unwrap();

    let names = load_canonical_names(&names_path).unwrap();
    let records = run_pass(&folder, &names, true).unwrap();

    assert_eq!(records[0].status, Status::Renamed);
    assert!(records[0].rename_performed);
    assert_eq!(
        fs::read_to_string(folder.join("Alice_invoice.xlsx")).unwrap(),
        "payload"
    );
    assert!(!folder.join("Alise_invoice.xlsx").exists());
}

#[test]
fn second_pass_after_rename_reports_all_correct() {
    let dir = TempDir::new().unwrap();
    let names_path = write_names(&dir, r#"[[1, "Alice"], [2, "Bob"]]"#);

    let folder = dir.path().join("scans");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("Alise_invoice.xlsx"), "").unwrap();
    fs::write(folder.join("bobb_report.pdf"), "").unwrap();

    let names = load_canonical_names(&names_path).unwrap();
    run_pass(&folder, &names, true).unwrap();

    let second = run_pass(&folder, &names, false).unwrap();
    assert!(second.iter().all(|r| r.status == Status::Correct));
    let originals: Vec<&str> = second.iter().map(|r| r.original.as_str()).collect();
    assert_eq!(originals, vec!["Alice_invoice.xlsx", "Bob_report.pdf"]);
}
