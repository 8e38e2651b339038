// tests/export_e2e.rs
use std::fs;

use nyc_procurement::config::options::{ExportFormat, ExportOptions};
use nyc_procurement::csv::to_export_string;
use nyc_procurement::data::{ResultSet, ResultSetId};
use nyc_procurement::error::Error;
use nyc_procurement::file::{export_rows, export_selected};
use nyc_procurement::selection::{SelectionSnapshot, SelectionState};

fn picked() -> SelectionState {
    let rs = ResultSet::new(
        ResultSetId::new(1),
        vec!["Agency".into(), "Services Descrption".into()],
        vec![
            vec!["DOT".into(), "Snow removal, citywide".into()],
            vec!["DOE".into(), "Cloud hosting".into()],
            vec!["DOT".into(), "Road salt".into()],
        ],
    );
    let mut state = SelectionState::new();
    state.apply([2, 0].into_iter().collect::<SelectionSnapshot>(), &rs);
    state
}

#[test]
fn selected_rows_to_timestamped_csv() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(&format!("{}/out/", dir.path().display()));

    let state = picked();
    let path = export_selected(&export, state.selected()).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("nyc_procurement_selected_"), "{name}");
    assert!(name.ends_with(".csv"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Agency,Services Descrption\nDOT,\"Snow removal, citywide\"\nDOT,Road salt\n"
    );
}

#[test]
fn tsv_without_headers_to_fixed_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested/deeper/picks.tsv");
    let mut export = ExportOptions { format: ExportFormat::Tsv, include_headers: false, ..Default::default() };
    export.set_path(target.to_str().unwrap());

    let state = picked();
    let path = export_selected(&export, state.selected()).unwrap();
    assert_eq!(path, target);
    assert_eq!(fs::read_to_string(&path).unwrap(), "DOT\tSnow removal, citywide\nDOT\tRoad salt\n");
}

#[test]
fn clipboard_text_matches_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(dir.path().join("copy.csv").to_str().unwrap());

    let state = picked();
    let sel = state.selected();
    let path = export_selected(&export, sel).unwrap();
    let clip = to_export_string(sel.headers(), sel.rows(), export.include_headers, export.format.delim());
    assert_eq!(fs::read_to_string(path).unwrap(), clip);
}

#[test]
fn nothing_to_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut export = ExportOptions::default();
    export.set_path(&format!("{}/", dir.path().display()));

    let empty = SelectionState::new();
    assert!(matches!(export_selected(&export, empty.selected()), Err(Error::NothingToExport)));

    let headers = vec!["Agency".to_string()];
    let rows: Vec<Vec<String>> = Vec::new();
    assert!(matches!(export_rows(&export, "x", Some(headers.as_slice()), &rows), Err(Error::NothingToExport)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
